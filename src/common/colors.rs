//! カラーマップと色変換関数

use image::Rgb;

/// 反復回数から色を計算する
///
/// 色相は反復回数の割合、彩度は 1 に固定する。発散しなかった点
/// （集合の内部）は明度 0 の黒として描く。
pub fn iter_to_rgb(iter: u32, max_iter: u32) -> Rgb<u8> {
    let hue = (255 * iter / max_iter) as f64 / 255.0;
    let value = if iter < max_iter { 1.0 } else { 0.0 };
    let (r, g, b) = hsv_to_rgb(hue, 1.0, value);
    Rgb([r, g, b])
}

/// HSV（各成分 0..1）を RGB に変換する
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_members_are_black() {
        assert_eq!(iter_to_rgb(100, 100), Rgb([0, 0, 0]));
    }

    #[test]
    fn zero_iterations_map_to_red() {
        // 色相 0 は純粋な赤
        assert_eq!(iter_to_rgb(0, 100), Rgb([255, 0, 0]));
    }

    #[test]
    fn hue_wheel_thirds() {
        // 色相 1/3 は緑、2/3 は青
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0, 0, 255));
    }
}
