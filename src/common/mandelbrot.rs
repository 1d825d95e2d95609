//! マンデルブロ集合計算関数

use num_complex::Complex;

/// 発散までの反復回数を計算する
///
/// z = c から始めて z ← z^2 + c を繰り返し、|z|^2 が 4 を超えるか
/// 反復回数が max_iter に達するまで数える。戻り値が max_iter と
/// 等しいとき、その点は集合に属すると分類する。
///
/// 発散判定は平方根を避けて |z|^2 と 4 の比較で行う。
/// max_iter は正の値であることを呼び出し側が保証する。
pub fn mandelbrot_iter(c: Complex<f64>, max_iter: u32) -> u32 {
    let mut z = c;
    let mut n = 0;

    while z.norm_sqr() <= 4.0 && n < max_iter {
        z = z * z + c;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(mandelbrot_iter(Complex::new(0.0, 0.0), 100), 100);
    }

    #[test]
    fn minus_one_cycles_forever() {
        // -1 は -1 → 0 → -1 の周期軌道に入る
        assert_eq!(mandelbrot_iter(Complex::new(-1.0, 0.0), 1000), 1000);
    }

    #[test]
    fn far_point_escapes_immediately() {
        // z は c から始まるので |c|^2 > 4 なら反復せずに終わる
        assert_eq!(mandelbrot_iter(Complex::new(3.0, 0.0), 100), 0);
        assert_eq!(mandelbrot_iter(Complex::new(0.0, -2.5), 100), 0);
    }

    #[test]
    fn boundary_point_iterates_once() {
        // |2|^2 = 4 は境界ちょうどで、1 回だけ反復してから発散する
        assert_eq!(mandelbrot_iter(Complex::new(2.0, 0.0), 100), 1);
    }
}
