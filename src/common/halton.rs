//! Halton 低食い違い量列
//!
//! 基数 2, 3 の radical inverse による 2 次元 Halton 列を生成する。
//! スクランブルなしの決定的な列で、開始位置（スキップ量）だけを
//! 呼び出しごとに変えて異なる点集合を得る。

use num_complex::Complex;
use rand::Rng;

use super::constants::{HALTON_BASE_IM, HALTON_BASE_RE};
use super::grid::Grid;

/// n 番目の radical inverse を計算する
///
/// n を base 進展開し、桁を小数点で鏡映した [0, 1) の値を返す。
fn radical_inverse(base: u64, mut n: u64) -> f64 {
    let inv_base = 1.0 / base as f64;
    let mut inv = 0.0;
    let mut factor = inv_base;

    while n > 0 {
        inv += (n % base) as f64 * factor;
        n /= base;
        factor *= inv_base;
    }
    inv
}

/// 単位正方形 [0,1)^2 上の Halton 列を skip 番目から samples 点生成する
pub fn halton_points(samples: usize, skip: u64) -> Vec<(f64, f64)> {
    (0..samples as u64)
        .map(|k| {
            let n = skip + k;
            (
                radical_inverse(HALTON_BASE_RE, n),
                radical_inverse(HALTON_BASE_IM, n),
            )
        })
        .collect()
}

/// Halton 列による準モンテカルロサンプリング
///
/// 開始位置は呼び出しごとに乱数で選ぶので、繰り返し実行しても
/// 同じ点集合にはならない。固定したい場合は quasi_sampling_seeded を使う。
pub fn quasi_sampling<R: Rng + ?Sized>(
    grid: &Grid,
    samples: usize,
    rng: &mut R,
) -> Vec<Complex<f64>> {
    let skip: u64 = rng.gen_range(0..100);
    quasi_sampling_seeded(grid, samples, skip)
}

/// 開始位置を固定した決定的な準モンテカルロサンプリング
///
/// 同じ skip なら常に同じ点列を返す。skip = 0 の先頭は (0, 0) で、
/// 領域の左下隅に写る。
pub fn quasi_sampling_seeded(grid: &Grid, samples: usize, skip: u64) -> Vec<Complex<f64>> {
    halton_points(samples, skip)
        .into_iter()
        .map(|(u, v)| Complex::new(grid.xmin + grid.xrange * u, grid.ymin + grid.yrange * v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radical_inverse_base2_prefix() {
        assert_eq!(radical_inverse(2, 0), 0.0);
        assert_eq!(radical_inverse(2, 1), 0.5);
        assert_eq!(radical_inverse(2, 2), 0.25);
        assert_eq!(radical_inverse(2, 3), 0.75);
        assert_eq!(radical_inverse(2, 4), 0.125);
    }

    #[test]
    fn radical_inverse_base3_prefix() {
        assert!((radical_inverse(3, 1) - 1.0 / 3.0).abs() < 1e-15);
        assert!((radical_inverse(3, 2) - 2.0 / 3.0).abs() < 1e-15);
        assert!((radical_inverse(3, 3) - 1.0 / 9.0).abs() < 1e-15);
        assert!((radical_inverse(3, 4) - 4.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn halton_points_stay_in_unit_square() {
        for (u, v) in halton_points(200, 0) {
            assert!((0.0..1.0).contains(&u));
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_skip_gives_identical_sequences() {
        let grid = Grid::new(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0), 64).unwrap();
        let a = quasi_sampling_seeded(&grid, 64, 7);
        let b = quasi_sampling_seeded(&grid, 64, 7);
        assert_eq!(a, b);
        let c = quasi_sampling_seeded(&grid, 64, 8);
        assert_ne!(a, c);
    }

    #[test]
    fn skip_zero_starts_at_min_corner() {
        let grid = Grid::new(Complex::new(-2.0, -1.0), Complex::new(0.0, 1.0), 16).unwrap();
        let points = quasi_sampling_seeded(&grid, 2, 0);
        assert_eq!(points[0], Complex::new(-2.0, -1.0));
        // 2 点目は各軸を基数で割った位置
        assert_eq!(points[1], Complex::new(-2.0 + 2.0 * 0.5, -1.0 + 2.0 / 3.0));
    }
}
