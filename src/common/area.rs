//! 面積推定
//!
//! 分類済みの点列から累積の面積推定列（収束列）を計算する。

use num_complex::Complex;
use rayon::prelude::*;

use super::mandelbrot::mandelbrot_iter;

/// 点列を分類して面積推定の収束列を返す
///
/// i 番目の値は、先頭 i+1 点のうち発散しなかった点の割合に領域全体の
/// 面積を掛けたもの。分類は点ごとに独立なので並列に行い、累積は
/// 入力順のまま逐次計算する。戻り値の長さは入力と同じ。
pub fn compute_areas(points: &[Complex<f64>], max_iter: u32, total_area: f64) -> Vec<f64> {
    let iters: Vec<u32> = points
        .par_iter()
        .map(|&c| mandelbrot_iter(c, max_iter))
        .collect();

    let mut unescaped = 0usize;
    iters
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            if n == max_iter {
                unescaped += 1;
            }
            total_area * unescaped as f64 / (i + 1) as f64
        })
        .collect()
}
