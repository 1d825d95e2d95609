//! サンプリング手法
//!
//! 面積推定に使う候補点列を生成する。手法ごとの性格:
//!   - Linear: 格子全セルの走査（決定的、点数は格子サイズで決まる）
//!   - Random: 一様乱数（重複・偏りを許す）
//!   - Lhc:    ラテン超方格（各軸の候補座標を一度ずつ使う）
//!   - Ortho:  直交サンプリング（部分正方形 1 点 + 座標重複なし）
//!   - Quasi:  Halton 列による準モンテカルロ

use clap::ValueEnum;
use num_complex::Complex;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::McError;
use super::grid::Grid;
use super::halton::quasi_sampling;

/// サンプリング手法の選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleMethod {
    /// 格子走査
    Linear,
    /// 一様乱数
    Random,
    /// ラテン超方格
    Lhc,
    /// 直交サンプリング
    Ortho,
    /// 準モンテカルロ (Halton 列)
    Quasi,
}

impl SampleMethod {
    /// 選択された手法で候補点列を生成する
    pub fn sample<R: Rng + ?Sized>(
        self,
        grid: &Grid,
        samples: usize,
        rng: &mut R,
    ) -> Result<Vec<Complex<f64>>, McError> {
        match self {
            SampleMethod::Linear => Ok(linear_sampling(grid)),
            SampleMethod::Random => Ok(random_sampling(grid, samples, rng)),
            SampleMethod::Lhc => lhc_sampling(grid, samples, rng),
            SampleMethod::Ortho => ortho_sampling(grid, samples, rng),
            SampleMethod::Quasi => Ok(quasi_sampling(grid, samples, rng)),
        }
    }

    /// 出力ファイル名などに使う識別子
    pub fn label(self) -> &'static str {
        match self {
            SampleMethod::Linear => "linear",
            SampleMethod::Random => "random",
            SampleMethod::Lhc => "lhc",
            SampleMethod::Ortho => "orthogonal",
            SampleMethod::Quasi => "qmc",
        }
    }
}

/// 両端を含む等間隔の座標列
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![start; n];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|k| start + step * k as f64).collect()
}

/// 格子の全セルを行順（y 外側、x 内側）に走査して点列を返す
///
/// 戻り値の長さは xdim * ydim で決まり、要求サンプル数とは一致しない
/// ことがある（非正方領域では格子セル数の方が少なくなる）。
pub fn linear_sampling(grid: &Grid) -> Vec<Complex<f64>> {
    let mut points = Vec::with_capacity(grid.xdim * grid.ydim);
    for i in 0..grid.ydim {
        for j in 0..grid.xdim {
            points.push(Complex::new(
                grid.xmin + j as f64 * grid.delta,
                grid.ymin + i as f64 * grid.delta,
            ));
        }
    }
    points
}

/// 領域内の一様乱数で点列を生成する
///
/// 各点は独立に引くため、重複や集中を許す。
pub fn random_sampling<R: Rng + ?Sized>(
    grid: &Grid,
    samples: usize,
    rng: &mut R,
) -> Vec<Complex<f64>> {
    (0..samples)
        .map(|_| {
            Complex::new(
                grid.xmin + grid.xrange * rng.gen::<f64>(),
                grid.ymin + grid.yrange * rng.gen::<f64>(),
            )
        })
        .collect()
}

/// ラテン超方格サンプリング
///
/// 各軸の候補座標（両端を含む xdim 個 / ydim 個の等間隔列）から
/// 未使用の値を一様に選んで組にする。どの 2 点も x 座標・y 座標を
/// 共有しないため、各軸への射影が層別化される。
///
/// samples が min(xdim, ydim) を超える要求はプールが持たないので
/// PoolExhausted を返す。
pub fn lhc_sampling<R: Rng + ?Sized>(
    grid: &Grid,
    samples: usize,
    rng: &mut R,
) -> Result<Vec<Complex<f64>>, McError> {
    let capacity = grid.xdim.min(grid.ydim);
    if samples > capacity {
        return Err(McError::PoolExhausted {
            requested: samples,
            capacity,
        });
    }

    let mut xs = linspace(grid.xmin, grid.xmax, grid.xdim);
    let mut ys = linspace(grid.ymin, grid.ymax, grid.ydim);

    let mut points = Vec::with_capacity(samples);
    for _ in 0..samples {
        // swap_remove で残りの候補から一様に選びつつ O(1) で除去する
        let x = xs.swap_remove(rng.gen_range(0..xs.len()));
        let y = ys.swap_remove(rng.gen_range(0..ys.len()));
        points.push(Complex::new(x, y));
    }
    Ok(points)
}

/// 直交サンプリング
///
/// 領域を sqrt(samples) x sqrt(samples) の部分正方形に分割し、
/// 各部分正方形に 1 点、かつ全点で x 座標・y 座標が重複しないように
/// samples 点を配置する（二重の層別化）。samples は平方数で
/// なければならない。
///
/// 候補座標は軸ごとに samples 個で、添字 i の属する部分正方形の
/// 列・行は i / dim で直接求まる。未使用の添字から組をランダムに
/// 引き、対応する部分正方形が空の場合だけ受理する。棄却が続いた
/// 場合は残りの組を全走査し、合法な配置が無ければ PoolExhausted を
/// 返す（無限ループには陥らない）。
pub fn ortho_sampling<R: Rng + ?Sized>(
    grid: &Grid,
    samples: usize,
    rng: &mut R,
) -> Result<Vec<Complex<f64>>, McError> {
    if samples == 0 {
        return Err(McError::InvalidSampleCount(0));
    }
    let dim = (samples as f64).sqrt() as usize;
    if dim * dim != samples {
        return Err(McError::NotPerfectSquare(samples));
    }

    let xs = linspace(grid.xmin, grid.xmax, samples);
    let ys = linspace(grid.ymin, grid.ymax, samples);

    let mut x_unused: Vec<usize> = (0..samples).collect();
    let mut y_unused: Vec<usize> = (0..samples).collect();
    let mut square_filled = vec![false; samples];

    let mut points = Vec::with_capacity(samples);
    let mut rejects = 0usize;

    while points.len() < samples {
        let xp = rng.gen_range(0..x_unused.len());
        let yp = rng.gen_range(0..y_unused.len());
        let (i, j) = (x_unused[xp], y_unused[yp]);
        let square = (j / dim) * dim + i / dim;

        if !square_filled[square] {
            square_filled[square] = true;
            x_unused.swap_remove(xp);
            y_unused.swap_remove(yp);
            points.push(Complex::new(xs[i], ys[j]));
            rejects = 0;
            continue;
        }

        rejects += 1;
        if rejects > x_unused.len() * y_unused.len() {
            // 合法な組が残っているか全走査で確かめる
            log::debug!(
                "直交サンプリング: 棄却が続いたため残り候補を全走査 (配置済み {})",
                points.len()
            );
            let y_len = y_unused.len();
            let legal: Vec<(usize, usize)> = (0..x_unused.len())
                .flat_map(|xp| (0..y_len).map(move |yp| (xp, yp)))
                .filter(|&(xp, yp)| {
                    let square = (y_unused[yp] / dim) * dim + x_unused[xp] / dim;
                    !square_filled[square]
                })
                .collect();

            match legal.choose(rng) {
                None => {
                    return Err(McError::PoolExhausted {
                        requested: samples,
                        capacity: points.len(),
                    });
                }
                Some(&(xp, yp)) => {
                    let (i, j) = (x_unused[xp], y_unused[yp]);
                    let square = (j / dim) * dim + i / dim;
                    square_filled[square] = true;
                    x_unused.swap_remove(xp);
                    y_unused.swap_remove(yp);
                    points.push(Complex::new(xs[i], ys[j]));
                    rejects = 0;
                }
            }
        }
    }
    Ok(points)
}
