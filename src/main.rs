//! マンデルブロ集合の面積推定 CLI
//!
//! 指定したサンプリング手法で候補点列を生成し、発散しなかった点の
//! 割合から面積推定の収束列と最終推定値を計算する。
//!
//! 使用例:
//!   mandelbrot-area --method lhc --samples 1600 --max-iter 100
//!   mandelbrot-area --method quasi --seed 42 --output areas.csv

use anyhow::{Context, Result};
use clap::Parser;
use mandelbrot_area::common::{
    area::compute_areas,
    constants::{DEFAULT_CMAX, DEFAULT_CMIN, DEFAULT_MAX_ITER, DEFAULT_SAMPLES},
    grid::Grid,
    output::write_column_csv,
    sampling::SampleMethod,
};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// コマンドライン引数
#[derive(Parser)]
#[command(
    name = "mandelbrot-area",
    about = "モンテカルロ法によるマンデルブロ集合の面積推定"
)]
struct Args {
    /// サンプリング手法
    #[arg(short, long, value_enum, default_value = "random")]
    method: SampleMethod,

    /// サンプル数
    #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// 最大反復回数
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: u32,

    /// 乱数シード（省略時はエントロピーから初期化）
    #[arg(long)]
    seed: Option<u64>,

    /// 領域の左下隅（実部）
    #[arg(long, default_value_t = DEFAULT_CMIN.re)]
    re_min: f64,

    /// 領域の左下隅（虚部）
    #[arg(long, default_value_t = DEFAULT_CMIN.im)]
    im_min: f64,

    /// 領域の右上隅（実部）
    #[arg(long, default_value_t = DEFAULT_CMAX.re)]
    re_max: f64,

    /// 領域の右上隅（虚部）
    #[arg(long, default_value_t = DEFAULT_CMAX.im)]
    im_max: f64,

    /// 収束列を書き出す CSV ファイル
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cmin = Complex::new(args.re_min, args.im_min);
    let cmax = Complex::new(args.re_max, args.im_max);
    let grid = Grid::new(cmin, cmax, args.samples).context("格子の導出に失敗しました")?;
    log::info!(
        "格子: {}x{} (delta={:.6}), 領域面積: {:.4}",
        grid.xdim,
        grid.ydim,
        grid.delta,
        grid.total_area()
    );

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let points = args
        .method
        .sample(&grid, args.samples, &mut rng)
        .context("サンプリングに失敗しました")?;
    let areas = compute_areas(&points, args.max_iter, grid.total_area());
    let final_area = areas.last().copied().unwrap_or(0.0);

    println!(
        "手法: {} | サンプル数: {} | 最大反復: {}",
        args.method.label(),
        points.len(),
        args.max_iter
    );
    println!("面積推定: {:.6}", final_area);

    if let Some(path) = &args.output {
        write_column_csv(path, &areas).context("収束列の書き出しに失敗しました")?;
        println!("収束列を保存しました: {}", path.display());
    }

    Ok(())
}
