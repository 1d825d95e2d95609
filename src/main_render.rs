//! マンデルブロ集合の PNG レンダラ
//!
//! 格子の全セルについて発散までの反復回数を計算し、カラーマップを
//! 適用した画像として保存する。

use anyhow::{Context, Result};
use clap::Parser;
use image::{ImageBuffer, Rgb};
use mandelbrot_area::common::{
    colors::iter_to_rgb,
    constants::{DEFAULT_CMAX, DEFAULT_CMIN, DEFAULT_MAX_ITER},
    grid::Grid,
    mandelbrot::mandelbrot_iter,
};
use num_complex::Complex;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

/// コマンドライン引数
#[derive(Parser)]
#[command(name = "mandelbrot-render", about = "マンデルブロ集合を PNG として描画")]
struct Args {
    /// 長辺の解像度（ピクセル数）
    #[arg(short, long, default_value_t = 800)]
    resolution: usize,

    /// 最大反復回数
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: u32,

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

    /// 出力ファイル
    #[arg(short, long, default_value = "mandelbrot.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cmin = Complex::new(args.re_min, args.im_min);
    let cmax = Complex::new(args.re_max, args.im_max);
    let grid = Grid::new(cmin, cmax, args.resolution).context("格子の導出に失敗しました")?;
    log::info!("描画解像度: {}x{}", grid.xdim, grid.ydim);

    let start = Instant::now();

    // 行単位で並列に反復回数を計算する（上端の行が ymax）
    let iters: Vec<u32> = (0..grid.ydim)
        .into_par_iter()
        .flat_map(|y| {
            (0..grid.xdim)
                .map(|x| {
                    let c = Complex::new(
                        grid.xmin + x as f64 * grid.delta,
                        grid.ymax - y as f64 * grid.delta,
                    );
                    mandelbrot_iter(c, args.max_iter)
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(grid.xdim as u32, grid.ydim as u32, |x, y| {
            iter_to_rgb(iters[y as usize * grid.xdim + x as usize], args.max_iter)
        });
    img.save(&args.output).context("画像の保存に失敗しました")?;

    println!(
        "描画完了: {:.2?} -> {}",
        start.elapsed(),
        args.output.display()
    );
    Ok(())
}
