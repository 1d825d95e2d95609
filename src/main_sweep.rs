//! シミュレーション一括実行ドライバ
//!
//! 4 種類のサンプリング手法で面積推定を繰り返し実行し、
//! 結果を CSV として保存する。
//!
//! サブコマンド:
//!   samples    - 固定反復回数でシミュレーションを繰り返す
//!   iterations - 反復回数を変えながら最終推定値の収束を調べる

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mandelbrot_area::common::{
    area::compute_areas,
    constants::{DEFAULT_CMAX, DEFAULT_CMIN, DEFAULT_MAX_ITER, DEFAULT_SIMS},
    grid::Grid,
    output::{write_matrix_csv, write_pairs_csv},
    sampling::SampleMethod,
    stats::{mean_per_index, std_per_index},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 比較対象のサンプリング手法
const METHODS: [SampleMethod; 4] = [
    SampleMethod::Random,
    SampleMethod::Lhc,
    SampleMethod::Ortho,
    SampleMethod::Quasi,
];

#[derive(Parser)]
#[command(
    name = "mandelbrot-sweep",
    about = "サンプリング手法ごとの収束を比較するシミュレーションドライバ"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 固定反復回数でシミュレーションを繰り返す
    Samples {
        /// サンプル数
        #[arg(short, long, default_value_t = 100)]
        samples: usize,

        /// 最大反復回数
        #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITER)]
        max_iter: u32,

        /// 繰り返し回数
        #[arg(long, default_value_t = DEFAULT_SIMS)]
        sims: usize,

        /// 出力ディレクトリ
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
    },
    /// 反復回数を変えながら最終推定値の収束を調べる
    Iterations {
        /// サンプル数
        #[arg(short, long, default_value_t = 100)]
        samples: usize,

        /// 出力ディレクトリ
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Command::Samples {
            samples,
            max_iter,
            sims,
            out,
        } => run_samples(samples, max_iter, sims, &out),
        Command::Iterations { samples, out } => run_iterations(samples, &out),
    }
}

/// 固定反復回数で sims 回のシミュレーションを実行して保存する
fn run_samples(samples: usize, max_iter: u32, sims: usize, out: &Path) -> Result<()> {
    let grid = Grid::new(DEFAULT_CMIN, DEFAULT_CMAX, samples)?;
    let total_area = grid.total_area();
    fs::create_dir_all(out).context("出力ディレクトリを作成できません")?;
    let mut rng = StdRng::from_entropy();

    // 手法ごとに sims 回分の収束列を貯める
    let mut runs: Vec<Vec<Vec<f64>>> = vec![Vec::with_capacity(sims); METHODS.len()];
    for sim in 0..sims {
        print!("\rシミュレーション中: {:>3} %", sim * 100 / sims);
        io::stdout().flush().ok();

        for (m, method) in METHODS.iter().enumerate() {
            let points = method.sample(&grid, samples, &mut rng)?;
            runs[m].push(compute_areas(&points, max_iter, total_area));
        }
    }
    println!("\rシミュレーション完了          ");

    for (m, method) in METHODS.iter().enumerate() {
        let path = out.join(format!("samplesim_{}.csv", method.label()));
        write_matrix_csv(&path, &runs[m])
            .with_context(|| format!("{} を書き出せません", path.display()))?;

        let mean = mean_per_index(&runs[m]).last().copied().unwrap_or(0.0);
        let std = std_per_index(&runs[m]).last().copied().unwrap_or(0.0);
        println!(
            "{:>10}: 面積 {:.4} ± {:.4} -> {}",
            method.label(),
            mean,
            std,
            path.display()
        );
    }
    Ok(())
}

/// 反復回数の階段（10 から 1000 まで、粗い対数状の間隔）
fn iteration_ladder() -> Vec<u32> {
    let mut ladder = vec![10];
    ladder.extend((20..100).step_by(10));
    ladder.extend((100..1100).step_by(100));
    ladder
}

/// 反復回数を変えながら最終推定値を集めて保存する
fn run_iterations(samples: usize, out: &Path) -> Result<()> {
    let grid = Grid::new(DEFAULT_CMIN, DEFAULT_CMAX, samples)?;
    let total_area = grid.total_area();
    fs::create_dir_all(out).context("出力ディレクトリを作成できません")?;
    let mut rng = StdRng::from_entropy();

    let ladder = iteration_ladder();
    let mut finals: Vec<Vec<(u32, f64)>> = vec![Vec::with_capacity(ladder.len()); METHODS.len()];
    let mut curves: Vec<Vec<Vec<f64>>> = vec![Vec::with_capacity(ladder.len()); METHODS.len()];

    for (k, &max_iter) in ladder.iter().enumerate() {
        print!("\rシミュレーション中: {:>3} %", k * 100 / ladder.len());
        io::stdout().flush().ok();

        for (m, method) in METHODS.iter().enumerate() {
            let points = method.sample(&grid, samples, &mut rng)?;
            let areas = compute_areas(&points, max_iter, total_area);
            finals[m].push((max_iter, areas.last().copied().unwrap_or(0.0)));
            curves[m].push(areas);
        }
    }
    println!("\rシミュレーション完了          ");

    for (m, method) in METHODS.iter().enumerate() {
        let conv_path = out.join(format!("iterconv_{}.csv", method.label()));
        write_pairs_csv(&conv_path, &finals[m])
            .with_context(|| format!("{} を書き出せません", conv_path.display()))?;

        let curve_path = out.join(format!("itsim_{}.csv", method.label()));
        write_matrix_csv(&curve_path, &curves[m])
            .with_context(|| format!("{} を書き出せません", curve_path.display()))?;

        println!(
            "{:>10}: {} / {}",
            method.label(),
            conv_path.display(),
            curve_path.display()
        );
    }
    Ok(())
}
