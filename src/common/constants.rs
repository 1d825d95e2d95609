//! 共通定数

use num_complex::Complex;

/// 調査対象のデフォルト領域（左下隅）
pub const DEFAULT_CMIN: Complex<f64> = Complex::new(-2.0, -1.3);
/// 調査対象のデフォルト領域（右上隅）
pub const DEFAULT_CMAX: Complex<f64> = Complex::new(0.6, 1.3);

/// デフォルトのサンプル数（40 x 40）
pub const DEFAULT_SAMPLES: usize = 1600;

/// デフォルトの最大反復回数
pub const DEFAULT_MAX_ITER: u32 = 100;

/// スイープ実行時のデフォルト試行回数
pub const DEFAULT_SIMS: usize = 10;

/// Halton列の基数（実軸）
pub const HALTON_BASE_RE: u64 = 2;
/// Halton列の基数（虚軸）
pub const HALTON_BASE_IM: u64 = 3;
