//! エラー型

use thiserror::Error;

/// 格子の導出やサンプリングで発生するエラー
#[derive(Debug, Error)]
pub enum McError {
    /// いずれかの軸の幅が 0 の領域には格子を張れない
    #[error("退化した領域です (xrange={xrange}, yrange={yrange})")]
    DegenerateRegion { xrange: f64, yrange: f64 },

    #[error("サンプル数が不正です: {0}")]
    InvalidSampleCount(usize),

    #[error("直交サンプリングのサンプル数は平方数でなければなりません: {0}")]
    NotPerfectSquare(usize),

    /// 層別サンプリングで未使用の候補座標が尽きた
    #[error("候補プールが枯渇しました (要求 {requested}, 配置可能 {capacity})")]
    PoolExhausted { requested: usize, capacity: usize },

    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),
}
