//! 計算格子
//!
//! 複素平面上の矩形領域とサンプル数から、アスペクト比を保った
//! 直交格子（軸ごとの解像度と格子間隔）を導出する。

use num_complex::Complex;

use super::error::McError;

/// 領域の離散化パラメータ
///
/// 長い方の軸が要求された解像度をそのまま受け取り、短い方の軸は
/// 比例配分して切り捨てる。delta は切り捨てられなかった軸から
/// 求めるため、格子間隔は両軸で共通になる。切り捨てた軸の解像度と
/// 間隔の積は領域幅に一致しないことがあるが、そのまま受け入れる。
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub xrange: f64,
    pub yrange: f64,
    pub xdim: usize,
    pub ydim: usize,
    pub delta: f64,
}

impl Grid {
    /// 領域の対角 2 点とサンプル数から格子を導出する
    ///
    /// 角は軸ごとに並べ替えるので、どの 2 隅を渡してもよい。
    pub fn new(cmin: Complex<f64>, cmax: Complex<f64>, samples: usize) -> Result<Self, McError> {
        if samples == 0 {
            return Err(McError::InvalidSampleCount(0));
        }

        let (xmin, xmax) = minmax(cmin.re, cmax.re);
        let (ymin, ymax) = minmax(cmin.im, cmax.im);

        let xrange = xmax - xmin;
        let yrange = ymax - ymin;
        if xrange == 0.0 || yrange == 0.0 {
            return Err(McError::DegenerateRegion { xrange, yrange });
        }

        // 長い方の軸に要求解像度を割り当てる（同じ長さなら x 軸）
        let (xdim, ydim, delta) = if xrange >= yrange {
            let xdim = samples;
            let ydim = (xdim as f64 * (yrange / xrange)) as usize;
            (xdim, ydim, xrange / xdim as f64)
        } else {
            let ydim = samples;
            let xdim = (ydim as f64 * (xrange / yrange)) as usize;
            (xdim, ydim, yrange / samples as f64)
        };

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
            xrange,
            yrange,
            xdim,
            ydim,
            delta,
        })
    }

    /// 領域全体の面積
    pub fn total_area(&self) -> f64 {
        self.xrange * self.yrange
    }
}

fn minmax(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
