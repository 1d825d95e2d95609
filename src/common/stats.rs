//! 実行統計
//!
//! 繰り返しシミュレーションの結果から、サンプル位置ごとの
//! 平均と標準偏差を求める。各実行は同じ長さの収束列であること。

/// 各添字位置での平均
pub fn mean_per_index(runs: &[Vec<f64>]) -> Vec<f64> {
    if runs.is_empty() {
        return Vec::new();
    }
    let sims = runs.len() as f64;
    (0..runs[0].len())
        .map(|i| runs.iter().map(|r| r[i]).sum::<f64>() / sims)
        .collect()
}

/// 各添字位置での標準偏差（母標準偏差）
pub fn std_per_index(runs: &[Vec<f64>]) -> Vec<f64> {
    if runs.is_empty() {
        return Vec::new();
    }
    let sims = runs.len() as f64;
    (0..runs[0].len())
        .map(|i| {
            let mean = runs.iter().map(|r| r[i]).sum::<f64>() / sims;
            let var = runs.iter().map(|r| (r[i] - mean).powi(2)).sum::<f64>() / sims;
            var.sqrt()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_is_columnwise() {
        let runs = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(mean_per_index(&runs), vec![2.0, 3.0]);
    }

    #[test]
    fn std_is_population_form() {
        let runs = vec![vec![1.0, 10.0], vec![3.0, 10.0]];
        assert_eq!(std_per_index(&runs), vec![1.0, 0.0]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(mean_per_index(&[]).is_empty());
        assert!(std_per_index(&[]).is_empty());
    }
}
