//! シミュレーション結果の書き出し
//!
//! 実行結果をカンマ区切りテキストとして保存する。行列形式
//! （1 行 = 1 回の実行）、1 行 1 値の列形式、(反復回数, 面積) の
//! 組形式に対応する。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::McError;

/// 行列形式で書き出す（1 行 1 実行、カンマ区切り）
pub fn write_matrix_csv<P: AsRef<Path>>(path: P, rows: &[Vec<f64>]) -> Result<(), McError> {
    let mut w = BufWriter::new(File::create(path)?);
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(w, "{}", line.join(","))?;
    }
    w.flush()?;
    Ok(())
}

/// 列形式で書き出す（1 行 1 値）
pub fn write_column_csv<P: AsRef<Path>>(path: P, values: &[f64]) -> Result<(), McError> {
    let mut w = BufWriter::new(File::create(path)?);
    for v in values {
        writeln!(w, "{}", v)?;
    }
    w.flush()?;
    Ok(())
}

/// (最大反復回数, 最終面積) の組を書き出す
pub fn write_pairs_csv<P: AsRef<Path>>(path: P, pairs: &[(u32, f64)]) -> Result<(), McError> {
    let mut w = BufWriter::new(File::create(path)?);
    for (max_iter, area) in pairs {
        writeln!(w, "{},{}", max_iter, area)?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn matrix_rows_are_comma_joined() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.csv");
        write_matrix_csv(&path, &[vec![1.0, 2.5], vec![3.0, 4.0]]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,2.5\n3,4\n");
    }

    #[test]
    fn column_has_one_value_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("column.csv");
        write_column_csv(&path, &[1.5, 2.0]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.5\n2\n");
    }

    #[test]
    fn pairs_keep_iteration_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        write_pairs_csv(&path, &[(10, 1.5), (100, 1.25)]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "10,1.5\n100,1.25\n");
    }
}
