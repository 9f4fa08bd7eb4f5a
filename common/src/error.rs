//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid threshold: {0} (must be within 0.0..=1.0)")]
    InvalidThreshold(f64),

    #[error("Assignment error: {0}")]
    Assignment(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 閾値が0.0〜1.0の範囲内か検証
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_nan() || !(0.0..=1.0).contains(&threshold) {
        return Err(Error::InvalidThreshold(threshold));
    }
    Ok(threshold)
}
