//! フォルダ単位のマッチング
//!
//! 2つのフォルダをスキャンし、共通ライブラリの戦略で照合して
//! 保存・表示用の [`MatchRun`] を組み立てる。

use crate::error::{VideoPairError, Result};
use crate::scanner;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;
use video_pair_common::{
    match_files, preview_matches, MatchPreview, MatchResult, MatchStrategy, QualityReport,
    DEFAULT_THRESHOLD,
};

/// マッチングオプション
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    pub strategy: MatchStrategy,
    /// 類似度の閾値（0.0-1.0）
    pub threshold: f64,
    /// サブフォルダも再帰的にスキャン
    pub recursive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::Threshold,
            threshold: DEFAULT_THRESHOLD,
            recursive: true,
        }
    }
}

/// 1回分のマッチング結果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRun {
    pub folder_a: String,
    pub folder_b: String,
    pub strategy: MatchStrategy,
    pub threshold: f64,
    pub created_at: DateTime<Local>,
    pub result: MatchResult,
    pub quality: QualityReport,
}

fn ensure_folder(folder: &Path) -> Result<()> {
    if !folder.is_dir() {
        return Err(VideoPairError::FolderNotFound(folder.display().to_string()));
    }
    Ok(())
}

/// 2つのフォルダをスキャンしてマッチングする
pub fn run_match(folder_a: &Path, folder_b: &Path, options: &MatchOptions) -> Result<MatchRun> {
    ensure_folder(folder_a)?;
    ensure_folder(folder_b)?;

    let videos_a = scanner::scan_video_files(folder_a, options.recursive);
    let videos_b = scanner::scan_video_files(folder_b, options.recursive);
    log::info!("フォルダAで {} 件の動画を検出", videos_a.len());
    log::info!("フォルダBで {} 件の動画を検出", videos_b.len());

    let result = match_files(options.strategy, &videos_a, &videos_b, options.threshold)?;
    let quality = result.quality_report();

    log::info!(
        "{} 組のペアを検出 (戦略: {}, マッチ率: {:.1}%)",
        result.pairs.len(),
        options.strategy,
        quality.overall_match_rate * 100.0
    );
    log::info!("フォルダA未マッチ: {} 件", result.unmatched_a.len());
    log::info!("フォルダB未マッチ: {} 件", result.unmatched_b.len());

    Ok(MatchRun {
        folder_a: folder_a.display().to_string(),
        folder_b: folder_b.display().to_string(),
        strategy: options.strategy,
        threshold: options.threshold,
        created_at: Local::now(),
        result,
        quality,
    })
}

/// 2つのフォルダのマッチングをプレビューする
pub fn preview_folders(folder_a: &Path, folder_b: &Path, recursive: bool) -> Result<MatchPreview> {
    ensure_folder(folder_a)?;
    ensure_folder(folder_b)?;

    let videos_a = scanner::scan_video_files(folder_a, recursive);
    let videos_b = scanner::scan_video_files(folder_b, recursive);

    Ok(preview_matches(&videos_a, &videos_b)?)
}
