//! マッチング結果の型定義
//!
//! CLIとバッチ処理で共有される型:
//! - FileEntry: スキャン済みの動画ファイル
//! - MatchedPair / MatchResult: マッチング結果
//! - QualityReport: マッチ品質のサマリー

use crate::normalizer::{file_name_of, split_extension};
use serde::{Deserialize, Serialize};

/// スキャン済みの動画ファイル
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// 呼び出し元から渡されたパス（またはファイル名）
    pub path: String,
    /// パスを除いたファイル名
    pub file_name: String,
    /// 拡張子（ドットなし、なければ空）
    pub extension: String,
    /// 拡張子を除いたファイル名
    pub base_name: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let file_name = file_name_of(&path).to_string();
        let (base_name, extension) = split_extension(&file_name);
        Self {
            base_name: base_name.to_string(),
            extension: extension.unwrap_or_default().to_string(),
            file_name,
            path,
        }
    }
}

impl From<&str> for FileEntry {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FileEntry {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

/// ペアが成立した根拠
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchBasis {
    /// 拡張子を除いたファイル名が完全一致
    ExactBaseName,
    /// 正規化キーの類似度が閾値以上
    FuzzySimilarity,
}

impl std::fmt::Display for MatchBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchBasis::ExactBaseName => write!(f, "exact"),
            MatchBasis::FuzzySimilarity => write!(f, "fuzzy"),
        }
    }
}

/// マッチした動画ペア
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedPair {
    pub item_a: FileEntry,
    pub item_b: FileEntry,
    /// 0.0〜1.0
    pub similarity: f64,
    pub basis: MatchBasis,
    /// 照合に使ったキー（完全一致ならベース名、類似度ならAの正規化キー）
    pub key: String,
}

/// マッチング結果
///
/// Aの各ファイルは `pairs[..].item_a` か `unmatched_a` のどちらか一方に現れる（Bも同様）。
/// 例外: 完全一致戦略で同じベース名を持つ2件目以降のファイルはどちらにも現れない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub pairs: Vec<MatchedPair>,
    pub unmatched_a: Vec<FileEntry>,
    pub unmatched_b: Vec<FileEntry>,
}

impl MatchResult {
    pub fn matched_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn total_a(&self) -> usize {
        self.pairs.len() + self.unmatched_a.len()
    }

    pub fn total_b(&self) -> usize {
        self.pairs.len() + self.unmatched_b.len()
    }

    /// 自身の件数から品質レポートを生成
    pub fn quality_report(&self) -> QualityReport {
        crate::quality::quality_report(self, self.total_a(), self.total_b())
    }
}

/// マッチ品質レポート
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub match_rate_a: f64,
    pub match_rate_b: f64,
    pub overall_match_rate: f64,
    pub is_good_match: bool,
    pub recommendations: Vec<String>,
}

/// マッチングのプレビュー（件数と先頭数件のみ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPreview {
    pub total_a: usize,
    pub total_b: usize,
    pub matched_pairs: usize,
    pub unmatched_a: usize,
    pub unmatched_b: usize,
    pub preview: Vec<MatchedPair>,
    pub average_similarity: f64,
}

/// マッチング戦略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// ベース名の完全一致（フォルダスキャンからのタスク作成用）
    Exact,
    /// 類似度の貪欲割り当て（2リストのアドホック照合用）
    #[default]
    Threshold,
    /// 類似度合計が最大になる割り当て（オプトイン）
    Optimal,
}

impl std::str::FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" | "basename" => Ok(MatchStrategy::Exact),
            "threshold" | "fuzzy" | "greedy" => Ok(MatchStrategy::Threshold),
            "optimal" | "hungarian" => Ok(MatchStrategy::Optimal),
            _ => Err(format!("Unknown strategy: {}. Use exact, threshold, or optimal", s)),
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::Exact => write!(f, "exact"),
            MatchStrategy::Threshold => write!(f, "threshold"),
            MatchStrategy::Optimal => write!(f, "optimal"),
        }
    }
}
