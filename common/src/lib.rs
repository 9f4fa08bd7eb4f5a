//! Video Pair Common Library
//!
//! 2つのフォルダの動画ファイルを名前で対応付けるコア。I/Oは行わない。

pub mod types;
pub mod error;
pub mod normalizer;
pub mod similarity;
pub mod matcher;
pub mod quality;
pub mod preview;

pub use types::{FileEntry, MatchBasis, MatchedPair, MatchResult, MatchPreview, MatchStrategy, QualityReport};
pub use error::{Error, Result};
pub use normalizer::{normalize_loose, normalize_strict};
pub use similarity::{similarity, similarity_of_keys};
pub use matcher::{match_by_exact_base_name, match_by_threshold, match_files, match_optimal, DEFAULT_THRESHOLD};
pub use quality::quality_report;
pub use preview::preview_matches;
