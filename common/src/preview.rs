//! マッチングのプレビュー

use crate::error::Result;
use crate::matcher::{match_by_threshold, DEFAULT_THRESHOLD};
use crate::types::MatchPreview;

/// プレビューに含めるペア数
pub const PREVIEW_LIMIT: usize = 5;

/// デフォルト閾値で類似度マッチングを行い、件数と先頭数件だけを返す
pub fn preview_matches<S: AsRef<str>>(files_a: &[S], files_b: &[S]) -> Result<MatchPreview> {
    let result = match_by_threshold(files_a, files_b, DEFAULT_THRESHOLD)?;

    let average_similarity = if result.pairs.is_empty() {
        0.0
    } else {
        result.pairs.iter().map(|p| p.similarity).sum::<f64>() / result.pairs.len() as f64
    };

    Ok(MatchPreview {
        total_a: files_a.len(),
        total_b: files_b.len(),
        matched_pairs: result.pairs.len(),
        unmatched_a: result.unmatched_a.len(),
        unmatched_b: result.unmatched_b.len(),
        preview: result.pairs.into_iter().take(PREVIEW_LIMIT).collect(),
        average_similarity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_counts() {
        let a = ["render_compressed.mp4", "clip2_v2.mov", "extra.mp4"];
        let b = ["render.mp4", "clip2.mov"];
        let preview = preview_matches(&a, &b).unwrap();

        assert_eq!(preview.total_a, 3);
        assert_eq!(preview.total_b, 2);
        assert_eq!(preview.matched_pairs, 2);
        assert_eq!(preview.unmatched_a, 1);
        assert_eq!(preview.unmatched_b, 0);
        assert_eq!(preview.average_similarity, 1.0);
    }

    #[test]
    fn test_preview_is_limited() {
        let a: Vec<String> = (0..8).map(|i| format!("shot{}.mp4", i)).collect();
        let preview = preview_matches(&a, &a).unwrap();

        assert_eq!(preview.matched_pairs, 8);
        assert_eq!(preview.preview.len(), PREVIEW_LIMIT);
    }

    #[test]
    fn test_preview_empty() {
        let empty: [&str; 0] = [];
        let preview = preview_matches(&empty, &empty).unwrap();
        assert_eq!(preview.matched_pairs, 0);
        assert_eq!(preview.average_similarity, 0.0);
        assert!(preview.preview.is_empty());
    }
}
