//! マッチ品質レポート

use crate::types::{MatchResult, QualityReport};

/// 両側のマッチ率がこれを超えれば良好
pub const GOOD_MATCH_RATE: f64 = 0.8;
/// いずれかのマッチ率がこれ未満なら警告
pub const LOW_MATCH_RATE: f64 = 0.5;

fn rate(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (matched as f64 / total as f64).min(1.0)
}

/// マッチング結果から品質レポートを生成
///
/// # Arguments
/// * `result` - マッチング結果
/// * `total_a` - フォルダAの総ファイル数
/// * `total_b` - フォルダBの総ファイル数
pub fn quality_report(result: &MatchResult, total_a: usize, total_b: usize) -> QualityReport {
    let matched = result.pairs.len();
    let match_rate_a = rate(matched, total_a);
    let match_rate_b = rate(matched, total_b);

    let mut recommendations = Vec::new();

    if match_rate_a < LOW_MATCH_RATE || match_rate_b < LOW_MATCH_RATE {
        recommendations.push("マッチ率が低いため、ファイル名の付け方が揃っているか確認してください".to_string());
    }

    if !result.unmatched_a.is_empty() {
        recommendations.push(format!("フォルダAに未マッチのファイルが {} 件あります", result.unmatched_a.len()));
    }

    if !result.unmatched_b.is_empty() {
        recommendations.push(format!("フォルダBに未マッチのファイルが {} 件あります", result.unmatched_b.len()));
    }

    if recommendations.is_empty() {
        recommendations.push("マッチ品質は良好です。ブラインドテストを開始できます".to_string());
    }

    QualityReport {
        match_rate_a,
        match_rate_b,
        overall_match_rate: (match_rate_a + match_rate_b) / 2.0,
        is_good_match: match_rate_a > GOOD_MATCH_RATE && match_rate_b > GOOD_MATCH_RATE,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{match_by_exact_base_name, match_by_threshold};

    #[test]
    fn test_partial_match_report() {
        let result = match_by_exact_base_name(&["a.mp4", "b.mp4"], &["a.mp4"]);
        let report = quality_report(&result, 2, 1);

        assert_eq!(report.match_rate_a, 0.5);
        assert_eq!(report.match_rate_b, 1.0);
        assert_eq!(report.overall_match_rate, 0.75);
        assert!(!report.is_good_match);
        // 0.5 は「0.5未満」ではないため低マッチ率警告は出ない
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].contains("フォルダA"));
        assert!(report.recommendations[0].contains("1 件"));
    }

    #[test]
    fn test_low_match_rate_warning() {
        let result = match_by_exact_base_name(&["a.mp4", "b.mp4", "c.mp4"], &["a.mp4"]);
        let report = result.quality_report();

        assert!((report.match_rate_a - 1.0 / 3.0).abs() < 1e-9);
        assert!(report.recommendations[0].contains("マッチ率が低い"));
        assert!(report.recommendations[1].contains("フォルダAに未マッチのファイルが 2 件"));
        assert_eq!(report.recommendations.len(), 2);
    }

    #[test]
    fn test_empty_report() {
        let empty: [&str; 0] = [];
        let result = match_by_threshold(&empty, &empty, 0.6).unwrap();
        let report = quality_report(&result, 0, 0);

        assert_eq!(report.match_rate_a, 0.0);
        assert_eq!(report.match_rate_b, 0.0);
        assert_eq!(report.overall_match_rate, 0.0);
        assert!(!report.is_good_match);
        assert!(report.recommendations[0].contains("マッチ率が低い"));
    }

    #[test]
    fn test_good_match_report() {
        let result = match_by_exact_base_name(&["a.mp4", "b.mp4"], &["a.mov", "b.mov"]);
        let report = result.quality_report();

        assert_eq!(report.overall_match_rate, 1.0);
        assert!(report.is_good_match);
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].contains("良好"));
    }

    #[test]
    fn test_good_match_is_strictly_greater() {
        let a: Vec<String> = (0..5).map(|i| format!("clip{}.mp4", i)).collect();
        let b: Vec<String> = (0..4).map(|i| format!("clip{}.mp4", i)).collect();
        let result = match_by_exact_base_name(&a, &b);
        let report = result.quality_report();

        // 4/5 = 0.8 は良好ではない
        assert_eq!(report.match_rate_a, 0.8);
        assert!(!report.is_good_match);
    }

    #[test]
    fn test_both_sides_unmatched() {
        let result = match_by_exact_base_name(&["x.mp4"], &["y.mp4", "z.mp4"]);
        let report = result.quality_report();

        assert_eq!(report.recommendations.len(), 3);
        assert!(report.recommendations[2].contains("フォルダBに未マッチのファイルが 2 件"));
    }

    #[test]
    fn test_rates_are_bounded() {
        let result = match_by_exact_base_name(&["a.mp4"], &["a.mp4"]);
        // 呼び出し側が実際より小さい総数を渡しても1.0を超えない
        let report = quality_report(&result, 0, 1);
        assert_eq!(report.match_rate_a, 0.0);
        assert!(report.overall_match_rate <= 1.0);
    }
}
