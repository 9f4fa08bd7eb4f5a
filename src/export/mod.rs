use crate::batch::BatchOutcome;
use crate::error::Result;
use crate::matcher::MatchRun;
use crate::scanner::FolderInfo;
use serde::Serialize;
use std::path::{Path, PathBuf};
use video_pair_common::MatchPreview;

pub const MATCH_REPORT_FILE: &str = "match_report.json";
pub const BATCH_REPORT_FILE: &str = "batch_report.json";
pub const PREVIEW_REPORT_FILE: &str = "preview_report.json";

fn output_path_for(output: &Path, default_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(default_name)
    } else {
        output.to_path_buf()
    }
}

/// JSONとして保存し、実際に書き込んだパスを返す
///
/// `output` がディレクトリ（または拡張子なし）なら `default_name` で保存する。
pub fn write_json<T: Serialize>(value: &T, output: &Path, default_name: &str) -> Result<PathBuf> {
    let path = output_path_for(output, default_name);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

pub fn print_run_summary(run: &MatchRun) {
    let result = &run.result;
    let quality = &run.quality;

    println!("フォルダA: {}", run.folder_a);
    println!("フォルダB: {}", run.folder_b);
    println!("戦略: {} (閾値: {})\n", run.strategy, run.threshold);

    println!("ペア ({}組):", result.pairs.len());
    for pair in &result.pairs {
        println!(
            "  [{:.3}] {}  <->  {}",
            pair.similarity, pair.item_a.file_name, pair.item_b.file_name
        );
    }

    if !result.unmatched_a.is_empty() {
        println!("\nフォルダA未マッチ ({}件):", result.unmatched_a.len());
        for entry in &result.unmatched_a {
            println!("  - {}", entry.file_name);
        }
    }
    if !result.unmatched_b.is_empty() {
        println!("\nフォルダB未マッチ ({}件):", result.unmatched_b.len());
        for entry in &result.unmatched_b {
            println!("  - {}", entry.file_name);
        }
    }

    println!();
    println!("マッチ率: A {} / B {} / 全体 {}",
        percent(quality.match_rate_a),
        percent(quality.match_rate_b),
        percent(quality.overall_match_rate)
    );
    let mark = if quality.is_good_match { "✔" } else { "⚠" };
    for recommendation in &quality.recommendations {
        println!("{} {}", mark, recommendation);
    }
}

pub fn print_preview(preview: &MatchPreview) {
    println!("フォルダA: {}件 / フォルダB: {}件", preview.total_a, preview.total_b);
    println!("ペア: {}組 (平均類似度 {:.3})", preview.matched_pairs, preview.average_similarity);
    println!("未マッチ: A {}件 / B {}件\n", preview.unmatched_a, preview.unmatched_b);

    for pair in &preview.preview {
        println!(
            "  [{:.3}] {}  <->  {}",
            pair.similarity, pair.item_a.file_name, pair.item_b.file_name
        );
    }
    if preview.matched_pairs > preview.preview.len() {
        println!("  ... 他 {}組", preview.matched_pairs - preview.preview.len());
    }
}

pub fn print_batch_summary(outcomes: &[BatchOutcome]) {
    for outcome in outcomes {
        match (&outcome.run, &outcome.error) {
            (Some(run), _) => println!(
                "✔ {}: {}組 (マッチ率 {})",
                outcome.name,
                run.result.pairs.len(),
                percent(run.quality.overall_match_rate)
            ),
            (None, Some(error)) => println!("✘ {}: {}", outcome.name, error),
            (None, None) => println!("? {}", outcome.name),
        }
    }
}

pub fn print_folder_info(info: &FolderInfo) {
    if !info.exists {
        println!("フォルダが存在しません: {}", info.path);
        return;
    }
    println!("フォルダ情報:");
    println!("  名前: {}", info.name);
    println!("  パス: {}", info.path);
    println!("  ファイル数: {}", info.file_count);
    println!("  動画数: {}", info.video_count);
    println!("  サイズ: {} bytes", info.size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_for_dir() {
        let dir = tempdir().unwrap();
        assert_eq!(output_path_for(dir.path(), MATCH_REPORT_FILE), dir.path().join(MATCH_REPORT_FILE));
        assert_eq!(output_path_for(&dir.path().join("out.json"), MATCH_REPORT_FILE), dir.path().join("out.json"));
    }

    #[test]
    fn test_write_json_creates_parent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("reports").join("run.json");
        let written = write_json(&vec![1, 2, 3], &target, MATCH_REPORT_FILE).unwrap();

        assert_eq!(written, target);
        let content = std::fs::read_to_string(&written).unwrap();
        let parsed: Vec<u32> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);
    }
}
