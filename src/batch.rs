//! バッチマッチング
//!
//! 複数のフォルダペアを並列に照合する。各ジョブは状態を共有しない。
//!
//! ```json
//! { "jobs": [ { "name": "encoder-x", "folderA": "/renders/base", "folderB": "/renders/exp" } ] }
//! ```

use crate::error::{VideoPairError, Result};
use crate::matcher::{run_match, MatchOptions, MatchRun};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const PROGRESS_BAR_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}";

/// バッチ定義ファイル
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchManifest {
    pub jobs: Vec<BatchJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJob {
    #[serde(default)]
    pub name: Option<String>,
    pub folder_a: PathBuf,
    pub folder_b: PathBuf,
}

impl BatchJob {
    /// 名前がなければフォルダ名から作る
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!("{} <> {}", self.folder_a.display(), self.folder_b.display())
        })
    }
}

/// ジョブごとの結果（失敗しても他のジョブは続行）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<MatchRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchManifest {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VideoPairError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let manifest: Self = serde_json::from_str(&content)
            .map_err(|e| VideoPairError::InvalidManifest(format!("JSONパースエラー: {}", e)))?;
        if manifest.jobs.is_empty() {
            return Err(VideoPairError::InvalidManifest("ジョブが空です".into()));
        }
        Ok(manifest)
    }
}

fn progress_bar(len: usize, show_progress: bool) -> ProgressBar {
    if !show_progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(PROGRESS_BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// 全ジョブを並列実行（結果はマニフェストの順）
pub fn run_batch(manifest: &BatchManifest, options: &MatchOptions, show_progress: bool) -> Vec<BatchOutcome> {
    let pb = progress_bar(manifest.jobs.len(), show_progress);

    let outcomes: Vec<BatchOutcome> = manifest
        .jobs
        .par_iter()
        .progress_with(pb.clone())
        .map(|job| {
            let name = job.display_name();
            match run_match(&job.folder_a, &job.folder_b, options) {
                Ok(run) => BatchOutcome { name, run: Some(run), error: None },
                Err(e) => {
                    log::warn!("{}: {}", name, e);
                    BatchOutcome { name, run: None, error: Some(e.to_string()) }
                }
            }
        })
        .collect();

    pb.finish_and_clear();
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_load_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("batch.json");
        fs::write(
            &path,
            r#"{ "jobs": [ { "name": "x", "folderA": "/a", "folderB": "/b" }, { "folderA": "/c", "folderB": "/d" } ] }"#,
        )
        .unwrap();

        let manifest = BatchManifest::load(&path).unwrap();
        assert_eq!(manifest.jobs.len(), 2);
        assert_eq!(manifest.jobs[0].display_name(), "x");
        assert_eq!(manifest.jobs[1].display_name(), "/c <> /d");
    }

    #[test]
    fn test_load_manifest_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            BatchManifest::load(&dir.path().join("none.json")),
            Err(VideoPairError::FileNotFound(_))
        ));

        let path = dir.path().join("bad.json");
        fs::write(&path, "{ jobs: ").unwrap();
        assert!(matches!(BatchManifest::load(&path), Err(VideoPairError::InvalidManifest(_))));

        fs::write(&path, r#"{ "jobs": [] }"#).unwrap();
        assert!(matches!(BatchManifest::load(&path), Err(VideoPairError::InvalidManifest(_))));
    }

    #[test]
    fn test_run_batch_keeps_order_and_isolates_failures() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        File::create(a.join("shot_compressed.mp4")).unwrap();
        File::create(b.join("shot.mp4")).unwrap();

        let manifest = BatchManifest {
            jobs: vec![
                BatchJob { name: Some("ok".into()), folder_a: a.clone(), folder_b: b.clone() },
                BatchJob { name: Some("missing".into()), folder_a: a.clone(), folder_b: dir.path().join("none") },
                BatchJob { name: Some("again".into()), folder_a: a, folder_b: b },
            ],
        };

        let outcomes = run_batch(&manifest, &MatchOptions::default(), false);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].name, "ok");
        assert_eq!(outcomes[0].run.as_ref().unwrap().result.pairs.len(), 1);
        assert!(outcomes[1].run.is_none());
        assert!(outcomes[1].error.as_ref().unwrap().contains("フォルダが見つかりません"));
        assert_eq!(outcomes[2].run.as_ref().unwrap().result.pairs.len(), 1);
    }
}
