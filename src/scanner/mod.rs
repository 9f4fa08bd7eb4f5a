use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "avi", "mkv", "webm", "flv", "wmv", "m4v", "3gp", "ts",
];

/// フォルダの概要
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderInfo {
    pub exists: bool,
    pub path: String,
    pub name: String,
    /// 全ファイルの合計バイト数
    pub size: u64,
    pub file_count: usize,
    pub video_count: usize,
}

/// 拡張子が対応動画形式か（大文字小文字を区別しない）
pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

fn is_video_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| is_video_extension(&ext.to_string_lossy()))
        .unwrap_or(false)
}

/// フォルダ内の動画ファイルを列挙する
///
/// ファイル名（小文字）→フルパスの順でソートして返す。
/// フォルダが存在しない場合はエラーにせず空のリストを返す。
pub fn scan_video_files(folder: &Path, recursive: bool) -> Vec<String> {
    if !folder.is_dir() {
        log::warn!("フォルダが存在しません: {}", folder.display());
        return Vec::new();
    }

    let walker = if recursive {
        WalkDir::new(folder)
    } else {
        WalkDir::new(folder).max_depth(1)
    };

    let mut videos: Vec<(String, String)> = walker
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("スキャン失敗: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && is_video_file(e.path()))
        .map(|e| {
            let sort_key = e.file_name().to_string_lossy().to_lowercase();
            (sort_key, e.path().to_string_lossy().to_string())
        })
        .collect();

    videos.sort();
    log::debug!("{}: {}件の動画", folder.display(), videos.len());

    videos.into_iter().map(|(_, path)| path).collect()
}

/// フォルダの概要を取得（常に再帰）
pub fn folder_info(folder: &Path) -> FolderInfo {
    if !folder.is_dir() {
        return FolderInfo {
            path: folder.display().to_string(),
            ..Default::default()
        };
    }

    let mut info = FolderInfo {
        exists: true,
        path: folder
            .canonicalize()
            .unwrap_or_else(|_| folder.to_path_buf())
            .display()
            .to_string(),
        name: folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        ..Default::default()
    };

    for entry in WalkDir::new(folder).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        info.file_count += 1;
        info.size += entry.metadata().map(|m| m.len()).unwrap_or(0);
        if is_video_file(entry.path()) {
            info.video_count += 1;
        }
    }

    info
}
