//! ファイル名の正規化
//!
//! 2段階の厳しさを提供する:
//! - strict: 拡張子のみ除去（完全一致の高速パス用）
//! - loose: 小文字化＋レンダリング由来のノイズ接尾辞を除去（類似度照合用）

use regex::Regex;

/// loose正規化で除去するノイズパターン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoisePattern {
    /// 部分文字列として除去
    Literal(&'static str),
    /// シード番号（`_seed<数字>`）
    Seed,
}

/// loose正規化で除去するパターン（上から順に適用）
///
/// 部分文字列として除去するため `_v10` は `0` が残り、`_hdr` は `r` が残る。
pub const NOISE_PATTERNS: &[NoisePattern] = &[
    NoisePattern::Literal("_compressed"),
    NoisePattern::Literal("_enhanced"),
    NoisePattern::Literal("_processed"),
    NoisePattern::Literal("_output"),
    NoisePattern::Literal("_original"),
    NoisePattern::Literal("_source"),
    NoisePattern::Literal("_input"),
    NoisePattern::Literal("_result"),
    NoisePattern::Literal("_720p"),
    NoisePattern::Literal("_1080p"),
    NoisePattern::Literal("_4k"),
    NoisePattern::Literal("_hd"),
    NoisePattern::Literal("_final"),
    NoisePattern::Literal("_v1"),
    NoisePattern::Literal("_v2"),
    NoisePattern::Literal("_v3"),
    NoisePattern::Literal("(1)"),
    NoisePattern::Literal("(2)"),
    NoisePattern::Literal("(3)"),
    NoisePattern::Literal("-1"),
    NoisePattern::Literal("-2"),
    NoisePattern::Literal("-3"),
    NoisePattern::Literal("_copy"),
    NoisePattern::Literal("_new"),
    NoisePattern::Seed,
    NoisePattern::Literal("_share"),
];

lazy_static::lazy_static! {
    // シード番号（_seed12345）
    static ref SEED_RE: Regex = Regex::new(r"_seed\d+").unwrap();
    // 空白・アンダースコアの連続
    static ref SEPARATOR_RE: Regex = Regex::new(r"[_\s]+").unwrap();
    // 末尾の連番（_001）
    static ref TRAILING_NUMBER_RE: Regex = Regex::new(r"_\d+$").unwrap();
}

/// パス区切り（`/` と `\`）を除いたファイル名部分
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// ファイル名を (ベース名, 拡張子) に分割
///
/// 先頭のドット（`.hidden`）や末尾のドット（`clip.`）は拡張子として扱わない。
pub fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    }
}

/// strict正規化: パスと拡張子のみ除去し、大文字小文字も保持する
///
/// ベース名を小文字化してから比較する照合とは異なり、意図的に大文字小文字を区別する。
/// `Shot.mp4` と `shot.mp4` は完全一致戦略ではペアにならない（loose正規化では一致する）。
pub fn normalize_strict(filename: &str) -> String {
    split_extension(file_name_of(filename)).0.to_string()
}

/// loose正規化: 類似度計算に使う比較キーを生成する
///
/// 1. パス・拡張子を除去して小文字化
/// 2. [`NOISE_PATTERNS`] を順に除去
/// 3. 空白・アンダースコアの連続を `_` 1つにまとめ、前後の `_` を除去
/// 4. 末尾の `_<数字>` を1回だけ除去
///
/// 冪等ではない。除去によって別のパターンが現れる場合（`clip_co_newpy` → `clip_copy`）や、
/// キー内にドットが残る場合は、再度正規化するとさらに短くなる。
pub fn normalize_loose(filename: &str) -> String {
    let mut normalized = normalize_strict(filename).to_lowercase();

    for pattern in NOISE_PATTERNS {
        normalized = match pattern {
            NoisePattern::Literal(suffix) => normalized.replace(suffix, ""),
            NoisePattern::Seed => SEED_RE.replace_all(&normalized, "").into_owned(),
        };
    }

    normalized = SEPARATOR_RE.replace_all(&normalized, "_").into_owned();
    let trimmed = normalized.trim_matches('_');
    let stripped = TRAILING_NUMBER_RE.replace(trimmed, "");

    stripped.trim_matches('_').to_string()
}
