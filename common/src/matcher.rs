//! 動画ペアのマッチング
//!
//! ## 戦略
//! - [`match_by_exact_base_name`]: 拡張子を除いたファイル名の完全一致。フォルダスキャンからのタスク作成で使用
//! - [`match_by_threshold`]: 類似度の貪欲割り当て。2つのファイルリストのアドホック照合で使用
//! - [`match_optimal`]: 類似度合計を最大化する割り当て（オプトイン）
//!
//! いずれも呼び出しごとに新しい [`MatchResult`] を返し、呼び出し間で状態を持たない。
//! 入力順で結果が決まるため、呼び出し側でソート済みのリストを渡すこと。

use crate::error::{validate_threshold, Error, Result};
use crate::normalizer::normalize_loose;
use crate::similarity::similarity_of_keys;
use crate::types::{FileEntry, MatchBasis, MatchResult, MatchStrategy, MatchedPair};
use indexmap::IndexMap;
use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;

/// 類似度マッチングのデフォルト閾値
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// 最適割り当ての重みを整数化する倍率
const WEIGHT_SCALE: f64 = 1_000_000.0;

/// 戦略を指定してマッチング
///
/// `threshold` は完全一致戦略では使わないが、範囲外なら同様にエラーとする。
pub fn match_files<S: AsRef<str>>(
    strategy: MatchStrategy,
    files_a: &[S],
    files_b: &[S],
    threshold: f64,
) -> Result<MatchResult> {
    validate_threshold(threshold)?;
    match strategy {
        MatchStrategy::Exact => Ok(match_by_exact_base_name(files_a, files_b)),
        MatchStrategy::Threshold => match_by_threshold(files_a, files_b, threshold),
        MatchStrategy::Optimal => match_optimal(files_a, files_b, threshold),
    }
}

/// ベース名ごとにファイルをまとめる（挿入順を保持）
fn group_by_base_name<S: AsRef<str>>(files: &[S]) -> IndexMap<String, Vec<FileEntry>> {
    let mut groups: IndexMap<String, Vec<FileEntry>> = IndexMap::new();
    for file in files {
        let entry = FileEntry::new(file.as_ref());
        groups.entry(entry.base_name.clone()).or_default().push(entry);
    }
    groups
}

/// ベース名の完全一致でマッチング
///
/// 両側に存在するベース名ごとに、各グループの先頭ファイル同士を1ペアにする。
/// 同じベース名の2件目以降はペアにも未マッチにも入らない（既知の制限）。
/// 片側にしかないベース名は、グループ内の全ファイルが未マッチになる。
pub fn match_by_exact_base_name<S: AsRef<str>>(files_a: &[S], files_b: &[S]) -> MatchResult {
    let groups_a = group_by_base_name(files_a);
    let mut groups_b = group_by_base_name(files_b);

    let mut result = MatchResult::default();
    let mut dropped = 0usize;

    for (base_name, entries_a) in groups_a {
        match groups_b.shift_remove(&base_name) {
            Some(entries_b) => {
                dropped += entries_a.len() - 1 + entries_b.len() - 1;
                let (Some(item_a), Some(item_b)) =
                    (entries_a.into_iter().next(), entries_b.into_iter().next())
                else {
                    continue;
                };
                result.pairs.push(MatchedPair {
                    item_a,
                    item_b,
                    similarity: 1.0,
                    basis: MatchBasis::ExactBaseName,
                    key: base_name,
                });
            }
            None => result.unmatched_a.extend(entries_a),
        }
    }

    // shift_removeは残りの順序を保つ
    for (_, entries_b) in groups_b {
        result.unmatched_b.extend(entries_b);
    }

    if dropped > 0 {
        log::warn!(
            "{} file(s) sharing a base name with an earlier file were left out of the result",
            dropped
        );
    }
    log::debug!(
        "exact base-name match: {} pairs, {} unmatched A, {} unmatched B",
        result.pairs.len(),
        result.unmatched_a.len(),
        result.unmatched_b.len()
    );

    result
}

/// ファイルと正規化キーの組（1ファイル1回だけ正規化する）
fn with_keys<S: AsRef<str>>(files: &[S]) -> Vec<(FileEntry, String)> {
    files
        .iter()
        .map(|f| {
            let entry = FileEntry::new(f.as_ref());
            let key = normalize_loose(&entry.file_name);
            (entry, key)
        })
        .collect()
}

/// 類似度の降順に並べる（同値は割り当て順を保つ）
fn sort_by_similarity(pairs: &mut [MatchedPair]) {
    pairs.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
}

/// 類似度の閾値による貪欲マッチング
///
/// Aを入力順に処理し、未使用のBの中で類似度が最大かつ `threshold` 以上の候補を確定する。
/// 同値の候補はBの入力順で先に見つかったものが優先される。
/// 類似度 0.0 の候補は閾値 0.0 でも採用しない。
///
/// 全体最適ではない: 先に処理されたAが、後のAにとって最良のBを消費することがある。
/// 結果のペアは類似度の降順。
pub fn match_by_threshold<S: AsRef<str>>(
    files_a: &[S],
    files_b: &[S],
    threshold: f64,
) -> Result<MatchResult> {
    let threshold = validate_threshold(threshold)?;
    let keyed_a = with_keys(files_a);
    let keyed_b = with_keys(files_b);

    let mut used_b = vec![false; keyed_b.len()];
    let mut result = MatchResult::default();

    for (entry_a, key_a) in keyed_a {
        let mut best: Option<usize> = None;
        let mut best_similarity = 0.0;

        for (j, (_, key_b)) in keyed_b.iter().enumerate() {
            if used_b[j] {
                continue;
            }
            let s = similarity_of_keys(&key_a, key_b);
            if s > best_similarity && s >= threshold {
                best_similarity = s;
                best = Some(j);
            }
        }

        match best {
            Some(j) => {
                used_b[j] = true;
                result.pairs.push(MatchedPair {
                    item_a: entry_a,
                    item_b: keyed_b[j].0.clone(),
                    similarity: best_similarity,
                    basis: MatchBasis::FuzzySimilarity,
                    key: key_a,
                });
            }
            None => result.unmatched_a.push(entry_a),
        }
    }

    result.unmatched_b = keyed_b
        .into_iter()
        .zip(used_b)
        .filter(|(_, used)| !used)
        .map(|((entry, _), _)| entry)
        .collect();

    sort_by_similarity(&mut result.pairs);

    log::debug!(
        "threshold match (>= {}): {} pairs, {} unmatched A, {} unmatched B",
        threshold,
        result.pairs.len(),
        result.unmatched_a.len(),
        result.unmatched_b.len()
    );

    Ok(result)
}

/// 類似度合計が最大になる割り当て（Kuhn–Munkres）
///
/// 閾値未満のペアは重み0として扱い、結果からも除外する。
/// 貪欲マッチングとは異なり入力順に依存しないが、同点の割り当ての選び方は実装依存。
pub fn match_optimal<S: AsRef<str>>(
    files_a: &[S],
    files_b: &[S],
    threshold: f64,
) -> Result<MatchResult> {
    let threshold = validate_threshold(threshold)?;
    let keyed_a = with_keys(files_a);
    let keyed_b = with_keys(files_b);

    if keyed_a.is_empty() || keyed_b.is_empty() {
        return Ok(MatchResult {
            pairs: Vec::new(),
            unmatched_a: keyed_a.into_iter().map(|(e, _)| e).collect(),
            unmatched_b: keyed_b.into_iter().map(|(e, _)| e).collect(),
        });
    }

    let similarities: Vec<Vec<f64>> = keyed_a
        .iter()
        .map(|(_, key_a)| {
            keyed_b
                .iter()
                .map(|(_, key_b)| similarity_of_keys(key_a, key_b))
                .collect()
        })
        .collect();
    let acceptable = |s: f64| s > 0.0 && s >= threshold;

    // kuhn_munkresは行数 <= 列数 を要求するため、少ない側を行にする
    let transposed = keyed_a.len() > keyed_b.len();
    let (rows, cols) = if transposed {
        (keyed_b.len(), keyed_a.len())
    } else {
        (keyed_a.len(), keyed_b.len())
    };
    let index = |r: usize, c: usize| if transposed { (c, r) } else { (r, c) };

    let weights: Vec<Vec<i64>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let (i, j) = index(r, c);
                    let s = similarities[i][j];
                    if acceptable(s) {
                        (s * WEIGHT_SCALE).round() as i64
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();
    let matrix = Matrix::from_rows(weights).map_err(|e| Error::Assignment(format!("{:?}", e)))?;
    let (_, assignment) = kuhn_munkres(&matrix);

    let mut matched_a = vec![None; keyed_a.len()];
    for (r, &c) in assignment.iter().enumerate() {
        let (i, j) = index(r, c);
        if acceptable(similarities[i][j]) {
            matched_a[i] = Some(j);
        }
    }

    let mut used_b = vec![false; keyed_b.len()];
    let mut result = MatchResult::default();
    for (i, ((entry_a, key_a), matched)) in keyed_a.into_iter().zip(matched_a).enumerate() {
        match matched {
            Some(j) => {
                used_b[j] = true;
                result.pairs.push(MatchedPair {
                    item_a: entry_a,
                    item_b: keyed_b[j].0.clone(),
                    similarity: similarities[i][j],
                    basis: MatchBasis::FuzzySimilarity,
                    key: key_a,
                });
            }
            None => result.unmatched_a.push(entry_a),
        }
    }
    result.unmatched_b = keyed_b
        .into_iter()
        .zip(used_b)
        .filter(|(_, used)| !used)
        .map(|((entry, _), _)| entry)
        .collect();

    sort_by_similarity(&mut result.pairs);

    log::debug!(
        "optimal match (>= {}): {} pairs, {} unmatched A, {} unmatched B",
        threshold,
        result.pairs.len(),
        result.unmatched_a.len(),
        result.unmatched_b.len()
    );

    Ok(result)
}
