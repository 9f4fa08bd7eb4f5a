//! ファイル名の類似度
//!
//! loose正規化したキー同士のLevenshtein距離を 0.0〜1.0 に変換する。

use crate::normalizer::normalize_loose;

/// 2つのファイル名の類似度（内部でloose正規化する）
///
/// 対称で、正規化後に同一なら 1.0。
pub fn similarity(name_a: &str, name_b: &str) -> f64 {
    similarity_of_keys(&normalize_loose(name_a), &normalize_loose(name_b))
}

/// 正規化済みキー同士の類似度
///
/// `1 - distance / max(len)`。長さは文字数で数える。両方空なら 1.0。
pub fn similarity_of_keys(key_a: &str, key_b: &str) -> f64 {
    if key_a == key_b {
        return 1.0;
    }

    let max_len = key_a.chars().count().max(key_b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = strsim::levenshtein(key_a, key_b);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &[
        "",
        "a.mp4",
        "render_compressed.mp4",
        "render.mp4",
        "clip2_v2.mov",
        "intro_final_4k.mkv",
        "Ending Credits (2).webm",
        "動画_サンプル.mp4",
        "xyz",
    ];

    #[test]
    fn test_identical_after_normalization() {
        assert_eq!(similarity("render_compressed.mp4", "render.mp4"), 1.0);
        assert_eq!(similarity("clip2_v2.mov", "CLIP2.mp4"), 1.0);
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity_of_keys("", ""), 1.0);
    }

    #[test]
    fn test_one_empty() {
        assert_eq!(similarity_of_keys("abc", ""), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // kitten -> sitting: 3 edits, max len 7
        let s = similarity_of_keys("kitten", "sitting");
        assert!((s - (1.0 - 3.0 / 7.0)).abs() < 1e-9);

        // 1文字違い
        let s = similarity_of_keys("clip_ab", "clip_abc");
        assert!((s - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let s = similarity_of_keys("動画", "動");
        assert!((s - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry_identity_bounds() {
        for a in NAMES {
            assert_eq!(similarity(a, a), 1.0, "identity failed: {:?}", a);
            for b in NAMES {
                let ab = similarity(a, b);
                let ba = similarity(b, a);
                assert_eq!(ab, ba, "asymmetric: {:?} {:?}", a, b);
                assert!((0.0..=1.0).contains(&ab), "out of bounds: {:?} {:?} = {}", a, b, ab);
            }
        }
    }
}
