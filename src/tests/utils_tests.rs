use crate::utils::clip;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_string_is_untouched() {
        assert_eq!(clip("hello", 10), "hello");
        assert_eq!(clip("hello", 5), "hello");
    }

    #[test]
    fn test_clip_long_string_is_truncated_with_marker() {
        let out = clip(&"x".repeat(100), 10);
        assert!(out.starts_with("xxxxxxxxxx"));
        assert!(out.ends_with("… [truncated]"));
    }

    #[test]
    fn test_clip_does_not_split_multibyte_characters() {
        // The budget lands inside the first 'é' (2 bytes); clipping
        // must back up instead of panicking mid-character.
        let noisy = format!("a{}", "é".repeat(100));
        let out = clip(&noisy, 2);
        assert_eq!(out, "a… [truncated]");

        // Same with wider characters, at several cut points.
        let kanji = "学校の成績".repeat(50);
        for max in 1..12 {
            let out = clip(&kanji, max);
            assert!(out.ends_with("… [truncated]"));
            assert!(kanji.starts_with(out.trim_end_matches("… [truncated]")));
        }
    }

    #[test]
    fn test_clip_exact_boundary_keeps_whole_character() {
        // 'é' is 2 bytes; a budget of 3 keeps "aé" intact.
        let out = clip("aéxxxxxxxxxx", 3);
        assert_eq!(out, "aé… [truncated]");
    }
}
