/// Longest prefix of `text` spanning at most `limit` UTF-16 code units
///
/// Cuts only on character boundaries, so a surrogate pair that would
/// straddle the limit is dropped whole.
pub fn truncate_utf16(text: &str, limit: usize) -> &str {
    let mut units = 0;
    for (end, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > limit {
            return &text[..end];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::truncate_utf16;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_utf16("robot", 86), "robot");
        assert_eq!(truncate_utf16("", 3), "");
    }

    #[test]
    fn cuts_on_character_boundaries() {
        assert_eq!(truncate_utf16("abcdef", 3), "abc");
        assert_eq!(truncate_utf16("ñandú", 4), "ñand");
    }

    #[test]
    fn astral_characters_count_two_units() {
        let prompt = "😀".repeat(150);
        let kept = truncate_utf16(&prompt, 240);

        assert_eq!(kept.chars().count(), 120);
        assert_eq!(kept.encode_utf16().count(), 240);
    }

    #[test]
    fn surrogate_pair_is_never_split() {
        assert_eq!(truncate_utf16("ab😀", 3), "ab");
        assert_eq!(truncate_utf16("ab😀", 4), "ab😀");
    }
}
