use regex::Regex;

/// Compiles a pattern that is a source-code constant.
pub(super) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex must compile")
}

/// Whole-word containment over ASCII word characters.
pub(super) fn contains_word(haystack: &str, word: &str) -> bool {
    find_word(haystack, word).is_some()
}

/// Byte offset of the first whole-word occurrence of `word`.
pub(super) fn find_word(haystack: &str, word: &str) -> Option<usize> {
    if word.is_empty() {
        return None;
    }
    let bytes = haystack.as_bytes();
    for (index, _) in haystack.match_indices(word) {
        let before_ok = index == 0 || !bytes[index - 1].is_ascii_alphanumeric();
        let after = index + word.len();
        let after_ok = after >= haystack.len() || !bytes[after].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return Some(index);
        }
    }
    None
}

/// Collapses runs of whitespace to one space and trims.
pub(super) fn squeeze_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
