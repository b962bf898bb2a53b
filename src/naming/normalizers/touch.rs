use super::shared::compile;
use crate::naming::group::ProductGroup;
use regex::Regex;
use std::sync::LazyLock;

const NEGATIVE_PHRASES: &[&str] = &["non-touch", "non touch", "without touch", "no touch"];

static TOUCH_SCREEN: LazyLock<Regex> = LazyLock::new(|| compile(r"touch\s*screen"));

/// `T` for a touch screen on notebooks and all-in-ones; other groups never
/// look at the field.
pub fn normalize_touch(raw: &str, group: ProductGroup) -> Option<String> {
    if !group.inspects_touch() {
        return None;
    }
    let text = raw.to_lowercase();
    if NEGATIVE_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        return None;
    }
    TOUCH_SCREEN.is_match(&text).then(|| "T".to_string())
}

/// Whether a yes/no style cell means "present".
pub fn is_truthy(raw: &str) -> bool {
    let text = raw.trim().to_lowercase();
    !text.is_empty() && !matches!(text.as_str(), "no" | "không" | "none" | "n/a" | "na" | "0")
}

/// `CAM` and `MIC` tokens. All-in-ones always have both.
pub fn camera_and_mic(camera_raw: &str, mic_raw: &str, group: ProductGroup) -> Vec<String> {
    let implied = group.implies_camera_and_mic();
    let mut tokens = Vec::new();
    if implied || is_truthy(camera_raw) {
        tokens.push("CAM".to_string());
    }
    if implied || is_truthy(mic_raw) {
        tokens.push("MIC".to_string());
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_screen_phrase_gives_t() {
        assert_eq!(normalize_touch("10-point Touch Screen", ProductGroup::Nb).as_deref(), Some("T"));
        assert_eq!(normalize_touch("TOUCHSCREEN", ProductGroup::Aio).as_deref(), Some("T"));
    }

    #[test]
    fn negative_phrases_win() {
        assert_eq!(normalize_touch("Non-touch screen", ProductGroup::Nb), None);
        assert_eq!(normalize_touch("No touch screen", ProductGroup::Nb), None);
    }

    #[test]
    fn other_wording_is_ignored() {
        assert_eq!(normalize_touch("Yes", ProductGroup::Nb), None);
        assert_eq!(normalize_touch("", ProductGroup::Nb), None);
    }

    #[test]
    fn touch_not_inspected_for_desktops() {
        assert_eq!(normalize_touch("Touch screen", ProductGroup::Pc), None);
        assert_eq!(normalize_touch("Touch screen", ProductGroup::Accy), None);
    }

    #[test]
    fn all_in_one_always_has_camera_and_mic() {
        assert_eq!(camera_and_mic("", "", ProductGroup::Aio), ["CAM", "MIC"]);
    }

    #[test]
    fn other_groups_follow_field_values() {
        assert_eq!(camera_and_mic("HD 720p", "No", ProductGroup::Nb), ["CAM"]);
        assert_eq!(camera_and_mic("không", "Dual array", ProductGroup::Pc), ["MIC"]);
        assert!(camera_and_mic("", "", ProductGroup::Nb).is_empty());
    }
}
