use super::shared::compile;
use crate::naming::group::ProductGroup;
use crate::naming::validation::{Category, ErrorCollector};
use crate::naming::vocabulary::Vocabulary;
use regex::Regex;
use std::sync::LazyLock;

const NOT_AVAILABLE: &str = "N/A";

static NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"\d+(?:[.,]\d+)?"));
static DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d{3,4})\s*[xX×*]\s*(\d{3,4})"));

/// `15.6"` → `15.6`, `14 inch` → `14.0`. `None` when the text is empty.
pub fn panel_size(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let size = NUMBER
        .find(text)
        .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
        .map_or_else(|| NOT_AVAILABLE.to_string(), |inches| format!("{inches:.1}"));
    Some(size)
}

/// Named resolution code, a verbatim `WxH`, or `N/A`. `None` when empty.
pub fn resolution(raw: &str, vocabulary: &Vocabulary) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let upper = text.to_uppercase();
    if let Some(code) = vocabulary
        .resolution_codes()
        .iter()
        .find(|code| upper.contains(*code))
    {
        return Some((*code).to_string());
    }
    if let Some(caps) = DIMENSIONS.captures(text) {
        let dimensions = format!("{}x{}", &caps[1], &caps[2]);
        let code = vocabulary
            .resolution_code(&dimensions)
            .map_or(dimensions, str::to_string);
        return Some(code);
    }
    Some(NOT_AVAILABLE.to_string())
}

/// Panel size and resolution joined, e.g. `15.6FHD`; a missing half is `N/A`.
///
/// When both are absent the token is omitted; notebooks and all-in-ones also
/// get a Display error.
pub fn normalize_display(
    panel_raw: &str,
    resolution_raw: &str,
    group: ProductGroup,
    vocabulary: &Vocabulary,
    errors: &mut ErrorCollector,
) -> Option<String> {
    match (panel_size(panel_raw), resolution(resolution_raw, vocabulary)) {
        (Some(size), Some(res)) => Some(format!("{size}{res}")),
        (Some(size), None) => Some(format!("{size}{NOT_AVAILABLE}")),
        (None, Some(res)) => Some(format!("{NOT_AVAILABLE}{res}")),
        (None, None) => {
            if group.requires_display() {
                errors.record(
                    Category::Display,
                    "panel size and resolution are both missing",
                );
            }
            None
        }
    }
}
