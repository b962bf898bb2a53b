use super::shared::compile;
use crate::naming::group::ProductGroup;
use crate::naming::validation::{Category, ErrorCollector};
use regex::Regex;
use std::sync::LazyLock;

pub const PSU_SENTINEL: &str = "PSU_N/A";

static COUNT_THEN_WATT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(\d+)\s*[x×]\s*(\d+)\s*W(?:atts?)?\b"));
static WATT_THEN_COUNT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(\d+)\s*W(?:atts?)?\s*[*x×]\s*(\d+)"));
static WATT: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)(\d+)\s*W(?:atts?)?\b"));

fn parse(text: &str) -> Option<String> {
    if let Some(caps) = COUNT_THEN_WATT.captures(text) {
        return Some(format!("{}W*{}", &caps[2], &caps[1]));
    }
    if let Some(caps) = WATT_THEN_COUNT.captures(text) {
        return Some(format!("{}W*{}", &caps[1], &caps[2]));
    }
    WATT.captures(text).map(|caps| format!("{}W", &caps[1]))
}

/// `2x 800W redundant` → `800W*2`, `500W 80+ Gold` → `500W`.
///
/// Desktops and servers must carry a power supply token.
pub fn normalize_power_supply(
    raw: &str,
    group: ProductGroup,
    errors: &mut ErrorCollector,
) -> Option<String> {
    let text = raw.trim();
    if let Some(token) = parse(text) {
        return Some(token);
    }
    if !group.requires_power_supply() {
        return None;
    }
    if text.is_empty() {
        errors.record(Category::PowerSupply, "power supply field is missing");
    } else {
        errors.record(
            Category::PowerSupply,
            format!("power supply value '{text}' has no wattage"),
        );
    }
    Some(PSU_SENTINEL.to_string())
}
