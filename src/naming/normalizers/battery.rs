use super::shared::compile;
use crate::naming::group::ProductGroup;
use crate::naming::validation::{Category, ErrorCollector};
use regex::Regex;
use std::sync::LazyLock;

pub const BATTERY_SENTINEL: &str = "N/A_Battery";

static CELLS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)(\d+)\s*-?\s*cell(?:\(s\)|s)?"));
static WATT_HOURS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(\d+(?:\.\d+)?)\s*-?\s*W\s*H(?:\s*R)?(?:\s*S)?\b"));

/// `3-cell, 42WHrs` → `3C42WHr`; unknown halves are filled with `?`/`??`.
///
/// Notebooks must carry a battery token: an absent or unreadable value gives
/// the sentinel and a Battery error. Other groups simply omit it.
pub fn normalize_battery(
    raw: &str,
    group: ProductGroup,
    errors: &mut ErrorCollector,
) -> Option<String> {
    let text = raw.trim();
    let cells = CELLS.captures(text).map(|caps| caps[1].to_string());
    let watt_hours = WATT_HOURS.captures(text).map(|caps| caps[1].to_string());

    match (cells, watt_hours) {
        (Some(cells), Some(wh)) => Some(format!("{cells}C{wh}WHr")),
        (None, Some(wh)) => Some(format!("?C{wh}WHr")),
        (Some(cells), None) => Some(format!("{cells}C??WHr")),
        (None, None) if group.requires_battery() => {
            if text.is_empty() {
                errors.record(Category::Battery, "battery field is missing");
            } else {
                errors.record(
                    Category::Battery,
                    format!("battery value '{text}' has no cell count or watt-hours"),
                );
            }
            Some(BATTERY_SENTINEL.to_string())
        }
        (None, None) => None,
    }
}
