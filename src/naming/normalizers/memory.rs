use super::shared::compile;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static CAPACITY: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d+)\s*GB"));
static STICKS: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d+)\s*[X×*]\s*\d+\s*GB"));

/// DDR families, highest priority first.
const FAMILIES: &[(&str, &str)] = &[("LPDDR5X", "LPD5X"), ("DDR5", "D5"), ("DDR4", "D4")];

/// `16GB DDR5 5600MHz (2x8GB)` → `16GD5*2`.
///
/// Text without a capacity is returned upper-cased instead of being dropped.
pub fn normalize_memory(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    if upper.is_empty() {
        return upper;
    }

    let Some(size) = CAPACITY.captures(&upper).map(|caps| caps[1].to_string()) else {
        debug!(memory = %upper, "no memory capacity found; passing through");
        return upper;
    };

    let family = FAMILIES
        .iter()
        .find(|(marker, _)| upper.contains(marker))
        .map_or("", |(_, code)| *code);

    let sticks = STICKS
        .captures(&upper)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .unwrap_or(1);

    if sticks > 1 {
        format!("{size}G{family}*{sticks}")
    } else {
        format!("{size}G{family}")
    }
}
