use super::shared::{compile, squeeze_whitespace};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static CORE_I: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bCore\s*i[3579]-[A-Za-z0-9]+"));
static ULTRA: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bUltra\s+(\d)\s+(\d{3}[A-Za-z0-9]*)"));
static CORE_N: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bCore\s+(\d)\s+Processor\s+(\d{3}[A-Za-z0-9]*)"));
static TRADEMARKS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)[™®©]|\((?:TM|R|C)\)"));

/// Compact processor code, e.g. `Intel® Core™ i5-1240P` → `Core i5-1240P`.
///
/// Unrecognised models pass through cleaned rather than being dropped.
pub fn normalize_cpu(raw: &str) -> String {
    let cleaned = squeeze_whitespace(&TRADEMARKS.replace_all(raw, " "));
    if cleaned.is_empty() {
        return cleaned;
    }

    if let Some(found) = CORE_I.find(&cleaned) {
        return found.as_str().to_string();
    }
    if let Some(caps) = ULTRA.captures(&cleaned) {
        return format!("Ultra {}-{}", &caps[1], &caps[2]);
    }
    if let Some(caps) = CORE_N.captures(&cleaned) {
        return format!("Core {}-{}", &caps[1], &caps[2]);
    }

    debug!(cpu = %cleaned, "unrecognised processor; passing through");
    cleaned
}
