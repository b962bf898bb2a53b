use super::shared::compile;
use regex::Regex;
use std::sync::LazyLock;

// Generation digits must stand alone: "Bluetooth 5.3" is not Wi-Fi 5.
static WIFI_6E: LazyLock<Regex> = LazyLock::new(|| compile(r"\b6E\b|WI-?FI\s*6E"));
static WIFI_6: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?:^|[^\w.])6(?:[^\w.]|$)|WI-?FI\s*6\b"));
static WIFI_5: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?:^|[^\w.])5(?:[^\w.]|$)|WI-?FI\s*5\b"));

/// `WF6E`, `WF6`, `WF5`, or plain `WF` for an unnamed Wi-Fi generation.
pub fn wifi_token(raw: &str) -> Option<String> {
    let text = raw.to_uppercase();
    if text.trim().is_empty() {
        return None;
    }
    let token = if WIFI_6E.is_match(&text) {
        "WF6E"
    } else if WIFI_6.is_match(&text) {
        "WF6"
    } else if WIFI_5.is_match(&text) {
        "WF5"
    } else if text.contains("WIFI") || text.contains("WI-FI") {
        "WF"
    } else {
        return None;
    };
    Some(token.to_string())
}

pub fn bluetooth_token(raw: &str) -> Option<String> {
    let text = raw.to_uppercase();
    (text.contains("BT") || text.contains("BLUETOOTH")).then(|| "BT".to_string())
}
