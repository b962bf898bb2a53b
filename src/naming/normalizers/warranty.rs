use super::shared::compile;
use crate::naming::validation::{Category, ErrorCollector};
use regex::Regex;
use std::sync::LazyLock;

pub const WARRANTY_SENTINEL: &str = "Warranty_input";

static YEARS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(\d+)\s*-?\s*(?:y|yr|yrs|year|years)\b"));
static MONTHS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(\d+)\s*-?\s*(?:m|mo|month|months)\b"));
static ON_SITE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bon[\s_-]*site\b|\boss\b"));
static PICK_UP_RETURN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\bpur\b|\bpick[\s_-]*up[\s_-]*(?:and|&)[\s_-]*return\b")
});

fn years(text: &str) -> Option<u32> {
    if let Some(caps) = YEARS.captures(text) {
        return caps[1].parse().ok();
    }
    let months: u32 = MONTHS.captures(text)?[1].parse().ok()?;
    // Nearest whole year, half-up, never below one.
    Some((months.saturating_add(6) / 12).max(1))
}

fn service_type(text: &str) -> Option<&'static str> {
    if ON_SITE.is_match(text) {
        Some("OSS")
    } else if PICK_UP_RETURN.is_match(text) {
        Some("PUR")
    } else {
        None
    }
}

/// `3 Years On-site` → `3Y-OSS`.
///
/// Always yields a token: anything that cannot be classified, including an
/// absent field, becomes the sentinel together with a Warranty error.
pub fn normalize_warranty(raw: &str, errors: &mut ErrorCollector) -> String {
    let text = raw.trim();
    if text.is_empty() {
        errors.record(Category::Warranty, "warranty field is missing");
        return WARRANTY_SENTINEL.to_string();
    }
    match (years(text), service_type(text)) {
        (Some(years), Some(kind)) => format!("{years}Y-{kind}"),
        _ => {
            errors.record(
                Category::Warranty,
                format!("warranty value '{text}' needs both a term and a service type"),
            );
            WARRANTY_SENTINEL.to_string()
        }
    }
}
