use crate::naming::{CompiledName, NormalizedSpec, ProductGroup};
use anyhow::{Context, Result};
use strum::IntoEnumIterator;

const MAX_VALUE_CHARS: usize = 60;

fn shorten(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", value[..idx].trim_end()),
        None => value.to_string(),
    }
}

/// Warning lines for stderr; empty when the compilation was clean.
pub fn render_warnings(result: &CompiledName) -> Vec<String> {
    if result.errors.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![t!("report.warnings", count = result.errors.len()).into_owned()];
    lines.extend(result.errors.iter().map(|e| format!("  - {e}")));
    lines
}

pub fn render_json(result: &CompiledName) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize result")
}

pub fn render_keys(spec: &NormalizedSpec) -> String {
    let width = spec.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let mut lines = vec![t!("keys.title", count = spec.len()).into_owned()];
    for (key, value) in spec.iter() {
        let shown = if value.is_empty() {
            t!("keys.empty").into_owned()
        } else {
            shorten(value, MAX_VALUE_CHARS)
        };
        lines.push(format!("  {key:<width$}  {shown}"));
    }
    lines.join("\n")
}

pub fn render_groups() -> String {
    let mut lines = vec![t!("groups.title").into_owned()];
    for group in ProductGroup::iter() {
        lines.push(format!(
            "  {:<7} {}: {}",
            group.to_string(),
            t!("groups.mandatory"),
            group.mandatory_fields().join(", ")
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{RawEntry, Vocabulary, compile};

    fn sample() -> CompiledName {
        let rows = vec![
            RawEntry::new("Sales Model Name", "X515-ABC123"),
            RawEntry::new("Color", "Silver"),
        ];
        compile(&rows, ProductGroup::Accy, &Vocabulary::default()).unwrap()
    }

    #[test]
    fn shorten_respects_char_boundaries() {
        assert_eq!(shorten("hello", 10), "hello");
        assert_eq!(shorten("hello world", 5), "hello...");
        assert_eq!(shorten("Trắng bạc xám", 5), "Trắng...");
    }

    #[test]
    fn warnings_list_each_error() {
        let result = sample();
        let lines = render_warnings(&result);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Warranty"));
    }

    #[test]
    fn json_contains_tokens_and_errors() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "X515/TPM/NOS/Warranty_input/Bạc/(X515-ABC123)");
        assert_eq!(value["tokens"][0], "X515");
        assert_eq!(value["errors"][0]["category"], "warranty");
    }

    #[test]
    fn keys_listing_shows_canonical_names() {
        let spec = NormalizedSpec::from_entries(&[
            RawEntry::new("Keyboard & Mouse", "USB"),
            RawEntry::new("HDD", ""),
        ]);
        let out = render_keys(&spec);
        assert!(out.contains("keyboard and mouse"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn groups_listing_names_every_group() {
        let out = render_groups();
        for code in ["NB", "PC", "AIO", "Server", "ACCY"] {
            assert!(out.contains(code), "{code} missing");
        }
    }
}
