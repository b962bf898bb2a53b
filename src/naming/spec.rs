use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row of a spec sheet, as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub key: String,
    pub value: String,
}

impl RawEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Cell contents spreadsheets use to mean "nothing here".
const PLACEHOLDER_VALUES: &[&str] = &["nan", "none", "null", "-"];

/// Canonical form of a field name: trimmed, lower-cased, internal whitespace
/// collapsed to one space, `&` spelled `and`.
pub fn normalize_key(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase().replace('&', "and")
}

fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if PLACEHOLDER_VALUES
        .iter()
        .any(|placeholder| trimmed.eq_ignore_ascii_case(placeholder))
    {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Immutable, ordered map from canonical key to value.
///
/// Built once per sheet. The first row wins when several rows normalize to the
/// same key. Lookups go through [`NormalizedSpec::resolve`] and the scan
/// helpers; there is no direct indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedSpec {
    entries: Vec<(String, String)>,
}

impl NormalizedSpec {
    pub fn from_entries(rows: &[RawEntry]) -> Self {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(rows.len());
        for row in rows {
            let key = normalize_key(&row.key);
            if key.is_empty() {
                continue;
            }
            if entries.iter().any(|(existing, _)| *existing == key) {
                debug!(key = %key, "duplicate spec key ignored; first row wins");
                continue;
            }
            entries.push((key, clean_value(&row.value)));
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical `(key, value)` pairs in original row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn value_of(&self, canonical: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == canonical)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the first alias that is present with a non-empty value, or `""`.
    pub fn resolve(&self, aliases: &[&str]) -> &str {
        aliases
            .iter()
            .find_map(|alias| {
                self.value_of(&normalize_key(alias))
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or("")
    }

    /// Non-empty values of every alias present, in alias order.
    pub fn resolve_all<'a>(&'a self, aliases: &[&str]) -> Vec<(&'a str, &'a str)> {
        aliases
            .iter()
            .filter_map(|alias| {
                let canonical = normalize_key(alias);
                self.entries
                    .iter()
                    .find(|(key, value)| *key == canonical && !value.is_empty())
                    .map(|(key, value)| (key.as_str(), value.as_str()))
            })
            .collect()
    }

    /// Value of the key containing `needle`: the exact key `needle` first,
    /// then the first containing key in row order. Empty values are skipped.
    pub fn scan_containing(&self, needle: &str) -> &str {
        if let Some(value) = self.value_of(needle).filter(|value| !value.is_empty()) {
            return value;
        }
        self.entries
            .iter()
            .find(|(key, value)| key.contains(needle) && !value.is_empty())
            .map_or("", |(_, value)| value.as_str())
    }

    /// Every non-empty value whose key contains any of `needles`, in row order.
    pub fn collect_containing(&self, needles: &[&str]) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(key, value)| {
                !value.is_empty() && needles.iter().any(|needle| key.contains(needle))
            })
            .map(|(_, value)| value.as_str())
            .collect()
    }
}
