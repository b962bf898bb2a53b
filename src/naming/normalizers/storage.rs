use super::shared::compile;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

static FRAGMENT_SPLIT: LazyLock<Regex> = LazyLock::new(|| compile(r"[+,/;&]"));
static COUNT_THEN_SIZE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d+)\s*[X×]\s*(\d+(?:\.\d+)?)\s*(GB|TB)"));
static SIZE_THEN_COUNT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d+(?:\.\d+)?)\s*(GB|TB)\s*[*X×]\s*(\d+)"));
static BARE_SIZE: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d+(?:\.\d+)?)\s*(GB|TB)"));

/// Drive quantities keyed by capacity (`512G`, `1T`), in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageCount {
    entries: Vec<(String, u32)>,
}

impl StorageCount {
    pub fn add(&mut self, capacity: String, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.entries.iter_mut().find(|(key, _)| *key == capacity) {
            Some((_, total)) => *total = total.saturating_add(quantity),
            None => self.entries.push((capacity, quantity)),
        }
    }

    pub fn get(&self, capacity: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(key, _)| key == capacity)
            .map(|(_, qty)| *qty)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, q)| (k.as_str(), *q))
    }

    /// `512G*3-SSD`, or `512G+1T*2-SSD` for mixed capacities; empty when no drive.
    pub fn to_token(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(capacity, qty)| {
                if *qty > 1 {
                    format!("{capacity}*{qty}")
                } else {
                    capacity.clone()
                }
            })
            .collect();
        format!("{}-SSD", parts.join("+"))
    }
}

fn capacity_key(size: &str, unit: &str) -> String {
    let suffix = if unit == "TB" { "T" } else { "G" };
    format!("{size}{suffix}")
}

/// Blanks out matched spans so later patterns do not count them again.
fn blank_out(text: &str, ranges: &[std::ops::Range<usize>]) -> String {
    let mut out = text.to_string();
    for range in ranges {
        out.replace_range(range.clone(), &" ".repeat(range.len()));
    }
    out
}

fn count_fragment(fragment: &str, counts: &mut StorageCount) {
    let mut consumed = Vec::new();
    for caps in COUNT_THEN_SIZE.captures_iter(fragment) {
        let qty = caps[1].parse::<u32>().unwrap_or(1);
        counts.add(capacity_key(&caps[2], &caps[3]), qty);
        if let Some(m) = caps.get(0) {
            consumed.push(m.range());
        }
    }
    let rest = blank_out(fragment, &consumed);

    let mut consumed = Vec::new();
    for caps in SIZE_THEN_COUNT.captures_iter(&rest) {
        let qty = caps[3].parse::<u32>().unwrap_or(1);
        counts.add(capacity_key(&caps[1], &caps[2]), qty);
        if let Some(m) = caps.get(0) {
            consumed.push(m.range());
        }
    }
    let rest = blank_out(&rest, &consumed);

    for caps in BARE_SIZE.captures_iter(&rest) {
        counts.add(capacity_key(&caps[1], &caps[2]), 1);
    }
}

/// Collects SSD capacities from the dedicated SSD fields and from generic
/// storage fields.
///
/// Every fragment of an SSD field counts. A storage field fragment only counts
/// when it says `SSD`. A raw value seen under more than one field is counted
/// once.
pub fn aggregate_ssd(ssd_values: &[&str], storage_values: &[&str]) -> StorageCount {
    let mut counts = StorageCount::default();
    let mut seen: HashSet<String> = HashSet::new();

    let sources = ssd_values
        .iter()
        .map(|value| (*value, true))
        .chain(storage_values.iter().map(|value| (*value, false)));

    for (value, always_ssd) in sources {
        let upper = value.trim().to_uppercase();
        if upper.is_empty() || !seen.insert(upper.clone()) {
            continue;
        }
        for fragment in FRAGMENT_SPLIT.split(&upper) {
            if always_ssd || fragment.contains("SSD") {
                count_fragment(fragment, &mut counts);
            }
        }
    }

    debug!(drives = ?counts, "ssd aggregation");
    counts
}

/// `1TB 7200rpm` → `1TB 7200rpm-HDD`.
pub fn hdd_token(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}-HDD")
    }
}
