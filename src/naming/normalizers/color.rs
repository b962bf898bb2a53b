use super::shared::{compile, contains_word, find_word, squeeze_whitespace};
use crate::naming::validation::{Category, ErrorCollector};
use crate::naming::vocabulary::{ColorBucket, Vocabulary};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

pub const COLOR_SENTINEL: &str = "N/A_Color";

static FRAGMENT_SPLIT: LazyLock<Regex> = LazyLock::new(|| compile(r"[/,+;&]|\bAND\b"));

/// Result of reading the color fields of a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    /// One of the four families with a localized label.
    Mapped(ColorBucket),
    /// A recognised color outside the four families, kept as written.
    Unmapped(String),
}

impl ColorToken {
    pub fn render(&self, vocabulary: &Vocabulary) -> String {
        match self {
            Self::Mapped(bucket) => vocabulary.color_label(*bucket).to_string(),
            Self::Unmapped(raw) => raw.clone(),
        }
    }
}

fn strip_adjectives(fragment: &str, vocabulary: &Vocabulary) -> String {
    let kept: Vec<&str> = fragment
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .filter(|word| !vocabulary.color_adjectives().contains(word))
        .collect();
    kept.join(" ")
}

fn classify_fragment(fragment: &str, vocabulary: &Vocabulary) -> Option<ColorToken> {
    // Allowed phrases are checked before adjective stripping so that
    // multi-word names such as "SPACE GRAY" survive.
    let phrase = squeeze_whitespace(fragment);
    let candidates = [phrase.clone(), strip_adjectives(&phrase, vocabulary)];
    for text in &candidates {
        if let Some((_, bucket)) = vocabulary
            .allowed_colors()
            .iter()
            .find(|(name, _)| contains_word(text, name))
        {
            return Some(ColorToken::Mapped(*bucket));
        }
    }

    let stripped = &candidates[1];
    vocabulary
        .base_colors()
        .iter()
        .filter_map(|name| find_word(stripped, name).map(|pos| (pos, *name)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, name)| ColorToken::Unmapped(name.to_string()))
}

/// Reads all color-bearing values (in row order) and returns the first
/// recognised color.
///
/// Color is mandatory: nothing recognisable yields the sentinel and a Color
/// error.
pub fn normalize_color(
    values: &[&str],
    vocabulary: &Vocabulary,
    errors: &mut ErrorCollector,
) -> String {
    let joined = values.join(" / ").to_uppercase();
    if joined.trim().is_empty() {
        errors.record(Category::Color, "color field is missing");
        return COLOR_SENTINEL.to_string();
    }

    let found = FRAGMENT_SPLIT
        .split(&joined)
        .find_map(|fragment| classify_fragment(fragment, vocabulary));

    match found {
        Some(token) => {
            if let ColorToken::Unmapped(raw) = &token {
                debug!(color = %raw, "color outside the labelled families; passing through");
            }
            token.render(vocabulary)
        }
        None => {
            errors.record(
                Category::Color,
                format!("no known color in '{}'", values.join(" / ")),
            );
            COLOR_SENTINEL.to_string()
        }
    }
}
