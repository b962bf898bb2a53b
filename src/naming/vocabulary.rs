use super::group::ProductGroup;
use crate::config::NamingConfig;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Resolution codes recognised by substring, in priority order.
const RESOLUTION_CODES: &[&str] = &["FHD", "WUXGA", "WQXGA", "QHD", "4K"];

const RESOLUTION_MAP: &[(&str, &str)] = &[
    ("1366x768", "HD"),
    ("1920x1080", "FHD"),
    ("1920x1200", "WUXGA"),
    ("2560x1440", "QHD"),
    ("2560x1600", "WQXGA"),
    ("3840x2160", "4K"),
];

/// Marketing words dropped from color names before matching.
const COLOR_ADJECTIVES: &[&str] = &[
    "STAR",
    "STARRY",
    "STARLIGHT",
    "QUIET",
    "MOONLIGHT",
    "MATTE",
    "GLOSSY",
    "DARK",
    "LIGHT",
    "MIDNIGHT",
    "SPACE",
    "OCEAN",
    "FOREST",
    "MINT",
    "ICE",
    "SKY",
    "DEEP",
    "PURE",
    "SNOW",
];

/// Longest phrases first so "SPACE GRAY" wins over "GRAY".
const ALLOWED_COLORS: &[(&str, ColorBucket)] = &[
    ("SPACE GRAY", ColorBucket::Gray),
    ("SPACE GREY", ColorBucket::Gray),
    ("BLACK", ColorBucket::Black),
    ("WHITE", ColorBucket::White),
    ("SILVER", ColorBucket::Silver),
    ("GRAY", ColorBucket::Gray),
    ("GREY", ColorBucket::Gray),
    ("GRAPHITE", ColorBucket::Gray),
];

const BASE_COLORS: &[&str] = &[
    "BLACK", "WHITE", "SILVER", "GRAY", "GREY", "BLUE", "GREEN", "RED", "ORANGE", "PURPLE",
    "VIOLET", "PINK", "ROSE", "GOLD", "BROWN",
];

/// The four color families a name may carry a localized label for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorBucket {
    Black,
    White,
    Silver,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColorLabels {
    black: String,
    white: String,
    silver: String,
    gray: String,
}

impl ColorLabels {
    fn for_locale(locale: &str) -> Self {
        Self {
            black: t!("color.black", locale = locale).into_owned(),
            white: t!("color.white", locale = locale).into_owned(),
            silver: t!("color.silver", locale = locale).into_owned(),
            gray: t!("color.gray", locale = locale).into_owned(),
        }
    }
}

/// Lookup tables shared by all normalizers.
///
/// Built once from configuration and passed by reference; never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    separator: String,
    prefixes: [(ProductGroup, String); 5],
    labels: ColorLabels,
}

impl Vocabulary {
    pub fn from_config(naming: &NamingConfig) -> Self {
        let p = &naming.prefixes;
        Self {
            separator: naming.separator.clone(),
            prefixes: [
                (ProductGroup::Nb, p.nb.clone()),
                (ProductGroup::Pc, p.pc.clone()),
                (ProductGroup::Aio, p.aio.clone()),
                (ProductGroup::Server, p.server.clone()),
                (ProductGroup::Accy, p.accy.clone()),
            ],
            labels: ColorLabels::for_locale(&naming.label_locale),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn prefix(&self, group: ProductGroup) -> &str {
        self.prefixes
            .iter()
            .find(|(g, _)| *g == group)
            .map_or("", |(_, prefix)| prefix.as_str())
    }

    pub fn resolution_codes(&self) -> &'static [&'static str] {
        RESOLUTION_CODES
    }

    /// Code for an exact `WIDTHxHEIGHT` string, if it is a known size.
    pub fn resolution_code(&self, dimensions: &str) -> Option<&'static str> {
        RESOLUTION_MAP
            .iter()
            .find(|(size, _)| *size == dimensions)
            .map(|(_, code)| *code)
    }

    pub fn color_adjectives(&self) -> &'static [&'static str] {
        COLOR_ADJECTIVES
    }

    pub fn allowed_colors(&self) -> &'static [(&'static str, ColorBucket)] {
        ALLOWED_COLORS
    }

    pub fn base_colors(&self) -> &'static [&'static str] {
        BASE_COLORS
    }

    pub fn color_label(&self, bucket: ColorBucket) -> &str {
        match bucket {
            ColorBucket::Black => &self.labels.black,
            ColorBucket::White => &self.labels.white,
            ColorBucket::Silver => &self.labels.silver,
            ColorBucket::Gray => &self.labels.gray,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}
