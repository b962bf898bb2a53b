use crate::naming::ProductGroup;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Group used when `--group` is not given.
    #[serde(default)]
    pub default_group: ProductGroup,
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Locale of the color labels written into names ("vi", "en").
    #[serde(default = "default_label_locale")]
    pub label_locale: String,
    #[serde(default)]
    pub prefixes: GroupPrefixes,
}

fn default_separator() -> String {
    "/".into()
}

fn default_label_locale() -> String {
    "vi".into()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_group: ProductGroup::default(),
            separator: default_separator(),
            label_locale: default_label_locale(),
            prefixes: GroupPrefixes::default(),
        }
    }
}

/// Literal text put in front of the name, per product group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPrefixes {
    #[serde(default)]
    pub nb: String,
    #[serde(default)]
    pub pc: String,
    #[serde(default)]
    pub aio: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub accy: String,
}
