use super::Config;
use super::locale::language_tag;
use crate::config::OutputFormat;
use crate::naming::ProductGroup;
use std::str::FromStr;
use tracing::warn;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(group) = std::env::var("SPECNAME_GROUP")
            && !group.is_empty()
        {
            match ProductGroup::from_str(group.trim()) {
                Ok(group) => self.naming.default_group = group,
                Err(_) => warn!(value = %group, "ignoring unknown SPECNAME_GROUP"),
            }
        }

        if let Ok(format) = std::env::var("SPECNAME_FORMAT")
            && !format.is_empty()
        {
            match OutputFormat::from_str(format.trim()) {
                Ok(format) => self.output.format = format,
                Err(_) => warn!(value = %format, "ignoring unknown SPECNAME_FORMAT"),
            }
        }

        if let Ok(locale) = std::env::var("SPECNAME_LABEL_LOCALE")
            && let Some(lang) = language_tag(&locale)
        {
            self.naming.label_locale = lang;
        }
    }
}
