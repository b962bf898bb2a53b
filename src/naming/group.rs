use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Product category selected by the caller. Controls which fields are
/// mandatory, the touch/camera/mic defaults, and the literal name prefix.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ProductGroup {
    /// Notebook.
    #[default]
    #[strum(serialize = "NB")]
    #[value(name = "nb")]
    Nb,
    /// Desktop PC.
    #[strum(serialize = "PC")]
    #[value(name = "pc")]
    Pc,
    /// All-in-one desktop.
    #[strum(serialize = "AIO")]
    #[value(name = "aio")]
    Aio,
    /// Rack or tower server.
    #[strum(serialize = "Server")]
    #[value(name = "server")]
    Server,
    /// Accessory.
    #[strum(serialize = "ACCY")]
    #[value(name = "accy")]
    Accy,
}

impl ProductGroup {
    pub fn requires_battery(self) -> bool {
        matches!(self, Self::Nb)
    }

    pub fn requires_power_supply(self) -> bool {
        matches!(self, Self::Pc | Self::Server)
    }

    /// Groups for which a missing panel size *and* resolution is reported.
    pub fn requires_display(self) -> bool {
        matches!(self, Self::Nb | Self::Aio)
    }

    pub fn inspects_touch(self) -> bool {
        matches!(self, Self::Nb | Self::Aio)
    }

    /// All-in-ones always ship a camera and microphone.
    pub fn implies_camera_and_mic(self) -> bool {
        matches!(self, Self::Aio)
    }

    /// Human-readable list of the categories that always contribute a token.
    pub fn mandatory_fields(self) -> Vec<&'static str> {
        let mut fields = vec!["Sales Model Name", "Operating System", "Warranty", "Color"];
        if self.requires_display() {
            fields.push("Display");
        }
        if self.requires_battery() {
            fields.push("Battery");
        }
        if self.requires_power_supply() {
            fields.push("Power Supply");
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(ProductGroup::from_str("nb").unwrap(), ProductGroup::Nb);
        assert_eq!(ProductGroup::from_str("SERVER").unwrap(), ProductGroup::Server);
        assert_eq!(ProductGroup::from_str("Accy").unwrap(), ProductGroup::Accy);
        assert!(ProductGroup::from_str("tablet").is_err());
    }

    #[test]
    fn display_uses_catalog_codes() {
        let rendered: Vec<String> = ProductGroup::iter().map(|g| g.to_string()).collect();
        assert_eq!(rendered, ["NB", "PC", "AIO", "Server", "ACCY"]);
    }

    #[test]
    fn every_group_has_cli_help() {
        use clap::ValueEnum;
        for group in ProductGroup::value_variants() {
            let value = group.to_possible_value().unwrap();
            assert!(value.get_help().is_some(), "{} has no help", value.get_name());
        }
        let server = ProductGroup::Server.to_possible_value().unwrap();
        let help = server.get_help().map(ToString::to_string).unwrap_or_default();
        assert!(help.starts_with("Rack or tower server"), "{help}");
    }

    #[test]
    fn mandatory_policy_per_group() {
        assert!(ProductGroup::Nb.requires_battery());
        assert!(!ProductGroup::Aio.requires_battery());
        assert!(ProductGroup::Pc.requires_power_supply());
        assert!(ProductGroup::Server.requires_power_supply());
        assert!(!ProductGroup::Accy.requires_power_supply());
        assert!(ProductGroup::Aio.requires_display());
        assert!(!ProductGroup::Pc.requires_display());
        assert!(ProductGroup::Aio.implies_camera_and_mic());
        assert!(!ProductGroup::Nb.implies_camera_and_mic());
    }

    #[test]
    fn mandatory_fields_lists_group_specific_entries() {
        assert!(ProductGroup::Nb.mandatory_fields().contains(&"Battery"));
        assert!(ProductGroup::Pc.mandatory_fields().contains(&"Power Supply"));
        assert!(!ProductGroup::Accy.mandatory_fields().contains(&"Display"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ProductGroup::Aio).unwrap();
        assert_eq!(json, "\"aio\"");
        let parsed: ProductGroup = serde_json::from_str("\"server\"").unwrap();
        assert_eq!(parsed, ProductGroup::Server);
    }
}
