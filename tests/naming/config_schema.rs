use specname::config::{Config, OutputFormat};
use specname::naming::ProductGroup;

#[test]
fn minimal_config_deserializes_with_defaults() {
    let parsed: Config = toml::from_str("").expect("empty config should deserialize");

    assert_eq!(parsed.naming.default_group, ProductGroup::Nb);
    assert_eq!(parsed.naming.separator, "/");
    assert_eq!(parsed.naming.label_locale, "vi");
    assert!(parsed.naming.prefixes.server.is_empty());
    assert_eq!(parsed.output.format, OutputFormat::Text);
    assert_eq!(parsed.locale, "en");
}

#[test]
fn naming_section_overrides_defaults() {
    let toml = r#"
locale = "vi"

[naming]
default_group = "server"
separator = " / "
label_locale = "en"

[naming.prefixes]
server = "SRV "

[output]
format = "json"
"#;

    let parsed: Config = toml::from_str(toml).expect("naming config should deserialize");

    assert_eq!(parsed.naming.default_group, ProductGroup::Server);
    assert_eq!(parsed.naming.separator, " / ");
    assert_eq!(parsed.naming.label_locale, "en");
    assert_eq!(parsed.naming.prefixes.server, "SRV ");
    assert!(parsed.naming.prefixes.nb.is_empty());
    assert_eq!(parsed.output.format, OutputFormat::Json);
    assert!(parsed.validate().is_ok());
}

#[test]
fn empty_separator_fails_validation() {
    let parsed: Config = toml::from_str("[naming]\nseparator = \"\"\n").unwrap();
    assert!(parsed.validate().is_err());
}

#[test]
fn config_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[naming]\ndefault_group = \"aio\"\n").unwrap();

    let loaded = Config::load_from(&path).expect("config should load");
    assert_eq!(loaded.naming.default_group, ProductGroup::Aio);
    assert_eq!(loaded.config_path, path);
}
