use super::Config;

/// Bare language code of a locale string: `vi_VN.UTF-8`, `vi-VN` and `VI` all
/// give `vi`. `None` for blanks and the POSIX `C` locale.
pub(super) fn language_tag(raw: &str) -> Option<String> {
    let lang = raw
        .trim()
        .split(['.', '@'])
        .next()?
        .split(['_', '-'])
        .next()?
        .to_ascii_lowercase();
    match lang.as_str() {
        "" | "c" | "posix" => None,
        _ => Some(lang),
    }
}

/// CLI message locale: `SPECNAME_LANG`, then a non-default config value, then
/// `LANG`/`LC_MESSAGES`, then `en`.
fn message_locale(config_locale: &str) -> String {
    let env = |name: &str| std::env::var(name).ok();
    let configured = (config_locale != "en").then(|| config_locale.to_string());

    [
        env("SPECNAME_LANG"),
        configured,
        env("LANG"),
        env("LC_MESSAGES"),
    ]
    .into_iter()
    .flatten()
    .find_map(|candidate| language_tag(&candidate))
    .unwrap_or_else(|| "en".into())
}

impl Config {
    /// Locale for CLI messages. Name labels use `naming.label_locale` instead,
    /// so the same sheet compiles to the same name on every machine.
    pub fn apply_locale(&self) {
        rust_i18n::set_locale(&message_locale(&self.locale));
    }

    /// Reduces `naming.label_locale` to its language code so `vi_VN.UTF-8`
    /// selects the `vi` label catalog. Unusable values are left for `validate`.
    pub(super) fn normalise_label_locale(&mut self) {
        if let Some(lang) = language_tag(&self.naming.label_locale) {
            self.naming.label_locale = lang;
        }
    }
}
