use super::fields;
use super::group::ProductGroup;
use super::normalizers::{
    aggregate_ssd, bluetooth_token, camera_and_mic, hdd_token, keyboard_mouse_token,
    normalize_battery, normalize_color, normalize_cpu, normalize_display, normalize_memory,
    normalize_power_supply, normalize_touch, normalize_warranty, os_token, wifi_token,
};
use super::spec::{NormalizedSpec, RawEntry};
use super::validation::{ErrorCollector, ValidationError};
use super::vocabulary::Vocabulary;
use crate::error::CompileError;
use serde::Serialize;
use tracing::debug;

/// Always present, between storage and display.
const TPM_TOKEN: &str = "TPM";

/// The outcome of one successful compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledName {
    /// `prefix + tokens.join(separator)`.
    pub name: String,
    pub prefix: String,
    /// Non-empty fragments in fixed order; the last one is the parenthesized
    /// sales code.
    pub tokens: Vec<String>,
    pub errors: Vec<ValidationError>,
}

/// Left part of the sales model name before the first `-`.
pub fn model_token(sales_model_name: &str) -> String {
    let whole = sales_model_name.trim();
    match whole.split_once('-') {
        Some((left, _)) if !left.trim().is_empty() => left.trim().to_string(),
        _ => whole.to_string(),
    }
}

#[derive(Debug, Default)]
struct Tokens(Vec<String>);

impl Tokens {
    fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !token.is_empty() {
            self.0.push(token);
        }
    }

    fn push_opt(&mut self, token: Option<String>) {
        if let Some(token) = token {
            self.push(token);
        }
    }
}

/// Compiles raw sheet rows into a product name for `group`.
pub fn compile(
    entries: &[RawEntry],
    group: ProductGroup,
    vocabulary: &Vocabulary,
) -> Result<CompiledName, CompileError> {
    let spec = NormalizedSpec::from_entries(entries);
    compile_spec(&spec, group, vocabulary)
}

/// Compiles an already normalized sheet.
///
/// Token order is fixed and independent of which fields are present. The only
/// failure is a missing `Sales Model Name`; everything else degrades to a
/// sentinel or an omitted token.
pub fn compile_spec(
    spec: &NormalizedSpec,
    group: ProductGroup,
    vocabulary: &Vocabulary,
) -> Result<CompiledName, CompileError> {
    let sales_model_name = spec.resolve(fields::SALES_MODEL_NAME).trim();
    if sales_model_name.is_empty() {
        return Err(CompileError::MissingSalesModelName);
    }

    let mut errors = ErrorCollector::new();
    let mut tokens = Tokens::default();

    tokens.push(model_token(sales_model_name));

    let mut cpu = spec.scan_containing(fields::PROCESSOR_SCAN);
    if cpu.is_empty() {
        cpu = spec.resolve(fields::CPU);
    }
    tokens.push(normalize_cpu(cpu));

    tokens.push(normalize_memory(spec.resolve(fields::MEMORY)));

    let ssd: Vec<&str> = spec
        .resolve_all(fields::SSD)
        .into_iter()
        .map(|(_, value)| value)
        .collect();
    let storage: Vec<&str> = spec
        .resolve_all(fields::STORAGE)
        .into_iter()
        .map(|(_, value)| value)
        .collect();
    tokens.push(aggregate_ssd(&ssd, &storage).to_token());
    tokens.push(hdd_token(spec.resolve(fields::HDD)));

    tokens.push(TPM_TOKEN);

    tokens.push_opt(normalize_display(
        spec.resolve(fields::PANEL_SIZE),
        spec.resolve(fields::RESOLUTION),
        group,
        vocabulary,
        &mut errors,
    ));
    tokens.push_opt(normalize_touch(spec.resolve(fields::TOUCH), group));
    for token in camera_and_mic(
        spec.resolve(fields::CAMERA),
        spec.resolve(fields::MICROPHONE),
        group,
    ) {
        tokens.push(token);
    }

    tokens.push_opt(normalize_power_supply(
        spec.resolve(fields::POWER_SUPPLY),
        group,
        &mut errors,
    ));
    tokens.push_opt(normalize_battery(
        spec.resolve(fields::BATTERY),
        group,
        &mut errors,
    ));

    let wireless = spec.resolve(fields::WIRELESS);
    tokens.push_opt(wifi_token(wireless));
    tokens.push_opt(bluetooth_token(wireless));

    tokens.push_opt(keyboard_mouse_token(
        spec.resolve(fields::KEYBOARD_MOUSE),
        spec.resolve(fields::IN_THE_BOX),
    ));

    tokens.push(os_token(spec.resolve(fields::OPERATING_SYSTEM)));

    let mut warranty = spec.resolve(fields::BASE_WARRANTY);
    if warranty.is_empty() {
        warranty = spec.scan_containing(fields::WARRANTY_SCAN);
    }
    if warranty.is_empty() {
        warranty = spec.resolve(fields::SERVICE);
    }
    tokens.push(normalize_warranty(warranty, &mut errors));

    tokens.push(normalize_color(
        &spec.collect_containing(fields::COLOR_SCAN),
        vocabulary,
        &mut errors,
    ));

    let sales_model = spec.resolve(fields::SALES_MODEL).trim();
    let sales_code = if sales_model.is_empty() {
        sales_model_name
    } else {
        sales_model
    };
    tokens.push(format!("({sales_code})"));

    let prefix = vocabulary.prefix(group).to_string();
    let tokens = tokens.0;
    let name = format!("{prefix}{}", tokens.join(vocabulary.separator()));
    let errors = errors.into_vec();
    debug!(group = %group, tokens = tokens.len(), warnings = errors.len(), "compiled name");

    Ok(CompiledName {
        name,
        prefix,
        tokens,
        errors,
    })
}
