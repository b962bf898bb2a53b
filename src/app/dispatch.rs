use crate::app::report::{render_groups, render_json, render_keys, render_warnings};
use crate::cli::{Cli, Commands};
use crate::config::{Config, OutputFormat};
use crate::naming::{CompiledName, NormalizedSpec, ProductGroup, Vocabulary, compile};
use crate::sheet::{read_sheet, write_name_csv};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Reads `input` and compiles it with the configured vocabulary.
///
/// A missing `Sales Model Name` is the only compile failure and is returned
/// as an error; every other problem is carried in `CompiledName::errors`.
pub fn build_name(input: &Path, group: ProductGroup, config: &Config) -> Result<CompiledName> {
    let rows = read_sheet(input)
        .with_context(|| format!("Failed to read spec sheet {}", input.display()))?;
    let vocabulary = Vocabulary::from_config(&config.naming);
    let compiled = compile(&rows, group, &vocabulary)
        .with_context(|| format!("Cannot name {}", input.display()))?;

    info!(
        input = %input.display(),
        group = %group,
        warnings = compiled.errors.len(),
        "Generated {}",
        compiled.name
    );
    Ok(compiled)
}

fn run_build(
    config: &Config,
    input: &Path,
    group: Option<ProductGroup>,
    format: Option<OutputFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let group = group.unwrap_or(config.naming.default_group);
    let format = format.unwrap_or(config.output.format);
    let compiled = build_name(input, group, config)?;

    match format {
        OutputFormat::Text => {
            println!("{}", compiled.name);
            for line in render_warnings(&compiled) {
                eprintln!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", render_json(&compiled)?),
    }

    if let Some(path) = output {
        write_name_csv(path, &compiled.name)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("{}", t!("report.saved", path = path.display().to_string()));
    }
    Ok(())
}

fn run_keys(input: &Path) -> Result<()> {
    let rows = read_sheet(input)
        .with_context(|| format!("Failed to read spec sheet {}", input.display()))?;
    let spec = NormalizedSpec::from_entries(&rows);
    println!("{}", render_keys(&spec));
    Ok(())
}

pub fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Build {
            input,
            group,
            format,
            output,
        } => run_build(&config, &input, group, format, output.as_deref()),

        Commands::Keys { input } => run_keys(&input),

        Commands::Groups => {
            println!("{}", render_groups());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CompileError, SpecnameError};
    use std::fs;

    fn write_sheet(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn build_name_uses_configured_separator_and_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sheet(
            dir.path(),
            "sheet.csv",
            "Sales Model Name,R760-8SFF\nBase Warranty,3 Year Onsite\nColor,Black\n",
        );
        let mut config = Config::default();
        config.naming.separator = " | ".into();
        config.naming.prefixes.server = "SRV ".into();

        let compiled = build_name(&input, ProductGroup::Server, &config).unwrap();
        assert_eq!(compiled.prefix, "SRV ");
        assert!(compiled.name.starts_with("SRV R760 | TPM | PSU_N/A"));
        assert!(compiled.name.ends_with("(R760-8SFF)"));
    }

    #[test]
    fn build_name_fails_without_sales_model_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sheet(dir.path(), "sheet.csv", "Processor,Intel Core i7-1355U\n");

        let err = build_name(&input, ProductGroup::Nb, &Config::default()).unwrap_err();
        let compile = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<CompileError>())
            .cloned();
        assert_eq!(compile, Some(CompileError::MissingSalesModelName));
        assert!(SpecnameError::from(CompileError::MissingSalesModelName)
            .to_string()
            .contains("Sales Model Name"));
    }

    #[test]
    fn build_writes_result_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sheet(dir.path(), "sheet.tsv", "Sales Model Name\tK1-01\n");
        let out = dir.path().join("result.csv");

        run_build(
            &Config::default(),
            &input,
            Some(ProductGroup::Accy),
            Some(OutputFormat::Json),
            Some(&out),
        )
        .unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("Generated Name\n"));
        assert!(written.contains("K1/TPM/NOS/Warranty_input/N/A_Color/(K1-01)"));
    }

    #[test]
    fn keys_on_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_keys(&dir.path().join("absent.csv")).is_err());
    }
}
