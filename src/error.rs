use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `specname`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the binary continues to use
/// `anyhow::Result` for ad-hoc context chains.
///
/// Field-level problems found while naming a product are *not* errors in this
/// sense: they are collected as [`crate::naming::ValidationError`] values and
/// the compilation still produces a name.
#[derive(Debug, Error)]
pub enum SpecnameError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Name compilation ────────────────────────────────────────────────
    #[error("compile: {0}")]
    Compile(#[from] CompileError),

    // ── Sheet reading / writing ─────────────────────────────────────────
    #[error("sheet: {0}")]
    Sheet(#[from] SheetError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Compile errors ──────────────────────────────────────────────────────────

/// The fatal tier: conditions under which no name can be produced at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("missing 'Sales Model Name' in spec sheet")]
    MissingSalesModelName,
}

// ─── Sheet errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row {row}: {message}")]
    Malformed { row: u64, message: String },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
