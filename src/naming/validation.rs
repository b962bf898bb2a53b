use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::warn;

/// Field category a validation message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Battery,
    Display,
    #[strum(serialize = "Power Supply")]
    PowerSupply,
    Warranty,
    Color,
}

/// A non-fatal problem found while compiling a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub category: Category,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Append-only sink for validation errors. Never aborts the pipeline.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<ValidationError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category, message: impl Into<String>) {
        let message = message.into();
        warn!(category = %category, "{message}");
        self.errors.push(ValidationError { category, message });
    }

    pub fn has(&self, category: Category) -> bool {
        self.errors.iter().any(|e| e.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}
