mod core;
mod naming;
mod output;

pub use self::core::Config;
pub use naming::{GroupPrefixes, NamingConfig};
pub use output::{OutputConfig, OutputFormat};
