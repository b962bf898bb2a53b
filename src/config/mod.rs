pub mod schema;

pub use schema::{Config, GroupPrefixes, NamingConfig, OutputConfig, OutputFormat};
