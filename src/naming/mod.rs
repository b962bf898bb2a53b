//! Spec-sheet-to-name compiler.
//!
//! Pipeline: raw rows → [`NormalizedSpec`] (canonical keys) → per-category
//! normalizers → [`compile`] assembles the tokens in fixed order.
//!
//! The whole pipeline is a pure function of the rows, the product group and
//! the [`Vocabulary`]; field problems are collected as [`ValidationError`]s
//! and only a missing `Sales Model Name` is fatal.

mod assembler;
pub mod fields;
mod group;
pub mod normalizers;
mod spec;
mod validation;
mod vocabulary;

pub use assembler::{CompiledName, compile, compile_spec, model_token};
pub use group::ProductGroup;
pub use spec::{NormalizedSpec, RawEntry, normalize_key};
pub use validation::{Category, ErrorCollector, ValidationError};
pub use vocabulary::{ColorBucket, Vocabulary};
