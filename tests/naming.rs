#[path = "naming/config_schema.rs"]
mod config_schema;
#[path = "naming/end_to_end.rs"]
mod end_to_end;
#[path = "naming/sheet_source.rs"]
mod sheet_source;
