//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod groups;
mod hosts;

pub use common::{escape_csv, output_structured};
pub use groups::output_groups;
pub use hosts::output_hosts;
