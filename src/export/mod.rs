//! Rendering of product-code lists: aligned table, JSON or CSV, to stdout
//! (`list`) or to a file (`export`).

mod fs_utils;
mod render;

pub use render::{render, render_csv, render_json, render_table};

use crate::errors::AppResult;
use crate::models::ProductCode;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `items` to `path`. An existing file is only replaced with
    /// `force` or after interactive confirmation.
    pub fn export(
        items: &[ProductCode],
        format: OutputFormat,
        path: &Path,
        force: bool,
        separator: char,
    ) -> AppResult<()> {
        fs_utils::ensure_writable(path, force)?;

        info(format!(
            "Exporting {} product codes to {}: {}",
            items.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let body = render(items, format, separator)?;
        fs::write(path, body)?;

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(())
    }
}
