use super::OutputFormat;
use crate::errors::{AppError, AppResult};
use crate::models::ProductCode;
use crate::utils::colors::colorize_description;
use crate::utils::table::Table;
use serde::Serialize;

/// Flat, serializable view of a record.
#[derive(Serialize)]
struct ProductCodeExport<'a> {
    code: &'a str,
    discount_code: String,
    description: &'a str,
}

impl<'a> From<&'a ProductCode> for ProductCodeExport<'a> {
    fn from(pc: &'a ProductCode) -> Self {
        Self {
            code: pc.code(),
            discount_code: pc.discount_code_str(),
            description: pc.description(),
        }
    }
}

pub fn render(items: &[ProductCode], format: OutputFormat, separator: char) -> AppResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(items, separator)),
        OutputFormat::Json => render_json(items),
        OutputFormat::Csv => render_csv(items),
    }
}

pub fn render_table(items: &[ProductCode], separator: char) -> String {
    let mut table = Table::new(["CODE", "DISCOUNT", "DESCRIPTION"], separator);
    for pc in items {
        table.add_row(vec![
            pc.code().to_string(),
            pc.discount_code_str(),
            colorize_description(pc.description()),
        ]);
    }
    table.render()
}

/// JSON pretty-printed array.
pub fn render_json(items: &[ProductCode]) -> AppResult<String> {
    let view: Vec<ProductCodeExport> = items.iter().map(Into::into).collect();
    serde_json::to_string_pretty(&view)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

/// CSV with header row.
pub fn render_csv(items: &[ProductCode]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for pc in items {
        wtr.serialize(ProductCodeExport::from(pc))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
