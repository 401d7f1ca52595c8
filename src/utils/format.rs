//! Table formatting utilities
//!
//! This module renders label/value pairs as a bordered two-column table
//! for human-readable command output.

use tabled::{
    settings::{object::Rows, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// One row of a label/value table
#[derive(Debug, Clone, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    pub fn new<L: Into<String>, V: Into<String>>(field: L, value: V) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Render rows as a rounded table with a centered header
pub fn format_field_table(rows: &[FieldRow]) -> String {
    if rows.is_empty() {
        return "No data to display".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Padding::new(1, 1, 0, 0));

    table.to_string()
}
