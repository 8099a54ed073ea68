use comfy_table::{Table, Cell, ContentArrangement, Attribute, CellAlignment};
use serde::Serialize;

use crate::models::{FeedStrategy, ModelSpec, PayloadEncoding, StartCommand};

/// One registry entry flattened for output.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRow {
    pub name: String,
    pub paper_width: u32,
    pub bytes_per_line: usize,
    pub is_new_kind: bool,
    pub problem_feeding: bool,
    pub feed_strategy: FeedStrategy,
    pub start_command: StartCommand,
    pub payload_encoding: PayloadEncoding,
}

impl ModelRow {
    pub fn new(name: &str, spec: &ModelSpec) -> Self {
        Self {
            name: name.to_string(),
            paper_width: spec.paper_width,
            bytes_per_line: spec.bytes_per_line(),
            is_new_kind: spec.is_new_kind,
            problem_feeding: spec.problem_feeding,
            feed_strategy: spec.feed_strategy(),
            start_command: spec.start_command(),
            payload_encoding: spec.payload_encoding(),
        }
    }
}

fn header(text: &str) -> Cell {
    Cell::new(text).fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold)
}

fn flag(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(comfy_table::Color::Yellow).set_alignment(CellAlignment::Center)
    } else {
        Cell::new("no").fg(comfy_table::Color::DarkGrey).set_alignment(CellAlignment::Center)
    }
}

/// Builds a table of models with colorful formatting.
pub fn models_table(rows: &[ModelRow]) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![
            header("Model"),
            header("Paper Width"),
            header("Bytes/Line"),
            header("New Kind"),
            header("Feed Workaround"),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name).fg(comfy_table::Color::Green).add_attribute(Attribute::Bold),
            Cell::new(row.paper_width).set_alignment(CellAlignment::Right),
            Cell::new(row.bytes_per_line).set_alignment(CellAlignment::Right),
            flag(row.is_new_kind),
            flag(row.problem_feeding),
        ]);
    }

    table
}
