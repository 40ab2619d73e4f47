use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shapefit_core::{NoMatch, QuizState, SizeMatch};
use shapefit_model::{SizeChart, Unit};

/// Size chart grouped by underband, in chart order.
pub fn chart_table(chart: &SizeChart) -> Table {
    let unit = chart.unit.as_str();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&format!("Underband ({unit})")),
        header_cell(&format!("Overbust ({unit})")),
        header_cell("Size"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut previous_band = None;
    for entry in chart.entries() {
        let band_cell = if previous_band == Some(entry.underband) {
            dim_cell("")
        } else {
            Cell::new(entry.underband).add_attribute(Attribute::Bold)
        };
        previous_band = Some(entry.underband);
        table.add_row(vec![
            band_cell,
            Cell::new(entry.overbust),
            Cell::new(&entry.size),
        ]);
    }
    table
}

/// Outcome of a single size lookup.
pub fn match_table(
    underband: f64,
    overbust: f64,
    unit: Unit,
    outcome: &Result<SizeMatch<'_>, NoMatch>,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Measured"),
        Cell::new(format!("{underband} / {overbust} {unit}")),
    ]);
    match outcome {
        Ok(found) => {
            table.add_row(vec![
                Cell::new("Size"),
                Cell::new(found.size())
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![
                Cell::new("Band distance"),
                dim_cell(format!("{} {unit}", found.underband_distance)),
            ]);
            table.add_row(vec![
                Cell::new("Bust distance"),
                dim_cell(format!("{} {unit}", found.overbust_distance)),
            ]);
        }
        Err(reason) => {
            table.add_row(vec![
                Cell::new("Size"),
                Cell::new("no match").fg(Color::Yellow),
            ]);
            table.add_row(vec![Cell::new("Reason"), dim_cell(reason)]);
        }
    }
    table
}

/// Final answers of a quiz session.
pub fn session_table(state: &QuizState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Step"), Cell::new(state.step().as_str())]);
    table.add_row(vec![
        Cell::new("Path"),
        optional_cell(state.path().map(|path| path.display_name())),
    ]);
    table.add_row(vec![
        Cell::new("Size"),
        optional_cell(state.calculated_size()),
    ]);
    for (key, answer) in state.answers().iter() {
        table.add_row(vec![Cell::new(key.as_str()), Cell::new(answer.as_str())]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
