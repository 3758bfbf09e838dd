use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pw_validate::FieldState;

use crate::types::{SimulationRun, ValidationRun};

pub fn print_validation(run: &ValidationRun) {
    println!("Fixture: {}", run.source.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Status"),
        header_cell("Rule"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (field, result) in run.fields.iter().zip(run.report.results()) {
        table.add_row(vec![
            Cell::new(&result.field_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(field.input_type.as_str()),
            flag_cell(field.required),
            status_cell(result.is_valid()),
            match result.issue {
                Some(issue) => Cell::new(issue.code()),
                None => dim_cell("-"),
            },
            Cell::new(result.message()),
        ]);
    }
    println!("{table}");
    println!(
        "{} of {} fields invalid",
        run.report.invalid_count(),
        run.report.len()
    );
}

pub fn print_simulation(run: &SimulationRun, json: bool) -> Result<()> {
    let snapshot = &run.snapshot;
    if json {
        let rendered =
            serde_json::to_string_pretty(snapshot).context("serialize page snapshot")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Steps: {}", run.steps);
    println!("Time: {} ms", snapshot.now);
    println!("Location: {}", snapshot.location);
    println!("Scroll: {}", snapshot.scroll_y);
    let menu = match snapshot.menu_open {
        Some(true) => "open",
        Some(false) => "closed",
        None => "disabled",
    };
    println!("Menu: {menu}");
    if !snapshot.active_links.is_empty() {
        println!("Active: {}", snapshot.active_links.join(", "));
    }

    if !snapshot.fields.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Form"),
            header_cell("Field"),
            header_cell("State"),
            header_cell("Message"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for field in &snapshot.fields {
            table.add_row(vec![
                Cell::new(field.form),
                Cell::new(&field.field),
                state_cell(field.state),
                if field.message.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(&field.message)
                },
            ]);
        }
        println!("{table}");
    }

    for submit in &snapshot.submit {
        let status = if submit.disabled { "disabled" } else { "enabled" };
        println!("Submit (form {}): {status}, \"{}\"", submit.form, submit.label);
    }
    println!(
        "Pending timers: {}, listeners: {}",
        snapshot.pending_timers, snapshot.listeners
    );
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("OK").fg(Color::Green)
    } else {
        Cell::new("INVALID")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn state_cell(state: FieldState) -> Cell {
    match state {
        FieldState::Pristine => dim_cell("pristine"),
        FieldState::Valid => Cell::new("valid").fg(Color::Green),
        FieldState::Invalid(issue) => Cell::new(format!("invalid ({})", issue.code()))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
