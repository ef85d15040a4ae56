//! Textual dataset summary: preview, schema, missing values, statistics

use anyhow::Result;
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;
use polars::prelude::*;

use crate::pipeline::describe;

/// Count of missing values per column, in schema order.
pub fn missing_value_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.null_count()))
        .collect()
}

/// Print the full dataset summary: a first-rows preview, per-column schema
/// with non-missing and missing counts, and descriptive statistics for the
/// numeric columns. Read-only; nothing downstream consumes the output.
pub fn print_summary(df: &DataFrame, preview_rows: usize) -> Result<()> {
    print_preview(df, preview_rows);
    print_schema(df);
    print_statistics(df)?;

    println!(
        "    {}",
        style(format!(
            "Summary generated {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ))
        .dim()
    );

    Ok(())
}

/// Print the first rows of the table.
fn print_preview(df: &DataFrame, rows: usize) {
    println!();
    println!(
        "    {} {}",
        style("▸").cyan(),
        style(format!("First {} rows", rows.min(df.height()))).white().bold()
    );

    let head = df.head(Some(rows));
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        head.get_column_names()
            .iter()
            .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
    );

    for row in 0..head.height() {
        let cells: Vec<Cell> = head
            .get_columns()
            .iter()
            .map(|col| {
                let value = col
                    .get(row)
                    .map(format_any)
                    .unwrap_or_else(|_| "?".to_string());
                Cell::new(value)
            })
            .collect();
        table.add_row(cells);
    }

    print_indented(&table);
}

/// Print column names, types, and non-missing / missing counts.
fn print_schema(df: &DataFrame) {
    println!();
    println!(
        "    {} {}",
        style("▸").cyan(),
        style("Columns and missing values").white().bold()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Non-missing").add_attribute(Attribute::Bold),
        Cell::new("Missing").add_attribute(Attribute::Bold),
    ]);

    for col in df.get_columns() {
        let missing = col.null_count();
        table.add_row(vec![
            Cell::new(col.name().as_str()),
            Cell::new(format!("{}", col.dtype())),
            Cell::new(df.height() - missing),
            Cell::new(missing),
        ]);
    }

    print_indented(&table);
}

/// Print descriptive statistics for every numeric column.
fn print_statistics(df: &DataFrame) -> Result<()> {
    println!();
    println!(
        "    {} {}",
        style("▸").cyan(),
        style("Descriptive statistics (numeric columns)").white().bold()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Mean").add_attribute(Attribute::Bold),
        Cell::new("Std").add_attribute(Attribute::Bold),
        Cell::new("Min").add_attribute(Attribute::Bold),
        Cell::new("25%").add_attribute(Attribute::Bold),
        Cell::new("50%").add_attribute(Attribute::Bold),
        Cell::new("75%").add_attribute(Attribute::Bold),
        Cell::new("Max").add_attribute(Attribute::Bold),
    ]);

    for stats in describe(df)? {
        table.add_row(vec![
            Cell::new(&stats.name),
            Cell::new(stats.count),
            Cell::new(format!("{:.2}", stats.mean)),
            Cell::new(format!("{:.2}", stats.std)),
            Cell::new(format!("{:.2}", stats.min)),
            Cell::new(format!("{:.2}", stats.q25)),
            Cell::new(format!("{:.2}", stats.median)),
            Cell::new(format!("{:.2}", stats.q75)),
            Cell::new(format!("{:.2}", stats.max)),
        ]);
    }

    print_indented(&table);
    println!();
    Ok(())
}

fn format_any(value: AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(ref s) => s.to_string(),
        other => format!("{}", other),
    }
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
