use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use label_cli::report::{CategorySummary, summarize_by_category, total};

use crate::types::ParseResult;

pub fn print_summary(result: &ParseResult) {
    let output = &result.output;
    println!("Input: {}", result.input.display());
    match &result.output_dir {
        Some(dir) => println!("Output: {}", dir.display()),
        None => println!("Output: (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Products"),
        header_cell("Parts"),
        header_cell("Fibers"),
        header_cell("No fibers"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let summaries = summarize_by_category(&output.products);
    for summary in &summaries {
        table.add_row(category_row(summary, category_cell(&summary.category)));
    }
    let totals = total(&summaries);
    table.add_row(
        category_row(
            &totals,
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        )
        .into_iter()
        .map(|cell| cell.add_attribute(Attribute::Bold))
        .collect::<Vec<_>>(),
    );
    println!("{table}");

    print_canonical_table(result);
    println!(
        "Resolved fiber names: {} matched, {} new; {} canonical names from {} distinct spellings",
        output.stats.matched,
        output.stats.inserted,
        output.registry.len(),
        output.frequencies.len()
    );
    for path in &result.written {
        println!("Wrote {}", path.display());
    }
}

fn print_canonical_table(result: &ParseResult) {
    let ranked = result.output.registry.ranked();
    if ranked.is_empty() || result.top == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Canonical fiber"),
        header_cell("Uses"),
        header_cell("First pass"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in ranked.into_iter().take(result.top) {
        let name = if entry.name.is_empty() {
            dim_cell("(empty)")
        } else {
            Cell::new(&entry.name)
        };
        table.add_row(vec![
            name,
            Cell::new(entry.count),
            Cell::new(result.output.frequencies.get(&entry.name)),
        ]);
    }
    println!();
    println!("Top canonical fibers:");
    println!("{table}");
}

fn category_row(summary: &CategorySummary, label: Cell) -> Vec<Cell> {
    vec![
        label,
        Cell::new(summary.products),
        Cell::new(summary.parts),
        Cell::new(summary.fibers),
        count_cell(summary.without_fibers, Color::Yellow),
    ]
}

fn category_cell(category: &str) -> Cell {
    if category.is_empty() {
        dim_cell("(none)")
    } else {
        Cell::new(category)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
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
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
