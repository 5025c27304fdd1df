//! Terminal tables for reports and category listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use dstd_model::Datastandard;
use dstd_report::{REPORT_HEADER, Report};

pub fn report_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_header(REPORT_HEADER.map(header_cell).to_vec());
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(15)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::LowerBoundary(Width::Fixed(12)),
        ColumnConstraint::UpperBoundary(Width::Percentage(15)),
    ]);
    for row in report.rows() {
        table.add_row(vec![
            category_cell(&row.category),
            attribute_cell(&row.attribute, row.required),
            Cell::new(&row.description),
            Cell::new(&row.type_signature),
            groups_cell(&row.groups),
        ]);
    }
    table
}

pub fn categories_table(datastandard: &Datastandard) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Parent"),
        header_cell("Attributes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for category in &datastandard.categories {
        let parent = match category.parent_id() {
            Some(parent_id) => Cell::new(parent_id),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            category_cell(&category.id),
            Cell::new(&category.name),
            parent,
            Cell::new(category.attribute_links.len()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
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

fn category_cell(name: &str) -> Cell {
    Cell::new(name).fg(Color::Green)
}

fn attribute_cell(name: &str, required: bool) -> Cell {
    if required {
        Cell::new(name).add_attribute(Attribute::Bold)
    } else {
        Cell::new(name)
    }
}

fn groups_cell(groups: &str) -> Cell {
    if groups.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(groups)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
