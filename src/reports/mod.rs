use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use msdcalc::calc::{Rating, SkillCategory};
use strum::IntoEnumIterator;

fn header_cell(category: SkillCategory) -> Cell {
    let cell = Cell::new(category.to_string());
    match category {
        SkillCategory::Overall => cell.add_attribute(Attribute::Bold).fg(Color::Cyan),
        _ => cell,
    }
}

fn value_cell(category: SkillCategory, value: f32) -> Cell {
    let cell = Cell::new(format!("{:.4}", value));
    match category {
        SkillCategory::Overall => cell.add_attribute(Attribute::Bold).fg(Color::Cyan),
        _ => cell,
    }
}

pub fn print_rating(rating: &Rating) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Skillset").add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
    ]);

    for category in SkillCategory::iter() {
        table.add_row(vec![
            header_cell(category),
            value_cell(category, rating.get(category)),
        ]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    if rating.is_zero() {
        println!("⚠️  All-zero rating: the chart is empty or below the accuracy gate.");
    }
    println!("{}", table);
}

pub fn print_curve(rates: &[f32], curve: &[Rating]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Rate").add_attribute(Attribute::Bold)];
    header.extend(SkillCategory::iter().map(header_cell));
    table.add_row(header);

    for i in 1..=SkillCategory::iter().count() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rate, rating) in rates.iter().zip(curve) {
        let mut row = vec![Cell::new(format!("{:.1}x", rate)).add_attribute(Attribute::Bold)];
        row.extend(SkillCategory::iter().map(|c| value_cell(c, rating.get(c))));
        table.add_row(row);
    }
    println!("{}", table);
}
