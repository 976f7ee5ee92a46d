//! Human-readable rendering of an [`AnalysisRecord`].

use std::fmt::Write;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use autoreport_model::{AnalysisRecord, format_numeric, format_thousands};

const TABLE_WIDTH: u16 = 120;

/// Renders the record as a sequence of terminal tables.
pub fn render_summary(record: &AnalysisRecord) -> String {
    let mut out = String::new();
    let file = &record.file;
    let format = file.format.map_or("unknown", |f| f.as_str());
    let _ = writeln!(out, "File: {} ({format}, {})", file.filename, file.file_size);
    if let Some(encoding) = &file.encoding {
        let _ = writeln!(out, "Encoding: {encoding}");
    }
    if !file.sheet_names.is_empty() {
        let _ = writeln!(out, "Sheets: {}", file.sheet_names.join(", "));
    }
    let _ = writeln!(out, "Generated: {}", record.generated);

    let sections = [
        ("Overview", overview_table(record)),
        ("Numeric columns", numeric_table(record)),
        ("Categorical columns", categorical_table(record)),
        ("Datetime columns", datetime_table(record)),
        ("Top correlations", correlation_table(record)),
        ("Missing values", missing_table(record)),
        ("Text", text_table(record)),
        ("Insights", insight_table(record)),
    ];
    for (title, table) in sections {
        if let Some(table) = table {
            let _ = writeln!(out, "\n{title}:\n{table}");
        }
    }

    if !file.caveats.is_empty() {
        let _ = writeln!(out, "\nCaveats:");
        for caveat in &file.caveats {
            let _ = writeln!(out, "- {caveat}");
        }
    }
    out
}

fn overview_table(record: &AnalysisRecord) -> Option<Table> {
    let overview = record.overview.as_ref()?;
    let mut table = styled(&["Metric", "Value"]);
    let rows = [
        ("Rows", format_thousands(overview.rows)),
        ("Columns", format_thousands(overview.columns)),
        ("Numeric", overview.numeric_cols.to_string()),
        ("Categorical", overview.categorical_cols.to_string()),
        ("Datetime", overview.datetime_cols.to_string()),
        (
            "Missing cells",
            format!(
                "{} ({}%)",
                format_thousands(overview.missing_cells),
                format_numeric(overview.missing_pct)
            ),
        ),
        ("Duplicate rows", format_thousands(overview.duplicate_rows)),
        ("Memory (KB)", format_numeric(overview.memory_kb)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    Some(table)
}

fn numeric_table(record: &AnalysisRecord) -> Option<Table> {
    let mut profiles = record.numeric().peekable();
    profiles.peek()?;
    let mut table = styled(&[
        "Column", "Count", "Mean", "Median", "Std", "Min", "Max", "Skew", "Outliers",
    ]);
    for p in profiles {
        let outliers = if p.outlier_count > 0 {
            Cell::new(format!("{} ({}%)", p.outlier_count, format_numeric(p.outlier_pct)))
                .fg(Color::Yellow)
        } else {
            dim_cell("0")
        };
        table.add_row(vec![
            Cell::new(&p.column).add_attribute(Attribute::Bold),
            Cell::new(format_thousands(p.count)),
            Cell::new(format_numeric(p.mean)),
            Cell::new(format_numeric(p.median)),
            Cell::new(format_numeric(p.std)),
            Cell::new(format_numeric(p.min)),
            Cell::new(format_numeric(p.max)),
            Cell::new(format_numeric(p.skewness)),
            outliers,
        ]);
    }
    for idx in 1..9 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    Some(table)
}

fn categorical_table(record: &AnalysisRecord) -> Option<Table> {
    let mut profiles = record.categorical().peekable();
    profiles.peek()?;
    let mut table = styled(&["Column", "Count", "Unique", "Top value", "Top %"]);
    for p in profiles {
        table.add_row(vec![
            Cell::new(&p.column).add_attribute(Attribute::Bold),
            Cell::new(format_thousands(p.count)),
            Cell::new(format_thousands(p.unique)),
            Cell::new(&p.top_value),
            Cell::new(format_numeric(p.top_pct)),
        ]);
    }
    for idx in [1, 2, 4] {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    Some(table)
}

fn datetime_table(record: &AnalysisRecord) -> Option<Table> {
    let mut profiles = record.datetime().peekable();
    profiles.peek()?;
    let mut table = styled(&["Column", "Min", "Max", "Span (days)", "Count"]);
    for p in profiles {
        table.add_row(vec![
            Cell::new(&p.column).add_attribute(Attribute::Bold),
            Cell::new(&p.min),
            Cell::new(&p.max),
            Cell::new(p.span_days),
            Cell::new(format_thousands(p.count)),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    Some(table)
}

fn correlation_table(record: &AnalysisRecord) -> Option<Table> {
    let matrix = record.correlations.as_ref()?;
    if matrix.top_pairs.is_empty() {
        return None;
    }
    let mut table = styled(&["Column", "Column", "r"]);
    for pair in &matrix.top_pairs {
        table.add_row(vec![
            Cell::new(&pair.col1),
            Cell::new(&pair.col2),
            Cell::new(format!("{:.4}", pair.r)),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    Some(table)
}

fn missing_table(record: &AnalysisRecord) -> Option<Table> {
    if record.missing.is_empty() {
        return None;
    }
    let mut table = styled(&["Column", "Missing", "%"]);
    for entry in &record.missing {
        table.add_row(vec![
            Cell::new(&entry.column),
            Cell::new(format_thousands(entry.count)).fg(Color::Yellow),
            Cell::new(format_numeric(entry.pct)),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    Some(table)
}

fn text_table(record: &AnalysisRecord) -> Option<Table> {
    let stats = record.text_stats.as_ref()?;
    let mut table = styled(&["Metric", "Value"]);
    let top_words = stats
        .top_words
        .iter()
        .take(5)
        .map(|w| format!("{} ({})", w.word, w.count))
        .collect::<Vec<_>>()
        .join(", ");
    let rows = [
        ("Characters", format_thousands(stats.char_count)),
        ("Words", format_thousands(stats.word_count)),
        ("Unique words", format_thousands(stats.unique_words)),
        ("Sentences", format_thousands(stats.sentence_count)),
        ("Lines", format_thousands(stats.line_count)),
        ("Avg word length", format_numeric(stats.avg_word_length)),
        ("Avg sentence length", format_numeric(stats.avg_sentence_length)),
        ("Lexical diversity", format_numeric(stats.lexical_diversity)),
        ("Top words", top_words),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    Some(table)
}

fn insight_table(record: &AnalysisRecord) -> Option<Table> {
    if record.insights.is_empty() {
        return None;
    }
    let mut table = styled(&["Category", "Insight"]);
    for insight in &record.insights {
        table.add_row(vec![
            Cell::new(&insight.category).fg(Color::Green),
            Cell::new(&insight.message),
        ]);
    }
    Some(table)
}

fn styled(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().copied().map(header_cell).collect::<Vec<_>>());
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(TABLE_WIDTH);
    table
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

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
