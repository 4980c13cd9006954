//! Terminal rendering of the card: table, chart breakdown and filter menu.

use clap::ColorChoice;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use payload_core::{ChartData, MassFormat, PayloadCard, SortIndicator, SortKey};
use payload_model::Mission;

const CARD_TITLE: &str = "Total Payload Per Mission";
const INDICATOR_DOT: &str = "●";
const BAR_FULL: char = '█';

/// Rendering knobs resolved from settings and CLI flags.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub mass_format: MassFormat,
    pub table_width: u16,
    pub bar_width: usize,
    pub color: ColorChoice,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mass_format: MassFormat::default(),
            table_width: 100,
            bar_width: 30,
            color: ColorChoice::Auto,
        }
    }
}

pub fn print_card(card: &PayloadCard, options: &RenderOptions) {
    println!("{CARD_TITLE} [{}]", card.filter_label());
    let rows = card.rows();
    if rows.is_empty() {
        println!("No payload mass recorded for {}.", card.filter_label());
        return;
    }
    println!("{}", card_table(card, &rows, options));
    println!();
    println!("{}", chart_table(&card.chart(), options));
}

pub fn print_nationalities(card: &PayloadCard, options: &RenderOptions) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(""), header_cell("Nationality")]);
    apply_table_style(&mut table, options);
    for choice in card.nationality_menu() {
        let marker = if choice.selected {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("")
        };
        let label = if choice.value.is_none() {
            Cell::new(choice.label()).add_attribute(Attribute::Italic)
        } else {
            Cell::new(choice.label())
        };
        table.add_row(vec![marker, label]);
    }
    println!("{table}");
}

/// The card's table: color indicator, mission name, formatted total.
pub fn card_table(card: &PayloadCard, rows: &[Mission], options: &RenderOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell(&header_label(SortKey::Mission, card.sort_indicator(SortKey::Mission))),
        header_cell(&header_label(SortKey::Mass, card.sort_indicator(SortKey::Mass))),
    ]);
    apply_card_table_style(&mut table, options);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            color_cell(INDICATOR_DOT, &row.color),
            Cell::new(&row.name),
            dim_cell(options.mass_format.format_mass(row.total)),
        ]);
    }
    table
}

/// Proportional breakdown of the chart segments, one row per segment.
pub fn chart_table(chart: &ChartData, options: &RenderOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("MISSION"),
        header_cell("SHARE"),
        header_cell(""),
    ]);
    apply_card_table_style(&mut table, options);
    align_column(&mut table, 2, CellAlignment::Right);
    for segment in chart.segments() {
        table.add_row(vec![
            color_cell(INDICATOR_DOT, segment.color),
            Cell::new(segment.label),
            Cell::new(format_share(segment.share)),
            color_cell(&share_bar(segment.share, options.bar_width), segment.color),
        ]);
    }
    table
}

/// Column header text with the sort arrow when the column is active.
pub fn header_label(key: SortKey, indicator: Option<SortIndicator>) -> String {
    match indicator {
        Some(indicator) => format!("{} {}", key.header(), indicator.symbol()),
        None => key.header().to_string(),
    }
}

/// Share as a percentage with one decimal, e.g. `42.5%`.
pub fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Bar proportional to `share`; any non-zero share gets at least one cell.
pub fn share_bar(share: f64, width: usize) -> String {
    let share = share.clamp(0.0, 1.0);
    let mut cells = (share * width as f64).round() as usize;
    if cells == 0 && share > 0.0 && width > 0 {
        cells = 1;
    }
    std::iter::repeat_n(BAR_FULL, cells).collect()
}

/// Terminal color for a `#rrggbb` or CSS shorthand `#rgb` string; anything
/// else has no color.
pub fn hex_color(color: &str) -> Option<Color> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        3 => Some(Color::Rgb {
            r: channel(&hex[0..1])? * 17,
            g: channel(&hex[1..2])? * 17,
            b: channel(&hex[2..3])? * 17,
        }),
        _ => None,
    }
}

fn color_cell(content: &str, color: &str) -> Cell {
    match hex_color(color) {
        Some(color) => Cell::new(content).fg(color),
        None => dim_cell(content),
    }
}

fn apply_color_choice(table: &mut Table, choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            table.enforce_styling();
        }
        ColorChoice::Never => {
            table.force_no_tty();
        }
        ColorChoice::Auto => {}
    }
}

fn apply_table_style(table: &mut Table, options: &RenderOptions) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(options.table_width);
    apply_color_choice(table, options.color);
}

fn apply_card_table_style(table: &mut Table, options: &RenderOptions) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(options.table_width);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
    apply_color_choice(table, options.color);
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
