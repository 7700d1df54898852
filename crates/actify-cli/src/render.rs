//! Terminal rendering of the dashboard: stat cards, department
//! distribution, and the assignment table.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use actify_core::{AssignmentFilter, DashboardSnapshot, department_distribution, summarize};
use actify_model::{ActingAssignment, ActingStatus, DaysRemaining, SummaryStats};

/// Widest department bar, in glyphs.
const MAX_BAR_WIDTH: usize = 24;

/// Render the full dashboard for one assignment sequence.
pub fn print_dashboard(
    assignments: &[ActingAssignment],
    filter: &AssignmentFilter,
    limit: Option<usize>,
) {
    if assignments.is_empty() {
        println!("No data. The sheet export was empty or unreachable.");
        return;
    }
    println!("{}", stats_table(&summarize(assignments)));
    println!("{}", distribution_table(&department_distribution(assignments)));
    let mut filtered = filter.apply(assignments);
    if let Some(limit) = limit {
        filtered.truncate(limit);
    }
    println!("{}", assignments_table(&filtered));
}

/// Render one refresh cycle in watch mode.
pub fn print_snapshot(snapshot: &DashboardSnapshot) {
    match snapshot.refreshed_at {
        Some(at) => println!(
            "Refresh cycle {} at {}",
            snapshot.cycle,
            at.format("%H:%M:%S")
        ),
        None => println!("Refresh cycle {}", snapshot.cycle),
    }
    print_dashboard(&snapshot.assignments, &AssignmentFilter::default(), None);
}

/// Summary cards as a single-row table.
pub fn stats_table(stats: &SummaryStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total Talent"),
        header_cell("Active"),
        header_cell("Ending Soon"),
        header_cell("Expired"),
    ]);
    apply_card_style(&mut table);
    table.add_row(vec![
        Cell::new(stats.total).add_attribute(Attribute::Bold),
        Cell::new(stats.active)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.expiring_soon)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.expired)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    ]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table
}

/// Department distribution with a proportional bar column.
pub fn distribution_table(distribution: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Department"),
        header_cell("Assignments"),
        header_cell("By Volume"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let max = distribution.iter().map(|(_, count)| *count).max().unwrap_or(1);
    for (index, (name, count)) in distribution.iter().enumerate() {
        let width = (count * MAX_BAR_WIDTH).div_ceil(max);
        let bar = "█".repeat(width.max(1));
        // Leading department gets the accent color, like the chart.
        let bar_cell = if index == 0 {
            Cell::new(bar).fg(Color::Green)
        } else {
            Cell::new(bar).fg(Color::DarkGrey)
        };
        table.add_row(vec![Cell::new(name), Cell::new(count), bar_cell]);
    }
    table
}

/// The assignment table, status-colored.
pub fn assignments_table(assignments: &[&ActingAssignment]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("No"),
        header_cell("Name"),
        header_cell("Department"),
        header_cell("Acting Role"),
        header_cell("Start Date"),
        header_cell("End Date"),
        header_cell("Days Left"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Center);
    for assignment in assignments {
        table.add_row(vec![
            Cell::new(&assignment.sequence_number),
            Cell::new(&assignment.person_name),
            Cell::new(&assignment.department),
            Cell::new(&assignment.role_title),
            Cell::new(&assignment.start_date),
            Cell::new(&assignment.end_date),
            days_cell(assignment.days_remaining),
            status_cell(assignment.status),
        ]);
    }
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: ActingStatus) -> Cell {
    let cell = Cell::new(status.as_str()).add_attribute(Attribute::Bold);
    match status {
        ActingStatus::Active => cell.fg(Color::Green),
        ActingStatus::ExpiringSoon => cell.fg(Color::Yellow),
        ActingStatus::Expired => cell.fg(Color::Red),
    }
}

fn days_cell(days: DaysRemaining) -> Cell {
    match days {
        DaysRemaining::Known(value) if value < 0 => Cell::new(value).fg(Color::Red),
        DaysRemaining::Known(value) => Cell::new(value),
        DaysRemaining::Unknown => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn apply_card_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(80);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
