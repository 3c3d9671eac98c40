//! Terminal tables for reports, dataset lists and comparisons.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use adperf_core::{ChangeIndicator, percent_change};
use adperf_model::{
    AggregatedPublisherRecord, Campaign, ComparisonMetric, ComparisonRow, DashboardStats, Dataset,
};
use adperf_persistence::Dashboard;

use crate::format::{format_count, format_currency, format_percentage};

/// Headline figures shown above a publisher table.
pub fn stats_summary(stats: &DashboardStats) -> String {
    format!(
        "Total impressions: {}\nTotal spend:       {}\nAverage CPM:       {}",
        format_count(stats.total_impressions),
        format_currency(stats.total_spend),
        format_currency(stats.average_cpm),
    )
}

pub fn publisher_table(records: &[AggregatedPublisherRecord], stats: &DashboardStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Publisher"),
        header_cell("Impressions"),
        header_cell("Spend"),
        header_cell("CPM"),
        header_cell("% Spend"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [0, 2, 3, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in records {
        table.add_row(vec![
            dim_cell(record.rank),
            Cell::new(&record.publisher).add_attribute(Attribute::Bold),
            Cell::new(format_count(record.impressions)),
            Cell::new(format_currency(record.spend)),
            Cell::new(format_currency(record.cpm)),
            Cell::new(format_percentage(record.spend_percentage)),
        ]);
    }
    if !records.is_empty() {
        table.add_row(vec![
            dim_cell("-"),
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(format_count(stats.total_impressions)).add_attribute(Attribute::Bold),
            Cell::new(format_currency(stats.total_spend)).add_attribute(Attribute::Bold),
            Cell::new(format_currency(stats.average_cpm)).add_attribute(Attribute::Bold),
            dim_cell("-"),
        ]);
    }
    table
}

pub fn campaign_table(campaigns: &[Campaign]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("ID"), header_cell("Campaign")]);
    apply_table_style(&mut table);
    for campaign in campaigns {
        if campaign.is_all() {
            table.add_row(vec![dim_cell(&campaign.id), dim_cell(&campaign.name)]);
        } else {
            table.add_row(vec![Cell::new(&campaign.id), Cell::new(&campaign.name)]);
        }
    }
    table
}

pub fn dataset_table(dashboard: &Dashboard) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("File"),
        header_cell("Uploaded"),
        header_cell("Campaign"),
        header_cell("Rows"),
        header_cell("Publishers"),
        header_cell("Active"),
        header_cell("Compare"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Center);
    align_column(&mut table, 8, CellAlignment::Center);
    let active = dashboard.active_dataset_id();
    for dataset in dashboard.datasets() {
        table.add_row(vec![
            Cell::new(&dataset.id).fg(Color::Blue),
            Cell::new(&dataset.name).add_attribute(Attribute::Bold),
            dim_cell(&dataset.file_name),
            Cell::new(dataset.uploaded_at.format("%Y-%m-%d %H:%M")),
            Cell::new(dataset.campaign_label()),
            Cell::new(format_count(dataset.row_count() as i64)),
            Cell::new(dataset.processed_data.len()),
            flag_cell(active == Some(&dataset.id)),
            flag_cell(dashboard.is_selected(&dataset.id)),
        ]);
    }
    table
}

/// Side-by-side publisher metrics with change columns for two-way comparisons.
pub fn comparison_table(datasets: &[&Dataset], rows: &[ComparisonRow]) -> Table {
    let with_change = datasets.len() == 2;
    let mut header = vec![header_cell("Publisher")];
    for dataset in datasets {
        for metric in ComparisonMetric::ALL {
            header.push(header_cell(&format!("{} {}", dataset.name, metric)));
        }
    }
    if with_change {
        for metric in ComparisonMetric::ALL {
            header.push(header_cell(&format!("Change {metric}")));
        }
    }

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=datasets.len() * 3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    if with_change {
        let first_change = datasets.len() * 3 + 1;
        for index in first_change..first_change + 3 {
            align_column(&mut table, index, CellAlignment::Center);
        }
    }

    for row in rows {
        let mut cells = vec![Cell::new(&row.publisher).add_attribute(Attribute::Bold)];
        for slot in &row.datasets {
            cells.push(metric_cell(slot.impressions != 0, || format_count(slot.impressions)));
            cells.push(metric_cell(slot.spend != 0.0, || format_currency(slot.spend)));
            cells.push(metric_cell(slot.cpm != 0.0, || format_currency(slot.cpm)));
        }
        if with_change {
            for metric in ComparisonMetric::ALL {
                cells.push(change_cell(ChangeIndicator::from_change(percent_change(
                    row, metric,
                ))));
            }
        }
        table.add_row(cells);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn metric_cell(present: bool, render: impl FnOnce() -> String) -> Cell {
    if present {
        Cell::new(render())
    } else {
        dim_cell("-")
    }
}

fn change_cell(change: ChangeIndicator) -> Cell {
    let cell = Cell::new(change.to_string());
    match change {
        ChangeIndicator::Up(_) => cell.fg(Color::Green),
        ChangeIndicator::Down(_) => cell.fg(Color::Red),
        ChangeIndicator::Flat => cell.fg(Color::DarkGrey),
    }
}

fn flag_cell(set: bool) -> Cell {
    if set {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
