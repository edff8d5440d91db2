//! `rosterctl list` - print one page of the member table

use anyhow::Result;
use clap::{Args, ValueEnum};
use rosterctl_core::{DataProvider, Member, MemberSource, PageInfo, TableView};
use serde::Serialize;
use tracing::instrument;

use crate::ui;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by name, email or role (case-insensitive substring)
    #[arg(long, short = 's', default_value = "")]
    pub query: String,

    /// Page to show (1-based, 10 rows per page)
    #[arg(long, short = 'p', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned columns for humans
    #[default]
    Text,
    /// JSON for machine consumption
    Json,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    #[serde(flatten)]
    info: PageInfo,
    query: &'a str,
    members: &'a [Member],
}

/// Fetch once and print the requested page
#[instrument(skip_all, fields(source = %source.describe(), page = args.page))]
pub async fn run_list(args: ListArgs, source: Box<dyn MemberSource>) -> Result<()> {
    let pb = ui::spinner(format!("Fetching members from {}", source.describe()));
    let provider = DataProvider::initialize(source.as_ref()).await;
    ui::finish_clear(pb);

    let table = page_view(args.query, args.page as usize, provider.members());
    let info = table.page_info(provider.members());

    match args.format {
        OutputFormat::Json => {
            let output = ListOutput {
                info,
                query: table.query(),
                members: table.displayed(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print!("{}", render_text(&table, &info)),
    }

    Ok(())
}

/// Table positioned on `page` and narrowed by `query`
///
/// The page goes first: a page change shows the full list, so the query has
/// to be applied last to filter what is printed.
fn page_view(query: String, page: usize, members: &[Member]) -> TableView {
    let mut table = TableView::new();
    table.go_to_page(page, members);
    table.set_query(query, members);
    table
}

/// Render the displayed page as aligned columns plus a footer line
pub fn render_text(table: &TableView, info: &PageInfo) -> String {
    let rows = table.displayed();
    if rows.is_empty() {
        return if table.is_filtered() {
            format!("No matches for '{}' on page {}\n", table.query(), info.page)
        } else {
            format!("No members on page {}\n", info.page)
        };
    }

    let headers = ["ID", "Name", "Email", "Role"];
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|m| [m.id.to_string(), m.name.clone(), m.email.clone(), m.role.clone()])
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }

    // Rows exist, so first/last are always Some here
    let first = info.first_row().unwrap_or(0);
    let last = info.last_row().unwrap_or(0);
    out.push_str(&format!(
        "\nPage {} of {} · rows {}-{} of {}\n",
        info.page, info.total_pages, first, last, info.total_items
    ));
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
