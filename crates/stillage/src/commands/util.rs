//! Shared helpers for command handlers.

use chrono::NaiveDate;

use stillage_core::{ListEntry, ListView, PageView, SortOrder, page_size_for_width};

use crate::cli::{GlobalOpts, ListArgs, OutputFormat, SortDirection};
use crate::error::CliError;
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Parse a `YYYY-MM-DD` date flag.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CliError::InvalidConfig {
        field: field.into(),
        reason: format!("expected YYYY-MM-DD, got '{raw}'"),
    })
}

/// Resolve the page size: an explicit `--page-size` wins, otherwise
/// the terminal-width breakpoint set decides.
pub fn page_size(args: &ListArgs) -> usize {
    if let Some(size) = args.page_size {
        return size.max(1);
    }
    let width = std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(120);
    page_size_for_width(width)
}

fn sort_order(direction: Option<SortDirection>) -> SortOrder {
    match direction {
        None => SortOrder::None,
        Some(SortDirection::Asc) => SortOrder::Ascending,
        Some(SortDirection::Desc) => SortOrder::Descending,
    }
}

/// Build the list view for a list command: apply search, sort, page,
/// and page size from the shared flags.
pub fn build_view<T: ListEntry>(rows: Vec<T>, args: &ListArgs) -> ListView<T> {
    let size = if args.all {
        rows.len().max(1)
    } else {
        page_size(args)
    };
    let mut view = ListView::new(rows, size);
    if let Some(ref query) = args.search {
        view.set_query(query.clone());
    }
    view.set_sort(sort_order(args.sort));
    view.set_page(args.page);
    view
}

/// Render one page of a list command: the rows in the selected output
/// format, plus the page strip under table output.
pub fn print_page<T, R>(
    global: &GlobalOpts,
    page: &PageView<'_, T>,
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) where
    T: serde::Serialize,
    R: tabled::Tabled,
{
    let out = output::render_list(
        &global.output,
        &page.rows,
        |row| to_row(row),
        |row| id_fn(row),
    );
    output::print_output(&out, global.quiet);

    if matches!(global.output, OutputFormat::Table) && !global.quiet {
        let color = output::should_color(&global.color);
        output::print_output(
            &output::render_page_footer(&page.strip, page.page, page.total_rows, color),
            global.quiet,
        );
    }
}
