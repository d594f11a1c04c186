//! Container-history command handlers. The log is read-only: created
//! by backend actions, only ever listed here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use stillage_core::{HistoryRecord, Inventory, ListEntry};

use crate::cli::{GlobalOpts, HistoryArgs, HistoryCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Container")]
    container: i64,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

fn fmt_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

impl From<&HistoryRecord> for HistoryRow {
    fn from(r: &HistoryRecord) -> Self {
        Self {
            id: r.id,
            container: r.container_id,
            product: r.product_id.map_or_else(|| "-".into(), |p| p.to_string()),
            action: r.action_type.clone(),
            date: fmt_time(r.action_date.or(r.created_at)),
            notes: r.notes.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

impl ListEntry for HistoryRow {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.action.clone(),
            self.notes.clone(),
            self.container.to_string(),
        ]
    }

    fn sort_key(&self) -> String {
        self.action.clone()
    }
}

/// Render a flat record list (no pagination) -- used by the filtered
/// subcommands and by `containers history`.
pub fn print_records(global: &GlobalOpts, records: &[HistoryRecord]) {
    let out = output::render_list(
        &global.output,
        records,
        |r| HistoryRow::from(r),
        |r| r.id.to_string(),
    );
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inv: &mut Inventory,
    args: HistoryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        HistoryCommand::List(list) => {
            inv.refresh_history().await?;
            let rows: Vec<HistoryRow> =
                inv.history().items().iter().map(HistoryRow::from).collect();
            let view = util::build_view(rows, &list);
            let page = view.visible();
            util::print_page(global, &page, |r| (*r).clone(), |r| r.id.to_string());
            Ok(())
        }

        HistoryCommand::Get { id } => {
            inv.refresh_history().await?;
            let Some(record) = inv.history().get(id) else {
                return Err(CliError::NotFound {
                    resource: "history record".into(),
                    identifier: id.to_string(),
                    list_command: "history list".into(),
                });
            };
            let record = record.clone();
            let out = output::render_single(
                &global.output,
                &record,
                |r| {
                    format!(
                        "ID:        {}\nContainer: {}\nProduct:   {}\nAction:    {}\nDate:      {}\nNotes:     {}",
                        r.id,
                        r.container_id,
                        r.product_id.map_or_else(|| "-".into(), |p| p.to_string()),
                        r.action_type,
                        fmt_time(r.action_date.or(r.created_at)),
                        r.notes.as_deref().unwrap_or("-"),
                    )
                },
                |r| r.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        HistoryCommand::Recent { count } => {
            let records = inv.recent_history(count).await?;
            print_records(global, &records);
            Ok(())
        }

        HistoryCommand::Container { id } => {
            let records = inv.history_for_container(id).await?;
            print_records(global, &records);
            Ok(())
        }

        HistoryCommand::Product { id } => {
            let records = inv.history_for_product(id).await?;
            print_records(global, &records);
            Ok(())
        }

        HistoryCommand::User { id } => {
            let records = inv.history_for_user(id).await?;
            print_records(global, &records);
            Ok(())
        }

        HistoryCommand::Action { action_type } => {
            let records = inv.history_by_action(&action_type).await?;
            print_records(global, &records);
            Ok(())
        }
    }
}
