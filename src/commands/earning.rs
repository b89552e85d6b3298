//! Earnings ledger CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentals_core::types::{Selection, Timestamp, UserId};
use rentals_core::AppResult;
use rentals_entity::earning::{Earning, EarningKind, EarningStatus};
use rentals_view::filter::filter_records;
use rentals_view::lists::earning::{EarningCriteria, EarningSortKey, EarningsSummary};
use rentals_view::lists::DateRange;

use super::{Context, ListArgs};
use crate::output;

/// Arguments for earnings commands
#[derive(Debug, Args)]
pub struct EarningArgs {
    /// Earnings subcommand
    #[command(subcommand)]
    pub command: EarningCommand,
}

/// Earnings subcommands
#[derive(Debug, Subcommand)]
pub enum EarningCommand {
    /// List ledger entries
    List {
        /// Filter by entry type (income, expense, payout)
        #[arg(long, default_value = "all")]
        kind: Selection<EarningKind>,
        /// Filter by status
        #[arg(long, default_value = "all")]
        status: Selection<EarningStatus>,
        #[command(flatten)]
        period: PeriodArgs,
        /// Sort key (date, amount)
        #[arg(long)]
        sort: Option<EarningSortKey>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show income, expenses and the monthly income series
    Summary {
        #[command(flatten)]
        period: PeriodArgs,
    },
}

/// Landlord and reporting-period flags
#[derive(Debug, Clone, Args)]
pub struct PeriodArgs {
    /// Only this landlord's ledger
    #[arg(long)]
    pub landlord: Option<String>,
    /// Start of the period
    #[arg(long)]
    pub from: Option<Timestamp>,
    /// End of the period
    #[arg(long)]
    pub to: Option<Timestamp>,
}

impl PeriodArgs {
    fn criteria(&self) -> EarningCriteria {
        EarningCriteria {
            landlord: self.landlord.as_deref().map(UserId::from),
            period: DateRange {
                from: self.from,
                to: self.to,
            },
            ..Default::default()
        }
    }
}

/// Ledger display row for table output
#[derive(Debug, Serialize, Tabled)]
struct EarningRow {
    /// Entry ID
    id: String,
    /// Date
    date: String,
    /// Description
    description: String,
    /// Type
    #[tabled(rename = "type")]
    kind: String,
    /// Signed amount
    amount: String,
    /// Status
    status: String,
}

impl EarningRow {
    fn new(ctx: &Context, e: &Earning) -> Self {
        Self {
            id: e.id.to_string(),
            date: ctx.fmt.date(&e.date),
            description: e.description.clone(),
            kind: e.kind.label().to_string(),
            amount: ctx.fmt.currency(e.signed_amount()),
            status: e.status.label().to_string(),
        }
    }
}

/// Execute earnings commands
pub fn execute(args: &EarningArgs, ctx: &Context) -> AppResult<()> {
    match &args.command {
        EarningCommand::List {
            kind,
            status,
            period,
            sort,
            list,
        } => {
            let criteria = EarningCriteria {
                kind: *kind,
                status: *status,
                ..period.criteria()
            };
            let rendered = super::render_list(ctx, &ctx.fixtures.earnings, list, criteria, *sort)?;
            let page = rendered.page.map(|e| EarningRow::new(ctx, &e));
            output::print_page(&page, ctx.format);
        }
        EarningCommand::Summary { period } => {
            let entries = filter_records(
                &ctx.fixtures.earnings,
                &period.criteria(),
                &Default::default(),
            );
            let summary = EarningsSummary::compute(&entries);
            let mut cards = vec![
                ("Total income".to_string(), ctx.fmt.currency(summary.total_income)),
                ("Expenses".to_string(), ctx.fmt.currency(summary.total_expenses)),
                ("Payouts".to_string(), ctx.fmt.currency(summary.total_payouts)),
                ("Net".to_string(), ctx.fmt.currency(summary.net)),
                ("Pending income".to_string(), ctx.fmt.currency(summary.pending_income)),
            ];
            cards.extend(
                summary
                    .monthly_income
                    .iter()
                    .map(|(month, amount)| (format!("Income {month}"), ctx.fmt.compact(*amount))),
            );
            output::print_summary("Earnings", &cards, &summary, ctx.format);
        }
    }
    Ok(())
}
