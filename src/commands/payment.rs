//! Tenant payment CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentals_core::types::{Selection, SortSpec, UserId};
use rentals_core::AppResult;
use rentals_entity::payment::{Payment, PaymentStatus};
use rentals_view::filter::filter_records;
use rentals_view::lists::payment::{past_due, PaymentCriteria, PaymentSortKey, PaymentSummary};
use rentals_view::sort::sorted;

use super::{Context, ListArgs};
use crate::output;

/// Arguments for payment commands
#[derive(Debug, Args)]
pub struct PaymentArgs {
    /// Payment subcommand
    #[command(subcommand)]
    pub command: PaymentCommand,
}

/// Payment subcommands
#[derive(Debug, Subcommand)]
pub enum PaymentCommand {
    /// List payments
    List {
        /// Filter by status
        #[arg(long, default_value = "all")]
        status: Selection<PaymentStatus>,
        /// Only this tenant's payments
        #[arg(long)]
        tenant: Option<String>,
        /// Sort key (due_date, amount)
        #[arg(long)]
        sort: Option<PaymentSortKey>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show paid, pending and overdue totals
    Summary {
        /// Only this tenant's payments
        #[arg(long)]
        tenant: Option<String>,
    },
    /// Outstanding payments, soonest due first
    Upcoming {
        /// Only this tenant's payments
        #[arg(long)]
        tenant: Option<String>,
    },
}

/// Payment display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PaymentRow {
    /// Payment ID
    id: String,
    /// Description
    description: String,
    /// Amount
    amount: String,
    /// Due date
    due: String,
    /// Status
    status: String,
}

impl PaymentRow {
    fn new(ctx: &Context, p: &Payment) -> Self {
        Self {
            id: p.id.to_string(),
            description: p.description.clone(),
            amount: ctx.fmt.currency(p.amount),
            due: ctx.fmt.date(&p.due_date),
            status: p.status.label().to_string(),
        }
    }
}

fn for_tenant(ctx: &Context, tenant: Option<&str>, status: Selection<PaymentStatus>) -> Vec<Payment> {
    let criteria = PaymentCriteria {
        status,
        tenant: tenant.map(UserId::from),
        ..Default::default()
    };
    filter_records(&ctx.fixtures.payments, &criteria, &Default::default())
}

/// Execute payment commands
pub fn execute(args: &PaymentArgs, ctx: &Context) -> AppResult<()> {
    match &args.command {
        PaymentCommand::List {
            status,
            tenant,
            sort,
            list,
        } => {
            let criteria = PaymentCriteria {
                status: *status,
                tenant: tenant.as_deref().map(UserId::from),
                ..Default::default()
            };
            let rendered = super::render_list(ctx, &ctx.fixtures.payments, list, criteria, *sort)?;
            let page = rendered.page.map(|p| PaymentRow::new(ctx, &p));
            output::print_page(&page, ctx.format);
        }
        PaymentCommand::Summary { tenant } => {
            let payments = for_tenant(ctx, tenant.as_deref(), Selection::All);
            let summary = PaymentSummary::compute(&payments);
            let mut cards = vec![
                ("Total paid".to_string(), ctx.fmt.currency(summary.total_paid)),
                ("Pending".to_string(), ctx.fmt.currency(summary.total_pending)),
                ("Overdue".to_string(), ctx.fmt.currency(summary.total_overdue)),
                ("Outstanding".to_string(), ctx.fmt.currency(summary.total_outstanding())),
            ];
            if let Some(next) = &summary.next_due {
                cards.push((
                    "Next due".to_string(),
                    format!("{} on {}", ctx.fmt.currency(next.amount), ctx.fmt.date(&next.due_date)),
                ));
            }
            let late = past_due(&payments, &ctx.now);
            if !late.is_empty() {
                cards.push(("Pending but past due".to_string(), late.len().to_string()));
            }
            cards.extend(super::tally_cards(&summary.by_status, |s| s.label()));
            output::print_summary("Payments", &cards, &summary, ctx.format);
        }
        PaymentCommand::Upcoming { tenant } => {
            let outstanding: Vec<Payment> = for_tenant(ctx, tenant.as_deref(), Selection::All)
                .into_iter()
                .filter(|p| p.status.is_outstanding())
                .collect();
            let rows: Vec<PaymentRow> = sorted(&outstanding, SortSpec::asc(PaymentSortKey::DueDate))
                .iter()
                .map(|p| PaymentRow::new(ctx, p))
                .collect();
            output::print_list(&rows, ctx.format);
        }
    }
    Ok(())
}
