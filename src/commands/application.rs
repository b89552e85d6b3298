//! Rental application CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentals_core::types::{PropertyId, Selection, UserId};
use rentals_core::AppResult;
use rentals_entity::application::{ApplicationStatus, RentalApplication};
use rentals_view::lists::application::{
    ApplicationCriteria, ApplicationSortKey, ApplicationStats,
};
use rentals_view::store::{CollectionStore, StoreAction};

use super::{Context, ListArgs};
use crate::output;

/// Arguments for application commands
#[derive(Debug, Args)]
pub struct ApplicationArgs {
    /// Application subcommand
    #[command(subcommand)]
    pub command: ApplicationCommand,
}

/// Application subcommands
#[derive(Debug, Subcommand)]
pub enum ApplicationCommand {
    /// List applications
    List {
        /// Filter by status
        #[arg(long, default_value = "all")]
        status: Selection<ApplicationStatus>,
        /// Only applications for this property
        #[arg(long)]
        property: Option<String>,
        /// Only applications to this landlord
        #[arg(long)]
        landlord: Option<String>,
        /// Sort key (submitted_at, move_in, offered_rent)
        #[arg(long)]
        sort: Option<ApplicationSortKey>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show application statistics
    Stats,
    /// Move an application to a new status
    Review {
        /// Application ID
        id: String,
        /// New status (under_review, approved, rejected)
        status: ApplicationStatus,
    },
}

/// Application display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ApplicationRow {
    /// Application ID
    id: String,
    /// Applicant
    tenant: String,
    /// Property
    property: String,
    /// Offered rent
    offer: String,
    /// Move-in date
    move_in: String,
    /// Status
    status: String,
    /// Submitted
    submitted: String,
}

impl ApplicationRow {
    fn new(ctx: &Context, a: &RentalApplication) -> Self {
        Self {
            id: a.id.to_string(),
            tenant: a.tenant_name.clone(),
            property: a.property_title.clone(),
            offer: ctx.fmt.currency(a.offered_rent),
            move_in: ctx.fmt.date(&a.move_in_date),
            status: a.status.label().to_string(),
            submitted: ctx.fmt.date(&a.submitted_at),
        }
    }
}

/// Execute application commands
pub fn execute(args: &ApplicationArgs, ctx: &Context) -> AppResult<()> {
    match &args.command {
        ApplicationCommand::List {
            status,
            property,
            landlord,
            sort,
            list,
        } => {
            let criteria = ApplicationCriteria {
                status: *status,
                property: property.as_deref().map(PropertyId::from),
                landlord: landlord.as_deref().map(UserId::from),
            };
            let rendered =
                super::render_list(ctx, &ctx.fixtures.applications, list, criteria, *sort)?;
            let page = rendered.page.map(|a| ApplicationRow::new(ctx, &a));
            output::print_page(&page, ctx.format);
        }
        ApplicationCommand::Stats => {
            let stats = ApplicationStats::compute(&ctx.fixtures.applications);
            let mut cards = vec![
                ("Total applications".to_string(), stats.total().to_string()),
                ("Awaiting review".to_string(), stats.awaiting_review().to_string()),
                ("Approval rate".to_string(), ctx.fmt.percent(stats.approval_rate)),
                ("Open offers".to_string(), ctx.fmt.compact(stats.open_offers)),
            ];
            cards.extend(super::tally_cards(&stats.by_status, |s| s.label()));
            output::print_summary("Applications", &cards, &stats, ctx.format);
        }
        ApplicationCommand::Review { id, status } => {
            let store = CollectionStore::new(ctx.fixtures.applications.clone())?;
            let next = store.dispatch(
                StoreAction::Transition {
                    id: id.clone(),
                    to: *status,
                },
                ctx.now,
            )?;
            let updated = next.require(id)?;
            output::print_success(&format!(
                "Application '{id}' from {} is now {}",
                updated.tenant_name,
                updated.status.label()
            ));
            output::print_list(&[ApplicationRow::new(ctx, updated)], ctx.format);

            let stats = ApplicationStats::compute(next.records());
            output::print_kv("Approval rate", &ctx.fmt.percent(stats.approval_rate));
        }
    }
    Ok(())
}
