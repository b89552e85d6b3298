//! Admin moderation queue CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentals_core::types::Selection;
use rentals_core::AppResult;
use rentals_entity::moderation::{ModerationItem, ModerationKind};
use rentals_entity::review::ReviewStatus;
use rentals_view::lists::moderation::{ModerationCriteria, ModerationSortKey, ModerationStats};
use rentals_view::store::{CollectionStore, StoreAction};

use super::{Context, ListArgs};
use crate::output;

/// Arguments for moderation commands
#[derive(Debug, Args)]
pub struct ModerationArgs {
    /// Moderation subcommand
    #[command(subcommand)]
    pub command: ModerationCommand,
}

/// Moderation subcommands
#[derive(Debug, Subcommand)]
pub enum ModerationCommand {
    /// List queue items
    List {
        /// Filter by status
        #[arg(long, default_value = "all")]
        status: Selection<ReviewStatus>,
        /// Filter by subject type
        #[arg(long, default_value = "all")]
        kind: Selection<ModerationKind>,
        /// Sort key (submitted_at, title)
        #[arg(long)]
        sort: Option<ModerationSortKey>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show queue counters
    Stats,
    /// Move a queue item to a new status
    Review {
        /// Queue item ID
        id: String,
        /// New status (under_review, approved, rejected)
        status: ReviewStatus,
    },
}

/// Queue display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ModerationRow {
    /// Item ID
    id: String,
    /// Subject type
    #[tabled(rename = "type")]
    kind: String,
    /// Title
    title: String,
    /// Reason
    reason: String,
    /// Status
    status: String,
    /// Submitted
    submitted: String,
}

impl ModerationRow {
    fn new(ctx: &Context, m: &ModerationItem) -> Self {
        Self {
            id: m.id.to_string(),
            kind: m.kind.label().to_string(),
            title: m.title.clone(),
            reason: m.reason.clone(),
            status: m.status.label().to_string(),
            submitted: ctx.fmt.date(&m.submitted_at),
        }
    }
}

/// Execute moderation commands
pub fn execute(args: &ModerationArgs, ctx: &Context) -> AppResult<()> {
    match &args.command {
        ModerationCommand::List {
            status,
            kind,
            sort,
            list,
        } => {
            let criteria = ModerationCriteria {
                status: *status,
                kind: *kind,
            };
            let rendered = super::render_list(ctx, &ctx.fixtures.moderation, list, criteria, *sort)?;
            let page = rendered.page.map(|m| ModerationRow::new(ctx, &m));
            output::print_page(&page, ctx.format);
        }
        ModerationCommand::Stats => {
            let stats = ModerationStats::compute(&ctx.fixtures.moderation);
            let mut cards = vec![("Awaiting decision".to_string(), stats.open().to_string())];
            cards.extend(super::tally_cards(&stats.by_status, |s| s.label()));
            cards.extend(super::tally_cards(&stats.by_kind, |k| k.label()));
            output::print_summary("Moderation queue", &cards, &stats, ctx.format);
        }
        ModerationCommand::Review { id, status } => {
            let store = CollectionStore::new(ctx.fixtures.moderation.clone())?;
            let next = store.dispatch(
                StoreAction::Transition {
                    id: id.clone(),
                    to: *status,
                },
                ctx.now,
            )?;
            let updated = next.require(id)?;
            output::print_success(&format!(
                "'{}' is now {}",
                updated.title,
                updated.status.label()
            ));
            output::print_list(&[ModerationRow::new(ctx, updated)], ctx.format);
            let remaining = ModerationStats::compute(next.records()).open();
            output::print_kv("Awaiting decision", &remaining.to_string());
        }
    }
    Ok(())
}
