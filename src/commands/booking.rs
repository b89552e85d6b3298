//! Hotel booking CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentals_core::types::{Selection, Timestamp};
use rentals_core::AppResult;
use rentals_entity::booking::{Booking, BookingStatus};
use rentals_view::lists::booking::{upcoming, BookingCriteria, BookingSortKey, BookingStats};
use rentals_view::lists::DateRange;

use super::{Context, ListArgs};
use crate::output;

/// Arguments for booking commands
#[derive(Debug, Args)]
pub struct BookingArgs {
    /// Booking subcommand
    #[command(subcommand)]
    pub command: BookingCommand,
}

/// Booking subcommands
#[derive(Debug, Subcommand)]
pub enum BookingCommand {
    /// List bookings
    List {
        /// Filter by status
        #[arg(long, default_value = "all")]
        status: Selection<BookingStatus>,
        /// Earliest check-in date
        #[arg(long)]
        from: Option<Timestamp>,
        /// Latest check-in date
        #[arg(long)]
        to: Option<Timestamp>,
        /// Sort key (booked_at, check_in, amount)
        #[arg(long)]
        sort: Option<BookingSortKey>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show occupancy and revenue statistics
    Stats,
    /// Next arrivals, soonest first
    Upcoming {
        /// Number of arrivals to show
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

/// Booking display row for table output
#[derive(Debug, Serialize, Tabled)]
struct BookingRow {
    /// Booking ID
    id: String,
    /// Guest
    guest: String,
    /// Room
    room: String,
    /// Check-in
    check_in: String,
    /// Nights
    nights: i64,
    /// Amount
    amount: String,
    /// Status
    status: String,
}

impl BookingRow {
    fn new(ctx: &Context, b: &Booking) -> Self {
        Self {
            id: b.id.to_string(),
            guest: b.guest_name.clone(),
            room: b.room_title.clone(),
            check_in: ctx.fmt.date(&b.check_in),
            nights: b.nights(),
            amount: ctx.fmt.currency(b.amount),
            status: b.status.label().to_string(),
        }
    }
}

/// Execute booking commands
pub fn execute(args: &BookingArgs, ctx: &Context) -> AppResult<()> {
    match &args.command {
        BookingCommand::List {
            status,
            from,
            to,
            sort,
            list,
        } => {
            let criteria = BookingCriteria {
                status: *status,
                check_in: DateRange {
                    from: *from,
                    to: *to,
                },
                ..Default::default()
            };
            let rendered = super::render_list(ctx, &ctx.fixtures.bookings, list, criteria, *sort)?;
            let page = rendered.page.map(|b| BookingRow::new(ctx, &b));
            output::print_page(&page, ctx.format);
        }
        BookingCommand::Stats => {
            let stats = BookingStats::compute(&ctx.fixtures.bookings, &ctx.now);
            let mut cards = vec![
                ("Total bookings".to_string(), stats.total().to_string()),
                ("Revenue".to_string(), ctx.fmt.compact(stats.revenue)),
                ("Nights sold".to_string(), stats.nights_sold.to_string()),
                ("Upcoming check-ins".to_string(), stats.upcoming_check_ins.to_string()),
                ("Cancellation rate".to_string(), ctx.fmt.percent(stats.cancellation_rate)),
            ];
            cards.extend(super::tally_cards(&stats.by_status, |s| s.label()));
            output::print_summary("Bookings", &cards, &stats, ctx.format);
        }
        BookingCommand::Upcoming { limit } => {
            let rows: Vec<BookingRow> = upcoming(&ctx.fixtures.bookings, &ctx.now, *limit)
                .iter()
                .map(|b| BookingRow::new(ctx, b))
                .collect();
            output::print_list(&rows, ctx.format);
        }
    }
    Ok(())
}
