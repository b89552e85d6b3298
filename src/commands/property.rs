//! Property listing CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentals_core::types::{Selection, UserId};
use rentals_core::AppResult;
use rentals_entity::property::{Property, PropertyKind, PropertyStatus};
use rentals_view::lists::property::{PropertyCriteria, PropertySortKey, PropertyStats};
use rentals_view::lists::AmountRange;

use super::{ListArgs, Context};
use crate::output;

/// Arguments for property commands
#[derive(Debug, Args)]
pub struct PropertyArgs {
    /// Property subcommand
    #[command(subcommand)]
    pub command: PropertyCommand,
}

/// Property subcommands
#[derive(Debug, Subcommand)]
pub enum PropertyCommand {
    /// List properties
    List {
        /// Filter by status
        #[arg(long, default_value = "all")]
        status: Selection<PropertyStatus>,
        /// Filter by property type
        #[arg(long, default_value = "all")]
        kind: Selection<PropertyKind>,
        /// Only this landlord's listings
        #[arg(long)]
        landlord: Option<String>,
        /// Minimum price
        #[arg(long)]
        min_price: Option<i64>,
        /// Maximum price
        #[arg(long)]
        max_price: Option<i64>,
        /// Minimum number of bedrooms
        #[arg(long)]
        bedrooms: Option<u32>,
        /// Sort key (created_at, price, title, views)
        #[arg(long)]
        sort: Option<PropertySortKey>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show listing statistics
    Stats {
        /// Only this landlord's listings
        #[arg(long)]
        landlord: Option<String>,
    },
}

/// Property display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PropertyRow {
    /// Property ID
    id: String,
    /// Title
    title: String,
    /// City
    city: String,
    /// Type
    #[tabled(rename = "type")]
    kind: String,
    /// Status
    status: String,
    /// Price
    price: String,
    /// Bedrooms
    beds: u32,
    /// Views
    views: u64,
}

impl PropertyRow {
    fn new(ctx: &Context, p: &Property) -> Self {
        let price = ctx.fmt.currency(p.price);
        Self {
            id: p.id.to_string(),
            title: p.title.clone(),
            city: p.city.clone(),
            kind: p.kind.label().to_string(),
            status: p.status.label().to_string(),
            price: if p.kind.is_nightly() {
                format!("{price}/night")
            } else {
                format!("{price}/yr")
            },
            beds: p.bedrooms,
            views: p.views,
        }
    }
}

/// Execute property commands
pub fn execute(args: &PropertyArgs, ctx: &Context) -> AppResult<()> {
    match &args.command {
        PropertyCommand::List {
            status,
            kind,
            landlord,
            min_price,
            max_price,
            bedrooms,
            sort,
            list,
        } => {
            let criteria = PropertyCriteria {
                status: *status,
                kind: *kind,
                landlord: landlord.as_deref().map(UserId::from),
                price: AmountRange {
                    min: *min_price,
                    max: *max_price,
                },
                min_bedrooms: *bedrooms,
            };
            let rendered = super::render_list(ctx, &ctx.fixtures.properties, list, criteria, *sort)?;
            let page = rendered.page.map(|p| PropertyRow::new(ctx, &p));
            output::print_page(&page, ctx.format);
        }
        PropertyCommand::Stats { landlord } => {
            let owned: Vec<Property> = match landlord {
                Some(id) => ctx
                    .fixtures
                    .properties
                    .iter()
                    .filter(|p| p.landlord_id == id.as_str())
                    .cloned()
                    .collect(),
                None => ctx.fixtures.properties.clone(),
            };
            let stats = PropertyStats::compute(&owned);
            let mut cards = vec![
                ("Total listings".to_string(), stats.total().to_string()),
                ("Total views".to_string(), stats.total_views.to_string()),
                ("Saved by tenants".to_string(), stats.total_favourites.to_string()),
                ("Occupancy".to_string(), ctx.fmt.percent(stats.occupancy_rate)),
                ("Average price".to_string(), ctx.fmt.compact(stats.average_price)),
            ];
            cards.extend(super::tally_cards(&stats.by_status, |s| s.label()));
            output::print_summary("Property overview", &cards, &stats, ctx.format);
        }
    }
    Ok(())
}
