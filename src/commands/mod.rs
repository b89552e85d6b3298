//! CLI command definitions and dispatch.

pub mod application;
pub mod booking;
pub mod config;
pub mod earning;
pub mod message;
pub mod moderation;
pub mod payment;
pub mod property;
pub mod user;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use rentals_core::config::AppConfig;
use rentals_core::format::Formatter;
use rentals_core::types::{SortDirection, SortSpec, Timestamp};
use rentals_core::AppResult;
use rentals_fixtures::Fixtures;
use rentals_view::paginate::Paginator;
use rentals_view::sort::Sortable;
use rentals_view::view::{render, ListState, Rendered, ViewAction};
use rentals_view::Filterable;

use crate::output::OutputFormat;

/// Rentals: listings, applications, payments and bookings dashboards
#[derive(Debug, Parser)]
#[command(name = "rentals", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Reference time for "upcoming" and "past due" views (defaults to now)
    #[arg(long, global = true)]
    pub as_of: Option<Timestamp>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Property listings
    Properties(property::PropertyArgs),
    /// Rental applications
    Applications(application::ApplicationArgs),
    /// Landlord earnings
    Earnings(earning::EarningArgs),
    /// Tenant payments
    Payments(payment::PaymentArgs),
    /// Hotel bookings
    Bookings(booking::BookingArgs),
    /// Admin moderation queue
    Moderation(moderation::ModerationArgs),
    /// Admin user directory
    Users(user::UserArgs),
    /// Conversations and messages
    Messages(message::MessageArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, app_config: AppConfig) -> AppResult<()> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config, &app_config, self.format);
        }
        let ctx = Context::new(&app_config, self.format, self.as_of)?;
        match &self.command {
            Commands::Properties(args) => property::execute(args, &ctx),
            Commands::Applications(args) => application::execute(args, &ctx),
            Commands::Earnings(args) => earning::execute(args, &ctx),
            Commands::Payments(args) => payment::execute(args, &ctx),
            Commands::Bookings(args) => booking::execute(args, &ctx),
            Commands::Moderation(args) => moderation::execute(args, &ctx),
            Commands::Users(args) => user::execute(args, &ctx),
            Commands::Messages(args) => message::execute(args, &ctx),
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> AppResult<AppConfig> {
    AppConfig::load(config_path)
}

/// Everything a command needs: settings, data, and output helpers.
pub struct Context {
    /// The data set commands read.
    pub fixtures: Fixtures,
    /// Selected output format.
    pub format: OutputFormat,
    /// Amount and date formatting.
    pub fmt: Formatter,
    /// Page limits.
    pub paginator: Paginator,
    /// Reference time.
    pub now: Timestamp,
}

impl Context {
    fn new(config: &AppConfig, format: OutputFormat, as_of: Option<Timestamp>) -> AppResult<Self> {
        let fixtures = Fixtures::load(config.fixtures.path.as_deref())?;
        Ok(Self {
            fmt: Formatter::new(&config.display),
            paginator: Paginator::new(&config.pagination),
            fixtures,
            format,
            now: as_of.unwrap_or_else(Timestamp::now),
        })
    }
}

/// Search, paging and ordering flags shared by every list command
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u64>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Sort direction (asc or desc)
    #[arg(long)]
    pub order: Option<SortDirection>,
}

/// Drive the list reducer from command-line flags, the same sequence of
/// actions a dashboard screen would dispatch.
pub fn list_state<R>(
    ctx: &Context,
    list: &ListArgs,
    criteria: R::Criteria,
    sort: Option<R::SortKey>,
) -> AppResult<ListState<R>>
where
    R: Filterable + Sortable,
{
    let request = ctx.paginator.request(list.page, list.page_size)?;
    let spec = SortSpec::new(sort.unwrap_or_default(), list.order.unwrap_or_default());
    let state = ListState::<R>::new(request.page_size)?
        .reduce(ViewAction::SetCriteria(criteria))?
        .reduce(ViewAction::Search(list.search.clone().unwrap_or_default()))?
        .reduce(ViewAction::SortBy(spec))?
        .reduce(ViewAction::GoToPage(request.page))?;
    debug!(filtered = state.is_filtered(), page = state.page.page, "Built list state");
    Ok(state)
}

/// Run the list pipeline over `records`.
pub fn render_list<R>(
    ctx: &Context,
    records: &[R],
    list: &ListArgs,
    criteria: R::Criteria,
    sort: Option<R::SortKey>,
) -> AppResult<Rendered<R>>
where
    R: Filterable + Sortable + Clone,
{
    let state = list_state::<R>(ctx, list, criteria, sort)?;
    Ok(render(records, &state, ctx.paginator.empty_pages()))
}

/// Label-and-count cards for every member of a tally.
pub fn tally_cards<K>(tally: &rentals_view::Tally<K>, label: impl Fn(K) -> &'static str) -> Vec<(String, String)>
where
    K: Ord + Copy,
{
    tally
        .iter()
        .map(|(member, count)| (label(member).to_string(), count.to_string()))
        .collect()
}
