//! User directory CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentals_core::types::Selection;
use rentals_core::AppResult;
use rentals_entity::user::{User, UserRole, UserStatus};
use rentals_view::lists::user::{UserCriteria, UserSortKey, UserStats};

use super::{Context, ListArgs};
use crate::output;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users
    List {
        /// Filter by role
        #[arg(short, long, default_value = "all")]
        role: Selection<UserRole>,
        /// Filter by account status
        #[arg(long, default_value = "all")]
        status: Selection<UserStatus>,
        /// Sort key (joined_at, name)
        #[arg(long)]
        sort: Option<UserSortKey>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show users per role and status
    Stats,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Status
    status: String,
    /// Joined
    joined: String,
}

/// Execute user commands
pub fn execute(args: &UserArgs, ctx: &Context) -> AppResult<()> {
    match &args.command {
        UserCommand::List {
            role,
            status,
            sort,
            list,
        } => {
            let criteria = UserCriteria {
                role: *role,
                status: *status,
            };
            let rendered = super::render_list(ctx, &ctx.fixtures.users, list, criteria, *sort)?;
            let page = rendered.page.map(|u: User| UserRow {
                id: u.id.to_string(),
                joined: ctx.fmt.date(&u.joined_at),
                role: u.role.label().to_string(),
                status: u.status.label().to_string(),
                name: u.name,
                email: u.email,
            });
            output::print_page(&page, ctx.format);
        }
        UserCommand::Stats => {
            let stats = UserStats::compute(&ctx.fixtures.users);
            let mut cards = vec![("Total users".to_string(), stats.total().to_string())];
            cards.extend(super::tally_cards(&stats.by_role, |r| r.label()));
            cards.extend(super::tally_cards(&stats.by_status, |s| s.label()));
            output::print_summary("Users", &cards, &stats, ctx.format);
        }
    }
    Ok(())
}
