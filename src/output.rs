//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use rentals_core::types::Page;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let mut table = Table::new(items);
                table.with(Style::rounded());
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print one page of a list with its position footer
pub fn print_page<T: Serialize + Tabled>(page: &Page<T>, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_list(&page.items, format);
            if page.total_items > 0 {
                println!(
                    "Page {} of {} ({} {})",
                    page.page,
                    page.total_pages,
                    page.total_items,
                    if page.total_items == 1 { "item" } else { "items" }
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{item:#?}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print stat cards: labelled lines for tables, the raw summary for JSON
pub fn print_summary<T: Serialize>(title: &str, cards: &[(String, String)], raw: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{title}");
            for (label, value) in cards {
                print_kv(label, value);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(raw).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
