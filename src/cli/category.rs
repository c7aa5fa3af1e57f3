//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::services::CategoryService;
use crate::storage::Storage;

use super::confirm_or_report;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories with the number of transactions using each
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
        /// Delete even if transactions use it
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> LedgerResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list_with_usage()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name } => {
            let category = service.add(&name)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id.short());
        }

        CategoryCommands::Delete { category, force } => {
            if let Some(deleted) = confirm_or_report(service.delete(&category, force))? {
                println!("Deleted category: {}", deleted.name);
            }
        }
    }

    Ok(())
}
