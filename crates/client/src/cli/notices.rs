//! Notice CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
pub struct NoticesCommand {
    #[command(subcommand)]
    pub action: NoticesAction,
}

#[derive(Debug, Subcommand)]
pub enum NoticesAction {
    /// List all notices.
    List,
    /// Create a notice. At most three can be active at once.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Show it on the front page right away.
        #[arg(long)]
        active: bool,
    },
    Get {
        id: Uuid,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: Uuid,
    },
}
