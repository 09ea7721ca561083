mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quad_core::{Catalog, FileBackend, PreferencesStore};

static SEED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Parser)]
#[command(name = "quad")]
#[command(about = "Browse your campus events feed, clubs, and organizations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Your personalized event feed
    Feed {
        /// Only show events from this group
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Events on a day (YYYY-MM-DD, defaults to today)
    Calendar { date: Option<String> },
    /// A group's page: info plus upcoming and past events
    Group { id: String },
    /// An organization's page: info plus upcoming and past events
    Org { id: String },
    /// Browse all groups and organizations
    Explore,
    /// Your subscriptions and hidden events
    Profile,
    /// Subscribe to a group (or an organization with --org)
    Subscribe {
        id: String,
        #[arg(long)]
        org: bool,
    },
    /// Unsubscribe from a group (or an organization with --org)
    Unsubscribe {
        id: String,
        #[arg(long)]
        org: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Hide an event from your feed
    Hide {
        event_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Restore a hidden event to your feed
    Restore { event_id: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::from_json(SEED_CATALOG)?;
    let backend = FileBackend::new(FileBackend::default_path()?);
    let mut store = PreferencesStore::open(backend);

    match cli.command {
        Commands::Feed { group } => commands::feed::run(&catalog, &store, group.as_deref()),
        Commands::Calendar { date } => commands::calendar::run(&catalog, &store, date.as_deref()),
        Commands::Group { id } => commands::detail::run_group(&catalog, &store, &id),
        Commands::Org { id } => commands::detail::run_org(&catalog, &store, &id),
        Commands::Explore => commands::explore::run(&catalog, &store),
        Commands::Profile => commands::profile::run(&catalog, &store),
        Commands::Subscribe { id, org } => {
            commands::subscriptions::subscribe(&catalog, &mut store, &id, org)
        }
        Commands::Unsubscribe { id, org, yes } => {
            commands::subscriptions::unsubscribe(&catalog, &mut store, &id, org, yes)
        }
        Commands::Hide { event_id, yes } => {
            commands::subscriptions::hide(&catalog, &mut store, &event_id, yes)
        }
        Commands::Restore { event_id } => {
            commands::subscriptions::restore(&catalog, &mut store, &event_id)
        }
    }
}
