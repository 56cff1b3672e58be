mod handlers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ticklist::engine::view::Filter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ticklist", version, about = "A tiny local task list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Add a new task
    Add {
        text: String,
    },
    /// Flip a task between active and completed
    Toggle {
        /// Task id or unique id prefix
        id: String,
    },
    /// Delete a task
    #[command(alias = "rm")]
    Remove {
        /// Task id or unique id prefix
        id: String,
    },
    /// List tasks
    List {
        /// Restrict the view to active or completed tasks
        #[arg(long, short = 'f', value_enum, default_value_t = Filter::All)]
        filter: Filter,
        #[arg(long)]
        json: bool,
    },
    /// Delete every completed task
    ClearCompleted {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Show active/total counts
    Status {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add { .. }
        | Commands::Toggle { .. }
        | Commands::Remove { .. }
        | Commands::ClearCompleted { .. } => dispatch_write_ops(cli.command),
        Commands::List { .. } | Commands::Status { .. } => dispatch_read_ops(cli.command),
    }
}

fn dispatch_write_ops(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Add { text } => handlers::add::handle(&text),
        Commands::Toggle { id } => handlers::toggle::handle(&id),
        Commands::Remove { id } => handlers::remove::handle(&id),
        Commands::ClearCompleted { yes } => handlers::clear::handle(yes),
        _ => unreachable!("Invalid write command dispatch"),
    }
}

fn dispatch_read_ops(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { filter, json } => handlers::list::handle(filter, json),
        Commands::Status { json } => handlers::status::handle(json),
        _ => unreachable!("Invalid read command dispatch"),
    }
}
