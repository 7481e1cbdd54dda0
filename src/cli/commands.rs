use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("[.] tally v", env!("CARGO_PKG_VERSION"), " - your todo list is one json file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different project directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a tally list in the current directory
    Init(InitArgs),
    /// Add a task
    Add(AddArgs),
    /// List tasks (default when no subcommand is given)
    List(ListArgs),
    /// Search tasks by text
    Search(SearchArgs),
    /// Toggle a task between pending and completed
    Toggle(IdArg),
    /// Remove a task
    Rm(IdArg),
    /// Set a task's priority, or cycle it one step
    Priority(PriorityArgs),
    /// Show task statistics
    Stats,
}

#[derive(Args)]
pub struct InitArgs {
    /// Reinitialize even if tally/ already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
    /// Priority (low, medium, high; default from config.toml)
    #[arg(short, long)]
    pub priority: Option<String>,
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// Filter by status (all, active, completed)
    #[arg(long)]
    pub status: Option<String>,
    /// Filter by priority (all, low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
    /// Case-insensitive substring search
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive substring to look for
    pub query: String,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id (as shown by `tl list`)
    pub id: i64,
}

#[derive(Args)]
pub struct PriorityArgs {
    /// Task id
    pub id: i64,
    /// New priority (low, medium, high); omit to cycle one step
    pub value: Option<String>,
}
