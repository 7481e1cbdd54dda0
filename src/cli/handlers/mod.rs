mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

/// Global override for project directory (set by -C flag)
static DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::store_io::{self, StoreError};
use crate::model::config::StoreConfig;
use crate::model::store::TodoStore;
use crate::model::task::Priority;
use crate::ops::filter::{
    EmptyState, PriorityFilter, Query, StatusFilter, classify_empty, visible_tasks,
};
use crate::ops::stats::task_counts;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for open_list()
    if let Some(ref dir) = cli.dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        // No subcommand → default listing
        None => cmd_list(ListArgs::default(), json),
        Some(cmd) => match cmd {
            // Init is handled in main.rs before discovery
            Commands::Init(args) => cmd_init(args),

            // Read commands
            Commands::List(args) => cmd_list(args, json),
            Commands::Search(args) => cmd_search(args, json),
            Commands::Stats => cmd_stats(json),

            // Write commands
            Commands::Add(args) => cmd_add(args, json),
            Commands::Toggle(args) => cmd_toggle(args, json),
            Commands::Rm(args) => cmd_rm(args, json),
            Commands::Priority(args) => cmd_priority(args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Discover the project, read config, and load the store.
/// Returns (tally dir, config, store).
fn open_list() -> Result<(PathBuf, StoreConfig, TodoStore), StoreError> {
    let start = match DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(StoreError::IoError)?,
    };
    let root = store_io::discover_root(&start)?;
    let tally_dir = root.join("tally");
    let config = config_io::read_config(&tally_dir)?;
    let store = store_io::load_store(&tally_dir);
    Ok((tally_dir, config, store))
}

/// Persist the snapshot iff a mutation actually happened.
fn save_if_dirty(tally_dir: &std::path::Path, store: &TodoStore) -> Result<(), StoreError> {
    if store.is_dirty() {
        store_io::write_tasks(tally_dir, store.tasks())?;
    }
    Ok(())
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::parse(s).ok_or_else(|| format!("invalid priority \"{}\" — use low, medium, or high", s))
}

fn build_query(args: &ListArgs) -> Result<Query, String> {
    let status = match &args.status {
        Some(s) => StatusFilter::parse(s)
            .ok_or_else(|| format!("invalid status \"{}\" — use all, active, or completed", s))?,
        None => StatusFilter::All,
    };
    let priority = match &args.priority {
        Some(p) => PriorityFilter::parse(p)
            .ok_or_else(|| format!("invalid priority \"{}\" — use all, low, medium, or high", p))?,
        None => PriorityFilter::All,
    };
    Ok(Query {
        search: args.search.clone().unwrap_or_default(),
        status,
        priority,
    })
}

fn empty_message(state: EmptyState, query: &Query) -> String {
    match state {
        EmptyState::NoTasks => "no tasks yet — add one with `tl add <text>`".to_string(),
        EmptyState::NoMatches => "no tasks match your search/filter".to_string(),
        EmptyState::NoneInStatus => format!("no {} tasks", query.status.as_str()),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, config, store) = open_list()?;
    let query = build_query(&args)?;

    let mut visible = visible_tasks(store.tasks(), &query);
    let stats = task_counts(store.tasks());

    if json {
        // Machine output stays in storage order
        print_json(&TaskListJson {
            tasks: visible.iter().map(|t| TaskJson::from(*t)).collect(),
            stats: StatsJson::from(&stats),
        });
        return Ok(());
    }

    match classify_empty(store.tasks(), &visible, &query) {
        Some(state) => println!("{}", empty_message(state, &query)),
        None => {
            // Display order only; stored order never changes
            if config.ui.newest_first {
                visible.reverse();
            }
            for task in &visible {
                println!("{}", task_line(task));
            }
        }
    }
    println!("{}", stats_line(&stats));
    Ok(())
}

fn cmd_search(args: SearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    cmd_list(
        ListArgs {
            search: Some(args.query),
            ..Default::default()
        },
        json,
    )
}

fn cmd_stats(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, _, store) = open_list()?;
    let stats = task_counts(store.tasks());
    if json {
        print_json(&StatsJson::from(&stats));
    } else {
        println!("{}", stats_line(&stats));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ").trim().to_string();
    // Empty submissions never reach the store
    if text.is_empty() {
        return Err("cannot add an empty task".into());
    }

    let (tally_dir, config, mut store) = open_list()?;
    let priority = match &args.priority {
        Some(p) => parse_priority(p)?,
        None => config.defaults.priority,
    };

    let id = store.add(&text, priority);
    save_if_dirty(&tally_dir, &store)?;

    if json {
        print_json(&AddedJson {
            id,
            text,
            priority: priority.as_str().to_string(),
        });
    } else {
        println!("added {} ({})", id, priority.as_str());
    }
    Ok(())
}

fn cmd_toggle(args: IdArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (tally_dir, _, mut store) = open_list()?;
    let changed = store.toggle(args.id);
    save_if_dirty(&tally_dir, &store)?;

    if json {
        print_json(&ChangedJson {
            id: args.id,
            changed,
        });
    } else if let Some(task) = store.find(args.id).filter(|_| changed) {
        let state = if task.completed { "completed" } else { "pending" };
        println!("{} is now {}", args.id, state);
    } else {
        println!("no task with id {}", args.id);
    }
    Ok(())
}

fn cmd_rm(args: IdArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (tally_dir, _, mut store) = open_list()?;
    let changed = store.remove(args.id);
    save_if_dirty(&tally_dir, &store)?;

    if json {
        print_json(&ChangedJson {
            id: args.id,
            changed,
        });
    } else if changed {
        println!("removed {}", args.id);
    } else {
        println!("no task with id {}", args.id);
    }
    Ok(())
}

fn cmd_priority(args: PriorityArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (tally_dir, _, mut store) = open_list()?;

    let outcome = match &args.value {
        // Explicit value → direct set
        Some(value) => {
            let priority = parse_priority(value)?;
            if store.set_priority(args.id, priority) || store.find(args.id).is_some() {
                Some(priority)
            } else {
                None
            }
        }
        // No value → one step around the cycle
        None => store.cycle_priority(args.id),
    };
    save_if_dirty(&tally_dir, &store)?;

    match outcome {
        Some(priority) => {
            if json {
                print_json(&PriorityJson {
                    id: args.id,
                    priority: priority.as_str().to_string(),
                });
            } else {
                println!("{} is now {}", args.id, priority.as_str());
            }
        }
        None => {
            if json {
                print_json(&ChangedJson {
                    id: args.id,
                    changed: false,
                });
            } else {
                println!("no task with id {}", args.id);
            }
        }
    }
    Ok(())
}
