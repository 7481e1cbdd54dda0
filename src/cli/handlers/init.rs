use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::store_io;

const CONFIG_TOML_TEMPLATE: &str = r##"[defaults]
# Priority used by `tl add` when --priority is omitted.
priority = "medium"

[ui]
# List display order. Storage order is always oldest-first; this only
# reverses what `tl list` prints.
newest_first = true
"##;

/// `tl init` — create tally/ with a config and an empty task list.
pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let tally_dir = cwd.join("tally");

    if tally_dir.exists() && !args.force {
        return Err("tally/ already exists (use --force to reinitialize)".into());
    }

    fs::create_dir_all(&tally_dir)?;
    fs::write(tally_dir.join("config.toml"), CONFIG_TOML_TEMPLATE)?;
    fs::write(tally_dir.join(store_io::TASKS_FILE), "[]")?;

    println!("initialized tally/ in {}", cwd.display());
    Ok(())
}
