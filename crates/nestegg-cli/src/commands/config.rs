//! Config command implementations

use std::path::Path;

use anyhow::Result;
use nestegg_core::config::default_config_path;

use super::load_config;

pub fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    println!("# Source: {}", config.source);
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn cmd_config_path(config_path: Option<&Path>) -> Result<()> {
    match config_path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not present)" };
            println!("{}{}", path.display(), state);
        }
        None => println!("No data directory available; using embedded defaults"),
    }
    Ok(())
}
