use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;

fn config_file(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file(),
    }
}

pub async fn show_config(path: Option<&Path>) -> Result<()> {
    let config_file = config_file(path)?;
    let mut config = Config::load_from(&config_file)?;

    if !config.gemini.api_key.is_empty() {
        config.gemini.api_key = "********".to_string();
    }
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration ({})", config_file.display());
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    if std::env::var(crate::config::API_KEY_ENV).is_ok() {
        println!("API key provided by {}", crate::config::API_KEY_ENV);
    }

    Ok(())
}

pub async fn edit_config(path: Option<&Path>) -> Result<()> {
    let config_file = config_file(path)?;

    // Ensure config file exists
    if !config_file.exists() {
        Config::default().save_to(&config_file)?;
    }

    // Open in default editor
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

    Command::new(&editor)
        .arg(&config_file)
        .status()
        .with_context(|| format!("Failed to launch editor {}", editor))?;

    // Surface syntax errors right away
    Config::load_from(&config_file)?;

    println!("✓ Configuration saved!");

    Ok(())
}

pub async fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let config_file = config_file(path)?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::default().save_to(&config_file)?;

    println!("✓ Configuration initialized at: {}", config_file.display());
    println!();
    println!("Add your Gemini API key under [gemini] or export GEMINI_API_KEY.");
    println!("You can edit it with: fitness-coach config edit");

    Ok(())
}
