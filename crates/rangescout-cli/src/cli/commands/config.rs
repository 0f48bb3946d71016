//! `rangescout config` - stored credential management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::CredentialStore;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    let store = CredentialStore::new(ctx.config_path.clone());

    match args.command {
        ConfigCommands::Show => show_config(&store),
        ConfigCommands::Set { key, value } => set_config(&store, &key, &value),
        ConfigCommands::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

fn show_config(store: &CredentialStore) -> Result<()> {
    let credentials = store.load();

    println!("{}", "Stored credentials:".bold());
    println!();
    println!(
        "  {} {}",
        "shodan_api_key:".bold(),
        masked(credentials.shodan_api_key.as_deref())
    );
    println!(
        "  {} {}",
        "hunterhow_api_key:".bold(),
        masked(credentials.hunterhow_api_key.as_deref())
    );

    Ok(())
}

fn set_config(store: &CredentialStore, key: &str, value: &str) -> Result<()> {
    let mut credentials = store.load();

    match key {
        "shodan_api_key" => {
            credentials.shodan_api_key = Some(value.to_string());
            println!("{} Shodan API key set.", "Success:".green().bold());
        }
        "hunterhow_api_key" => {
            credentials.hunterhow_api_key = Some(value.to_string());
            println!("{} Hunter.how API key set.", "Success:".green().bold());
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 shodan_api_key     - Your Shodan API key\n  \
                 hunterhow_api_key  - Your Hunter.how API key",
                key
            );
        }
    }

    store.save(&credentials)?;

    Ok(())
}

fn masked(key: Option<&str>) -> String {
    key.map_or_else(
        || "(not set)".dimmed().to_string(),
        |k| {
            if k.len() > 8 {
                format!("{}...{}", &k[..4], &k[k.len() - 4..])
            } else {
                "****".to_string()
            }
        },
    )
}
