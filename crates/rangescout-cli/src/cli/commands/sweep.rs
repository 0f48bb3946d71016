//! `rangescout sweep` - run the full pipeline for one target.

use anyhow::{Context as _, Result};
use colored::Colorize;
use rangescout::{HunterClient, ShodanClient, TargetKind};
use tracing::warn;

use super::Context;
use crate::cli::args::SweepArgs;
use crate::config::{CredentialProvider, CredentialStore, Prompter, TermPrompter};
use crate::report;

pub async fn execute(ctx: Context, args: SweepArgs) -> Result<()> {
    let prompter = TermPrompter;

    // Load stored keys, prompt for whatever is missing, persist the answers.
    let store = CredentialStore::new(ctx.config_path.clone());
    let keys = CredentialProvider::new(store, &prompter)
        .resolve(ctx.shodan_key.as_deref(), ctx.hunter_key.as_deref())?;

    let target = match args.target {
        Some(target) => target,
        None => prompter.prompt("Enter IP/DOMAIN/CIDR")?,
    };
    let target = target.trim().to_string();

    // A target that is already a range skips resolution entirely.
    let range = match rangescout::classify(&target) {
        TargetKind::Range => target,
        kind => {
            println!(
                "{} resolving {} {} to its announcing range",
                "::".cyan().bold(),
                kind,
                target.bold()
            );
            rangescout::resolve_to_range(&target)
                .await
                .with_context(|| format!("could not resolve '{target}' to a network range"))?
        }
    };

    println!("{} sweeping {}", "::".cyan().bold(), range.bold());

    let shodan = ShodanClient::new(keys.shodan.as_str());
    let primary = match shodan.search().range_endpoints(&range).await {
        Ok(endpoints) => endpoints,
        Err(e) => {
            warn!(error = %e, "Shodan search failed");
            eprintln!("{} Shodan search failed: {e}", "Warning:".yellow().bold());
            Vec::new()
        }
    };

    let hunter = HunterClient::new(keys.hunterhow.as_str());
    let secondary = match hunter.search_endpoints(&range).await {
        Ok(endpoints) => endpoints,
        Err(e) => {
            warn!(error = %e, "Hunter.how search failed");
            eprintln!("{} Hunter.how search failed: {e}", "Warning:".yellow().bold());
            Vec::new()
        }
    };

    report::merge_and_write(&args.output, &primary, &secondary)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if !report::dedupe_file(&args.output)? {
        eprintln!(
            "{} result file {} not found",
            "Warning:".yellow().bold(),
            args.output.display()
        );
    }

    println!();
    println!(
        "{} {} from Shodan, {} from Hunter.how",
        "Matches:".bold(),
        primary.len().to_string().cyan(),
        secondary.len().to_string().cyan()
    );
    println!(
        "{} {}",
        "Results in".green().bold(),
        args.output.display().to_string().bold()
    );

    Ok(())
}
