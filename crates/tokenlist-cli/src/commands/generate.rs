//! Generate command

use std::path::PathBuf;

use clap::Args;
use tokenlist_core::diff::render_human_summary;
use tokenlist_core::{TokenListConfig, TokenListManifest};
use tokenlist_engine::{
    generate_with_progress, FirstPublishReason, GenerateOutcome, Progress,
};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Repository root holding `mainnet/` and the published manifest
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn execute(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = TokenListConfig::for_root(args.root);
    let outcome = generate_with_progress(&config, |progress| match progress {
        Progress::Loading { entry_count } => println!("Processing {} token(s)...", entry_count),
    })?;

    match outcome {
        GenerateOutcome::NoSources { .. } => {
            println!("No token files found in {}/", config.data_dir);
        }
        GenerateOutcome::FirstPublish {
            manifest, reason, ..
        } => {
            if let FirstPublishReason::UnparseableManifest { reason } = reason {
                println!(
                    "Existing '{}' could not be parsed ({}); starting a new version history",
                    config.output_file, reason
                );
            }
            print_created(&config, &manifest, "first publish");
        }
        GenerateOutcome::Unchanged { version, .. } => {
            println!(
                "No changes detected; '{}' left untouched (version {})",
                config.output_file, version
            );
        }
        GenerateOutcome::Published {
            manifest,
            previous_version,
            report,
            ..
        } => {
            for line in render_human_summary(&report, previous_version, manifest.version) {
                println!("{}", line);
            }
            print_created(&config, &manifest, report.classification.as_str());
        }
    }

    Ok(())
}

fn print_created(config: &TokenListConfig, manifest: &TokenListManifest, change: &str) {
    println!("Successfully created '{}'", config.output_file);
    println!("   - {} token(s) included", manifest.tokens.len());
    println!("   - Version: {} ({})", manifest.version, change);
    println!("   - Timestamp: {}", manifest.timestamp);
}
