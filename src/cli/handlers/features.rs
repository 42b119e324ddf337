//! Handler for the `features` command.

use anyhow::Result;

use crate::cli::FeaturesArgs;
use crate::cli::config::Config;
use crate::cli::output::{DisplayFormat, FeatureListing};
use crate::domain::{Capability, FeatureMap};
use crate::export::{SystemPath, detect_features};

/// Handle the `features` command.
pub fn handle_features(args: &FeaturesArgs, config: &Config) -> Result<()> {
    let features = detect_features(&config.export, &SystemPath::new());
    let listings = list_features(&features);

    match args.format {
        DisplayFormat::Human => {
            for listing in &listings {
                println!(
                    "{:<11} {}",
                    listing.capability,
                    listing.path.as_deref().unwrap_or("not found")
                );
            }
        }
        DisplayFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
    }

    Ok(())
}

fn list_features(features: &FeatureMap) -> Vec<FeatureListing> {
    Capability::ALL
        .iter()
        .map(|&capability| FeatureListing {
            capability: capability.to_string(),
            path: features
                .get(capability)
                .map(|p| p.display().to_string()),
        })
        .collect()
}
