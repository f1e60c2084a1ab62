use clap::Parser;
use std::path::PathBuf;

use collection_sbom::adapters::outbound::network::Region;

/// Consolidate the SBOMs of a Veracode application collection
#[derive(Parser, Debug)]
#[command(name = "collection-sbom")]
#[command(version)]
#[command(
    about = "Consolidate the SBOMs of a Veracode application collection into one CycloneDX document",
    long_about = None
)]
pub struct Args {
    /// GUID of the collection (skips the name search)
    #[arg(short, long = "collection-id", value_name = "GUID")]
    pub collection_id: Option<String>,

    /// Partial collection name to search for (prompts when omitted)
    #[arg(short, long, value_name = "TEXT", conflicts_with = "collection_id")]
    pub name: Option<String>,

    /// Directory the consolidated SBOM is written to (defaults to current directory)
    #[arg(short, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./collection-sbom.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Veracode region: commercial, european or federal
    #[arg(long, value_name = "REGION")]
    pub region: Option<Region>,

    /// Log file path (defaults to ./collection-sbom.log)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
