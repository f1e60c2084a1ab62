mod cli;
mod config;

use chrono::Utc;
use cli::Args;
use collection_sbom::adapters::outbound::console::{
    PromptSelectionProvider, StderrProgressReporter,
};
use collection_sbom::adapters::outbound::filesystem::FileSystemWriter;
use collection_sbom::adapters::outbound::network::{ApiCredentials, VeracodeClient};
use collection_sbom::application::dto::ConsolidationRequest;
use collection_sbom::application::use_cases::{
    CheckCredentialsExpiryUseCase, ConsolidateCollectionSbomUseCase, ResolveCollectionUseCase,
    DEFAULT_WARNING_DAYS,
};
use collection_sbom::ports::outbound::{OutputPresenter, ProgressReporter, SelectionProvider};
use collection_sbom::sbom_aggregation::domain::CollectionId;
use collection_sbom::shared::error::{ExitCode, SbomError};
use collection_sbom::shared::logging::{init_file_logging, DEFAULT_LOG_FILE};
use collection_sbom::shared::Result;
use config::ConfigFile;
use std::path::{Path, PathBuf};
use std::process;

const SEARCH_PROMPT: &str = "Enter the collection name for which to generate an SBOM: ";

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            e.downcast_ref::<SbomError>()
                .map(SbomError::exit_code)
                .unwrap_or(ExitCode::ApplicationError)
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // An identifier given on the command line is checked before anything
    // touches the network
    if let Some(ref collection_id) = args.collection_id {
        CollectionId::parse(collection_id)?;
    }

    let config = load_config(&args)?;

    let log_file = args
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    if let Err(e) = init_file_logging(&log_file) {
        eprintln!("⚠️  Warning: Logging to file is disabled: {:#}", e);
    }

    let region = args.region.or_else(|| config.region()).unwrap_or_default();
    tracing::info!(%region, "starting collection-sbom");

    // Create adapters (Dependency Injection)
    let credentials = ApiCredentials::load()?;
    let client = VeracodeClient::new(&credentials, region)?;
    let progress_reporter = StderrProgressReporter::new();

    // Credentials expiry is advisory and never stops the run
    let warning_days = config
        .credentials_warning_days
        .unwrap_or(DEFAULT_WARNING_DAYS);
    CheckCredentialsExpiryUseCase::new(&client, &progress_reporter, warning_days)
        .execute(Utc::now());

    let collection_id = match args.collection_id {
        Some(collection_id) => collection_id,
        None => {
            let selection_provider = PromptSelectionProvider::stdio();
            let search_text = match args.name {
                Some(name) => name,
                None => selection_provider.prompt_search_text(SEARCH_PROMPT)?,
            };

            let resolved = ResolveCollectionUseCase::new(
                &client,
                &selection_provider,
                &progress_reporter,
            )
            .execute(&search_text)?;

            match resolved {
                Some(guid) => guid,
                None => return Ok(ExitCode::Aborted),
            }
        }
    };

    // Execute use case
    let use_case = ConsolidateCollectionSbomUseCase::new(&client, &client, &progress_reporter);
    let response = use_case.execute(ConsolidationRequest::new(collection_id))?;

    // Present output
    progress_reporter.report("📝 Writing SBOM to file...");
    let output_dir = args
        .output_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let writer = FileSystemWriter::in_directory(&output_dir, &response.output_file_name());
    writer.present(&response.to_json()?)?;

    progress_reporter.report_completion(&format!(
        "✅ Created consolidated sbom: {}",
        writer.output_path().display()
    ));

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or the one discovered in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    match args.config {
        Some(ref path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}
