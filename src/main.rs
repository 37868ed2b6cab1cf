use clap::Parser;
use reactome_cli::config::Command;
use reactome_cli::core::analysis::render_local_report;
use reactome_cli::utils::{logger, validation::Validate};
use reactome_cli::{
    AnalysisRunner, AnalysisToken, CliConfig, LocalStorage, ReactomeClient, ReactomeError,
    ReportGenerator, ServiceSettings,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting reactome CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Could not complete CLI execution: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: CliConfig) -> Result<(), ReactomeError> {
    config.validate()?;

    let settings = ServiceSettings::load(config.config.as_deref())?
        .with_reactome_url(config.reactome_url.clone())
        .with_timeout_seconds(config.timeout_seconds)
        .normalized();
    settings.validate()?;
    tracing::debug!("Service settings: {:?}", settings);

    let storage = LocalStorage::current_dir();

    if let Command::Render {
        pathways_csv,
        token,
        html_report,
    } = &config.command
    {
        let report = ReportGenerator::new(settings.reactome_url.as_str());
        let count = render_local_report(
            &storage,
            &report,
            pathways_csv,
            &AnalysisToken::new(token.as_str()),
            html_report,
        )
        .await?;

        tracing::info!("✅ HTML report with {} pathways rendered", count);
        println!("📁 Report saved to: {}", html_report.display());
        return Ok(());
    }

    let Some(request) = config.command.analysis_request(&storage).await? else {
        return Ok(());
    };
    let options = config
        .command
        .outputs()
        .map(|outputs| outputs.to_options())
        .unwrap_or_default();

    if options.is_empty() {
        tracing::warn!("No output files requested; only the analysis token will be printed");
    }

    let reactome_url = settings.reactome_url.clone();
    let client = ReactomeClient::new(settings)?;
    let runner = AnalysisRunner::new(client, storage, &reactome_url);

    let outcome = runner.run(&request, &options).await?;

    tracing::info!("✅ Analysis completed successfully!");
    println!("Analysis token: {}", outcome.token);
    for path in &outcome.written_files {
        println!("📁 Output saved to: {}", path.display());
    }

    Ok(())
}
