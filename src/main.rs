// src/main.rs
use clap::Parser;
use kbo_schedule::cli::{Args, is_maintenance_mode};
use kbo_schedule::config::Config;
use kbo_schedule::config::user_prompts::prompt_for_api_domain;
use kbo_schedule::data_fetcher::api::ApiClient;
use kbo_schedule::data_fetcher::clock::{Clock, FixedClock, SystemClock};
use kbo_schedule::data_fetcher::processors::StatusClassifier;
use kbo_schedule::error::AppError;
use kbo_schedule::logging::setup_logging;
use kbo_schedule::reference_data::seed_database;
use kbo_schedule::web::{AppState, MonthListing, render_text, start_server};
use std::path::Path;
use std::sync::Arc;

/// Config as stored on disk plus env overrides, without prompting or
/// validation. Used where a missing API domain must not block the command.
async fn load_config_lenient() -> Config {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path)
            .await
            .unwrap_or_default()
    } else {
        Config::default()
    };
    config.apply_env_overrides();
    config
}

async fn run_maintenance(args: Args) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let updates_config = args.new_api_domain.is_some()
        || args.new_database_path.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path;

    if updates_config {
        let config_path = Config::get_config_path();
        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path)
                .await
                .unwrap_or_default()
        } else {
            Config::default()
        };

        if let Some(new_domain) = args.new_api_domain.clone() {
            config.api_domain = if new_domain.is_empty() {
                prompt_for_api_domain().await?
            } else {
                new_domain
            };
        }

        if let Some(new_database_path) = args.new_database_path.clone() {
            config.database_path = new_database_path;
        }

        if let Some(new_log_path) = args.new_log_file_path.clone() {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
    }

    if args.seed_reference_data {
        let config = load_config_lenient().await;
        let database_path = config.database_path.clone();
        let inserted = tokio::task::spawn_blocking(move || seed_database(Path::new(&database_path)))
            .await
            .map_err(|e| AppError::server_error(format!("Seeding task failed: {e}")))??;
        println!(
            "Reference data ready at {} ({} new rows)",
            config.database_path, inserted
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let logging_config = load_config_lenient().await;
    let (log_file_path, _guard) = setup_logging(&args, Some(&logging_config)).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if is_maintenance_mode(&args) {
        return run_maintenance(args).await;
    }

    let config = Config::load().await?;
    tracing::info!("Config loaded, API domain: {}", config.api_domain);

    let clock: Arc<dyn Clock> = match args.now.as_deref() {
        Some(now) => {
            let clock = FixedClock::parse_kst(now)?;
            tracing::info!("Using fixed clock at {}", clock.now());
            Arc::new(clock)
        }
        None => Arc::new(SystemClock),
    };

    let state = AppState {
        api: ApiClient::from_config(&config)?,
        classifier: StatusClassifier::new(clock, config.live_window_minutes)?,
        config,
    };

    if args.once {
        let listing =
            MonthListing::build(&state, args.month.as_deref(), args.region.as_deref()).await;
        print!("{}", render_text(&listing));
        return Ok(());
    }

    let port = args.port.unwrap_or(state.config.listen_port);
    start_server(Arc::new(state), &args.host, port).await
}
