use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches configuration or reference
/// data and exits without serving or rendering.
pub fn is_maintenance_mode(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_database_path.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.seed_reference_data
}

/// Whether log output should also go to stdout. `--once` keeps stdout for the
/// listing unless `--debug` is set.
pub fn logs_to_stdout(args: &Args) -> bool {
    !args.once || args.debug
}

/// KBO match schedule viewer
///
/// Serves a month-by-month listing of KBO matches, merged from the match API
/// and the local stadium/region reference database.
///
/// By default starts a web server. Open `/matches?month=YYYY-MM&region=ID`
/// in a browser; `/api/matches` returns the same listing as JSON.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print one month's listing to stdout and exit instead of serving.
    #[arg(short, long)]
    pub once: bool,

    /// Month to show with --once, in YYYY-MM format. Defaults to the current month (KST).
    #[arg(short = 'm', long = "month", help_heading = "Listing")]
    pub month: Option<String>,

    /// Region id to filter by with --once.
    #[arg(short = 'r', long = "region", help_heading = "Listing")]
    pub region: Option<String>,

    /// Port to listen on. Overrides the configured port.
    #[arg(short = 'p', long = "port", help_heading = "Server")]
    pub port: Option<u16>,

    /// Address to bind the web server to.
    #[arg(long = "host", default_value = "127.0.0.1", help_heading = "Server")]
    pub host: String,

    /// Update API domain in config. Will prompt for new domain if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update the reference database path in config.
    #[arg(long = "set-db-path", help_heading = "Configuration")]
    pub new_database_path: Option<String>,

    /// Update log file path in config.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config, reverting to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Create the reference database if needed and fill it with the KBO stadium list.
    #[arg(long = "seed-reference-data", help_heading = "Configuration")]
    pub seed_reference_data: bool,

    /// Pretend the current KST time is this instant (YYYY-MM-DDTHH:MM).
    /// Affects match status badges and the default month.
    #[arg(long = "now", help_heading = "Debug")]
    pub now: Option<String>,

    /// Also log to stdout in --once mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
