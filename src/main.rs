//! Datamenu - interactive CSV exploration from the terminal.
//!
//! Loads the configuration, lets the user pick a CSV file and runs the
//! analysis menu over it until the user quits.

use std::{
    error::Error,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use datamenu::{
    analysis::DataAnalysis,
    config::{Config, ConfigError, LogLevel},
    console::{Console, StdConsole, ask},
    data::list_csv_files,
    menu::MenuSession,
    printer::{Output, OutputStyle, Printer, Table, formatting::format_error},
    tracing_config,
};
use tracing::info;

/// Interactive menu for exploring CSV files.
#[derive(Parser, Debug)]
#[command(name = "datamenu", version, about)]
struct Args {
    /// CSV file to load instead of choosing one from the data directory
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Directory searched for CSV files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Number of rows shown by previews
    #[arg(short, long)]
    rows: Option<usize>,

    /// How tabular results are printed
    #[arg(short, long, value_enum)]
    style: Option<OutputStyle>,

    /// Configuration file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level written to the log file
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log to stderr instead of the log file
    #[arg(long)]
    log_stderr: bool,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long)]
    print_config_schema: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, Box<dyn Error>> {
    if args.print_config_schema {
        println!("{}", serde_json::to_string_pretty(&Config::json_schema())?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&args)?;

    let _guard = if args.log_stderr {
        tracing_config::init(config.general.log_level)?;
        None
    } else {
        match tracing_config::init_with_file(config.general.log_level) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Logging disabled: {e}");
                None
            }
        }
    };
    info!("Starting datamenu");

    let mut console = StdConsole::new(Printer::new(config.general.color));

    let path = match args.file {
        Some(path) => path,
        None => match choose_file(&mut console, &config.data.data_dir)? {
            Some(path) => path,
            None => {
                console.emit(&Output::error("Invalid selection. Exiting."));
                return Ok(ExitCode::FAILURE);
            }
        },
    };

    let host = DataAnalysis::load(&path, &config.data)?;
    console.emit(&Output::info(format!(
        "Loaded '{}' with {} rows and {} columns.",
        path.display(),
        host.frame().row_count(),
        host.frame().column_count()
    )));

    let mut session = MenuSession::new(host, console, (&config.menu).into());
    let summary = session.run()?;
    info!(
        actions_run = summary.actions_run,
        actions_failed = summary.actions_failed,
        invalid_choices = summary.invalid_choices,
        "Session finished"
    );

    Ok(ExitCode::SUCCESS)
}

/// Reads the configuration and applies command-line overrides on top.
fn load_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => match Config::load_default() {
            Ok(config) => config,
            Err(ConfigError::NoConfigDir(e)) => {
                eprintln!("Using default configuration: {e}");
                Config::default()
            }
            Err(e) => return Err(e.into()),
        },
    };

    if let Some(dir) = &args.data_dir {
        config.data.data_dir = dir.clone();
    }
    if let Some(rows) = args.rows {
        config.data.preview_rows = rows;
    }
    if let Some(style) = args.style {
        config.data.output_style = style;
    }
    if let Some(level) = args.log_level {
        config.general.log_level = level;
    }
    if args.no_color {
        config.general.color = false;
    }

    config.validate()?;
    Ok(config)
}

/// Lists the CSV files in `dir` and asks the user to pick one by number.
///
/// Returns `None` when the answer is not a listed number.
fn choose_file(console: &mut dyn Console, dir: &Path) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let files = list_csv_files(dir)
        .map_err(|e| format!("cannot read data directory '{}': {e}", dir.display()))?;
    if files.is_empty() {
        return Err(format!("no CSV files found in '{}'", dir.display()).into());
    }

    let mut table = Table::new(["id", "file"]);
    for (index, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.push_row([(index + 1).to_string(), name]);
    }
    console.emit(&Output::info("Available CSV files:"));
    console.emit(&Output::Table(table));

    let answer = ask(console, "Enter the number of the CSV file to load: ")?;
    let choice = answer
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| files.get(index).cloned());

    Ok(choice)
}
