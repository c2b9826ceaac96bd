//! wardview - Terminal Patient Record Browser

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::path::PathBuf;
use wardview::config::{Config, ThemeName};
use wardview::filter::FilterCatalogs;
use wardview::format::{Formatter, Locale};
use wardview::render::{ColorTheme, TerminalUI};
use wardview::{Application, Browser, JsonFileSource, PatientRecord, RecordSource, SampleSource};

fn cli() -> Command {
    Command::new("wardview")
        .version(wardview::VERSION)
        .about("Browse patient records in the terminal")
        .long_about(
            "wardview loads a JSON array of patient records and shows them in a filterable, \
             searchable table with configurable columns. Without a file it shows built-in \
             sample data.",
        )
        .arg(
            Arg::new("file")
                .help("JSON file with patient records")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Configuration file (default: <config dir>/wardview/config.toml)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Color theme: default, monochrome or high-contrast")
                .value_parser(value_parser!(ThemeName)),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .value_name("LOCALE")
                .help("Number and date format: pt-BR or en-US")
                .value_parser(value_parser!(Locale)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Write log output to this file (RUST_LOG sets the level)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Load and validate the records, print a summary and exit")
                .action(ArgAction::SetTrue),
        )
}

/// Logs go to stderr unless a log file is given.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    let explicit = matches.get_one::<PathBuf>("config");
    let mut config = Config::load(explicit.map(PathBuf::as_path))?;
    if let Some(theme) = matches.get_one::<ThemeName>("theme") {
        config.theme = *theme;
    }
    if let Some(locale) = matches.get_one::<Locale>("locale") {
        config.locale = *locale;
    }
    Ok(config)
}

fn record_source(matches: &ArgMatches, config: &Config) -> Box<dyn RecordSource> {
    let path = matches
        .get_one::<PathBuf>("file")
        .cloned()
        .or_else(|| config.data_file.clone());
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleSource),
    }
}

fn print_summary(source: &str, records: &[PatientRecord]) {
    let catalogs = FilterCatalogs::from_records(records.iter());

    println!("{}: {} patients", source, records.len());
    println!("Status:");
    for status in &catalogs.statuses {
        let count = records.iter().filter(|r| &r.status == status).count();
        println!("  {status}: {count}");
    }
    println!("Priority:");
    for priority in &catalogs.priorities {
        let count = records.iter().filter(|r| &r.priority == priority).count();
        println!("  {priority}: {count}");
    }
    println!("Departments: {}", catalogs.departments.join(", "));

    let unrecognized = records
        .iter()
        .filter(|r| !r.status.is_known() || !r.priority.is_known())
        .count();
    if unrecognized > 0 {
        println!("{unrecognized} records have an unrecognized status or priority");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_one::<PathBuf>("log-file"))?;

    let config = load_config(&matches)?;
    let source = record_source(&matches, &config);
    let records = source
        .load()
        .await
        .with_context(|| format!("Failed to load records from {}", source.describe()))?;

    if matches.get_flag("check") {
        print_summary(&source.describe(), &records);
        return Ok(());
    }

    let ui_renderer = Box::new(TerminalUI::new(
        ColorTheme::from_name(config.theme),
        Formatter::new(config.locale),
    ));
    let mut app = Application::new(
        Browser::new(records),
        ui_renderer,
        source.describe(),
        &config,
    );

    app.run().await?;

    Ok(())
}
