/**
 * aria-lint
 *
 * Validates aria-* attribute names stored in JSON files
 */
use anyhow::{Context, Result};
use aria_validator::{AllowList, TracingReporter, ValidatorConfig};
use aria_validator_cli::{diagnostic_count, lint_files};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process;

fn cli() -> Command {
    Command::new("aria-lint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report unrecognized aria-* attributes")
        .arg(
            Arg::new("files")
                .value_name("FILES")
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .required_unless_present("list")
                .help("JSON files holding attribute maps"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Validator config file"),
        )
        .arg(
            Arg::new("allow-list")
                .long("allow-list")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Replace the built-in ARIA table with a JSON allow-list"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .value_name("PREFIX")
                .help("Attribute prefix the allow-list governs"),
        )
        .arg(
            Arg::new("camel-case")
                .long("camel-case")
                .action(ArgAction::SetTrue)
                .help("Also report ariaLabel-style names"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .conflicts_with("log")
                .help("Print one JSON report per entry"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .action(ArgAction::SetTrue)
                .help("Emit diagnostics as log warnings on stderr"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("Print the recognized attribute names and exit"),
        )
}

fn load_config(matches: &ArgMatches) -> Result<ValidatorConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };

    if let Some(prefix) = matches.get_one::<String>("prefix") {
        config.prefix = prefix.clone();
    }
    if let Some(path) = matches.get_one::<PathBuf>("allow-list") {
        config.allow_list = Some(path.clone());
    }
    if matches.get_flag("camel-case") {
        config.check_camel_case = true;
    }
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<bool> {
    let config = load_config(matches)?;
    let validator = config
        .build_validator()
        .context("failed to build allow-list")?;

    if matches.get_flag("list") {
        print_allow_list(validator.allow_list());
        return Ok(true);
    }

    let files = matches
        .get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    let reports = lint_files(&validator, &files)?;

    for report in &reports {
        if matches.get_flag("json") {
            println!("{}", serde_json::to_string(report)?);
        } else if matches.get_flag("log") {
            report.replay(&mut TracingReporter::with_context(report.location()));
        } else {
            for line in report.lines() {
                println!("{}", line);
            }
        }
    }

    let count = diagnostic_count(&reports);
    tracing::info!(files = files.len(), diagnostics = count, "lint finished");
    Ok(count == 0)
}

fn print_allow_list(list: &AllowList) {
    for name in list.iter() {
        println!("{}", name);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    match run(&matches) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}
