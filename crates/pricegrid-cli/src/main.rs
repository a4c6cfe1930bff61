//! `pricegrid` binary: render records and apply editor commands from the shell.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pricegrid_cli::{apply_command, empty_record, render_file, VERSION};
use pricegrid_render::View;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("pricegrid")
        .version(VERSION)
        .about("Render and edit feature-comparison pricing tables")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level unless RUST_LOG is set"),
        )
        .subcommand(
            Command::new("render")
                .about("Render a record as HTML")
                .arg(
                    Arg::new("view")
                        .long("view")
                        .default_value("display")
                        .value_parser(["display", "editor"])
                        .help("Surface to render"),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Attribute record (JSON)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Render configuration (TOML)"),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply one editor command to a record")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Attribute record (JSON)"),
                )
                .arg(
                    Arg::new("command")
                        .long("command")
                        .required(true)
                        .help("Command as JSON, e.g. {\"command\":\"add_plan\"}"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the updated record here instead of stdout"),
                ),
        )
        .subcommand(Command::new("new").about("Print an empty record"))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

fn path_arg(args: &ArgMatches, name: &str) -> Result<PathBuf> {
    args.get_one::<PathBuf>(name)
        .cloned()
        .with_context(|| format!("missing --{name}"))
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("render", args)) => {
            let view = match args.get_one::<String>("view").map(String::as_str) {
                Some("editor") => View::Editor,
                _ => View::Display,
            };
            let input = path_arg(args, "input")?;
            let config = args.get_one::<PathBuf>("config");
            let html = render_file(view, &input, config.map(PathBuf::as_path))?;
            println!("{html}");
        }
        Some(("apply", args)) => {
            let input = path_arg(args, "input")?;
            let command = args
                .get_one::<String>("command")
                .context("missing --command")?;
            let (commit, json) = apply_command(&input, command)?;
            tracing::info!(
                command = commit.command,
                slice = %commit.slice,
                len = commit.len,
                dropped = commit.dropped,
                "applied"
            );
            match args.get_one::<PathBuf>("output") {
                Some(output) => std::fs::write(output, json + "\n")
                    .with_context(|| format!("failed to write {}", output.display()))?,
                None => println!("{json}"),
            }
        }
        Some(("new", _)) => println!("{}", empty_record()?),
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
        None => anyhow::bail!("no subcommand given"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));
    run(&matches)
}
