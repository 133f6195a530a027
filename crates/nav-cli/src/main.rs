//! navctl - drive the navigation engine from the command line

mod config;
mod report;
mod step;

use crate::config::CliConfig;
use crate::report::Format;
use crate::step::{CatalogStep, StoryStep};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use nav_engine::{GraphNavigator, HierarchyNavigator, UnknownKeyPolicy};
use nav_store::{demo, Catalog, ChapterGraph};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("navctl")
        .version(nav_engine::VERSION)
        .about("Walk a catalog or chapter graph with the navigation engine")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print one JSON document per line"),
        )
        .subcommand(
            Command::new("validate")
                .about("Load datasets, check integrity and print counts")
                .arg(catalog_arg())
                .arg(graph_arg()),
        )
        .subcommand(
            Command::new("catalog")
                .about("Apply hierarchy steps: home, up, cat:KEY, sub:KEY, leaf:KEY, open:KEY")
                .arg(catalog_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Reject keys missing from the catalog"),
                )
                .arg(
                    Arg::new("steps")
                        .num_args(0..)
                        .value_parser(value_parser!(CatalogStep))
                        .help("Steps to apply in order"),
                ),
        )
        .subcommand(
            Command::new("story")
                .about("Apply graph steps: goto:ID, back")
                .arg(graph_arg())
                .arg(
                    Arg::new("start")
                        .long("start")
                        .help("Start node instead of the graph's own"),
                )
                .arg(
                    Arg::new("steps")
                        .num_args(0..)
                        .value_parser(value_parser!(StoryStep))
                        .help("Steps to apply in order"),
                ),
        )
}

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .value_parser(value_parser!(PathBuf))
        .help("Catalog dataset (.json, .yaml, .toml); defaults to the demo catalog")
}

fn graph_arg() -> Arg {
    Arg::new("graph")
        .long("graph")
        .value_parser(value_parser!(PathBuf))
        .help("Graph dataset (.json, .yaml, .toml); defaults to the demo storybook")
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let format = Format::from_flag(matches.get_flag("json"));
    init_tracing(&config, format);

    match matches.subcommand() {
        Some(("validate", args)) => validate(args, &config, format),
        Some(("catalog", args)) => catalog(args, &config, format),
        Some(("story", args)) => story(args, &config, format),
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn init_tracing(config: &CliConfig, format: Format) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        Format::Json => builder.json().init(),
        Format::Text => builder.init(),
    }
}

fn validate(args: &ArgMatches, config: &CliConfig, format: Format) -> anyhow::Result<ExitCode> {
    let catalog = load_catalog(args, config)?;
    let graph = load_graph(args, config)?;
    println!("{}", report::catalog_summary(&catalog, format));
    println!("{}", report::graph_summary(&graph, format));
    Ok(ExitCode::SUCCESS)
}

fn catalog(args: &ArgMatches, config: &CliConfig, format: Format) -> anyhow::Result<ExitCode> {
    let catalog = Arc::new(load_catalog(args, config)?);
    let mut navigator_config = config.navigator();
    if args.get_flag("strict") {
        navigator_config = navigator_config.with_unknown_key_policy(UnknownKeyPolicy::Strict);
    }
    let mut nav = HierarchyNavigator::with_config(catalog, navigator_config);

    let initial = Ok(nav_engine::Outcome::Unchanged);
    println!("{}", report::hierarchy_state("start", &initial, &nav, format));
    let mut rejected = 0usize;
    for step in args.get_many::<CatalogStep>("steps").into_iter().flatten() {
        let result = step.run(&mut nav);
        rejected += usize::from(result.is_err());
        println!("{}", report::hierarchy_state(&step.to_string(), &result, &nav, format));
    }
    Ok(exit_code(rejected))
}

fn story(args: &ArgMatches, config: &CliConfig, format: Format) -> anyhow::Result<ExitCode> {
    let graph = Arc::new(load_graph(args, config)?);
    let start = args
        .get_one::<String>("start")
        .map(String::as_str)
        .or(config.start.as_deref());
    let mut nav = match start {
        Some(id) => GraphNavigator::starting_at(graph, id)
            .with_context(|| format!("cannot start at {id}"))?,
        None => GraphNavigator::new(graph),
    };

    let initial = Ok(nav_engine::Outcome::Unchanged);
    println!("{}", report::graph_state("start", &initial, &nav, format));
    let mut rejected = 0usize;
    for step in args.get_many::<StoryStep>("steps").into_iter().flatten() {
        let result = step.run(&mut nav);
        rejected += usize::from(result.is_err());
        println!("{}", report::graph_state(&step.to_string(), &result, &nav, format));
    }
    Ok(exit_code(rejected))
}

fn exit_code(rejected: usize) -> ExitCode {
    if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        tracing::warn!(rejected, "some steps were rejected");
        ExitCode::FAILURE
    }
}

fn dataset_path<'a>(
    args: &'a ArgMatches,
    name: &str,
    configured: Option<&'a PathBuf>,
) -> Option<&'a Path> {
    args.get_one::<PathBuf>(name)
        .or(configured)
        .map(PathBuf::as_path)
}

fn load_catalog(args: &ArgMatches, config: &CliConfig) -> anyhow::Result<Catalog> {
    match dataset_path(args, "catalog", config.catalog.as_ref()) {
        Some(path) => nav_store::load_catalog(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => demo::catalog().context("built-in catalog is invalid"),
    }
}

fn load_graph(args: &ArgMatches, config: &CliConfig) -> anyhow::Result<ChapterGraph> {
    match dataset_path(args, "graph", config.graph.as_ref()) {
        Some(path) => nav_store::load_graph(path)
            .with_context(|| format!("failed to load graph {}", path.display())),
        None => demo::storybook().context("built-in storybook is invalid"),
    }
}
