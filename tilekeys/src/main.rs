use crate::errors::{CliError, Result};
use clap::{Arg, ArgMatches, value_parser};
use std::path::{Path, PathBuf};
use std::process::Child;
use tilekeys_core::config::{Snapshot, command, parse_combo};
use tilekeys_core::errors::TileError;
use xdg::BaseDirectories;

use tracing_subscriber::{filter::EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt};

pub mod config;
pub mod errors;
pub mod report;
mod tests;
pub mod watch;

const CONFIG_ARG: &str = "config";
const OUTPUT_ARG: &str = "output";
const COMBO_ARG: &str = "combo";

const CHECK_COMMAND: &str = "check";
const KEYS_COMMAND: &str = "keys";
const GROUPS_COMMAND: &str = "groups";
const DUMP_COMMAND: &str = "dump";
const RUN_COMMAND: &str = "run";
const WATCH_COMMAND: &str = "watch";

const SNAPSHOT_FILE_NAME: &str = "snapshot.ron";

fn main() {
    setup_logging();
    let matches = get_app().get_matches();
    let Some((name, sub)) = matches.subcommand() else {
        unreachable!("clap requires a subcommand");
    };
    // Global args are propagated into the subcommand's matches.
    let config_path = sub.get_one::<PathBuf>(CONFIG_ARG).map(PathBuf::as_path);

    let result = match name {
        CHECK_COMMAND => check(config_path),
        KEYS_COMMAND => keys(config_path),
        GROUPS_COMMAND => groups(config_path),
        DUMP_COMMAND => dump(config_path, sub),
        RUN_COMMAND => run(config_path, sub),
        WATCH_COMMAND => watch(config_path, sub),
        _ => unreachable!("unknown subcommand {name}"),
    };
    errors::exit_on_error!(result);
}

fn compile(config_path: Option<&Path>) -> Result<Snapshot> {
    config::load(config_path)?.compile()
}

fn check(config_path: Option<&Path>) -> Result<()> {
    let snapshot = compile(config_path)?;
    let conflicts = snapshot.binding_table().conflicts();
    for conflict in &conflicts {
        let descriptions: Vec<&str> = conflict
            .descriptions
            .iter()
            .map(|desc| desc.as_deref().unwrap_or("-"))
            .collect();
        tracing::warn!(
            "`{}` is bound {} times ({}), the last one wins",
            conflict.combo,
            conflict.positions.len(),
            descriptions.join(", ")
        );
    }
    println!(
        "{} bindings, {} groups, {} layouts, {} conflicts",
        snapshot.keys.len(),
        snapshot.groups.len(),
        snapshot.layouts.len(),
        conflicts.len()
    );
    Ok(())
}

fn keys(config_path: Option<&Path>) -> Result<()> {
    let snapshot = compile(config_path)?;
    print!("{}", report::keys(&snapshot.binding_table()));
    Ok(())
}

fn groups(config_path: Option<&Path>) -> Result<()> {
    let snapshot = compile(config_path)?;
    print!("{}", report::groups(&snapshot.groups));
    Ok(())
}

fn dump(config_path: Option<&Path>, matches: &ArgMatches) -> Result<()> {
    let contents = compile(config_path)?.to_ron()?;
    match matches.get_one::<PathBuf>(OUTPUT_ARG) {
        Some(output) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(watch::write_snapshot(output, &contents))?;
        }
        None => println!("{contents}"),
    }
    Ok(())
}

fn run(config_path: Option<&Path>, matches: &ArgMatches) -> Result<()> {
    let combo = matches
        .get_one::<String>(COMBO_ARG)
        .map(String::as_str)
        .unwrap_or_default();
    run_combo(&compile(config_path)?, combo)?;
    Ok(())
}

/// Starts the program bound to `combo`, e.g. `mod4+shift+Return`.
fn run_combo(snapshot: &Snapshot, combo: &str) -> Result<Child> {
    let (modifier, key) = parse_combo(combo)?;
    let table = snapshot.binding_table();
    let keybind = table
        .lookup(&modifier, &key)
        .ok_or_else(|| TileError::BindingNotFound(combo.to_owned()))?;
    let command = command::denormalize(&keybind.command).map_err(TileError::from)?;
    let child = command.execute()?;
    tracing::info!("Started `{}` (pid {})", command.describe(), child.id());
    Ok(child)
}

fn watch(config_path: Option<&Path>, matches: &ArgMatches) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path.to_owned(),
        None => config::default_path()?,
    };
    let output = match matches.get_one::<PathBuf>(OUTPUT_ARG) {
        Some(output) => output.clone(),
        None => BaseDirectories::with_prefix(tilekeys_core::TILEKEYS_DIR_NAME)
            .place_runtime_file(SNAPSHOT_FILE_NAME)?,
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(watch::Watcher::new(config_path, output).run())
        .map_err(|err: CliError| {
            tracing::error!("Watcher stopped: {}", err);
            err
        })
}

fn output_arg() -> Arg {
    Arg::new(OUTPUT_ARG)
        .short('o')
        .long(OUTPUT_ARG)
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Write the snapshot to PATH")
}

fn get_app() -> clap::Command {
    clap::command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(CONFIG_ARG)
                .short('c')
                .long(CONFIG_ARG)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Config file to use instead of the one in the xdg config home"),
        )
        .subcommand(
            clap::Command::new(CHECK_COMMAND)
                .about("Validate the config and report conflicting bindings"),
        )
        .subcommand(clap::Command::new(KEYS_COMMAND).about("List every key binding"))
        .subcommand(clap::Command::new(GROUPS_COMMAND).about("List groups and their number keys"))
        .subcommand(
            clap::Command::new(DUMP_COMMAND)
                .about("Print the compiled snapshot")
                .arg(output_arg()),
        )
        .subcommand(
            clap::Command::new(RUN_COMMAND)
                .about("Run the program bound to a key combination, e.g. mod4+Return")
                .arg(Arg::new(COMBO_ARG).required(true)),
        )
        .subcommand(
            clap::Command::new(WATCH_COMMAND)
                .about("Keep the snapshot up to date, reloading on SIGHUP or file changes")
                .arg(output_arg()),
        )
}

fn setup_logging() {
    let subscriber = fmt::Layer::new().with_writer(std::io::stderr);
    let log_level = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let collector = tracing_subscriber::registry()
        .with(log_level)
        .with(subscriber);

    tracing::subscriber::set_global_default(collector).expect("Couldn't setup logging");
}
