use anyhow::Context;
use clap::{Parser, Subcommand};
use sdplugin_paths::{logger, process, Grammar, PathResolutionError, PathUtility, PluginLocator};
use serde::Serialize;
use serde_json::Value;

/// Inspect plugin paths the way a plugin process sees them.
#[derive(Parser)]
#[command(name = "sdpaths", version)]
struct Cli {
    /// Path grammar to parse with (windows or posix)
    #[arg(long, global = true, default_value_t = Grammar::default())]
    grammar: Grammar,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Last component of a path
    FileName { path: String },
    /// Extension of a path's file name
    Extension { path: String },
    /// Join a component onto a path
    Join { path: String, component: String },
    /// Parent directory of a path
    Parent { path: String },
    /// Whether a path is a network server root
    IsNetworkRoot { path: String },
    /// Bundle root of this executable
    PluginDir,
    /// Absolute path of this executable
    Exe,
    /// Sleep for a number of milliseconds
    Sleep { milliseconds: u64 },
}

#[derive(Serialize)]
struct Report<'a> {
    operation: &'a str,
    input: Vec<&'a str>,
    result: Value,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !logger::init(cli.verbose) {
        log::debug!("logger already installed, keeping it");
    }

    let paths = PathUtility::new(cli.grammar);
    let (operation, input, result): (&str, Vec<&str>, Value) = match &cli.command {
        Command::FileName { path } => ("file-name", vec![path.as_str()], paths.file_name(path).into()),
        Command::Extension { path } => ("extension", vec![path.as_str()], paths.extension(path).into()),
        Command::Join { path, component } => (
            "join",
            vec![path.as_str(), component.as_str()],
            paths.add_path_component(path, component).into(),
        ),
        Command::Parent { path } => ("parent", vec![path.as_str()], paths.parent_directory_path(path).into()),
        Command::IsNetworkRoot { path } => (
            "is-network-root",
            vec![path.as_str()],
            paths.is_network_drive_root(path).into(),
        ),
        Command::PluginDir => {
            let exe = process::plugin_executable_path()
                .context("Failed to query the executable path")?;
            let locator = PluginLocator::with_grammar(
                move || Ok::<_, PathResolutionError>(exe.clone()),
                cli.grammar,
            );
            let found = locator
                .plugin_directory_path()
                .context("Failed to resolve the plugin directory")?;
            ("plugin-dir", Vec::new(), found.map_or(Value::Null, Value::from))
        }
        Command::Exe => {
            let exe = process::plugin_executable_path()
                .context("Failed to query the executable path")?;
            ("exe", Vec::new(), exe.into())
        }
        Command::Sleep { milliseconds } => {
            process::do_sleep(*milliseconds);
            ("sleep", Vec::new(), Value::from(*milliseconds))
        }
    };

    if cli.json {
        let report = Report { operation, input, result };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match result {
            Value::String(s) => println!("{s}"),
            Value::Null => println!(),
            other => println!("{other}"),
        }
    }

    Ok(())
}
