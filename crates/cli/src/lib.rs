pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rigcheck_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::SelectionArgs;

#[derive(Debug, Parser)]
#[command(
    name = "rigcheck",
    about = "Rigcheck PC build advisor",
    long_about = "Check PC component selections for compatibility, score them, suggest \
                  missing parts and browse the component catalog.",
    after_help = "Examples:\n  rigcheck check --preset gaming-1440p\n  \
                  rigcheck check --pick cpu=cpu-r5-7600 --pick mainboard=mb-b650\n  \
                  rigcheck browse gpu --search rtx\n  rigcheck doctor --json"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Read configuration from PATH")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "PATH", help = "Use a custom catalog file")]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Assess a build: findings, score, suggestions and a price summary")]
    Check(SelectionArgs),
    #[command(about = "Suggest catalog parts for the empty slots of a build")]
    Suggest(SelectionArgs),
    #[command(about = "List reference builds with their resolved components")]
    Presets,
    #[command(about = "List catalog parts for one slot, compatible parts first")]
    Browse {
        #[arg(help = "Slot to browse (cpu, gpu, mainboard, ram, ssd, hdd, psu, cooling, case)")]
        slot: String,
        #[arg(long, help = "Case-insensitive name or brand filter")]
        search: Option<String>,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate configuration, catalog loading and preset references")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            overrides: ConfigOverrides {
                catalog_path: self.catalog.clone(),
                ..ConfigOverrides::default()
            },
        }
    }
}

/// Installs the fmt subscriber on stderr so stdout carries only command output.
///
/// A configuration that fails to load falls back to defaults here; the command
/// itself reports the failure.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_logging(options: &LoadOptions) {
    let config = AppConfig::load(options.clone()).unwrap_or_default();
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(log_filter(&config.logging.level))
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = cli.load_options();
    init_logging(&options);

    let result = match &cli.command {
        Command::Check(selection) => commands::check::run(&options, selection),
        Command::Suggest(selection) => commands::suggest::run(&options, selection),
        Command::Presets => commands::presets::run(&options),
        Command::Browse { slot, search, selection } => {
            commands::browse::run(&options, slot, search.as_deref(), selection)
        }
        Command::Config => commands::config::run(&options),
        Command::Doctor { json } => commands::doctor::run(&options, *json),
    };

    debug!(
        event_name = "cli.command.finished",
        exit_code = result.exit_code,
        "command finished"
    );
    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::{log_filter, Cli, Command};

    #[test]
    fn picks_and_global_flags_parse() {
        let cli = Cli::try_parse_from([
            "rigcheck",
            "check",
            "--preset",
            "gaming-1080p",
            "--pick",
            "gpu=gpu-rtx4060ti",
            "--pick",
            "hdd=hdd-1tb",
            "--catalog",
            "shop.toml",
        ])
        .expect("arguments should parse");

        let options = cli.load_options();
        assert_eq!(options.overrides.catalog_path.as_deref(), Some(Path::new("shop.toml")));
        assert!(!options.require_file);

        let Command::Check(selection) = cli.command else {
            panic!("expected the check command");
        };
        assert_eq!(selection.preset.as_deref(), Some("gaming-1080p"));
        assert_eq!(selection.picks, vec!["gpu=gpu-rtx4060ti", "hdd=hdd-1tb"]);
    }

    #[test]
    fn explicit_config_path_is_required_to_exist() {
        let cli = Cli::try_parse_from(["rigcheck", "--config", "custom.toml", "presets"])
            .expect("arguments should parse");

        let options = cli.load_options();
        assert!(options.require_file);
        assert_eq!(options.config_path.as_deref(), Some(Path::new("custom.toml")));
    }

    #[test]
    fn configured_level_becomes_the_log_filter() {
        assert_eq!(log_filter("debug").to_string(), "debug");
        assert_eq!(log_filter("warn").to_string(), "warn");
    }

    #[test]
    fn browse_takes_a_positional_slot() {
        let cli = Cli::try_parse_from(["rigcheck", "browse", "gpu", "--search", "rtx"])
            .expect("arguments should parse");

        let Command::Browse { slot, search, selection } = cli.command else {
            panic!("expected the browse command");
        };
        assert_eq!(slot, "gpu");
        assert_eq!(search.as_deref(), Some("rtx"));
        assert!(selection.picks.is_empty());
    }
}
