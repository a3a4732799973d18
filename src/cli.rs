//! CLI definitions for jobboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use jobboard_config::{Config, ConfigLoader};

/// jobboard CLI.
#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "In-memory job listing service")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults apply when it does not exist)
    #[arg(short, long, env = "JOBBOARD_CONFIG", default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run(RunArgs),
}

/// Overrides for values from the configuration file.
#[derive(Args, Default)]
pub(crate) struct RunArgs {
    /// Server host
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Seed file with the initial job listings
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Start with an empty store if the seed file is missing
    #[arg(long)]
    pub allow_missing_seed: bool,
}

impl RunArgs {
    /// Apply the overrides on top of `config`.
    pub fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(seed) = self.seed {
            config.store.seed_path =
                PathBuf::from(ConfigLoader::expand_path(&seed.to_string_lossy()));
        }
        if self.allow_missing_seed {
            config.store.seed_required = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["jobboard"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "jobboard",
            "--config",
            "/etc/jobboard.toml",
            "run",
            "--host",
            "0.0.0.0",
            "--port",
            "8000",
            "--seed",
            "data/jobs.json",
            "--allow-missing-seed",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/jobboard.toml"));

        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run subcommand");
        };
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.store.seed_path, PathBuf::from("data/jobs.json"));
        assert!(!config.store.seed_required);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = Config::default();
        config.server.port = 7000;
        RunArgs::default().apply(&mut config);
        assert_eq!(config.server.port, 7000);
        assert!(config.store.seed_required);
    }

    #[test]
    fn test_seed_override_expands_tilde() {
        let cli = Cli::try_parse_from(["jobboard", "run", "--seed", "~/jobs.json"]).unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run subcommand");
        };
        let mut config = Config::default();
        args.apply(&mut config);
        assert!(!config.store.seed_path.starts_with("~"));
        assert!(config.store.seed_path.ends_with("jobs.json"));
    }

    #[test]
    fn test_parse_invalid_port() {
        assert!(Cli::try_parse_from(["jobboard", "run", "--port", "70000"]).is_err());
    }
}
