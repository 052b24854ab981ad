use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use anyhow::Result;
use plugtrace_runtime::{Config, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config_path = data_dir.join("config.toml");

    match cli.command {
        Commands::Timeline {
            file,
            group_by,
            skip_invalid,
        } => {
            let config = Config::load_from(&config_path)?;
            handlers::timeline::handle(&config, &file, group_by, skip_invalid, cli.format)
        }

        Commands::Query { filter, top } => {
            let config = Config::load_from(&config_path)?;
            handlers::query::handle(&config, filter.as_deref(), top, cli.format)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&config_path, cli.format),
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}
