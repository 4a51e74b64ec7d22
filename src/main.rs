// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

mod conf;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use conf::{
    cli::{Cli, Commands},
    cli_handlers,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::GenConfig { output } = &cli.command {
        return cli_handlers::handle_gen_config(output);
    }

    let mut config = cli_handlers::load_config(&cli)?;

    let table_override = match &cli.command {
        Commands::List { table, .. } => table.clone(),
        _ => None,
    };
    config.merge_with_cli(table_override, cli.verbose);

    let _log_guard = utils::init_logging(config.verbose, config.log_file.as_deref())
        .context("Failed to initialize logging")?;

    match &cli.command {
        Commands::List { json, .. } => cli_handlers::handle_list(&config, *json)?,
        Commands::Mount {
            source,
            target,
            fstype,
            flags,
            data,
        } => cli_handlers::handle_mount(source, target, fstype, *flags, data)?,
        Commands::Umount {
            target,
            flags,
            force,
            detach,
        } => cli_handlers::handle_umount(target, *flags, *force, *detach)?,
        Commands::ShowConfig => cli_handlers::handle_show_config(&config)?,
        Commands::GenConfig { .. } => {}
    }

    Ok(())
}
