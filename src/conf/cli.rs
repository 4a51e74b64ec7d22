// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::conf::config::CONFIG_FILE_DEFAULT;

#[derive(Parser, Debug)]
#[command(name = "mountutil", version, about = "Mount, unmount and list filesystems")]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every entry of a mount table
    List {
        #[arg(short = 't', long = "table")]
        table: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    Mount {
        source: String,
        target: String,
        #[arg(short = 't', long = "types", default_value = "")]
        fstype: String,
        /// Raw MS_* bits passed to mount(2)
        #[arg(long, default_value_t = 0, value_parser = parse_bits)]
        flags: u32,
        #[arg(short = 'o', long = "options", default_value = "")]
        data: String,
    },
    #[command(name = "umount")]
    Umount {
        target: String,
        /// Raw MNT_* bits passed to umount2(2)
        #[arg(long, default_value_t = 0, value_parser = parse_bits)]
        flags: u32,
        #[arg(short = 'f', long)]
        force: bool,
        #[arg(short = 'l', long)]
        detach: bool,
    },
    GenConfig {
        #[arg(short = 'o', long = "output", default_value = CONFIG_FILE_DEFAULT)]
        output: PathBuf,
    },
    ShowConfig,
}

fn parse_bits(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid flag bits '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits_accept_hex_and_decimal() {
        assert_eq!(parse_bits("0x1000"), Ok(0x1000));
        assert_eq!(parse_bits("4096"), Ok(4096));
        assert!(parse_bits("ro").is_err());
    }

    #[test]
    fn parses_mount_command() {
        let cli = Cli::try_parse_from([
            "mountutil", "mount", "tmpfs", "/mnt", "-t", "tmpfs", "--flags", "0x6", "-o",
            "size=1m",
        ])
        .unwrap();

        match cli.command {
            Commands::Mount {
                source,
                target,
                fstype,
                flags,
                data,
            } => {
                assert_eq!(source, "tmpfs");
                assert_eq!(target, "/mnt");
                assert_eq!(fstype, "tmpfs");
                assert_eq!(flags, 6);
                assert_eq!(data, "size=1m");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_list_with_table() {
        let cli = Cli::try_parse_from(["mountutil", "-v", "list", "--table", "/etc/fstab"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List { table: Some(_), json: false }));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
