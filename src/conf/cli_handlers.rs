// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use anyhow::{Context, Result};
use mountutil::Mnt;

use crate::conf::{
    cli::Cli,
    config::{CONFIG_FILE_DEFAULT, Config},
};

pub fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        return Config::from_file(config_path).with_context(|| {
            format!(
                "Failed to load config from custom path: {}",
                config_path.display()
            )
        });
    }

    match Config::load_default() {
        Ok(config) => Ok(config),
        Err(e) => {
            let is_not_found = e
                .root_cause()
                .downcast_ref::<std::io::Error>()
                .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                .unwrap_or(false);

            if is_not_found {
                Ok(Config::default())
            } else {
                Err(e).context(format!(
                    "Failed to load default config from {}",
                    CONFIG_FILE_DEFAULT
                ))
            }
        }
    }
}

pub fn handle_gen_config(output: &Path) -> Result<()> {
    Config::default()
        .save_to_file(output)
        .with_context(|| format!("Failed to save generated config to {}", output.display()))
}

pub fn handle_show_config(config: &Config) -> Result<()> {
    let json = serde_json::to_string(config).context("Failed to serialize config to JSON")?;

    println!("{}", json);

    Ok(())
}

pub fn handle_list(config: &Config, json: bool) -> Result<()> {
    println!("{}", list_output(config, json)?);

    Ok(())
}

fn list_output(config: &Config, json: bool) -> Result<String> {
    let mnts = mountutil::mounts_from(&config.table_path)
        .with_context(|| format!("Failed to list mounts from {}", config.table_path.display()))?;

    tracing::debug!(
        "Read {} entries from {}",
        mnts.len(),
        config.table_path.display()
    );

    if json {
        return serde_json::to_string(&mnts).context("Failed to serialize mounts to JSON");
    }

    Ok(mnts.iter().map(render).collect::<Vec<_>>().join("\n"))
}

fn render(mnt: &Mnt) -> String {
    format!(
        "{} on {} type {} ({})",
        mnt.device(),
        mnt.mount_point(),
        mnt.filesystem(),
        mnt.options_field()
    )
}

#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn handle_mount(source: &str, target: &str, fstype: &str, flags: u32, data: &str) -> Result<()> {
    use mountutil::MountFlags;

    mountutil::mount(
        source,
        target,
        fstype,
        MountFlags::from_bits_retain(flags),
        data,
    )
    .with_context(|| format!("Failed to mount {} on {}", source, target))?;

    tracing::info!("Mounted {} on {}", source, target);

    Ok(())
}

#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn handle_umount(target: &str, flags: u32, force: bool, detach: bool) -> Result<()> {
    use mountutil::UnmountFlags;

    let mut flags = UnmountFlags::from_bits_retain(flags);
    if force {
        flags |= UnmountFlags::FORCE;
    }
    if detach {
        flags |= UnmountFlags::DETACH;
    }

    mountutil::unmount(target, flags).with_context(|| format!("Failed to unmount {}", target))?;

    tracing::info!("Unmounted {}", target);

    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn handle_mount(_: &str, _: &str, _: &str, _: u32, _: &str) -> Result<()> {
    anyhow::bail!("mount is only supported on Linux")
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn handle_umount(_: &str, _: u32, _: bool, _: bool) -> Result<()> {
    anyhow::bail!("umount is only supported on Linux")
}
