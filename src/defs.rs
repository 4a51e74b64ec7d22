// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

// Live mount table exposed by the kernel
pub const PROC_MOUNTS: &str = "/proc/mounts";

// Minimum whitespace-separated fields on a fstab(5) line
pub const FSTAB_MIN_FIELDS: usize = 6;

pub const OPTION_SEPARATOR: &str = ",";

pub const CONFIG_FILE: &str = "/etc/mountutil/config.toml";
