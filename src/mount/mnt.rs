// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{defs, error::Error, mount::fstab};

/// One entry of a mount table.
///
/// Values are plain data: nothing is validated and nothing refers back to
/// the table they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Mnt {
    device: String,
    mount_point: String,
    filesystem: String,
    options: Vec<String>,
}

impl Mnt {
    pub fn new(
        device: impl Into<String>,
        mount_point: impl Into<String>,
        filesystem: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            device: device.into(),
            mount_point: mount_point.into(),
            filesystem: filesystem.into(),
            options,
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    pub fn filesystem(&self) -> &str {
        &self.filesystem
    }

    /// Options in source order, duplicates kept.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.iter().any(|o| o == name)
    }

    /// The options field as it appeared in the table.
    pub fn options_field(&self) -> String {
        self.options.join(defs::OPTION_SEPARATOR)
    }
}

impl fmt::Display for Mnt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.device,
            self.mount_point,
            self.filesystem,
            self.options_field()
        )
    }
}

impl FromStr for Mnt {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        fstab::parse_line(1, line)?.ok_or_else(|| Error::Parse {
            line_no: 1,
            line: line.to_string(),
        })
    }
}
