// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by mount operations and table parsing.
///
/// Nothing is retried or recovered locally; the caller decides.
#[derive(Debug, Error)]
pub enum Error {
    /// The mount or unmount system call failed.
    #[error("{op} {target} failed: {source}")]
    Os {
        op: &'static str,
        target: String,
        #[source]
        source: rustix::io::Errno,
    },
    /// A mount table file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A non-blank line had fewer fields than fstab(5) requires.
    #[error("invalid mount: {line}")]
    Parse { line_no: usize, line: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The untouched OS error code, if this failure carries one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Error::Os { source, .. } => Some(source.raw_os_error()),
            Error::Io { source, .. } => source.raw_os_error(),
            Error::Parse { .. } => None,
        }
    }
}
