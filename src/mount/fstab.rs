// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parser for the fstab(5) line format shared by `/etc/fstab` and
//! `/proc/mounts`.
//!
//! Comment lines get no special treatment: `# a b c d e` is a short line and
//! fails, while a commented line with six or more fields parses as a record.

use crate::{
    defs,
    error::{Error, Result},
    mount::mnt::Mnt,
};

/// Parses a whole mount table.
///
/// Blank lines are skipped. The first line with fewer than six fields, or
/// that is not valid UTF-8, fails the entire parse and no records are
/// returned.
pub fn parse_fstab(contents: &[u8]) -> Result<Vec<Mnt>> {
    let mut mnts = Vec::new();

    for (idx, raw) in contents.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = std::str::from_utf8(raw).map_err(|_| Error::Parse {
            line_no: idx + 1,
            line: String::from_utf8_lossy(raw).into_owned(),
        })?;

        if let Some(mnt) = parse_line(idx + 1, line)? {
            mnts.push(mnt);
        }
    }

    Ok(mnts)
}

pub(crate) fn parse_line(line_no: usize, line: &str) -> Result<Option<Mnt>> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.is_empty() {
        log::trace!("fstab: skipping blank line {}", line_no);
        return Ok(None);
    }

    if fields.len() < defs::FSTAB_MIN_FIELDS {
        return Err(Error::Parse {
            line_no,
            line: line.to_string(),
        });
    }

    let options = fields[3]
        .split(defs::OPTION_SEPARATOR)
        .map(str::to_string)
        .collect();

    Ok(Some(Mnt::new(fields[0], fields[1], fields[2], options)))
}
