// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fs, path::Path};

#[cfg(any(target_os = "linux", target_os = "android"))]
use rustix::{
    mount::{MountFlags, UnmountFlags},
    path::Arg,
};

use crate::{
    defs,
    error::{Error, Result},
    mount::{fstab::parse_fstab, mnt::Mnt},
};

/// Calls mount(2) with the arguments exactly as given.
///
/// An empty `data` is passed to the kernel as NULL.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn mount(
    source: &str,
    target: &str,
    fstype: &str,
    flags: MountFlags,
    data: &str,
) -> Result<()> {
    log::debug!(
        "mount {} on {} type {} flags {:#x} data '{}'",
        source,
        target,
        fstype,
        flags.bits(),
        data
    );

    let os_err = |source| Error::Os {
        op: "mount",
        target: target.to_string(),
        source,
    };

    let data = if data.is_empty() {
        None
    } else {
        Some(data.into_c_str().map_err(os_err)?)
    };

    rustix::mount::mount(source, target, fstype, flags, data.as_deref()).map_err(os_err)
}

/// Calls umount2(2). No retries.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn unmount(target: &str, flags: UnmountFlags) -> Result<()> {
    log::debug!("unmount {} flags {:#x}", target, flags.bits());

    rustix::mount::unmount(target, flags).map_err(|source| Error::Os {
        op: "unmount",
        target: target.to_string(),
        source,
    })
}

/// Reads and parses the live mount table.
///
/// Every call reads the file again; concurrent mount changes may show up as a
/// partial snapshot.
pub fn mounts() -> Result<Vec<Mnt>> {
    mounts_from(defs::PROC_MOUNTS)
}

/// Reads and parses any fstab(5) formatted file.
pub fn mounts_from<P: AsRef<Path>>(path: P) -> Result<Vec<Mnt>> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_fstab(&contents)
}

#[cfg(all(test, any(target_os = "linux", target_os = "android")))]
mod tests {
    use rustix::io::Errno;

    use super::*;

    #[test]
    fn interior_nul_in_data_is_einval() {
        let err = mount("none", "/nonexistent", "tmpfs", MountFlags::empty(), "a\0b").unwrap_err();
        match err {
            Error::Os { op, source, .. } => {
                assert_eq!(op, "mount");
                assert_eq!(source, Errno::INVAL);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn proc_mounts_lists_root() {
        let mnts = mounts().unwrap();
        assert!(mnts.iter().any(|m| m.mount_point() == "/"));
    }
}
