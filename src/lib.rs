// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mount and unmount filesystems, and read fstab(5) formatted mount tables.
//!
//! ```no_run
//! for mnt in mountutil::mounts()? {
//!     println!("{} on {} type {}", mnt.device(), mnt.mount_point(), mnt.filesystem());
//! }
//! # Ok::<(), mountutil::Error>(())
//! ```

pub mod defs;
pub mod error;
pub mod mount;

pub use error::{Error, Result};
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use mount::ops::{mount, unmount};
pub use mount::{
    fstab::parse_fstab,
    mnt::Mnt,
    ops::{mounts, mounts_from},
};
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use rustix::mount::{MountFlags, UnmountFlags};
