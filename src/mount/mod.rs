// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod fstab;
pub mod mnt;
pub mod ops;
