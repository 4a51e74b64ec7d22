// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod log;

pub use self::log::*;
