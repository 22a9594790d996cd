// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for the preview resource and configuration files.

pub mod media;
pub mod serialization;
