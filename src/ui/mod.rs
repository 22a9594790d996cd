// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the canvas annotator.

pub mod canvas;
pub mod status;
pub mod trackbars;
