// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Core data model: the canvas, the shapes drawn on it, and the annotator
//! state machine that ties pointer, slider and key input together.

pub mod annotator;
pub mod canvas;
pub mod shape;
