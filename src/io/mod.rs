// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CSG-STL Contributors

//! I/O module - STL encodings and file export

mod ascii;
mod binary;
mod exporter;

pub use ascii::{to_stl_string, write_polygon_ascii, write_stl_ascii};
pub use binary::write_stl_binary;
pub use exporter::{export_stl, StlFormat};
