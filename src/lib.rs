// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CSG-STL Contributors

//! CSG-STL
//!
//! Byte-exact STL export for boundary-represented solids.
//! Consumes the polygon soup produced by a CSG engine and streams it as
//! ASCII or binary STL to a caller-owned sink.

pub mod geometry;
pub mod io;

pub use geometry::{fan_triangles, Plane, Polygon, Solid, Vertex};
pub use io::{
    export_stl, to_stl_string, write_polygon_ascii, write_stl_ascii, write_stl_binary, StlFormat,
};
