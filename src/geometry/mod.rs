// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CSG-STL Contributors

//! Geometry module - the boundary-solid input snapshot and its triangulation

mod solid;
mod triangulate;

pub use solid::{Plane, Polygon, Solid, Vertex};
pub use triangulate::fan_triangles;
