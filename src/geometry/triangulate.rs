// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CSG-STL Contributors

//! Fan triangulation of polygon loops

use super::{Polygon, Vertex};

/// Decompose a polygon loop into a fan of triangles pivoting on vertex 0.
///
/// A loop of k vertices yields k - 2 triangles: triangle i is
/// `(vertex[0], vertex[i + 1], vertex[i + 2])`. Loops with fewer than 3
/// vertices yield nothing. The input is assumed planar and convex, a
/// guarantee inherited from the upstream CSG engine; non-convex loops
/// produce structurally well-formed but geometrically invalid triangles.
pub fn fan_triangles<'a>(polygon: &'a Polygon) -> impl Iterator<Item = [&'a Vertex; 3]> + 'a {
    let vertices = &polygon.vertices;
    (1..vertices.len().saturating_sub(1)).map(move |i| [&vertices[0], &vertices[i], &vertices[i + 1]])
}
