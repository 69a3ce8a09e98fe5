// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CSG-STL Contributors

//! Boundary-solid snapshot handed in by the CSG engine

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Vertex on a polygon loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub pos: Point3<f64>,
}

impl Vertex {
    pub fn new(pos: Point3<f64>) -> Self {
        Self { pos }
    }

    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            pos: Point3::new(x, y, z),
        }
    }
}

/// Supporting plane of a polygon.
///
/// Carries the unit-length face normal supplied by the upstream engine. The
/// normal is authoritative: export uses it verbatim for every triangle of the
/// polygon and never recomputes it from vertex geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vector3<f64>,
}

impl Plane {
    pub fn new(normal: Vector3<f64>) -> Self {
        Self { normal }
    }
}

/// Planar polygon loop with its supporting plane.
///
/// Winding order is significant for display but never re-derived here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    /// Number of triangles a fan decomposition of this polygon yields.
    ///
    /// Loops with fewer than 3 vertices are degenerate and contribute none.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }
}

/// Ordered polygon soup produced by the CSG engine.
///
/// Polygon order is preserved in output but has no semantic effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub polygons: Vec<Polygon>,
}

impl Solid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Get polygon count
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Total triangles across all polygons
    pub fn triangle_count(&self) -> usize {
        self.polygons.iter().map(Polygon::triangle_count).sum()
    }
}
