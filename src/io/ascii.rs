// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CSG-STL Contributors

//! ASCII STL writer
//!
//! Line-oriented text grammar, one directive per line, `\n` line endings:
//!
//! ```text
//! solid <name>
//! facet normal <nx> <ny> <nz>
//! outer loop
//! vertex <x> <y> <z>
//! vertex <x> <y> <z>
//! vertex <x> <y> <z>
//! endloop
//! endfacet
//! endsolid <name>
//! ```
//!
//! Coordinates are rendered with `f64`'s `Display`: the shortest decimal
//! digit sequence that round-trips through `f64::from_str`, `.` as the
//! decimal point, no thousands separators, no exponent notation. The output
//! is locale-independent by construction. Non-finite components are not
//! intercepted and render as `Display` prints them.

use crate::geometry::{fan_triangles, Polygon, Solid, Vertex};
use anyhow::Result;
use std::io::Write;

/// Render the full ASCII STL document as an in-memory string.
pub fn to_stl_string(solid: &Solid, name: &str) -> Result<String> {
    let mut buf = Vec::new();
    write_stl_ascii(solid, name, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Stream the ASCII STL document to a caller-owned sink.
///
/// `name` appears verbatim after `solid` and `endsolid`, not escaped or
/// quoted. The sink's lifecycle is owned by the caller; a write failure
/// aborts the export and may leave a truncated document behind.
pub fn write_stl_ascii<W: Write>(solid: &Solid, name: &str, writer: &mut W) -> Result<()> {
    writeln!(writer, "solid {}", name)?;
    for polygon in &solid.polygons {
        write_polygon_ascii(polygon, writer)?;
    }
    writeln!(writer, "endsolid {}", name)?;
    Ok(())
}

/// Write the facet blocks for a single polygon, no header or footer.
///
/// One block per fan triangle, each carrying the polygon's plane normal.
/// Polygons with fewer than 3 vertices produce no output.
pub fn write_polygon_ascii<W: Write>(polygon: &Polygon, writer: &mut W) -> Result<()> {
    let normal = &polygon.plane.normal;
    for [v0, v1, v2] in fan_triangles(polygon) {
        writeln!(writer, "facet normal {} {} {}", normal.x, normal.y, normal.z)?;
        writeln!(writer, "outer loop")?;
        write_vertex(v0, writer)?;
        write_vertex(v1, writer)?;
        write_vertex(v2, writer)?;
        writeln!(writer, "endloop")?;
        writeln!(writer, "endfacet")?;
    }
    Ok(())
}

fn write_vertex<W: Write>(vertex: &Vertex, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "vertex {} {} {}",
        vertex.pos.x, vertex.pos.y, vertex.pos.z
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Plane;
    use nalgebra::Vector3;

    fn unit_triangle() -> Polygon {
        Polygon::new(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 0.0, 0.0),
                Vertex::from_coords(0.0, 1.0, 0.0),
            ],
            Plane::new(Vector3::new(0.0, 0.0, 1.0)),
        )
    }

    #[test]
    fn test_single_triangle_document() {
        let solid = Solid::from_polygons(vec![unit_triangle()]);
        let text = to_stl_string(&solid, "test").unwrap();

        let expected = "solid test\n\
                        facet normal 0 0 1\n\
                        outer loop\n\
                        vertex 0 0 0\n\
                        vertex 1 0 0\n\
                        vertex 0 1 0\n\
                        endloop\n\
                        endfacet\n\
                        endsolid test\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_solid_document() {
        let text = to_stl_string(&Solid::empty(), "nothing").unwrap();
        assert_eq!(text, "solid nothing\nendsolid nothing\n");
    }

    #[test]
    fn test_degenerate_polygon_writes_nothing() {
        let mut polygon = unit_triangle();
        polygon.vertices.truncate(2);

        let mut buf = Vec::new();
        write_polygon_ascii(&polygon, &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_quad_emits_two_facets_in_fan_order() {
        let polygon = Polygon::new(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 1.0, 0.0),
                Vertex::from_coords(0.0, 1.0, 0.0),
            ],
            Plane::new(Vector3::new(0.0, 0.0, 1.0)),
        );

        let mut buf = Vec::new();
        write_polygon_ascii(&polygon, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.matches("facet normal 0 0 1").count(), 2);
        // Both facets pivot on vertex 0.
        assert_eq!(text.matches("vertex 0 0 0").count(), 2);
        assert_eq!(text.matches("vertex 1 1 0").count(), 2);
    }

    #[test]
    fn test_fractional_coordinates_keep_decimal_point() {
        let polygon = Polygon::new(
            vec![
                Vertex::from_coords(0.5, -0.25, 1.5),
                Vertex::from_coords(2.0, 0.0, 0.0),
                Vertex::from_coords(0.0, 2.0, 0.0),
            ],
            Plane::new(Vector3::new(0.0, 0.0, 1.0)),
        );
        let solid = Solid::from_polygons(vec![polygon]);
        let text = to_stl_string(&solid, "frac").unwrap();

        assert!(text.contains("vertex 0.5 -0.25 1.5"));
        assert!(text.contains("vertex 2 0 0"));
    }

    #[test]
    fn test_name_written_verbatim() {
        let text = to_stl_string(&Solid::empty(), "a b\"c").unwrap();
        assert!(text.starts_with("solid a b\"c\n"));
        assert!(text.ends_with("endsolid a b\"c\n"));
    }
}
