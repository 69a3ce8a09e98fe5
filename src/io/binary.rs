// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CSG-STL Contributors

//! Binary STL writer
//!
//! Little-endian throughout, exact layout:
//!
//! ```text
//! UINT8[80]    – Header                 -     80 bytes
//! UINT32       – Number of triangles    -      4 bytes
//! foreach triangle                      - 50 bytes:
//!     REAL32[3] – Normal vector             - 12 bytes
//!     REAL32[3] – Vertex 1                  - 12 bytes
//!     REAL32[3] – Vertex 2                  - 12 bytes
//!     REAL32[3] – Vertex 3                  - 12 bytes
//!     UINT16    – Attribute byte count      -  2 bytes
//! end
//! ```

use crate::geometry::{fan_triangles, Solid};
use anyhow::Result;
use std::io::Write;

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Build the 80-byte binary header for `name`.
///
/// Many STL consumers sniff the leading bytes for the ASCII signature
/// `solid` to decide between the two encodings, so the header must never
/// start with it. Names carrying that prefix (case-insensitively) get the
/// literal `stlbin` written first; the ASCII rendering of the name follows
/// for as many bytes as fit, and the rest stays zero.
pub(crate) fn stl_binary_header(name: &str) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    let mut cursor = 0;

    if name.len() >= 5 && name.as_bytes()[..5].eq_ignore_ascii_case(b"solid") {
        header[..6].copy_from_slice(b"stlbin");
        cursor = 6;
    }

    // ASCII transcoding: non-ASCII characters become '?', truncate to fit.
    for (dst, ch) in header[cursor..].iter_mut().zip(name.chars()) {
        *dst = if ch.is_ascii() { ch as u8 } else { b'?' };
    }

    header
}

/// Stream the binary STL document to a caller-owned sink.
///
/// The triangle count precedes the records, so a counting pass over all
/// polygons runs before any record is written; nothing is buffered. Every
/// coordinate is narrowed from `f64` to IEEE-754 single precision. Total
/// output is exactly `84 + 50 * count` bytes.
pub fn write_stl_binary<W: Write>(solid: &Solid, name: &str, writer: &mut W) -> Result<()> {
    writer.write_all(&stl_binary_header(name))?;

    let count = solid.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for polygon in &solid.polygons {
        let normal = &polygon.plane.normal;
        for [v0, v1, v2] in fan_triangles(polygon) {
            write_triple(writer, normal.x, normal.y, normal.z)?;
            write_triple(writer, v0.pos.x, v0.pos.y, v0.pos.z)?;
            write_triple(writer, v1.pos.x, v1.pos.y, v1.pos.z)?;
            write_triple(writer, v2.pos.x, v2.pos.y, v2.pos.z)?;
            writer.write_all(&0u16.to_le_bytes())?;
        }
    }

    Ok(())
}

fn write_triple<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> Result<()> {
    writer.write_all(&(x as f32).to_le_bytes())?;
    writer.write_all(&(y as f32).to_le_bytes())?;
    writer.write_all(&(z as f32).to_le_bytes())?;
    Ok(())
}
