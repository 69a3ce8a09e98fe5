// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 CSG-STL Contributors

//! Path-based STL export

use crate::geometry::Solid;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// STL on-disk encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlFormat {
    Ascii,
    Binary,
}

/// Export a solid to an STL file.
///
/// Convenience over the streaming writers: creates the file, streams the
/// chosen encoding through a buffered writer, and flushes before returning.
pub fn export_stl<P: AsRef<Path>>(
    solid: &Solid,
    name: &str,
    path: P,
    format: StlFormat,
) -> Result<()> {
    let file = File::create(path.as_ref()).context("Failed to create STL file")?;
    let mut writer = BufWriter::new(file);

    match format {
        StlFormat::Ascii => super::write_stl_ascii(solid, name, &mut writer)?,
        StlFormat::Binary => super::write_stl_binary(solid, name, &mut writer)?,
    }

    writer.flush().context("Failed to write STL file")?;
    Ok(())
}
