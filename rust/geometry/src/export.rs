// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ export

use std::io::{self, Write};

use crate::mesh::Mesh;

/// Streams polygon meshes into one OBJ document.
///
/// Coordinates are converted from Z-up to the Y-up OBJ convention. Every
/// material group becomes a `usemtl` block named after the group.
pub struct ObjWriter<W: Write> {
    out: W,
    vertex_offset: usize,
    objects: usize,
}

impl<W: Write> ObjWriter<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "# Generated by cynthia")?;
        writeln!(out, "# Coordinate system: Y-up (OBJ convention)")?;
        Ok(Self {
            out,
            vertex_offset: 0,
            objects: 0,
        })
    }

    /// Append `mesh` as object `name`
    pub fn write_mesh(&mut self, name: &str, mesh: &Mesh) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "o {}", name.replace(char::is_whitespace, "_"))?;

        // OBJ X = X, OBJ Y = Z (up), OBJ Z = -Y; a rotation, so winding holds
        for v in &mesh.vertices {
            writeln!(self.out, "v {:.6} {:.6} {:.6}", v.x, v.z, -v.y)?;
        }

        for (group, faces) in mesh.partition() {
            if faces.is_empty() {
                continue;
            }
            writeln!(self.out, "usemtl {group}")?;
            for index in faces {
                write!(self.out, "f")?;
                for i in &mesh.faces[index].indices {
                    write!(self.out, " {}", *i as usize + self.vertex_offset + 1)?;
                }
                writeln!(self.out)?;
            }
        }

        self.vertex_offset += mesh.vertex_count();
        self.objects += 1;
        Ok(())
    }

    /// Number of objects written so far
    pub fn object_count(&self) -> usize {
        self.objects
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Write a single mesh as a complete OBJ document
pub fn write_obj<W: Write>(out: W, name: &str, mesh: &Mesh) -> io::Result<()> {
    let mut writer = ObjWriter::new(out)?;
    writer.write_mesh(name, mesh)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn triangle(group: usize) -> Mesh {
        let mut mesh = Mesh::with_groups(&["frame", "glass"]);
        mesh.add_polygon(
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            group,
        );
        mesh
    }

    #[test]
    fn test_single_object() {
        let mut out = Vec::new();
        write_obj(&mut out, "Window 1", &triangle(1)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("o Window_1"));
        assert!(text.contains("v 0.000000 1.000000 -0.000000"));
        assert!(text.contains("usemtl glass\nf 1 2 3"));
        assert!(!text.contains("usemtl frame"));
    }

    #[test]
    fn test_vertex_offsets_accumulate() {
        let mut writer = ObjWriter::new(Vec::new()).unwrap();
        writer.write_mesh("a", &triangle(0)).unwrap();
        writer.write_mesh("b", &triangle(0)).unwrap();
        assert_eq!(writer.object_count(), 2);

        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(text.contains("f 4 5 6"));
    }
}
