//! # STL Format Support
//!
//! Parses and writes STL (stereolithography) files, the triangulated surface
//! serialization the pipeline consumes and produces.
//!
//! # Format Detection
//!
//! ASCII files start with `solid` and contain no NUL bytes in their first 80
//! bytes; everything else is treated as binary (80-byte header, little-endian
//! u32 triangle count, 50-byte triangle records).

use std::fs;
use std::io::Write;
use std::path::Path;

use glam::DVec3;
use voronoi_mesh::Mesh;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Loads a triangulated surface from an STL file.
///
/// Fails with [`IoError::FileNotFound`] when the path is missing,
/// [`IoError::UnknownFormat`] when the extension is not `.stl`, a parse
/// variant when the content is malformed, and [`IoError::EmptyMesh`] when the
/// file holds no triangles. Format (ASCII vs binary) is detected
/// automatically.
///
/// # Example
///
/// ```no_run
/// use voronoi_io::load_stl;
///
/// let mesh = load_stl("model.stl").unwrap();
/// println!("loaded {} faces", mesh.face_count());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<Mesh> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if extension != "stl" {
        return Err(IoError::UnknownFormat { extension });
    }

    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mesh = parse_stl(&bytes)?;
    if mesh.face_count() == 0 {
        return Err(IoError::EmptyMesh {
            path: path.to_path_buf(),
        });
    }

    Ok(mesh)
}

/// Parses STL data from memory, detecting ASCII vs binary.
pub fn parse_stl(bytes: &[u8]) -> IoResult<Mesh> {
    if bytes.len() < 6 {
        return Err(IoError::invalid_content("data too small to be valid STL"));
    }

    if looks_ascii(bytes) {
        let text = std::str::from_utf8(bytes)?;
        parse_stl_ascii(text)
    } else {
        parse_stl_binary(bytes)
    }
}

/// ASCII detection: a `solid` keyword up front and no NUL bytes where the
/// binary header would be. Some binary exporters put "solid" in the header,
/// which the NUL check catches.
fn looks_ascii(bytes: &[u8]) -> bool {
    let prefix_len = bytes.len().min(HEADER_SIZE);
    let prefix = String::from_utf8_lossy(&bytes[..prefix_len]);
    prefix.trim_start().starts_with("solid") && !bytes[..prefix_len].contains(&0)
}

/// Parses binary STL: 80-byte header, u32 triangle count, 50-byte records.
fn parse_stl_binary(bytes: &[u8]) -> IoResult<Mesh> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(IoError::invalid_content(
            "binary STL shorter than its fixed header",
        ));
    }

    let face_count = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    let mut mesh = Mesh::with_capacity(face_count as usize * 3, face_count as usize);
    let mut body = &bytes[HEADER_SIZE + 4..];

    for parsed in 0..face_count {
        if body.len() < TRIANGLE_SIZE {
            return Err(IoError::InvalidFaceCount {
                expected: face_count,
                got: parsed,
            });
        }

        // Skip the 12-byte normal; vertices follow at fixed offsets.
        let v0 = read_vertex(&body[12..24]);
        let v1 = read_vertex(&body[24..36]);
        let v2 = read_vertex(&body[36..48]);

        let base = mesh.add_vertex(v0);
        mesh.add_vertex(v1);
        mesh.add_vertex(v2);
        mesh.add_face(base, base + 1, base + 2);

        body = &body[TRIANGLE_SIZE..];
    }

    Ok(mesh)
}

/// Reads a vertex from 12 bytes (3 little-endian f32s).
fn read_vertex(buf: &[u8]) -> DVec3 {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    DVec3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Parses ASCII STL (`solid` / `facet` / `outer loop` / `vertex` blocks).
fn parse_stl_ascii(text: &str) -> IoResult<Mesh> {
    let mut mesh = Mesh::new();
    let mut facet_vertices: Vec<DVec3> = Vec::with_capacity(3);

    for line in text.lines() {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "facet" => facet_vertices.clear(),
            "vertex" => {
                let mut coord = || -> IoResult<f64> {
                    let word = words
                        .next()
                        .ok_or_else(|| IoError::invalid_content("vertex with missing coordinate"))?;
                    Ok(word.parse::<f64>()?)
                };
                let x = coord()?;
                let y = coord()?;
                let z = coord()?;
                facet_vertices.push(DVec3::new(x, y, z));
            }
            "endfacet" => {
                if facet_vertices.len() != 3 {
                    return Err(IoError::invalid_content(format!(
                        "facet with {} vertices, expected 3",
                        facet_vertices.len()
                    )));
                }
                let base = mesh.add_vertex(facet_vertices[0]);
                mesh.add_vertex(facet_vertices[1]);
                mesh.add_vertex(facet_vertices[2]);
                mesh.add_face(base, base + 1, base + 2);
                facet_vertices.clear();
            }
            "endsolid" => break,
            // "solid", "outer", "endloop", normals and unknown lines
            _ => {}
        }
    }

    Ok(mesh)
}

/// Saves a mesh to an STL file.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - If true, write binary STL; if false, write ASCII
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P, binary: bool) -> IoResult<()> {
    let mut buffer = Vec::new();
    if binary {
        write_stl_binary(mesh, &mut buffer)?;
    } else {
        write_stl_ascii(mesh, &mut buffer)?;
    }
    fs::write(path, buffer)?;
    Ok(())
}

/// Writes binary STL to any writer.
pub fn write_stl_binary<W: Write>(mesh: &Mesh, mut writer: W) -> IoResult<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by voronoimaker";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    writer.write_all(&(mesh.face_count() as u32).to_le_bytes())?;

    for &[i0, i1, i2] in mesh.faces() {
        let v0 = mesh.vertex(i0);
        let v1 = mesh.vertex(i1);
        let v2 = mesh.vertex(i2);

        let normal = facet_normal(v0, v1, v2);
        for component in [normal.x, normal.y, normal.z] {
            writer.write_all(&(component as f32).to_le_bytes())?;
        }

        for vertex in [v0, v1, v2] {
            for component in [vertex.x, vertex.y, vertex.z] {
                writer.write_all(&(component as f32).to_le_bytes())?;
            }
        }

        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Writes ASCII STL to any writer.
pub fn write_stl_ascii<W: Write>(mesh: &Mesh, mut writer: W) -> IoResult<()> {
    writeln!(writer, "solid voronoimaker")?;

    for &[i0, i1, i2] in mesh.faces() {
        let v0 = mesh.vertex(i0);
        let v1 = mesh.vertex(i1);
        let v2 = mesh.vertex(i2);
        let n = facet_normal(v0, v1, v2);

        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in [v0, v1, v2] {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid voronoimaker")?;
    Ok(())
}

/// Unit normal from the facet winding order; zero for degenerate facets.
fn facet_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    let normal = (v1 - v0).cross(v2 - v0);
    let length = normal.length();
    if length > f64::EPSILON {
        normal / length
    } else {
        DVec3::ZERO
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(0, 1, 2);
        mesh
    }

    #[test]
    fn test_roundtrip_binary_in_memory() {
        let original = test_triangle();

        let mut buffer = Vec::new();
        write_stl_binary(&original, &mut buffer).unwrap();
        let loaded = parse_stl(&buffer).unwrap();

        assert_eq!(loaded.face_count(), original.face_count());
        assert_eq!(loaded.vertex_count(), 3);
        assert!((loaded.vertex(1) - DVec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_roundtrip_ascii_in_memory() {
        let original = test_triangle();

        let mut buffer = Vec::new();
        write_stl_ascii(&original, &mut buffer).unwrap();
        let loaded = parse_stl(&buffer).unwrap();

        assert_eq!(loaded.face_count(), 1);
        assert!((loaded.vertex(2) - DVec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_roundtrip_through_files() {
        let original = test_triangle();
        let dir = tempfile::tempdir().unwrap();

        for (name, binary) in [("out_binary.stl", true), ("out_ascii.stl", false)] {
            let path = dir.path().join(name);
            save_stl(&original, &path, binary).unwrap();
            let loaded = load_stl(&path).unwrap();
            assert_eq!(loaded.face_count(), original.face_count());
            assert_eq!(loaded.vertex_count(), 3);
        }
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = load_stl("no_such_mesh_1b2c3d.stl").unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_wrong_extension_is_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.obj");
        fs::write(&path, b"not an stl").unwrap();

        let err = load_stl(&path).unwrap_err();
        match err {
            IoError::UnknownFormat { extension } => assert_eq!(extension, "obj"),
            other => panic!("expected UnknownFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_solid_is_empty_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.stl");
        fs::write(&path, "solid nothing\nendsolid nothing\n").unwrap();

        let err = load_stl(&path).unwrap_err();
        assert!(matches!(err, IoError::EmptyMesh { .. }));
    }

    #[test]
    fn test_parse_ascii_fixture() {
        let ascii = br#"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test"#;

        let mesh = parse_stl(ascii).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert!(mesh.validate());
    }

    #[test]
    fn test_parse_truncated_binary_reports_face_count() {
        let mesh = test_triangle();
        let mut buffer = Vec::new();
        write_stl_binary(&mesh, &mut buffer).unwrap();
        buffer.truncate(buffer.len() - 10);

        let err = parse_stl(&buffer).unwrap_err();
        match err {
            IoError::InvalidFaceCount { expected, got } => {
                assert_eq!(expected, 1);
                assert_eq!(got, 0);
            }
            other => panic!("expected InvalidFaceCount, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_binary_with_solid_in_header() {
        // Binary STL whose header happens to start with "solid".
        let mesh = test_triangle();
        let mut buffer = Vec::new();
        write_stl_binary(&mesh, &mut buffer).unwrap();
        buffer[..5].copy_from_slice(b"solid");
        buffer[5] = 0; // NUL byte marks it binary

        let loaded = parse_stl(&buffer).unwrap();
        assert_eq!(loaded.face_count(), 1);
    }

    #[test]
    fn test_parse_ascii_bad_coordinate_is_error() {
        let ascii = b"solid t\n facet\n outer loop\n vertex 0 abc 0\n endloop\n endfacet\nendsolid t";
        let err = parse_stl(ascii).unwrap_err();
        assert!(matches!(err, IoError::ParseFloat(_)));
    }
}
