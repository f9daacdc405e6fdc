// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// crate modules
use crate::error::Result;

// edgetools modules
use edgetools_utils::SliceExt;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

/// Which set of mesh elements to work with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolygonKind {
    /// Quadrangles of the structured B2 grid
    Quadrangle,
    /// Triangles of the unstructured mesh
    Triangle,
}

impl PolygonKind {
    /// Number of vertices per polygon
    pub fn vertex_count(&self) -> usize {
        match self {
            PolygonKind::Quadrangle => 4,
            PolygonKind::Triangle => 3,
        }
    }
}

/// Bounding box of a mesh in the R-z plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshExtent {
    /// Minimum major radius \[m\]
    pub min_r: f64,
    /// Maximum major radius \[m\]
    pub max_r: f64,
    /// Minimum height \[m\]
    pub min_z: f64,
    /// Maximum height \[m\]
    pub max_z: f64,
}

impl MeshExtent {
    /// Bounds of a set of `[r, z]` vertices
    ///
    /// Fails for an empty set or any NaN/infinite coordinate.
    ///
    /// ```rust
    /// # use edgetools_plot::MeshExtent;
    /// let extent = MeshExtent::from_vertices(&[[1.0, -0.5], [2.0, 0.5]]).unwrap();
    /// assert_eq!(extent.max_r, 2.0);
    /// assert_eq!(extent.min_z, -0.5);
    /// ```
    pub fn from_vertices(vertices: &[[f64; 2]]) -> Result<Self> {
        let r = vertices.iter().map(|v| v[0]).collect::<Vec<f64>>();
        let z = vertices.iter().map(|v| v[1]).collect::<Vec<f64>>();
        let (min_r, max_r) = r.try_range()?;
        let (min_z, max_z) = z.try_range()?;
        Ok(Self {
            min_r,
            max_r,
            min_z,
            max_z,
        })
    }

    /// Extent as a `(min_r, max_r, min_z, max_z)` tuple
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_r, self.max_r, self.min_z, self.max_z)
    }
}

/// Read-only view of a mesh geometry
///
/// Anything that can provide these accessors can be plotted, from a full
/// SOLPS mesh description down to a small synthetic mesh in a unit test.
///
/// Each grid map is aligned one-to-one with its polygon list, and every
/// entry is the `[radial, poloidal]` grid cell the polygon displays.
pub trait MeshProvider {
    /// Vertex `[r, z]` coordinates
    fn vertex_coordinates(&self) -> &[[f64; 2]];

    /// Vertex indices of every quadrangle
    fn quadrangle_indices(&self) -> &[[usize; 4]];

    /// Vertex indices of every triangle
    fn triangle_indices(&self) -> &[[usize; 3]];

    /// `[radial, poloidal]` grid cell of every quadrangle
    fn quadrangle_to_grid_map(&self) -> &[[usize; 2]];

    /// `[radial, poloidal]` grid cell of every triangle
    fn triangle_to_grid_map(&self) -> &[[usize; 2]];

    /// Precomputed bounds of the mesh
    fn mesh_extent(&self) -> MeshExtent;

    /// Vertex indices of every polygon of a kind, as slices
    fn polygon_indices(&self, kind: PolygonKind) -> Vec<&[usize]> {
        match kind {
            PolygonKind::Quadrangle => self
                .quadrangle_indices()
                .iter()
                .map(|q| q.as_slice())
                .collect(),
            PolygonKind::Triangle => self
                .triangle_indices()
                .iter()
                .map(|t| t.as_slice())
                .collect(),
        }
    }

    /// Grid map for a kind of polygon
    fn grid_map(&self, kind: PolygonKind) -> &[[usize; 2]] {
        match kind {
            PolygonKind::Quadrangle => self.quadrangle_to_grid_map(),
            PolygonKind::Triangle => self.triangle_to_grid_map(),
        }
    }
}

/// Plain data implementation of [MeshProvider]
///
/// Useful when the geometry has been exported from elsewhere, for example
/// as JSON with the following layout:
///
/// ```json
/// {
///   "vertices": [[1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0]],
///   "quadrangles": [[0, 1, 2, 3]],
///   "triangles": [[0, 1, 2], [0, 2, 3]],
///   "quadrangle_to_grid_map": [[0, 0]],
///   "triangle_to_grid_map": [[0, 0], [0, 0]]
/// }
/// ```
///
/// The extent is computed from the vertices when the mesh is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridMesh {
    vertices: Vec<[f64; 2]>,
    quadrangles: Vec<[usize; 4]>,
    triangles: Vec<[usize; 3]>,
    quadrangle_to_grid_map: Vec<[usize; 2]>,
    triangle_to_grid_map: Vec<[usize; 2]>,
    extent: MeshExtent,
}

/// Serialised form of [GridMesh], without the derived extent
#[derive(Deserialize)]
struct RawGridMesh {
    vertices: Vec<[f64; 2]>,
    #[serde(default)]
    quadrangles: Vec<[usize; 4]>,
    #[serde(default)]
    triangles: Vec<[usize; 3]>,
    #[serde(default)]
    quadrangle_to_grid_map: Vec<[usize; 2]>,
    #[serde(default)]
    triangle_to_grid_map: Vec<[usize; 2]>,
}

impl GridMesh {
    /// Build a mesh and compute its extent
    pub fn new(
        vertices: Vec<[f64; 2]>,
        quadrangles: Vec<[usize; 4]>,
        triangles: Vec<[usize; 3]>,
        quadrangle_to_grid_map: Vec<[usize; 2]>,
        triangle_to_grid_map: Vec<[usize; 2]>,
    ) -> Result<Self> {
        let extent = MeshExtent::from_vertices(&vertices)?;
        debug!(
            "Mesh with {} vertices, {} quadrangles, {} triangles",
            vertices.len(),
            quadrangles.len(),
            triangles.len()
        );
        Ok(Self {
            vertices,
            quadrangles,
            triangles,
            quadrangle_to_grid_map,
            triangle_to_grid_map,
            extent,
        })
    }

    /// Read a mesh from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: RawGridMesh = serde_json::from_str(s)?;
        Self::from_raw(raw)
    }

    /// Read a mesh from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let raw: RawGridMesh = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawGridMesh) -> Result<Self> {
        Self::new(
            raw.vertices,
            raw.quadrangles,
            raw.triangles,
            raw.quadrangle_to_grid_map,
            raw.triangle_to_grid_map,
        )
    }
}

impl MeshProvider for GridMesh {
    fn vertex_coordinates(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    fn quadrangle_indices(&self) -> &[[usize; 4]] {
        &self.quadrangles
    }

    fn triangle_indices(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    fn quadrangle_to_grid_map(&self) -> &[[usize; 2]] {
        &self.quadrangle_to_grid_map
    }

    fn triangle_to_grid_map(&self) -> &[[usize; 2]] {
        &self.triangle_to_grid_map
    }

    fn mesh_extent(&self) -> MeshExtent {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn json_mesh_without_triangles() {
        let mesh = GridMesh::from_json_str(
            r#"{
                "vertices": [[1.0, -1.0], [3.0, -1.0], [3.0, 2.0], [1.0, 2.0]],
                "quadrangles": [[0, 1, 2, 3]],
                "quadrangle_to_grid_map": [[0, 0]]
            }"#,
        )
        .unwrap();

        assert_eq!(mesh.mesh_extent().as_tuple(), (1.0, 3.0, -1.0, 2.0));
        assert!(mesh.triangle_indices().is_empty());
        assert_eq!(
            mesh.polygon_indices(PolygonKind::Quadrangle),
            vec![&[0usize, 1, 2, 3][..]]
        );
    }

    #[test]
    fn mesh_without_vertices() {
        assert!(matches!(
            GridMesh::new(vec![], vec![], vec![], vec![], vec![]),
            Err(Error::UndefinedExtent(_))
        ));
    }
}
