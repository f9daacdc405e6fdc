//! Drawable polygon collections
//!
//! A [PolyCollection] is everything a filled-polygon renderer needs: the
//! vertex loops, and optionally one value per polygon for the face colour.
//! Without values it is just the mesh wireframe.

// crate modules
use crate::error::Result;
use crate::mesh::{MeshProvider, PolygonKind};
use crate::polygons::{build_polygon_geometry, project_field_onto_polygons, VertexLoops};

// edgetools modules
use edgetools_utils::SliceExt;

// external crates
use log::debug;
use nalgebra::DMatrix;

/// Polygons of one kind, optionally coloured by a grid field
#[derive(Debug, Clone, PartialEq)]
pub struct PolyCollection {
    /// Kind of mesh element in the collection
    pub kind: PolygonKind,
    /// Vertex loop of every polygon
    pub vertices: VertexLoops,
    /// Value of every polygon, aligned with `vertices`
    pub values: Option<Vec<f64>>,
}

impl PolyCollection {
    /// Collect the polygons of a mesh, coloured by `field` if provided
    ///
    /// `field` is indexed `[radial, poloidal]`, for example a single species
    /// of an EIRENE block.
    ///
    /// ```rust
    /// # use edgetools_plot::{GridMesh, PolyCollection, PolygonKind};
    /// # use nalgebra::DMatrix;
    /// let mesh = GridMesh::new(
    ///     vec![[1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0]],
    ///     vec![[0, 1, 2, 3]],
    ///     vec![],
    ///     vec![[0, 0]],
    ///     vec![],
    /// ).unwrap();
    ///
    /// // mesh outline only
    /// let wireframe = PolyCollection::new(&mesh, PolygonKind::Quadrangle, None).unwrap();
    /// assert!(wireframe.values.is_none());
    ///
    /// // faces coloured by the field
    /// let field = DMatrix::from_element(1, 1, 42.0);
    /// let filled = PolyCollection::new(&mesh, PolygonKind::Quadrangle, Some(&field)).unwrap();
    /// assert_eq!(filled.values, Some(vec![42.0]));
    /// ```
    pub fn new<M: MeshProvider + ?Sized>(
        mesh: &M,
        kind: PolygonKind,
        field: Option<&DMatrix<f64>>,
    ) -> Result<Self> {
        let vertices = build_polygon_geometry(mesh, kind)?;
        let values = match field {
            Some(field) => Some(project_field_onto_polygons(mesh, kind, field)?),
            None => None,
        };
        debug!(
            "{kind:?} collection of {} polygons (filled: {})",
            vertices.len(),
            values.is_some()
        );

        Ok(Self {
            kind,
            vertices,
            values,
        })
    }

    /// Number of polygons
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the mesh had no polygons of this kind
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Colour scale limits over the finite polygon values
    ///
    /// `None` for a wireframe collection or one with no finite values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let finite = self
            .values
            .as_ref()?
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect::<Vec<f64>>();
        finite.try_range().ok()
    }
}

/// Axis settings shared by every plot of a mesh
///
/// Equal aspect ratio, the `R [m]` and `z [m]` labels, and limits from the
/// mesh extent so that plots of the same mesh line up.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotAxes {
    /// Ratio of the y to x axis scaling
    pub aspect: f64,
    /// Horizontal axis label
    pub x_label: String,
    /// Vertical axis label
    pub y_label: String,
    /// Horizontal `(min, max)` limits in metres
    pub x_limits: (f64, f64),
    /// Vertical `(min, max)` limits in metres
    pub y_limits: (f64, f64),
}

impl PlotAxes {
    /// Axis settings for a mesh
    pub fn for_mesh<M: MeshProvider + ?Sized>(mesh: &M) -> Self {
        let extent = mesh.mesh_extent();
        Self {
            aspect: 1.0,
            x_label: "R [m]".to_string(),
            y_label: "z [m]".to_string(),
            x_limits: (extent.min_r, extent.max_r),
            y_limits: (extent.min_z, extent.max_z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_skips_undefined_values() {
        let collection = PolyCollection {
            kind: PolygonKind::Triangle,
            vertices: vec![vec![[0.0, 0.0]; 3]; 3],
            values: Some(vec![2.0, f64::NAN, -1.0]),
        };
        assert_eq!(collection.value_range(), Some((-1.0, 2.0)));
    }

    #[test]
    fn wireframe_has_no_range() {
        let collection = PolyCollection {
            kind: PolygonKind::Quadrangle,
            vertices: vec![],
            values: None,
        };
        assert_eq!(collection.value_range(), None);
        assert!(collection.is_empty());
    }
}
