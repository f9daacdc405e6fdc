//! Mapping between mesh polygons and grid fields
//!
//! These are pure functions of their arguments. Nothing is cached between
//! calls and the mesh is only ever read.

// crate modules
use crate::error::{Error, Result};
use crate::mesh::{MeshProvider, PolygonKind};

// external crates
use log::trace;
use nalgebra::DMatrix;

/// Ordered `[r, z]` vertex loops, one per polygon
pub type VertexLoops = Vec<Vec<[f64; 2]>>;

/// Vertex loops for every polygon of a kind
///
/// Polygons are returned in the order the mesh lists them, with vertices in
/// the order given by the polygon's index tuple.
///
/// ```rust
/// # use edgetools_plot::{build_polygon_geometry, GridMesh, PolygonKind};
/// let mesh = GridMesh::new(
///     vec![[1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0]],
///     vec![[0, 1, 2, 3]],
///     vec![],
///     vec![[0, 0]],
///     vec![],
/// ).unwrap();
///
/// let loops = build_polygon_geometry(&mesh, PolygonKind::Quadrangle).unwrap();
/// assert_eq!(loops[0][2], [2.0, 1.0]);
/// ```
pub fn build_polygon_geometry<M: MeshProvider + ?Sized>(
    mesh: &M,
    kind: PolygonKind,
) -> Result<VertexLoops> {
    let vertices = mesh.vertex_coordinates();

    mesh.polygon_indices(kind)
        .into_iter()
        .enumerate()
        .map(|(polygon, indices)| {
            indices
                .iter()
                .map(|&index| {
                    vertices
                        .get(index)
                        .copied()
                        .ok_or_else(|| Error::VertexIndexOutOfRange {
                            kind,
                            polygon,
                            index,
                            vertices: vertices.len(),
                        })
                })
                .collect::<Result<Vec<[f64; 2]>>>()
        })
        .collect()
}

/// One field value per polygon of a kind
///
/// Each polygon displays the value of its `[radial, poloidal]` grid cell, so
/// `field` must have at least as many rows (radial) and columns (poloidal)
/// as the largest indices in the grid map.
///
/// ```rust
/// # use edgetools_plot::{project_field_onto_polygons, GridMesh, PolygonKind};
/// # use nalgebra::DMatrix;
/// let mesh = GridMesh::new(
///     vec![[1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0]],
///     vec![],
///     vec![[0, 1, 2], [0, 2, 3]],
///     vec![],
///     vec![[0, 1], [1, 0]],
/// ).unwrap();
///
/// let field = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// let values = project_field_onto_polygons(&mesh, PolygonKind::Triangle, &field).unwrap();
/// assert_eq!(values, vec![2.0, 3.0]);
/// ```
pub fn project_field_onto_polygons<M: MeshProvider + ?Sized>(
    mesh: &M,
    kind: PolygonKind,
    field: &DMatrix<f64>,
) -> Result<Vec<f64>> {
    let grid_map = checked_grid_map(mesh, kind)?;

    // everything is validated up front so there is never a partial result
    if let Some(required) = required_shape(grid_map) {
        let found = field.shape();
        if required.0 > found.0 || required.1 > found.1 {
            return Err(Error::ShapeMismatch { required, found });
        }
    }

    trace!(
        "Projecting {:?} field onto {} {kind:?} polygons",
        field.shape(),
        grid_map.len()
    );
    Ok(grid_map.iter().map(|&[r, p]| field[(r, p)]).collect())
}

/// Display bounds of the mesh, `(min_r, max_r, min_z, max_z)`
///
/// Taken directly from the precomputed mesh extent so that every plot of the
/// same mesh shares identical limits.
pub fn compute_axis_bounds<M: MeshProvider + ?Sized>(mesh: &M) -> (f64, f64, f64, f64) {
    mesh.mesh_extent().as_tuple()
}

/// Grid map of a kind, after making sure it lines up with the polygons
fn checked_grid_map<M: MeshProvider + ?Sized>(
    mesh: &M,
    kind: PolygonKind,
) -> Result<&[[usize; 2]]> {
    let polygons = match kind {
        PolygonKind::Quadrangle => mesh.quadrangle_indices().len(),
        PolygonKind::Triangle => mesh.triangle_indices().len(),
    };

    let grid_map = mesh.grid_map(kind);
    if grid_map.len() != polygons {
        return Err(Error::UnalignedGridMap {
            kind,
            polygons,
            entries: grid_map.len(),
        });
    }
    Ok(grid_map)
}

/// Smallest `(radial, poloidal)` field shape covering every grid map entry
fn required_shape(grid_map: &[[usize; 2]]) -> Option<(usize, usize)> {
    let max_r = grid_map.iter().map(|cell| cell[0]).max()?;
    let max_p = grid_map.iter().map(|cell| cell[1]).max()?;
    Some((max_r.saturating_add(1), max_p.saturating_add(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_shape_from_map() {
        assert_eq!(required_shape(&[[0, 0], [3, 1], [2, 4]]), Some((4, 5)));
        assert_eq!(required_shape(&[]), None);
    }
}
