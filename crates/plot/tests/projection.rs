//! Integration tests for projecting grid fields onto mesh polygons

use edgetools_plot::vtk::{write_vtk, CollectionToVtk, VtkFormat};
use edgetools_plot::{
    build_polygon_geometry, compute_axis_bounds, project_field_onto_polygons, Error, GridMesh,
    MeshExtent, MeshProvider, PlotAxes, PolyCollection, PolygonKind,
};
use nalgebra::DMatrix;
use rstest::{fixture, rstest};

/// Synthetic 2x2 cell mesh, kept separate from GridMesh on purpose
struct SquareMesh {
    vertices: Vec<[f64; 2]>,
    quadrangles: Vec<[usize; 4]>,
    triangles: Vec<[usize; 3]>,
    quadrangle_map: Vec<[usize; 2]>,
    triangle_map: Vec<[usize; 2]>,
}

impl MeshProvider for SquareMesh {
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
        &self.quadrangle_map
    }
    fn triangle_to_grid_map(&self) -> &[[usize; 2]] {
        &self.triangle_map
    }
    fn mesh_extent(&self) -> MeshExtent {
        MeshExtent {
            min_r: 0.0,
            max_r: 2.0,
            min_z: 0.0,
            max_z: 2.0,
        }
    }
}

#[fixture]
fn square() -> SquareMesh {
    let vertices = (0..3)
        .flat_map(|j| (0..3).map(move |i| [i as f64, j as f64]))
        .collect();
    SquareMesh {
        vertices,
        quadrangles: vec![[0, 1, 4, 3], [1, 2, 5, 4], [3, 4, 7, 6], [4, 5, 8, 7]],
        triangles: vec![[0, 1, 4], [4, 5, 8]],
        quadrangle_map: vec![[0, 0], [0, 1], [1, 0], [1, 1]],
        triangle_map: vec![[0, 0], [1, 1]],
    }
}

#[fixture]
fn field() -> DMatrix<f64> {
    // rows are radial, columns are poloidal
    DMatrix::from_row_slice(2, 2, &[10.0, 20.0, 30.0, 40.0])
}

#[fixture]
fn example() -> GridMesh {
    GridMesh::from_json_file("./data/mesh_example.json").unwrap()
}

#[rstest]
#[case(PolygonKind::Quadrangle, vec![10.0, 20.0, 30.0, 40.0])]
#[case(PolygonKind::Triangle, vec![10.0, 40.0])]
fn projected_values(
    square: SquareMesh,
    field: DMatrix<f64>,
    #[case] kind: PolygonKind,
    #[case] expected: Vec<f64>,
) {
    let values = project_field_onto_polygons(&square, kind, &field).unwrap();
    assert_eq!(values, expected);
}

#[rstest]
fn polygon_geometry(square: SquareMesh) {
    let quads = build_polygon_geometry(&square, PolygonKind::Quadrangle).unwrap();
    assert_eq!(quads.len(), 4);
    assert_eq!(quads[3], vec![[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0]]);

    let triangles = build_polygon_geometry(&square, PolygonKind::Triangle).unwrap();
    assert_eq!(triangles[0], vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
}

#[rstest]
fn dangling_vertex_index(mut square: SquareMesh) {
    square.triangles[1] = [4, 5, 9];
    assert!(matches!(
        build_polygon_geometry(&square, PolygonKind::Triangle),
        Err(Error::VertexIndexOutOfRange {
            polygon: 1,
            index: 9,
            ..
        })
    ));
}

#[rstest]
fn radial_index_beyond_field(mut square: SquareMesh) {
    // 3 radial rows by 2 poloidal columns, index 3 needs a fourth row
    let field = DMatrix::from_element(3, 2, 1.0);
    square.quadrangle_map[2] = [3, 0];
    match project_field_onto_polygons(&square, PolygonKind::Quadrangle, &field) {
        Err(Error::ShapeMismatch { required, found }) => {
            assert_eq!(required, (4, 2));
            assert_eq!(found, (3, 2));
        }
        other => panic!("expected shape mismatch, got {other:?}"),
    }
}

#[rstest]
fn poloidal_index_beyond_field(square: SquareMesh) {
    let field = DMatrix::from_element(2, 1, 1.0);
    assert!(matches!(
        project_field_onto_polygons(&square, PolygonKind::Quadrangle, &field),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[rstest]
fn larger_field_is_fine(square: SquareMesh) {
    let field = DMatrix::from_fn(5, 7, |r, p| (r * 10 + p) as f64);
    let values = project_field_onto_polygons(&square, PolygonKind::Quadrangle, &field).unwrap();
    assert_eq!(values, vec![0.0, 1.0, 10.0, 11.0]);
}

#[rstest]
fn unaligned_grid_map(mut square: SquareMesh, field: DMatrix<f64>) {
    square.triangle_map.pop();
    assert!(matches!(
        project_field_onto_polygons(&square, PolygonKind::Triangle, &field),
        Err(Error::UnalignedGridMap {
            polygons: 2,
            entries: 1,
            ..
        })
    ));
}

#[rstest]
fn axis_bounds_from_extent(square: SquareMesh, example: GridMesh) {
    assert_eq!(compute_axis_bounds(&square), (0.0, 2.0, 0.0, 2.0));
    assert_eq!(compute_axis_bounds(&example), (1.0, 2.0, -1.0, 1.0));

    let axes = PlotAxes::for_mesh(&example);
    assert_eq!(axes.aspect, 1.0);
    assert_eq!(axes.x_label, "R [m]");
    assert_eq!(axes.y_label, "z [m]");
    assert_eq!(axes.y_limits, (-1.0, 1.0));
}

#[rstest]
#[case(PolygonKind::Quadrangle, 4)]
#[case(PolygonKind::Triangle, 8)]
fn example_mesh_collections(
    example: GridMesh,
    field: DMatrix<f64>,
    #[case] kind: PolygonKind,
    #[case] n: usize,
) {
    let wireframe = PolyCollection::new(&example, kind, None).unwrap();
    assert_eq!(wireframe.len(), n);
    assert_eq!(wireframe.value_range(), None);

    let filled = PolyCollection::new(&example, kind, Some(&field)).unwrap();
    assert_eq!(filled.values.as_ref().map(Vec::len), Some(n));
    assert_eq!(filled.value_range(), Some((10.0, 40.0)));
}

#[rstest]
fn write_legacy_ascii(example: GridMesh, field: DMatrix<f64>) {
    let collection = PolyCollection::new(&example, PolygonKind::Triangle, Some(&field)).unwrap();
    let vtk = CollectionToVtk::builder()
        .scalar_name("density")
        .build()
        .convert(&collection)
        .unwrap();

    let path = std::env::temp_dir().join("edgetools_plot_projection_test.vtk");
    write_vtk(vtk, &path, VtkFormat::LegacyAscii).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# vtk DataFile"));
    assert!(text.contains("density"));
    std::fs::remove_file(&path).unwrap();
}
