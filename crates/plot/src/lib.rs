//! Project grid fields onto mesh polygons for plotting
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod collection;
mod error;
mod mesh;
mod polygons;

pub mod vtk;

// inline important the plotting-related modules for a nice public API
#[doc(inline)]
pub use mesh::{GridMesh, MeshExtent, MeshProvider, PolygonKind};

#[doc(inline)]
pub use polygons::{
    build_polygon_geometry, compute_axis_bounds, project_field_onto_polygons, VertexLoops,
};

#[doc(inline)]
pub use collection::{PlotAxes, PolyCollection};

#[doc(inline)]
pub use vtk::{collection_to_vtk, write_vtk, VtkFormat};

#[doc(inline)]
pub use error::{Error, Result};
