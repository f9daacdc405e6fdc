//! Result and Error types for edgetools-plot

// crate modules
use crate::mesh::PolygonKind;

/// Type alias for `Result<T, plot::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `edgetools-plot` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    #[error("field shape {found:?} does not cover grid map indices (needs at least {required:?})")]
    ShapeMismatch {
        required: (usize, usize),
        found: (usize, usize),
    },

    #[error("{kind:?} grid map has {entries} entries for {polygons} polygons")]
    UnalignedGridMap {
        kind: PolygonKind,
        polygons: usize,
        entries: usize,
    },

    #[error("{values} values for a collection of {polygons} {kind:?} polygons")]
    ValueCountMismatch {
        kind: PolygonKind,
        polygons: usize,
        values: usize,
    },

    #[error("{kind:?} {polygon} references vertex {index} of {vertices}")]
    VertexIndexOutOfRange {
        kind: PolygonKind,
        polygon: usize,
        index: usize,
        vertices: usize,
    },

    #[error("mesh extent is undefined")]
    UndefinedExtent(#[from] edgetools_utils::Error),
}
