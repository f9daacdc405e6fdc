//! Conversion of polygon collections to VTK formats
//!
//! The filled-polygon rendering itself is left to ParaView, VisIt, or any
//! other VTK reader. Collections become unstructured grids of quad and
//! triangle cells in the R-z plane, with the projected values as cell data.
//!
//! ```rust, no_run
//! # use edgetools_plot::{GridMesh, PolyCollection, PolygonKind};
//! # use edgetools_plot::vtk::{collection_to_vtk, write_vtk, VtkFormat};
//! # use nalgebra::DMatrix;
//! # let mesh = GridMesh::from_json_file("mesh.json").unwrap();
//! # let field = DMatrix::from_element(36, 96, 1.0);
//! let collection = PolyCollection::new(&mesh, PolygonKind::Triangle, Some(&field)).unwrap();
//! let vtk = collection_to_vtk(&collection).unwrap();
//! write_vtk(vtk, "ion_temperature.vtu", VtkFormat::Xml).unwrap();
//! ```

mod builder;
mod convert;

#[doc(inline)]
pub use builder::CollectionToVtkBuilder;

#[doc(inline)]
pub use convert::CollectionToVtk;

// standard library
use std::path::Path;

// crate modules
use crate::collection::PolyCollection;
use crate::error::Result;

// external crates
use log::debug;
use vtkio::model::{ByteOrder, Vtk};

/// Output file formats for VTK data
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VtkFormat {
    /// XML unstructured grid, use a `.vtu` extension
    #[default]
    Xml,
    /// Legacy ASCII `.vtk` file
    LegacyAscii,
    /// Legacy binary `.vtk` file, using the byte order of the [Vtk]
    LegacyBinary,
}

/// Convert a [PolyCollection] with the default [CollectionToVtk] settings
pub fn collection_to_vtk(collection: &PolyCollection) -> Result<Vtk> {
    CollectionToVtk::default().convert(collection)
}

/// Write a [Vtk] to `path` in the chosen format
///
/// For [VtkFormat::Xml] the XML flavour is taken from the file extension, so
/// unstructured grids should be written to `.vtu` files.
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<()> {
    debug!("Writing {:?} to {}", format, path.as_ref().display());
    let byte_order = vtk.byte_order;
    match format {
        VtkFormat::Xml => vtk.export(path)?,
        VtkFormat::LegacyAscii => vtk.export_ascii(path)?,
        VtkFormat::LegacyBinary => match byte_order {
            ByteOrder::BigEndian => vtk.export_be(path)?,
            ByteOrder::LittleEndian => vtk.export_le(path)?,
        },
    }
    Ok(())
}
