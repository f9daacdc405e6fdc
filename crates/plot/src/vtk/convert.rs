// internal modules
use crate::collection::PolyCollection;
use crate::error::{Error, Result};
use crate::mesh::PolygonKind;
use crate::vtk::CollectionToVtkBuilder;

// external crates
use log::trace;
use vtkio::model::{
    Attribute, Attributes, ByteOrder, CellType, Cells, DataArray, DataSet, ElementType, IOBuffer,
    UnstructuredGridPiece, Version, VertexNumbers, Vtk,
};

/// Convert polygon collections to vtk formats for plotting
///
/// Every polygon becomes one cell of an unstructured grid, `Quad` or
/// `Triangle` depending on the collection. Vertices are written explicitly
/// for each cell in the `z = 0` plane, with R along x and z along y.
///
/// If the collection carries values they are attached as a single scalar
/// cell data array, otherwise the grid is just the mesh outline.
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented.
///
/// ```rust
/// # use edgetools_plot::vtk::CollectionToVtk;
/// # use vtkio::model::ByteOrder;
/// let converter = CollectionToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
/// ```
#[derive(Debug, PartialEq)]
pub struct CollectionToVtk {
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
    /// Name of the cell data array
    pub scalar_name: String,
    /// Title written to the file header
    pub title: String,
}

// Public API
impl CollectionToVtk {
    /// Start with the default configuration
    pub fn new() -> CollectionToVtk {
        Default::default()
    }

    /// Get an instance of the [CollectionToVtkBuilder]
    pub fn builder() -> CollectionToVtkBuilder {
        CollectionToVtkBuilder::default()
    }

    /// Convert a [PolyCollection] to a Vtk object
    ///
    /// Fails if the number of values does not match the number of polygons.
    pub fn convert(&self, collection: &PolyCollection) -> Result<Vtk> {
        let (points, offsets, cell_types) = Self::cell_vertices(collection);
        let connectivity = (0..offsets.last().copied().unwrap_or(0)).collect::<Vec<u64>>();

        Ok(Vtk {
            version: Version::Auto,
            title: self.title.clone(),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(UnstructuredGridPiece {
                points: points.into(),
                cells: Cells {
                    cell_verts: VertexNumbers::XML {
                        connectivity,
                        offsets,
                    },
                    types: cell_types,
                },
                data: self.collect_attributes(collection)?,
            }),
        })
    }
}

impl Default for CollectionToVtk {
    fn default() -> Self {
        CollectionToVtkBuilder::default().build()
    }
}

impl CollectionToVtk {
    /// Flattened points, running offsets, and cell types for every polygon
    fn cell_vertices(collection: &PolyCollection) -> (Vec<f64>, Vec<u64>, Vec<CellType>) {
        let cell_type = match collection.kind {
            PolygonKind::Quadrangle => CellType::Quad,
            PolygonKind::Triangle => CellType::Triangle,
        };

        let mut points: Vec<f64> = Vec::with_capacity(collection.len() * 12);
        let mut offsets: Vec<u64> = Vec::with_capacity(collection.len());
        let mut cell_types: Vec<CellType> = Vec::with_capacity(collection.len());
        let mut offset = 0u64;

        for polygon in &collection.vertices {
            for [r, z] in polygon {
                points.extend([*r, *z, 0.0]);
            }
            offset += polygon.len() as u64;
            offsets.push(offset);
            cell_types.push(cell_type);
        }

        trace!("{} points for {} cells", points.len() / 3, offsets.len());
        (points, offsets, cell_types)
    }

    /// Cell data for filled collections
    fn collect_attributes(&self, collection: &PolyCollection) -> Result<Attributes> {
        let mut attributes = Attributes::new();

        if let Some(values) = &collection.values {
            if values.len() != collection.len() {
                return Err(Error::ValueCountMismatch {
                    kind: collection.kind,
                    polygons: collection.len(),
                    values: values.len(),
                });
            }

            attributes.cell.push(Attribute::DataArray(DataArray {
                name: self.scalar_name.clone(),
                elem: ElementType::Scalars {
                    num_comp: 1,
                    lookup_table: None,
                },
                data: IOBuffer::F64(values.clone()),
            }));
        }

        Ok(attributes)
    }
}
