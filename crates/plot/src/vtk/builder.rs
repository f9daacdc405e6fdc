// internal modules
use crate::vtk::CollectionToVtk;

// external crates
use vtkio::model::ByteOrder;

/// Builder implementation for CollectionToVtk configuration
///
/// The fields of [CollectionToVtk] are left public for direct use but the
/// module also implements a builder.
///
/// Any number of parameters can be set this way (including none). To get the
/// final [CollectionToVtk] from the builder, call
/// [build()](CollectionToVtkBuilder::build).
///
/// ```rust
/// # use edgetools_plot::vtk::CollectionToVtk;
/// # use vtkio::model::ByteOrder;
/// let converter = CollectionToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .scalar_name("ion_temperature")
///     .build();
///
/// assert_eq!(converter.scalar_name, "ion_temperature");
/// ```
#[derive(Debug)]
pub struct CollectionToVtkBuilder {
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
    /// Name of the cell data array
    scalar_name: String,
    /// Title written to the file header
    title: String,
}

impl CollectionToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [CollectionToVtk] type
    pub fn build(self) -> CollectionToVtk {
        CollectionToVtk {
            byte_order: self.byte_order,
            scalar_name: self.scalar_name,
            title: self.title,
        }
    }

    /// Set the byte ordering
    ///
    /// VisIt only reads big endian legacy binaries, even though most systems
    /// are little endian, so big endian is the default.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Name of the cell data array holding the polygon values
    pub fn scalar_name(mut self, name: impl Into<String>) -> Self {
        self.scalar_name = name.into();
        self
    }

    /// Title of the dataset
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for CollectionToVtkBuilder {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            scalar_name: "values".to_string(),
            title: "edgetools polygon collection".to_string(),
        }
    }
}
