// crate modules
use crate::error::{Error, Result};

// edgetools modules
use edgetools_utils::f;

// external crates
use nalgebra::DMatrix;
use serde::Serialize;

/// Destination shape of a single block
///
/// The EIRENE output files do not describe their own block sizes, so the
/// caller supplies these from the grid geometry.
///
/// | Field      | Symbol | Description                        |
/// | ---------- | ------ | ---------------------------------- |
/// | `species`  | `ns`   | number of particle species         |
/// | `poloidal` | `nx`   | number of poloidal grid cells      |
/// | `radial`   | `ny`   | number of radial grid cells        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    /// Number of species (ns)
    pub species: usize,
    /// Number of poloidal cells (nx)
    pub poloidal: usize,
    /// Number of radial cells (ny)
    pub radial: usize,
}

impl Dimensions {
    /// Validated dimensions, in the `ns, nx, ny` argument order of the file
    ///
    /// ```rust
    /// # use edgetools_eirene::Dimensions;
    /// let dims = Dimensions::new(2, 96, 36).unwrap();
    /// assert_eq!(dims.shape(), [2, 36, 96]);
    /// assert!(Dimensions::new(0, 96, 36).is_err());
    /// ```
    pub fn new(species: usize, poloidal: usize, radial: usize) -> Result<Self> {
        let dimensions = Self {
            species,
            poloidal,
            radial,
        };
        dimensions.validate()?;
        Ok(dimensions)
    }

    /// Total number of data tokens in a block of this shape
    pub fn target_count(&self) -> Result<usize> {
        self.validate()?;
        self.species
            .checked_mul(self.poloidal)
            .and_then(|n| n.checked_mul(self.radial))
            .ok_or_else(|| Error::InvalidDimensions(f!("{self} overflows the element count")))
    }

    /// Logical array shape, `[species, radial, poloidal]`
    pub fn shape(&self) -> [usize; 3] {
        [self.species, self.radial, self.poloidal]
    }

    /// Number of values in one species slice
    pub fn cells_per_species(&self) -> usize {
        self.radial * self.poloidal
    }

    fn validate(&self) -> Result<()> {
        if self.species == 0 || self.poloidal == 0 || self.radial == 0 {
            Err(Error::InvalidDimensions(f!(
                "{self} has a zero-length axis"
            )))
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ns={} nx={} ny={}",
            self.species, self.poloidal, self.radial
        )
    }
}

/// One dense field read from an EIRENE output block
///
/// Values are stored in a flat row-major buffer with the logical shape
/// `[species, radial, poloidal]`. This is the order the writer serialises
/// the data in, i.e. poloidal varies fastest, then radial, then species.
///
/// ```text
/// token i  =>  (i / (ny*nx), (i / nx) % ny, i % nx)
/// ```
///
/// Getting this order wrong still gives a correctly sized array, so the
/// mapping is kept in one place, [StructuredBlock::flat_index()].
///
/// A block is never modified after it is read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredBlock {
    dimensions: Dimensions,
    values: Vec<f64>,
}

impl StructuredBlock {
    /// Wrap an already ordered buffer of values
    ///
    /// The buffer length must match the element count of `dimensions`.
    pub fn from_values(dimensions: Dimensions, values: Vec<f64>) -> Result<Self> {
        let expected = dimensions.target_count()?;
        if values.len() != expected {
            return Err(Error::InvalidDimensions(f!(
                "{dimensions} needs {expected} values, found {}",
                values.len()
            )));
        }
        Ok(Self { dimensions, values })
    }

    /// Dimensions the block was read with
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Logical array shape, `[species, radial, poloidal]`
    pub fn shape(&self) -> [usize; 3] {
        self.dimensions.shape()
    }

    /// Flat row-major buffer of all values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total number of values in the block
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a successfully read block
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Position in the flat buffer of element `[s, r, p]`
    ///
    /// Returns `None` for any index outside of the block.
    ///
    /// ```rust
    /// # use edgetools_eirene::{Dimensions, StructuredBlock};
    /// let dims = Dimensions::new(2, 3, 4).unwrap();
    /// let block = StructuredBlock::from_values(dims, vec![0.0; 24]).unwrap();
    /// assert_eq!(block.flat_index(1, 2, 0), Some(12 + 2 * 3));
    /// assert_eq!(block.flat_index(0, 4, 0), None);
    /// ```
    pub fn flat_index(&self, species: usize, radial: usize, poloidal: usize) -> Option<usize> {
        let d = &self.dimensions;
        if species >= d.species || radial >= d.radial || poloidal >= d.poloidal {
            return None;
        }
        Some(species * d.cells_per_species() + radial * d.poloidal + poloidal)
    }

    /// Value of element `[s, r, p]`
    pub fn get(&self, species: usize, radial: usize, poloidal: usize) -> Option<f64> {
        self.flat_index(species, radial, poloidal)
            .map(|i| self.values[i])
    }

    /// Two dimensional `[radial, poloidal]` field for a single species
    ///
    /// This is the form expected by the plotting tools when projecting the
    /// data onto mesh polygons.
    pub fn species(&self, species: usize) -> Option<DMatrix<f64>> {
        if species >= self.dimensions.species {
            return None;
        }
        let n = self.dimensions.cells_per_species();
        let start = species * n;
        Some(DMatrix::from_row_slice(
            self.dimensions.radial,
            self.dimensions.poloidal,
            &self.values[start..start + n],
        ))
    }

    /// Iterator over every species field in order
    pub fn iter_species(&self) -> impl Iterator<Item = DMatrix<f64>> + '_ {
        (0..self.dimensions.species).filter_map(|s| self.species(s))
    }
}

impl std::fmt::Display for StructuredBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [ns, ny, nx] = self.shape();
        let mut s = "StructuredBlock {\n".to_string();
        s += &f!("    species: {ns}\n");
        s += &f!("    radial: {ny}\n");
        s += &f!("    poloidal: {nx}\n");
        s += &f!("    values: {}\n}}", self.len());
        write!(f, "{}", s)
    }
}
