use crate::error::{Error, Result};

/// Extends functionality for slices of floats
///
/// Mesh vertex coordinates and projected field values are plain `f64` slices,
/// and both need well-defined extents for plot limits and colour scales.
pub trait SliceExt {
    /// Find the minimum value in a float array
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use edgetools_utils::SliceExt;
    /// # use edgetools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f64::MIN, 2.2].try_min(), Ok(f64::MIN));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Uses `total_cmp` so that an ordering always exists, which is safe once
    /// the undefined values have been rejected.
    fn try_min(&self) -> Result<f64>;

    /// Find the maximum value in a float array
    ///
    /// ```rust
    /// # use edgetools_utils::SliceExt;
    /// # use edgetools_utils::Error;
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_max(&self) -> Result<f64>;

    /// Find the `(min, max)` pair in a single call
    ///
    /// ```rust
    /// # use edgetools_utils::SliceExt;
    /// assert_eq!([3.0, -1.0, 2.0].try_range(), Ok((-1.0, 3.0)));
    /// ```
    fn try_range(&self) -> Result<(f64, f64)> {
        Ok((self.try_min()?, self.try_max()?))
    }
}

impl SliceExt for [f64] {
    fn try_min(&self) -> Result<f64> {
        check_defined(self)?;
        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        check_defined(self)?;
        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }
}

/// Reject NaN and infinite values up front
fn check_defined(values: &[f64]) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        Err(Error::SliceContainsUndefinedValues)
    } else {
        Ok(())
    }
}
