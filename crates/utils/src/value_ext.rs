use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Fixed-width scientific number formatting
    ///
    /// The default `{:e}` output drops the exponent sign and padding, which
    /// makes columns of field values ragged. This always writes a signed,
    /// zero-padded exponent.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use edgetools_utils::ValueExt;
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((1.5e-7).sci(3, 2), "1.500e-07".to_string());
    /// assert_eq!((2.0e120).sci(2, 2), "2.00e+120".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let num = f!("{:.precision$e}", &self, precision = precision);
        match num.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                f!("{mantissa}e{sign}{digits:0>exp_pad$}")
            }
            // NaN and inf have no exponent to pad
            None => num,
        }
    }
}
