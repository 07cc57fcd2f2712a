//! Rounding to the precision a format displays.
//!
//! A dragged float value is rounded through its own text representation, so
//! the value stored in the caller's variable is exactly what the slider shows.

use crate::{
    format::{FormatArg, FormatSpec},
    numeric::{CanonicalScalar, Scalar},
};

/// Rounds `value` to the precision shown by `format`.
///
/// Integers and formats without a rounding precision return `value`
/// unchanged. Non-finite floats are never touched.
///
/// ```
/// use duoslide_components::{format::FormatSpec, rounding::round_to_format};
///
/// let spec = FormatSpec::parse("%.2f").unwrap();
/// assert_eq!(round_to_format(&spec, 1.23456f32), 1.23);
/// assert_eq!(round_to_format(&spec, 7i32), 7);
/// ```
pub fn round_to_format<T: Scalar>(format: &FormatSpec, value: T) -> T {
    if !T::KIND.is_float() {
        return value;
    }
    T::from_f64(round_decimal(format, value.to_f64()))
}

/// Canonical-width variant used by the engine.
pub(crate) fn round_canonical<C: CanonicalScalar>(format: &FormatSpec, value: C) -> C {
    if C::IS_FLOAT {
        C::saturating_from_f64(round_decimal(format, value.as_f64()))
    } else {
        value
    }
}

fn round_decimal(format: &FormatSpec, value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let Some(conversion) = format.rounding_conversion() else {
        return value;
    };
    let mut text = String::new();
    conversion.render(FormatArg::Float(value), &mut text);
    text.trim().parse().unwrap_or(value)
}
