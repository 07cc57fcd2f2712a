//! # Numeric domains
//!
//! A [`NumericDomain`] describes the value space of one slider: inclusive
//! bounds, an optional power curve for float kinds, and an optional display
//! format. It is generic over [`Scalar`], a sealed trait implemented for the
//! ten primitive numeric types the widgets accept.
//!
//! Internally every kind is funnelled into one of two canonical widths
//! (see [`CanonicalWidth`]): integers up to 32 bits compute as `i32`, 64-bit
//! integers as `i64` and both float kinds as `f64`. The conversions into and
//! out of the canonical representation are checked; the domain's half-range
//! bound guarantees they cannot fail for values inside the domain.
//!
//! ```
//! use duoslide_components::numeric::{DataKind, NumericDomain};
//!
//! let domain = NumericDomain::new(-10.0f32, 10.0).with_power(2.0);
//! assert_eq!(domain.kind(), DataKind::F32);
//! assert!(domain.is_power_curve());
//! assert_eq!(domain.clamp(25.0), 10.0);
//!
//! assert!(NumericDomain::try_new(5u8, 1).is_err());
//! ```

use std::{cmp::Ordering, fmt::Debug};

use thiserror::Error;

use crate::format::FormatArg;

/// The ten numeric representations a slider can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// `i8`
    S8,
    /// `u8`
    U8,
    /// `i16`
    S16,
    /// `u16`
    U16,
    /// `i32`
    S32,
    /// `u32`
    U32,
    /// `i64`
    S64,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

/// Width of the arithmetic a kind is computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalWidth {
    /// `i32`, used by every integer kind of 32 bits or fewer.
    Bits32,
    /// `i64` for 64-bit integers, `f64` for both float kinds.
    Bits64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CanonicalRepr {
    I32,
    I64,
    F64,
}

impl DataKind {
    /// True for `f32` and `f64`.
    pub const fn is_float(self) -> bool {
        matches!(self, DataKind::F32 | DataKind::F64)
    }

    /// True for signed integers and floats.
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            DataKind::U8 | DataKind::U16 | DataKind::U32 | DataKind::U64
        )
    }

    /// Size of the representation in bits.
    pub const fn bits(self) -> u32 {
        match self {
            DataKind::S8 | DataKind::U8 => 8,
            DataKind::S16 | DataKind::U16 => 16,
            DataKind::S32 | DataKind::U32 | DataKind::F32 => 32,
            DataKind::S64 | DataKind::U64 | DataKind::F64 => 64,
        }
    }

    /// Canonical computation width.
    pub const fn canonical(self) -> CanonicalWidth {
        match self.canonical_repr() {
            CanonicalRepr::I32 => CanonicalWidth::Bits32,
            CanonicalRepr::I64 | CanonicalRepr::F64 => CanonicalWidth::Bits64,
        }
    }

    pub(crate) const fn canonical_repr(self) -> CanonicalRepr {
        match self {
            DataKind::S8
            | DataKind::U8
            | DataKind::S16
            | DataKind::U16
            | DataKind::S32
            | DataKind::U32 => CanonicalRepr::I32,
            DataKind::S64 | DataKind::U64 => CanonicalRepr::I64,
            DataKind::F32 | DataKind::F64 => CanonicalRepr::F64,
        }
    }

    /// printf-style format for a single value of this kind.
    pub const fn default_format(self) -> &'static str {
        match self {
            DataKind::S8 | DataKind::S16 | DataKind::S32 | DataKind::S64 => "%d",
            DataKind::U8 | DataKind::U16 | DataKind::U32 | DataKind::U64 => "%u",
            DataKind::F32 | DataKind::F64 => "%.3f",
        }
    }

    /// printf-style format showing a pair of values of this kind.
    pub const fn default_pair_format(self) -> &'static str {
        match self {
            DataKind::S8 | DataKind::S16 | DataKind::S32 | DataKind::S64 => "(%d, %d)",
            DataKind::U8 | DataKind::U16 | DataKind::U32 | DataKind::U64 => "(%u, %u)",
            DataKind::F32 | DataKind::F64 => "(%.3f, %.3f)",
        }
    }
}

pub(crate) mod sealed {
    use crate::format::FormatArg;

    /// Checked conversions between a scalar and the canonical widths.
    pub trait Sealed: Sized {
        fn to_i32(self) -> Option<i32>;
        fn from_i32(value: i32) -> Option<Self>;
        fn to_i64(self) -> Option<i64>;
        fn from_i64(value: i64) -> Option<Self>;
        fn to_f64(self) -> f64;
        fn from_f64(value: f64) -> Self;
        fn within_half_range(self) -> bool;
        fn format_arg(self) -> FormatArg;
    }
}

use sealed::Sealed;

/// A primitive numeric type a slider can edit.
///
/// Implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`, `u64`, `f32`
/// and `f64`. The trait is sealed.
pub trait Scalar: Sealed + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Runtime tag of the type.
    const KIND: DataKind;
}

macro_rules! impl_int_scalar {
    ($ty:ty, $kind:ident, $arg:ident, $wide:ty, |$v:ident| $half:expr) => {
        impl Sealed for $ty {
            fn to_i32(self) -> Option<i32> {
                i32::try_from(self).ok()
            }

            fn from_i32(value: i32) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }

            fn to_i64(self) -> Option<i64> {
                i64::try_from(self).ok()
            }

            fn from_i64(value: i64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn within_half_range(self) -> bool {
                let $v = self;
                $half
            }

            fn format_arg(self) -> FormatArg {
                FormatArg::$arg(<$wide>::from(self))
            }
        }

        impl Scalar for $ty {
            const KIND: DataKind = DataKind::$kind;
        }
    };
}

impl_int_scalar!(i8, S8, Signed, i64, |_v| true);
impl_int_scalar!(u8, U8, Unsigned, u64, |_v| true);
impl_int_scalar!(i16, S16, Signed, i64, |_v| true);
impl_int_scalar!(u16, U16, Unsigned, u64, |_v| true);
impl_int_scalar!(i32, S32, Signed, i64, |v| v >= i32::MIN / 2 && v <= i32::MAX / 2);
impl_int_scalar!(u32, U32, Unsigned, u64, |v| v <= u32::MAX / 2);
impl_int_scalar!(i64, S64, Signed, i64, |v| v >= i64::MIN / 2 && v <= i64::MAX / 2);
impl_int_scalar!(u64, U64, Unsigned, u64, |v| v <= u64::MAX / 2);

impl Sealed for f32 {
    fn to_i32(self) -> Option<i32> {
        None
    }

    fn from_i32(_value: i32) -> Option<Self> {
        None
    }

    fn to_i64(self) -> Option<i64> {
        None
    }

    fn from_i64(_value: i64) -> Option<Self> {
        None
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn within_half_range(self) -> bool {
        self.abs() <= f32::MAX / 2.0
    }

    fn format_arg(self) -> FormatArg {
        FormatArg::Float(f64::from(self))
    }
}

impl Scalar for f32 {
    const KIND: DataKind = DataKind::F32;
}

impl Sealed for f64 {
    fn to_i32(self) -> Option<i32> {
        None
    }

    fn from_i32(_value: i32) -> Option<Self> {
        None
    }

    fn to_i64(self) -> Option<i64> {
        None
    }

    fn from_i64(_value: i64) -> Option<Self> {
        None
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn within_half_range(self) -> bool {
        self.abs() <= f64::MAX / 2.0
    }

    fn format_arg(self) -> FormatArg {
        FormatArg::Float(self)
    }
}

impl Scalar for f64 {
    const KIND: DataKind = DataKind::F64;
}

/// Arithmetic representation shared by several [`Scalar`] kinds.
pub(crate) trait CanonicalScalar: Copy + PartialOrd + Debug {
    const IS_FLOAT: bool;

    /// Converts a scalar that lies inside a valid domain.
    fn widen<T: Scalar>(value: T) -> Self;
    /// Converts back; the value must come from the same domain.
    fn narrow<T: Scalar>(self) -> T;
    fn as_f64(self) -> f64;
    /// `as`-cast semantics: truncates towards zero and saturates.
    fn saturating_from_f64(value: f64) -> Self;
    fn saturating_offset(self, steps: Self) -> Self;
    /// Orders `a` and `b` by their distance to `self`.
    fn distance_cmp(self, a: Self, b: Self) -> Ordering;
}

impl CanonicalScalar for i32 {
    const IS_FLOAT: bool = false;

    fn widen<T: Scalar>(value: T) -> Self {
        match value.to_i32() {
            Some(v) => v,
            None => panic!("{:?} value {value:?} does not fit the 32-bit canonical width", T::KIND),
        }
    }

    fn narrow<T: Scalar>(self) -> T {
        match T::from_i32(self) {
            Some(v) => v,
            None => panic!("canonical value {self} does not fit {:?}", T::KIND),
        }
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    fn saturating_from_f64(value: f64) -> Self {
        value as i32
    }

    fn saturating_offset(self, steps: Self) -> Self {
        self.saturating_add(steps)
    }

    fn distance_cmp(self, a: Self, b: Self) -> Ordering {
        self.abs_diff(a).cmp(&self.abs_diff(b))
    }
}

impl CanonicalScalar for i64 {
    const IS_FLOAT: bool = false;

    fn widen<T: Scalar>(value: T) -> Self {
        match value.to_i64() {
            Some(v) => v,
            None => panic!("{:?} value {value:?} does not fit the 64-bit canonical width", T::KIND),
        }
    }

    fn narrow<T: Scalar>(self) -> T {
        match T::from_i64(self) {
            Some(v) => v,
            None => panic!("canonical value {self} does not fit {:?}", T::KIND),
        }
    }

    fn as_f64(self) -> f64 {
        self as f64
    }

    fn saturating_from_f64(value: f64) -> Self {
        value as i64
    }

    fn saturating_offset(self, steps: Self) -> Self {
        self.saturating_add(steps)
    }

    fn distance_cmp(self, a: Self, b: Self) -> Ordering {
        self.abs_diff(a).cmp(&self.abs_diff(b))
    }
}

impl CanonicalScalar for f64 {
    const IS_FLOAT: bool = true;

    fn widen<T: Scalar>(value: T) -> Self {
        value.to_f64()
    }

    fn narrow<T: Scalar>(self) -> T {
        T::from_f64(self)
    }

    fn as_f64(self) -> f64 {
        self
    }

    fn saturating_from_f64(value: f64) -> Self {
        value
    }

    fn saturating_offset(self, steps: Self) -> Self {
        self + steps
    }

    fn distance_cmp(self, a: Self, b: Self) -> Ordering {
        (a - self)
            .abs()
            .partial_cmp(&(b - self).abs())
            .unwrap_or(Ordering::Equal)
    }
}

/// Why a domain could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// `min > max`, or a bound is NaN.
    #[error("range minimum {min} is greater than maximum {max}")]
    InvertedBounds {
        /// Debug rendering of the minimum.
        min: String,
        /// Debug rendering of the maximum.
        max: String,
    },
    /// A bound lies outside half of the representable range of its kind.
    #[error("{kind:?} bound {value} lies outside half of the representable range")]
    OutsideHalfRange {
        /// Kind of the domain.
        kind: DataKind,
        /// Debug rendering of the offending bound.
        value: String,
    },
    /// The power exponent is negative or not finite.
    #[error("power exponent must be finite and >= 0, got {0}")]
    InvalidPower(f32),
}

/// Value space of one slider.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericDomain<T: Scalar> {
    min: T,
    max: T,
    power: f32,
    format: Option<String>,
}

impl<T: Scalar> NumericDomain<T> {
    /// Linear domain over `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics when [`try_new`](Self::try_new) would fail.
    pub fn new(min: T, max: T) -> Self {
        match Self::try_new(min, max) {
            Ok(domain) => domain,
            Err(err) => panic!("invalid numeric domain: {err}"),
        }
    }

    /// Linear domain over `[min, max]`, validating the bounds.
    pub fn try_new(min: T, max: T) -> Result<Self, DomainError> {
        if !(min <= max) {
            return Err(DomainError::InvertedBounds {
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            });
        }
        if T::KIND.bits() >= 32 {
            for bound in [min, max] {
                if !bound.within_half_range() {
                    return Err(DomainError::OutsideHalfRange {
                        kind: T::KIND,
                        value: format!("{bound:?}"),
                    });
                }
            }
        }
        Ok(Self {
            min,
            max,
            power: 1.0,
            format: None,
        })
    }

    /// Sets the power exponent. Only float kinds use it.
    ///
    /// # Panics
    ///
    /// Panics for negative or non-finite exponents.
    pub fn with_power(self, power: f32) -> Self {
        match self.try_with_power(power) {
            Ok(domain) => domain,
            Err(err) => panic!("invalid numeric domain: {err}"),
        }
    }

    /// Sets the power exponent, validating it.
    pub fn try_with_power(mut self, power: f32) -> Result<Self, DomainError> {
        if !(power.is_finite() && power >= 0.0) {
            return Err(DomainError::InvalidPower(power));
        }
        self.power = power;
        Ok(self)
    }

    /// Sets the printf-style display format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Kind of the domain.
    pub fn kind(&self) -> DataKind {
        T::KIND
    }

    /// Inclusive minimum.
    pub fn min(&self) -> T {
        self.min
    }

    /// Inclusive maximum.
    pub fn max(&self) -> T {
        self.max
    }

    /// Power exponent, `1.0` for linear.
    pub fn power(&self) -> f32 {
        self.power
    }

    /// User-supplied display format.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// True for float domains with a non-linear power exponent.
    pub fn is_power_curve(&self) -> bool {
        T::KIND.is_float() && self.power != 1.0
    }

    /// Clamps `value` into the domain. NaN maps to the minimum.
    pub fn clamp(&self, value: T) -> T {
        if value >= self.min {
            if value <= self.max { value } else { self.max }
        } else {
            self.min
        }
    }

    /// True when `value` lies inside the domain.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    pub(crate) fn canonical<C: CanonicalScalar>(&self) -> CanonicalDomain<C> {
        CanonicalDomain {
            min: C::widen(self.min),
            max: C::widen(self.max),
            power: f64::from(self.power),
            power_curve: self.is_power_curve(),
        }
    }
}

/// A domain converted to its canonical width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CanonicalDomain<C> {
    pub min: C,
    pub max: C,
    pub power: f64,
    pub power_curve: bool,
}

impl<C: CanonicalScalar> CanonicalDomain<C> {
    pub(crate) fn clamp(&self, value: C) -> C {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// `max - min` as a float.
    pub(crate) fn span(&self) -> f64 {
        self.max.as_f64() - self.min.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DataKind::S8, CanonicalWidth::Bits32)]
    #[case(DataKind::U16, CanonicalWidth::Bits32)]
    #[case(DataKind::U32, CanonicalWidth::Bits32)]
    #[case(DataKind::S64, CanonicalWidth::Bits64)]
    #[case(DataKind::U64, CanonicalWidth::Bits64)]
    #[case(DataKind::F32, CanonicalWidth::Bits64)]
    fn canonical_widths(#[case] kind: DataKind, #[case] width: CanonicalWidth) {
        assert_eq!(kind.canonical(), width);
    }

    #[test]
    fn rejects_inverted_and_nan_bounds() {
        assert!(matches!(
            NumericDomain::try_new(3i32, 1),
            Err(DomainError::InvertedBounds { .. })
        ));
        assert!(NumericDomain::try_new(f32::NAN, 1.0).is_err());
        assert!(NumericDomain::try_new(2u8, 2).is_ok());
    }

    #[test]
    fn enforces_half_range_for_wide_kinds() {
        assert!(NumericDomain::try_new(0u32, u32::MAX / 2).is_ok());
        assert!(matches!(
            NumericDomain::try_new(0u32, u32::MAX / 2 + 1),
            Err(DomainError::OutsideHalfRange {
                kind: DataKind::U32,
                ..
            })
        ));
        assert!(NumericDomain::try_new(i64::MIN / 2, 0).is_ok());
        assert!(NumericDomain::try_new(i64::MIN, 0).is_err());
        assert!(NumericDomain::try_new(-f64::MAX, 0.0).is_err());
        assert!(NumericDomain::try_new(i16::MIN, i16::MAX).is_ok());
        assert!(NumericDomain::try_new(0u8, u8::MAX).is_ok());
    }

    #[test]
    #[should_panic(expected = "invalid numeric domain")]
    fn new_panics_on_invalid_bounds() {
        let _ = NumericDomain::new(10i32, 0);
    }

    #[test]
    fn power_validation() {
        let domain = NumericDomain::new(0.0f64, 1.0);
        assert!(domain.clone().try_with_power(-1.0).is_err());
        assert!(domain.clone().try_with_power(f32::NAN).is_err());
        assert!(domain.clone().try_with_power(0.0).is_ok());
        assert!(!NumericDomain::new(0i32, 10).with_power(3.0).is_power_curve());
    }

    #[test]
    fn clamp_maps_nan_to_min() {
        let domain = NumericDomain::new(-1.0f32, 1.0);
        assert_eq!(domain.clamp(f32::NAN), -1.0);
        assert_eq!(domain.clamp(5.0), 1.0);
        assert_eq!(domain.clamp(0.25), 0.25);
        assert!(domain.contains(1.0));
        assert!(!domain.contains(1.5));
    }

    #[test]
    fn canonical_round_trip_for_unsigned_wide_values() {
        let domain = NumericDomain::new(0u32, u32::MAX / 2);
        let canonical = domain.canonical::<i32>();
        assert_eq!(canonical.max, i32::MAX);
        assert_eq!(canonical.max.narrow::<u32>(), u32::MAX / 2);
    }

    #[test]
    fn distance_ordering() {
        assert_eq!(5i32.distance_cmp(3, 7), Ordering::Equal);
        assert_eq!(5i64.distance_cmp(4, 7), Ordering::Less);
        assert_eq!(0.5f64.distance_cmp(1.0, 0.25), Ordering::Greater);
        assert_eq!(i32::MIN.distance_cmp(i32::MAX, 0), Ordering::Greater);
    }
}
