//! Value to track-ratio mapping.
//!
//! A ratio is the normalized position of a value along the track, `0.0` at
//! the minimum and `1.0` at the maximum. Float domains with a power exponent
//! other than `1.0` use a curve that spends more track on values near zero;
//! the curve is split at zero so that negative and positive values each get
//! their own segment.

use crate::numeric::{CanonicalDomain, CanonicalRepr, CanonicalScalar, NumericDomain, Scalar};

/// Exponents closer to 1 than this are treated as linear in the inverse mapping.
const ZERO_POS_EPSILON: f64 = 1e-6;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl<C: CanonicalScalar> CanonicalDomain<C> {
    /// Ratio at which a power-curve domain crosses zero.
    pub(crate) fn linear_zero_pos(&self) -> f64 {
        let (min, max) = (self.min.as_f64(), self.max.as_f64());
        if self.power_curve && min < 0.0 && max > 0.0 {
            let inv_power = 1.0 / self.power;
            let dist_min = min.abs().powf(inv_power);
            let dist_max = max.abs().powf(inv_power);
            dist_min / (dist_min + dist_max)
        } else if min < 0.0 {
            1.0
        } else {
            0.0
        }
    }

    pub(crate) fn ratio_of(&self, value: C) -> f32 {
        if self.min == self.max {
            return 0.0;
        }
        let value = self.clamp(value).as_f64();
        let (min, max) = (self.min.as_f64(), self.max.as_f64());

        let ratio = if self.power_curve {
            let zero_pos = self.linear_zero_pos();
            let inv_power = 1.0 / self.power;
            if value < 0.0 {
                let f = 1.0 - (value - min) / (max.min(0.0) - min);
                (1.0 - f.powf(inv_power)) * zero_pos
            } else {
                let lower = min.max(0.0);
                let span = max - lower;
                let f = if span > 0.0 {
                    (value - lower) / span
                } else {
                    0.0
                };
                zero_pos + f.powf(inv_power) * (1.0 - zero_pos)
            }
        } else {
            (value - min) / (max - min)
        };
        ratio as f32
    }

    pub(crate) fn value_at(&self, ratio: f32) -> C {
        let t = f64::from(ratio.clamp(0.0, 1.0));
        let (min, max) = (self.min.as_f64(), self.max.as_f64());

        if self.power_curve {
            let zero_pos = self.linear_zero_pos();
            let value = if t < zero_pos {
                let a = (1.0 - t / zero_pos).powf(self.power);
                lerp(max.min(0.0), min, a)
            } else {
                let a = if (zero_pos - 1.0).abs() > ZERO_POS_EPSILON {
                    (t - zero_pos) / (1.0 - zero_pos)
                } else {
                    t
                };
                lerp(min.max(0.0), max, a.powf(self.power))
            };
            self.clamp(C::saturating_from_f64(value))
        } else if C::IS_FLOAT {
            self.clamp(C::saturating_from_f64(lerp(min, max, t)))
        } else {
            let offset = (max - min) * t;
            let floor = offset.trunc();
            let round = (offset + 0.5).trunc();
            let steps = C::saturating_from_f64(if floor < round { round } else { floor });
            self.clamp(self.min.saturating_offset(steps))
        }
    }
}

/// Normalized track position of `value`, clamped into the domain first.
///
/// ```
/// use duoslide_components::{numeric::NumericDomain, ratio::value_to_ratio};
///
/// let domain = NumericDomain::new(0i32, 10);
/// assert_eq!(value_to_ratio(&domain, 5), 0.5);
/// assert_eq!(value_to_ratio(&domain, 99), 1.0);
/// ```
pub fn value_to_ratio<T: Scalar>(domain: &NumericDomain<T>, value: T) -> f32 {
    fn mapped<C: CanonicalScalar, T: Scalar>(domain: &NumericDomain<T>, value: T) -> f32 {
        domain
            .canonical::<C>()
            .ratio_of(C::widen(domain.clamp(value)))
    }

    match T::KIND.canonical_repr() {
        CanonicalRepr::I32 => mapped::<i32, T>(domain, value),
        CanonicalRepr::I64 => mapped::<i64, T>(domain, value),
        CanonicalRepr::F64 => mapped::<f64, T>(domain, value),
    }
}

/// Value at track position `ratio` (clamped to `[0, 1]`).
///
/// Integers round half up to the nearest unit.
///
/// ```
/// use duoslide_components::{numeric::NumericDomain, ratio::ratio_to_value};
///
/// let domain = NumericDomain::new(0u8, 10);
/// assert_eq!(ratio_to_value(&domain, 0.25), 3);
/// assert_eq!(ratio_to_value(&domain, 0.24), 2);
/// ```
pub fn ratio_to_value<T: Scalar>(domain: &NumericDomain<T>, ratio: f32) -> T {
    fn mapped<C: CanonicalScalar, T: Scalar>(domain: &NumericDomain<T>, ratio: f32) -> T {
        domain.canonical::<C>().value_at(ratio).narrow()
    }

    match T::KIND.canonical_repr() {
        CanonicalRepr::I32 => mapped::<i32, T>(domain, ratio),
        CanonicalRepr::I64 => mapped::<i64, T>(domain, ratio),
        CanonicalRepr::F64 => mapped::<f64, T>(domain, ratio),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn degenerate_domain_maps_to_zero() {
        let domain = NumericDomain::new(4i32, 4);
        assert_eq!(value_to_ratio(&domain, 4), 0.0);
        assert_eq!(ratio_to_value(&domain, 0.7), 4);
    }

    #[rstest]
    #[case(-20, 0.0)]
    #[case(0, 0.0)]
    #[case(25, 0.25)]
    #[case(100, 1.0)]
    #[case(500, 1.0)]
    fn clamps_before_mapping(#[case] value: i16, #[case] ratio: f32) {
        let domain = NumericDomain::new(0i16, 100);
        assert_eq!(value_to_ratio(&domain, value), ratio);
    }

    #[test]
    fn linear_integer_round_trip() {
        let domain = NumericDomain::new(-50i32, 77);
        for v in -50..=77 {
            let back = ratio_to_value(&domain, value_to_ratio(&domain, v));
            assert!((back - v).abs() <= 1, "{v} came back as {back}");
        }
    }

    #[test]
    fn linear_float_round_trip() {
        let domain = NumericDomain::new(-2.5f64, 7.5);
        for i in 0..=100 {
            let v = -2.5 + f64::from(i) * 0.1;
            let back = ratio_to_value(&domain, value_to_ratio(&domain, v));
            assert!((back - v).abs() < 1e-5, "{v} came back as {back}");
        }
    }

    #[test]
    fn integers_round_half_up() {
        let domain = NumericDomain::new(0i64, 4);
        assert_eq!(ratio_to_value(&domain, 0.125), 1);
        assert_eq!(ratio_to_value(&domain, 0.12), 0);
        assert_eq!(ratio_to_value(&domain, 1.0), 4);
        assert_eq!(ratio_to_value(&domain, 2.0), 4);
    }

    #[rstest]
    #[case(1.0)]
    #[case(100.0)]
    #[case(1.0e6)]
    fn power_curve_is_symmetric_around_zero(#[case] extent: f32) {
        for power in [0.5f32, 2.0, 3.0] {
            let domain = NumericDomain::new(-extent, extent).with_power(power);
            assert_eq!(value_to_ratio(&domain, 0.0), 0.5);
            let lo = value_to_ratio(&domain, -extent / 2.0);
            let hi = value_to_ratio(&domain, extent / 2.0);
            assert!((lo + hi - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn power_curve_round_trip_and_monotonic() {
        let domain = NumericDomain::new(-10.0f32, 30.0).with_power(2.0);
        let mut previous = -1.0;
        for i in 0..=40 {
            let v = -10.0 + i as f32;
            let ratio = value_to_ratio(&domain, v);
            assert!(ratio > previous);
            previous = ratio;
            let back = ratio_to_value(&domain, ratio);
            assert!((back - v).abs() < 1e-3, "{v} came back as {back}");
        }
        assert_eq!(value_to_ratio(&domain, -10.0), 0.0);
        assert_eq!(value_to_ratio(&domain, 30.0), 1.0);
    }

    #[test]
    fn power_curve_expands_values_near_zero() {
        let domain = NumericDomain::new(0.0f64, 100.0).with_power(2.0);
        assert_eq!(value_to_ratio(&domain, 25.0), 0.5);
        assert_eq!(ratio_to_value(&domain, 0.5), 25.0);
    }

    #[test]
    fn negative_only_power_domain() {
        let domain = NumericDomain::new(-100.0f32, 0.0).with_power(2.0);
        assert_eq!(value_to_ratio(&domain, -100.0), 0.0);
        assert_eq!(value_to_ratio(&domain, 0.0), 1.0);
        assert_eq!(ratio_to_value(&domain, 1.0), 0.0);
        assert_eq!(ratio_to_value(&domain, 0.0), -100.0);
    }

    #[test]
    fn wide_unsigned_domain() {
        let domain = NumericDomain::new(0u64, u64::MAX / 2);
        assert_eq!(value_to_ratio(&domain, 0), 0.0);
        assert_eq!(value_to_ratio(&domain, u64::MAX / 2), 1.0);
        assert_eq!(ratio_to_value(&domain, 1.0), u64::MAX / 2);
        assert_eq!(ratio_to_value(&domain, 0.0), 0);
    }
}
