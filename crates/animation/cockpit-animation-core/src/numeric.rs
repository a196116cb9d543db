//! Numeric helpers that turn domain values into animation states.
//!
//! These feed the same target/step pattern as every instrument: a domain value
//! (airspeed, heading, a counter reading) becomes a fraction in `[0, 1]`, or
//! one fraction per digit drum, which is then handed to `Animation::step`.

use std::f64::consts::TAU;

/// Wrap any real into `[0, 1)`. NaN and infinities map to 0.
#[inline]
pub fn wrap_unit(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let r = v.rem_euclid(1.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

/// Linear map of `v` from `[min, max]` into `[0, 1]`, clamped. A degenerate or
/// non-finite range yields 0.
#[inline]
pub fn range_to_fraction(v: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let f = (v - min) / span;
    if f.is_nan() {
        0.0
    } else {
        f.clamp(0.0, 1.0)
    }
}

/// Angle in radians to a wrapped fraction of a full turn.
#[inline]
pub fn angle_to_fraction(radians: f64) -> f64 {
    wrap_unit(radians / TAU)
}

/// Angle in degrees to a wrapped fraction of a full turn.
#[inline]
pub fn degrees_to_fraction(degrees: f64) -> f64 {
    wrap_unit(degrees / 360.0)
}

/// Fraction of a full turn back to radians.
#[inline]
pub fn fraction_to_angle(fraction: f64) -> f64 {
    fraction * TAU
}

/// U offset into a texture strip of `cells` equally wide cells, where state 0
/// is the first cell and 1 the far edge of the last.
#[inline]
pub fn uv_offset(state: f64, cells: u32, cell_width: f64) -> f64 {
    state * f64::from(cells) * cell_width
}

/// Base-10 digits of `value`, least significant first. Negative or
/// non-finite values read as zero; digits above `count` are dropped.
pub fn decimal_digits(value: f64, count: usize) -> Vec<u8> {
    let mut whole = if value.is_finite() && value > 0.0 {
        value.floor()
    } else {
        0.0
    };
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(whole.rem_euclid(10.0) as u8);
        whole = (whole / 10.0).floor();
    }
    out
}

/// Drum positions for a rolling (odometer) counter, least significant first.
///
/// Each entry is a wrap fraction where `d / 10` shows digit `d`. The lowest
/// drum rolls continuously with the fractional part; every higher drum only
/// rolls while all drums below it are passing from 9 to 0.
pub fn odometer_digits(value: f64, count: usize) -> Vec<f64> {
    let v = if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    };
    let mut out = Vec::with_capacity(count);
    let mut place = 1.0_f64;
    for i in 0..count {
        let frac = if i == 0 {
            v.rem_euclid(10.0) / 10.0
        } else {
            let digit = (v / place).floor().rem_euclid(10.0);
            let below = v.rem_euclid(place);
            let roll_start = place - 1.0;
            let roll = if below > roll_start {
                below - roll_start
            } else {
                0.0
            };
            (digit + roll) / 10.0
        };
        out.push(wrap_unit(frac));
        place *= 10.0;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "left={a} right={b}");
    }

    #[test]
    fn wrap_unit_handles_negatives() {
        approx(wrap_unit(-0.25), 0.75);
        approx(wrap_unit(2.5), 0.5);
        assert_eq!(wrap_unit(f64::NAN), 0.0);
        let tiny = wrap_unit(-1e-18);
        assert!((0.0..1.0).contains(&tiny));
    }

    #[test]
    fn range_to_fraction_clamps() {
        approx(range_to_fraction(150.0, 0.0, 300.0), 0.5);
        approx(range_to_fraction(-10.0, 0.0, 300.0), 0.0);
        approx(range_to_fraction(400.0, 0.0, 300.0), 1.0);
        approx(range_to_fraction(5.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn angles_wrap_to_fractions() {
        approx(degrees_to_fraction(90.0), 0.25);
        approx(degrees_to_fraction(-90.0), 0.75);
        approx(angle_to_fraction(std::f64::consts::PI), 0.5);
        approx(fraction_to_angle(0.5), std::f64::consts::PI);
    }

    #[test]
    fn uv_offset_spans_strip() {
        approx(uv_offset(0.5, 4, 0.125), 0.25);
    }

    #[test]
    fn decimal_digits_least_significant_first() {
        assert_eq!(decimal_digits(1234.9, 4), vec![4, 3, 2, 1]);
        assert_eq!(decimal_digits(7.0, 3), vec![7, 0, 0]);
        assert_eq!(decimal_digits(-3.0, 2), vec![0, 0]);
        assert_eq!(decimal_digits(12345.0, 2), vec![5, 4]);
    }

    #[test]
    fn odometer_rolls_higher_drums_on_carry() {
        let d = odometer_digits(19.5, 3);
        approx(d[0], 0.95);
        approx(d[1], 0.15);
        approx(d[2], 0.0);

        let d = odometer_digits(42.0, 2);
        approx(d[0], 0.2);
        approx(d[1], 0.4);
    }

    #[test]
    fn odometer_all_drums_in_unit_range() {
        for v in [0.0, 9.999, 99.5, 999.99, 12345.678] {
            for f in odometer_digits(v, 5) {
                assert!((0.0..1.0).contains(&f), "value {v} gave drum {f}");
            }
        }
    }
}
