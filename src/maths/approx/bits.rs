//! Bit-level helpers for the lane primitives that core does not provide
//! without libm.

const F64_SIGN: u64 = 0x8000_0000_0000_0000;
const F32_SIGN: u32 = 0x8000_0000;

#[inline(always)]
pub(crate) fn abs_f64(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !F64_SIGN)
}

#[inline(always)]
pub(crate) fn abs_f32(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & !F32_SIGN)
}

/// floor(x) via bit manipulation (no libm). Bit-identical to std, signed zero
/// included.
#[inline(always)]
pub(crate) fn floor_f64(x: f64) -> f64 {
    let u = x.to_bits();
    let neg = u >> 63 == 1;
    let e = ((u >> 52) & 0x7ff) as i32;
    if e == 0x7ff {
        return x;
    } // NaN/Inf
    let j0 = e - 1023;
    if j0 < 0 {
        // |x| < 1, subnormals included
        if (u << 1) == 0 {
            return x;
        }
        return if neg { -1.0 } else { 0.0 };
    }
    if j0 >= 52 {
        return x;
    }
    let mask = (1u64 << (52 - j0)) - 1;
    if (u & mask) == 0 {
        return x;
    }
    let mut ui = u & !mask;
    if neg {
        // negative: floor moves away from zero
        ui = ui.wrapping_add(1u64 << (52 - j0));
    }
    f64::from_bits(ui)
}

/// Single-precision counterpart of [`floor_f64`].
#[inline(always)]
pub(crate) fn floor_f32(x: f32) -> f32 {
    let u = x.to_bits();
    let neg = u >> 31 == 1;
    let e = ((u >> 23) & 0xff) as i32;
    if e == 0xff {
        return x;
    }
    let j0 = e - 127;
    if j0 < 0 {
        if (u << 1) == 0 {
            return x;
        }
        return if neg { -1.0 } else { 0.0 };
    }
    if j0 >= 23 {
        return x;
    }
    let mask = (1u32 << (23 - j0)) - 1;
    if (u & mask) == 0 {
        return x;
    }
    let mut ui = u & !mask;
    if neg {
        ui = ui.wrapping_add(1u32 << (23 - j0));
    }
    f32::from_bits(ui)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_inputs_f64() -> [f64; 22] {
        [
            0.0,
            -0.0,
            0.25,
            -0.25,
            0.999_999_999_999,
            -0.999_999_999_999,
            1.0,
            -1.0,
            1.5,
            -1.5,
            2.0,
            -2.5,
            123_456.789,
            -123_456.789,
            4_503_599_627_370_495.5,
            -4_503_599_627_370_495.5,
            1e300,
            -1e300,
            f64::MIN_POSITIVE,
            -f64::MIN_POSITIVE,
            f64::from_bits(1),
            -f64::from_bits(1),
        ]
    }

    #[test]
    fn floor_f64_matches_std() {
        for x in floor_inputs_f64() {
            assert_eq!(floor_f64(x).to_bits(), x.floor().to_bits(), "floor_f64({x})");
        }
        assert!(floor_f64(f64::NAN).is_nan());
        assert_eq!(floor_f64(f64::INFINITY), f64::INFINITY);
        assert_eq!(floor_f64(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn floor_f32_matches_std() {
        for x in floor_inputs_f64() {
            let x = x as f32;
            assert_eq!(floor_f32(x).to_bits(), x.floor().to_bits(), "floor_f32({x})");
        }
        for x in [8_388_607.5f32, -8_388_607.5, 16_777_216.0, f32::from_bits(1)] {
            assert_eq!(floor_f32(x).to_bits(), x.floor().to_bits(), "floor_f32({x})");
        }
        assert!(floor_f32(f32::NAN).is_nan());
        assert_eq!(floor_f32(f32::NEG_INFINITY), f32::NEG_INFINITY);
    }

    #[test]
    fn floor_keeps_signed_zero() {
        assert_eq!(floor_f64(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(floor_f64(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(floor_f32(-0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(floor_f64(-f64::from_bits(1)), -1.0);
        assert_eq!(floor_f32(0.5).to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn abs_clears_sign_only() {
        assert_eq!(abs_f64(-2.5), 2.5);
        assert_eq!(abs_f64(-0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(abs_f32(-3.0), 3.0);
        assert!(abs_f32(f32::NAN).is_nan());
        assert_eq!(abs_f64(f64::NEG_INFINITY), f64::INFINITY);
    }
}
