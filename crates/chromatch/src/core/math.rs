/// Precision constants that depend on the floating point type.
pub(crate) trait FloatExt {
    /// The scale applied before rounding coordinates for equality testing
    /// and hashing. A factor of 10ⁿ keeps n digits past the decimal.
    const ROUNDING_FACTOR: Self;

    /// The largest acceptable difference between a palette entry's stored Lab
    /// coordinates and the coordinates recomputed from its hex code.
    const LAB_TOLERANCE: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: Self = 1e12;
    const LAB_TOLERANCE: Self = 1e-6;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: Self = 1e4;
    const LAB_TOLERANCE: Self = 1e-3;
}
