use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Unpack a 24-bit integer into its red, green, and blue bytes.
#[inline]
pub(crate) const fn unpack(value: u32) -> [u8; 3] {
    [
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
///
/// Products are summed left to right without fused multiply-adds. Palette
/// data is precomputed the same way and must be reproduced exactly.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        vector[0] * row1[0] + vector[1] * row1[1] + vector[2] * row1[2],
        vector[0] * row2[0] + vector[1] * row2[1] + vector[2] * row2[2],
        vector[0] * row3[0] + vector[1] * row3[1] + vector[2] * row3[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
///
/// Unlike a general-purpose conversion, this function only accepts in-gamut
/// coordinates `0..=1` and hence does not mirror the curve for negative values.
fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value > 0.04045 {
            ((value + 0.055) / 1.055).powf(2.4)
        } else {
            value / 12.92
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124, 0.3576, 0.1805 ],
    [ 0.2126, 0.7152, 0.0722 ],
    [ 0.0193, 0.1192, 0.9505 ],
];

/// The D65 reference white.
const D65_WHITE: [Float; 3] = [0.95047, 1.0, 1.08883];

/// Convert coordinates for linear sRGB to XYZ relative to the D65 reference
/// white. This is a one-hop, direct conversion.
fn linear_srgb_to_relative_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, value);
    let [xn, yn, zn] = D65_WHITE;
    [x / xn, y / yn, z / zn]
}

// --------------------------------------------------------------------------------------------------------------------

/// The threshold between the linear and the cube-root segments of the Lab
/// nonlinearity.
const EPSILON: Float = 0.008856;

/// Convert coordinates for relative XYZ to CIE Lab. This is a one-hop, direct
/// conversion.
fn relative_xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value > EPSILON {
            value.powf(1.0 / 3.0)
        } else {
            7.787 * value + 16.0 / 116.0
        }
    }

    let [fx, fy, fz] = [convert(value[0]), convert(value[1]), convert(value[2])];
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the 24-bit sRGB color to CIE Lab. This is a four-hop conversion.
///
/// The function is total: Every 24-bit color yields a lightness `0..=100` and
/// finite a/b.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_lab(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    let srgb = from_24bit(r, g, b);
    let linear_srgb = srgb_to_linear_srgb(&srgb);
    let xyz = linear_srgb_to_relative_xyz(&linear_srgb);
    relative_xyz_to_lab(&xyz)
}
