#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{self, format_lab, parse_hex, to_eq_coordinates, unpack};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit sRGB color.
///
/// Instances of this struct are ephemeral, typically parsed from a user's
/// query on every keystroke and then converted to [`Lab`].
///
/// ```
/// # use chromatch::Rgb;
/// # use chromatch::error::ColorFormatError;
/// let blue: Rgb = "#3B82F6".parse()?;
/// assert_eq!(blue, Rgb::new(0x3b, 0x82, 0xf6));
/// assert_eq!(blue.as_ref(), &[59_u8, 130, 246]);
/// assert_eq!(blue[2], 246);
/// assert_eq!(format!("{}", blue), "#3b82f6");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "chromatch")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new 24-bit color from its red, green, and blue coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new 24-bit color from its packed representation `0xRRGGBB`.
    ///
    /// Bits beyond the lower 24 bits are ignored.
    ///
    /// ```
    /// # use chromatch::Rgb;
    /// assert_eq!(Rgb::from_packed(0xef4444), Rgb::new(0xef, 0x44, 0x44));
    /// ```
    pub const fn from_packed(value: u32) -> Self {
        Self(unpack(value))
    }

    /// Convert this color to CIE Lab.
    ///
    /// This method linearizes the sRGB coordinates, converts them to XYZ
    /// relative to the D65 white point, and applies the CIE Lab nonlinearity.
    /// It is total and always produces a lightness `0..=100` and finite a/b.
    ///
    /// ```
    /// # use chromatch::{Lab, Rgb};
    /// let white = Rgb::new(0xff, 0xff, 0xff).to_lab();
    /// assert!((white.lightness() - 100.0).abs() < 1e-2);
    /// // The 4-digit matrix leaves b at about -0.0104.
    /// assert!(white.a().abs() < 2e-2 && white.b().abs() < 2e-2);
    ///
    /// assert_eq!(Rgb::new(0, 0, 0).to_lab(), Lab::new(0.0, 0.0, 0.0));
    /// ```
    pub fn to_lab(&self) -> Lab {
        Lab(core::to_lab(&self.0))
    }

    /// Format this color as six lower-case hexadecimal digits without `#`.
    pub fn to_hex(&self) -> String {
        core::format_hex(&self.0)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new 24-bit color. <i class=python-only>Python only!</i>
    #[new]
    pub const fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a 24-bit color from six hexadecimal digits with an optional
    /// leading `#`. <i class=python-only>Python only!</i>
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Rgb, ColorFormatError> {
        s.parse()
    }

    /// Get this color's coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Convert this color to CIE Lab. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_lab")]
    pub fn py_to_lab(&self) -> Lab {
        self.to_lab()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hashed hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse a 24-bit color.
    ///
    /// The string must consist of six hexadecimal digits, optionally preceded
    /// by `#`. Parsing is case-insensitive, but does not trim white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::fmt::Display for Rgb {
    /// Format this color in hashed hexadecimal notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================

/// A color in CIE L\*a\*b\*.
///
/// The lightness L\* ranges `0..=100`. There are no a-priori limits on a\* and
/// b\*, though in practice they fall into `-128..=128`. Colors are created by
/// [`Rgb::to_lab`] or from precomputed palette data.
///
/// # Equality Testing and Hashing
///
/// Like floating point numbers, Lab colors computed along slightly different
/// paths may differ in their least significant digits. Hence equality testing
/// and hashing zero out not-a-numbers, round to 12 digits past the decimal (4
/// digits for `f32`), and drop the sign of negative zeros before comparing the
/// coordinates' bit strings.
///
/// ```
/// # use chromatch::Lab;
/// assert_eq!(Lab::new(50.0, -0.0, 0.1 + 0.2), Lab::new(50.0, 0.0, 0.3));
/// assert_ne!(Lab::new(50.0, 0.0, 0.0), Lab::new(50.001, 0.0, 0.0));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "chromatch"))]
#[derive(Copy, Clone, Default)]
pub struct Lab([Float; 3]);

impl Lab {
    /// Create a new Lab color from its lightness, a, and b coordinates.
    pub const fn new(lightness: Float, a: Float, b: Float) -> Self {
        Self([lightness, a, b])
    }

    /// Get the lightness L\*.
    #[inline]
    pub fn lightness(&self) -> Float {
        self.0[0]
    }

    /// Get the green–red coordinate a\*.
    #[inline]
    pub fn a(&self) -> Float {
        self.0[1]
    }

    /// Get the blue–yellow coordinate b\*.
    #[inline]
    pub fn b(&self) -> Float {
        self.0[2]
    }

    /// Determine whether all three coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Compute the CIEDE2000 perceptual difference between this and the other
    /// color.
    ///
    /// This method treats this color as reference and the other color as
    /// sample. The result is non-negative and zero for identical colors. A
    /// difference of about 1 is the smallest difference most observers notice.
    ///
    /// ```
    /// # use chromatch::Lab;
    /// let reference = Lab::new(50.0, 2.5, 0.0);
    /// let sample = Lab::new(73.0, 25.0, -18.0);
    /// assert!((reference.delta_e(&sample) - 27.1492).abs() < 1e-4);
    /// assert_eq!(reference.delta_e(&reference), 0.0);
    /// ```
    pub fn delta_e(&self, other: &Self) -> Float {
        core::delta_e_2000(&self.0, &other.0)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Lab {
    /// Create a new Lab color. <i class=python-only>Python only!</i>
    #[new]
    pub const fn py_new(lightness: Float, a: Float, b: Float) -> Self {
        Self::new(lightness, a, b)
    }

    /// Get this color's coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Compute the CIEDE2000 difference. <i class=python-only>Python only!</i>
    #[pyo3(name = "delta_e")]
    pub fn py_delta_e(&self, other: &Self) -> Float {
        self.delta_e(other)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its CSS representation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl From<[Float; 3]> for Lab {
    fn from(value: [Float; 3]) -> Self {
        Self(value)
    }
}

impl From<Lab> for [Float; 3] {
    fn from(value: Lab) -> Self {
        value.0
    }
}

impl From<Rgb> for Lab {
    fn from(value: Rgb) -> Self {
        value.to_lab()
    }
}

impl AsRef<[Float; 3]> for Lab {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Lab {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::hash::Hash for Lab {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.0).hash(state);
    }
}

impl PartialEq for Lab {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || to_eq_coordinates(&self.0) == to_eq_coordinates(&other.0)
    }
}

impl Eq for Lab {}

impl std::fmt::Debug for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [l, a, b] = self.0;
        f.write_fmt(format_args!("Lab({}, {}, {})", l, a, b))
    }
}

impl std::fmt::Display for Lab {
    /// Format this color as a CSS `lab()` function.
    ///
    /// This method respects the formatter's precision, defaulting to 5 digits
    /// past the decimal.
    ///
    /// ```
    /// # use chromatch::Rgb;
    /// let red = Rgb::new(0xff, 0, 0).to_lab();
    /// assert_eq!(format!("{}", red), "lab(53.23288 80.10931 67.22007)");
    /// assert_eq!(format!("{:.1}", red), "lab(53.2 80.1 67.2)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_lab(&self.0, f)
    }
}

// ====================================================================================================================

/// Convert the 24-bit sRGB color to CIE Lab.
///
/// This function is the same as [`Rgb::to_lab`].
pub fn to_lab(rgb: Rgb) -> Lab {
    rgb.to_lab()
}

/// Compute the CIEDE2000 difference between the two Lab colors.
///
/// This function is the same as [`Lab::delta_e`].
pub fn delta_e_2000(lab1: &Lab, lab2: &Lab) -> Float {
    lab1.delta_e(lab2)
}
