use crate::core::FloatExt;
use crate::{Bits, Float};

/// Assert that two floating point numbers are equal after normalization with
/// [`to_eq_bits`].
///
/// # Panics
///
/// This macro panics if the normalized numbers differ, printing both numbers
/// on separate lines.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert_eq!(
            $crate::to_eq_bits(f1),
            $crate::to_eq_bits(f2),
            "numbers should be equal but are not:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Test macro for asserting that two coordinate arrays are the same within a
/// small absolute tolerance.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// tolerance, which defaults to 1e-9. Its message places the coordinates below
/// each other at the beginning of subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_lab {
    ($cs1:expr , $cs2:expr $(,)?) => {
        let (cs1, cs2): (&[$crate::Float; 3], &[$crate::Float; 3]) = ($cs1, $cs2);
        assert!(
            $crate::core::within_tolerance(cs1, cs2, 1e-9),
            "Lab coordinates should be within tolerance but are not:\n{:?}\n{:?}",
            cs1,
            cs2
        );
    };
    ($cs1:expr , $cs2:expr , $tolerance:expr $(,)?) => {
        let (cs1, cs2): (&[$crate::Float; 3], &[$crate::Float; 3]) = ($cs1, $cs2);
        assert!(
            $crate::core::within_tolerance(cs1, cs2, $tolerance),
            "Lab coordinates should be within tolerance but are not:\n{:?}\n{:?}",
            cs1,
            cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_lab;

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the coordinates differ by at most the given tolerance.
///
/// The comparison is coordinate-wise and absolute. Not-a-number coordinates
/// are never within tolerance.
#[inline]
pub(crate) fn within_tolerance(
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
    tolerance: Float,
) -> bool {
    coordinates1
        .iter()
        .zip(coordinates2.iter())
        .all(|(c1, c2)| (c1 - c2).abs() <= tolerance)
}

/// Normalize all three coordinates with [`to_eq_bits`].
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, c3] = *coordinates;
    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Normalize a floating point number for equality testing and hashing.
///
/// Not-a-number becomes zero, the number is rounded to a fixed number of
/// digits past the decimal (see `FloatExt::ROUNDING_FACTOR`), and negative
/// zero becomes positive zero. The result is the number's bit string. This
/// function is public for [`assert_close_enough`] only.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    if f.is_nan() {
        return (0.0 as Float).to_bits();
    }

    let rounded = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();
    // -0.0 == 0.0, but their bits differ
    if rounded == 0.0 {
        (0.0 as Float).to_bits()
    } else {
        rounded.to_bits()
    }
}

#[cfg(test)]
mod test {
    use super::{to_eq_bits, to_eq_coordinates, within_tolerance};
    use crate::Float;

    #[test]
    fn test_to_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_ne!(to_eq_bits(1.0), to_eq_bits(1.001));
        assert_close_enough!(0.1 + 0.2, 0.3);
    }

    #[test]
    fn test_to_eq_coordinates() {
        assert_eq!(
            to_eq_coordinates(&[50.0, -0.0, Float::NAN]),
            to_eq_coordinates(&[50.0, 0.0, 0.0])
        );
    }

    #[test]
    fn test_within_tolerance() {
        assert!(within_tolerance(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 0.0));
        assert!(within_tolerance(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.05], 0.1));
        assert!(!within_tolerance(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.5], 0.1));
        assert!(!within_tolerance(&[Float::NAN, 2.0, 3.0], &[Float::NAN, 2.0, 3.0], 1.0));
    }
}
