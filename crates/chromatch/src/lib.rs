//! # Nearest Named Colors
//!
//! Chromatch finds the named colors in a fixed palette that are perceptually
//! closest to a given color. It converts 24-bit sRGB colors to CIE L\*a\*b\*
//! and ranks palette entries by their CIEDE2000 color difference.
//!
//!
//! ## Overview
//!
//!   * The [`rank`] function is the main entry point. It takes a hex query such
//!     as `#3b82f6`, a [`Palette`](palette::Palette), and the number of matches
//!     and returns the closest entries as [`RankedMatch`]es, best first.
//!     Queries that are not exactly six hexadecimal digits, optionally
//!     preceded by `#`, produce no matches. That way, an application can rank
//!     on every keystroke without handling errors for incomplete input.
//!   * [`NearestColorRanker`] combines a palette with the number of matches
//!     from the [`opt::Options`] and splits results into the best match and
//!     the close matches.
//!   * [`Rgb`] and [`Lab`] are the two color representations. [`Rgb::to_lab`]
//!     implements the conversion and [`Lab::delta_e`] the color difference.
//!   * The [`palette`] module loads and validates palettes, including from
//!     JSON with the `json` feature, and [`tailwind`] provides the built-in
//!     Tailwind CSS palette.
//!   * The [`error`] module defines the errors for parsing colors, loading
//!     palettes, and reading options from the environment.
//!
//!
//! ## Example
//!
//! ```
//! # use chromatch::{rank, tailwind};
//! let matches = rank("#ff0000", tailwind::palette(), 5);
//! assert_eq!(matches.len(), 5);
//! assert_eq!(matches[0].name(), "red-600");
//! assert_eq!(matches[0].css_hex(), "#dc2626");
//! assert!(matches[0].delta() < matches[1].delta());
//! ```
//!
//!
//! ## Feature Flags
//!
//!   * `f64` (default) selects `f64` as [`Float`], otherwise `f32`.
//!   * `json` (default) enables loading palettes from JSON with serde.
//!   * `pyffi` enables the Python bindings, with module name `chromatch`.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;
pub mod opt;
pub mod palette;
mod rank;
pub mod tailwind;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use object::{delta_e_2000, to_lab, Lab, Rgb};
pub use rank::{rank, rank_lab, rank_rgb, Matches, NearestColorRanker, RankedMatch};

#[cfg(feature = "pyffi")]
use opt::Options;
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Find the nearest named colors in the built-in Tailwind palette. <i
/// class=python-only>Python only!</i>
///
/// This function returns a list of `(name, hex, delta)` tuples, with the hex
/// code prefixed by `#`. Invalid queries produce an empty list.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(signature = (query, k=Options::DEFAULT_TOP_K))]
pub fn nearest(query: &str, k: usize) -> Vec<(String, String, Float)> {
    rank(query, tailwind::palette(), k)
        .into_iter()
        .map(|m| (m.name().to_string(), m.css_hex(), m.delta()))
        .collect()
}

/// Compute the CIEDE2000 difference. <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "delta_e_2000")]
pub fn py_delta_e_2000(lab1: &Lab, lab2: &Lab) -> Float {
    delta_e_2000(lab1, lab2)
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn chromatch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(nearest, m)?)?;
    m.add_function(wrap_pyfunction!(py_delta_e_2000, m)?)?;
    m.add_class::<Rgb>()?;
    m.add_class::<Lab>()?;
    Ok(())
}
