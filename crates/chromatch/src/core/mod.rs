mod conversion;
mod difference;
mod equality;
mod math;
mod string;

// conversion
pub(crate) use conversion::{to_lab, unpack};

// difference
pub(crate) use difference::{delta_e_2000, find_closest, rank_by_distance};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_lab;
pub use equality::to_eq_bits;
pub(crate) use equality::{to_eq_coordinates, within_tolerance};

// math
pub(crate) use math::FloatExt;

// string
pub(crate) use string::{format_hex, format_lab, parse_hex};
