pub mod garden;
pub mod plant;
pub mod request;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// Month index within a timeline, nominally 0 (January) to 11 (December).
///
/// Signed so that out-of-range values read from storage survive untouched.
pub type Month = i32;

/// Number of months in a calendar year.
pub const MONTHS_PER_YEAR: Month = 12;
