//! Blank detection and answer substitution for question templates.
//!
//! A blank is any run of three or more underscores. Blanks are never stored;
//! they are re-derived from the template text whenever needed.
pub mod filler;
pub mod scanner;

pub use filler::fill;
pub use scanner::{count_blanks, scan, BlankMarker};
