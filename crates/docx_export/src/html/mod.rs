//! Narrow HTML walkers
//!
//! The report editor emits a fixed, small tag vocabulary: `p`, `li`,
//! `ul`, `ol`, `br` at block level and `b`, `strong`, `i`, `em`, `u`,
//! `span`, `a` inline, with at most `text-align`, `font-size` and
//! `font-family` inline-style declarations. These walkers understand
//! exactly that vocabulary and nothing more; anything outside it is
//! ignored rather than rejected. Well-formedness of the input is an
//! assumption inherited from the editor, not verified here.

mod blocks;
mod inline;
mod style;

pub use blocks::split_blocks;
pub use inline::{parse_inline, InheritedStyle};
pub use style::{extract_style, InlineStyle};
