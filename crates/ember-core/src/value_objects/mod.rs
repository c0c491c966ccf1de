//! Value objects - immutable domain values

mod emoji;

pub use emoji::{is_palette_emoji, REACTION_PALETTE};
