//! Reaction emoji palette
//!
//! Reactions are restricted to a fixed set of emoji; anything outside the
//! palette is rejected at the service boundary.

/// The emoji users may react with, in display order
pub const REACTION_PALETTE: [&str; 8] = ["😱", "💔", "😭", "😤", "🤯", "❤️", "😂", "🙏"];

/// Check whether an emoji belongs to the reaction palette
pub fn is_palette_emoji(emoji: &str) -> bool {
    REACTION_PALETTE.contains(&emoji)
}
