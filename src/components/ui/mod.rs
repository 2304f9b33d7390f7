pub mod button;
pub mod icon;

pub use button::{button_classes, ButtonSize, ButtonVariant, LinkButton, NavElement};
pub use icon::{Glyph, GlyphIcon};
