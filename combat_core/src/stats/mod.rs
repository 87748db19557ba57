//! Stat penalties - Current attribute values under wounds and encumbrance

mod attribute;
mod penalty;

pub use attribute::Attribute;
pub use penalty::{current_attribute, wound_adjusted};
