//! Combat resolution - Apply hits to armor and work out wound damage

mod modifiers;
mod resolution;
mod result;

pub use modifiers::{adjust_sp, SpAdjustment};
pub use resolution::{resolve_hit, resolve_hit_in_place, Hit, HitRules};
pub use result::{HitRecord, LayerLoss};
