//! Body model - Hit locations and per-location storage

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Hit location on the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Head,
    /// Covered by full-coverage armor, but worn armor only gives half SP here
    Face,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    /// Number of body parts
    pub const COUNT: usize = 7;

    /// Get all body parts, in display order
    pub fn all() -> [BodyPart; BodyPart::COUNT] {
        [
            BodyPart::Head,
            BodyPart::Face,
            BodyPart::Torso,
            BodyPart::LeftArm,
            BodyPart::RightArm,
            BodyPart::LeftLeg,
            BodyPart::RightLeg,
        ]
    }

    /// Index into a [`BodyMap`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Head and face hits double penetrating damage
    pub fn is_head(self) -> bool {
        matches!(self, BodyPart::Head | BodyPart::Face)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Face => "face",
            BodyPart::Torso => "torso",
            BodyPart::LeftArm => "left arm",
            BodyPart::RightArm => "right arm",
            BodyPart::LeftLeg => "left leg",
            BodyPart::RightLeg => "right leg",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fixed-size map with one slot per [`BodyPart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyMap<T>([T; BodyPart::COUNT]);

impl<T> BodyMap<T> {
    /// Build a map by evaluating `f` for every part
    pub fn from_fn(f: impl FnMut(BodyPart) -> T) -> Self {
        BodyMap(BodyPart::all().map(f))
    }

    pub fn get(&self, part: BodyPart) -> &T {
        &self.0[part.index()]
    }

    pub fn get_mut(&mut self, part: BodyPart) -> &mut T {
        &mut self.0[part.index()]
    }

    /// Iterate `(part, value)` pairs in part order
    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, &T)> {
        BodyPart::all().into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyPart, &mut T)> {
        BodyPart::all().into_iter().zip(self.0.iter_mut())
    }
}

impl<T> Index<BodyPart> for BodyMap<T> {
    type Output = T;

    fn index(&self, part: BodyPart) -> &T {
        self.get(part)
    }
}

impl<T> IndexMut<BodyPart> for BodyMap<T> {
    fn index_mut(&mut self, part: BodyPart) -> &mut T {
        self.get_mut(part)
    }
}

/// Body Type Modifier derived from the BODY attribute
///
/// Subtracted from wound damage after armor. Tougher characters shrug off more.
pub fn body_type_modifier(body: u32) -> u32 {
    match body {
        0..=2 => 0,
        3..=4 => 1,
        5..=7 => 2,
        8..=9 => 3,
        10 => 4,
        _ => 5,
    }
}
