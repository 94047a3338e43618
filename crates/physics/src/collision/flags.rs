//! Layer masks for collision filtering.
//!
//! Every collider lives on one or more layers, and every query carries a
//! mask. A collider takes part in a query when the two share a layer.

use serde::{Deserialize, Serialize};

/// A set of up to 32 collision layers.
///
/// Used both as the layers a collider occupies and as the mask a query
/// collides with (e.g. a character ignores triggers and other characters by
/// leaving them out of its mask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// No layers - collides with nothing.
    pub const NONE: Self = Self(0);

    /// Every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Default layer for colliders created without an explicit layer.
    pub const DEFAULT: Self = Self(1 << 0);

    /// Static obstacles - walls, crates, level geometry.
    pub const OBSTACLE: Self = Self(1 << 1);

    /// Character bodies.
    pub const CHARACTER: Self = Self(1 << 2);

    /// Trigger volumes - detected, never blocking.
    pub const TRIGGER: Self = Self(1 << 3);

    /// Standard mask for character movement.
    pub const MASK_CHARACTER_SOLID: Self = Self(Self::DEFAULT.0 | Self::OBSTACLE.0);

    /// Mask for a single layer index (0..32).
    ///
    /// Indices past 31 yield [`LayerMask::NONE`].
    #[inline]
    pub fn from_layer(index: u32) -> Self {
        Self(1u32.checked_shl(index).unwrap_or(0))
    }

    /// Check if this mask contains every layer of `other`.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any layer is shared.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Combine two masks.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Remove layers from this mask.
    #[inline]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for LayerMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
