//! Bodies the motor can move.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position access for anything the motor moves.
///
/// Implement this for a host-owned transform to let the motor translate it
/// in place.
pub trait BodyTransform {
    /// Current world-space position.
    fn position(&self) -> Vec2;

    /// Move by `delta` relative to the current position.
    fn translate(&mut self, delta: Vec2);
}

/// A minimal body: just a world-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
}

impl Body {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

impl BodyTransform for Body {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

impl<T: BodyTransform + ?Sized> BodyTransform for &mut T {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn translate(&mut self, delta: Vec2) {
        (**self).translate(delta);
    }
}
