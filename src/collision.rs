//! Axis-aligned bounding-box overlap, shared by every collision check.

use crate::entities::{Bullet, Enemy, Player, PowerUp, Rect};

/// Anything with an on-screen box.
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

macro_rules! impl_bounds {
    ($($ty:ty),*) => {
        $(impl Bounds for $ty {
            fn bounds(&self) -> Rect {
                Rect::new(self.x, self.y, self.width, self.height)
            }
        })*
    };
}

impl_bounds!(Player, Enemy, Bullet, PowerUp);

/// True iff the two boxes overlap. Edges that merely touch do not count.
pub fn is_colliding(a: &impl Bounds, b: &impl Bounds) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}
