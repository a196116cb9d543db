//! Host-track handles and a simple allocator.

use serde::{Deserialize, Serialize};

/// Opaque handle correlating an [`Animation`](crate::Animation) with a
/// host-side animation track. The core never interprets it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimHandle(pub u32);

/// Monotonic allocator for [`AnimHandle`].
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_anim: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_anim(&mut self) -> AnimHandle {
        let id = AnimHandle(self.next_anim);
        self.next_anim = self.next_anim.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
