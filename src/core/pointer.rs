use glam::Vec2;

/// Last-known pointer position in viewport coordinates. Overwritten on every
/// pointer-move; late subscribers read the stored value instead of waiting
/// for the next event.
#[derive(Default, Clone, Copy, Debug)]
pub struct ViewportPointer {
    pub x: f32,
    pub y: f32,
    observed: bool,
}

impl ViewportPointer {
    pub fn update(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.observed = true;
    }

    /// False until the first pointer-move has been seen; consumers that sync
    /// on registration skip the meaningless origin position.
    #[inline]
    pub fn observed(&self) -> bool {
        self.observed
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorVariant {
    Default,
    Hover,
}

impl Default for CursorVariant {
    fn default() -> Self {
        Self::Default
    }
}

/// Enter/leave reference count over registered interactive targets.
///
/// A flat boolean would flip back to `Default` when the pointer crosses from
/// a parent target into a nested child (leave fires before the child's
/// enter). Counting keeps the variant at `Hover` until the pointer has left
/// every overlapping target.
#[derive(Default, Clone, Copy, Debug)]
pub struct HoverCounter {
    depth: u32,
}

impl HoverCounter {
    pub fn enter(&mut self) -> CursorVariant {
        self.depth += 1;
        self.variant()
    }

    pub fn leave(&mut self) -> CursorVariant {
        self.depth = self.depth.saturating_sub(1);
        self.variant()
    }

    #[inline]
    pub fn variant(&self) -> CursorVariant {
        if self.depth > 0 {
            CursorVariant::Hover
        } else {
            CursorVariant::Default
        }
    }
}
