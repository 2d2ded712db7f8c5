use serde::{Deserialize, Serialize};

use crate::core::area::ScaledPoint;
use crate::core::bar::Bar;
use crate::core::donut::ArcSegment;

/// Pointer or focus transition reported by the host for one rendered primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum HoverEvent {
    Enter(usize),
    Leave(usize),
    Clear,
}

/// Caller-owned hover state: the index of the active sample, if any.
///
/// Generators never hold this; the host keeps it next to its view state and
/// passes it to scene builders on each render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverState {
    active: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Applies an event against a layout of `len` primitives.
    ///
    /// Last write wins. Entering an out-of-range index and leaving an index
    /// that is not active leave the state unchanged.
    #[must_use]
    pub fn apply(self, event: HoverEvent, len: usize) -> Self {
        match event {
            HoverEvent::Enter(index) if index < len => Self {
                active: Some(index),
            },
            HoverEvent::Enter(_) => self,
            HoverEvent::Leave(index) if self.is_active(index) => Self { active: None },
            HoverEvent::Leave(_) => self,
            HoverEvent::Clear => Self { active: None },
        }
    }

    /// Drops an active index that no longer exists after the data changed.
    #[must_use]
    pub fn clamp_to(self, len: usize) -> Self {
        match self.active {
            Some(index) if index >= len => Self { active: None },
            _ => self,
        }
    }

    /// Resolves the active primitive in O(1).
    #[must_use]
    pub fn resolve<'a, P: IndexedPrimitive>(self, primitives: &'a [P]) -> Option<&'a P> {
        resolve_active(primitives, self)
    }
}

/// A generated primitive that remembers which sample produced it.
pub trait IndexedPrimitive {
    fn index(&self) -> usize;
}

impl IndexedPrimitive for ScaledPoint {
    fn index(&self) -> usize {
        self.index
    }
}

impl IndexedPrimitive for Bar {
    fn index(&self) -> usize {
        self.index
    }
}

impl IndexedPrimitive for ArcSegment {
    fn index(&self) -> usize {
        self.index
    }
}

/// Looks up the active primitive by position.
///
/// Generators emit primitive `i` at slot `i`; the index check guards against
/// slices the caller reordered or filtered.
#[must_use]
pub fn resolve_active<P: IndexedPrimitive>(primitives: &[P], hover: HoverState) -> Option<&P> {
    let index = hover.active()?;
    primitives
        .get(index)
        .filter(|primitive| primitive.index() == index)
}
