//! The render-attachment seam.
//!
//! Every registered building gets a drawable attached at its hex. The
//! territory never draws anything itself; it only attaches and detaches.

use std::collections::HashMap;

use borderland_topology::HexPoint;
use serde::{Deserialize, Serialize};

use crate::BuildingKind;

/// Opaque handle returned by [`RenderAttachment::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RenderHandle(pub u64);

/// What to draw for a building: its label centered on its hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Drawable {
    pub label: &'static str,
    pub hex: HexPoint,
}

impl Drawable {
    pub fn for_building(kind: BuildingKind, hex: HexPoint) -> Self {
        Self {
            label: kind.label(),
            hex,
        }
    }
}

/// Something drawables can be attached to.
pub trait RenderAttachment {
    /// Start drawing `drawable` positioned at `at`.
    fn attach(&mut self, drawable: Drawable, at: HexPoint) -> RenderHandle;

    /// Stop drawing whatever `handle` refers to. Unknown handles are ignored.
    fn detach(&mut self, handle: RenderHandle);
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone)]
pub struct Detached {
    next: u64,
}

impl RenderAttachment for Detached {
    fn attach(&mut self, _drawable: Drawable, _at: HexPoint) -> RenderHandle {
        self.next += 1;
        RenderHandle(self.next)
    }

    fn detach(&mut self, _handle: RenderHandle) {}
}

/// Keeps every attached drawable, keyed by handle.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    entries: HashMap<RenderHandle, (Drawable, HexPoint)>,
    next: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, handle: RenderHandle) -> Option<&Drawable> {
        self.entries.get(&handle).map(|(drawable, _)| drawable)
    }

    /// Attached drawables with their positions, in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (RenderHandle, &Drawable, HexPoint)> + '_ {
        let mut handles: Vec<_> = self.entries.keys().copied().collect();
        handles.sort();
        handles.into_iter().filter_map(move |handle| {
            self.entries
                .get(&handle)
                .map(|(drawable, at)| (handle, drawable, *at))
        })
    }
}

impl RenderAttachment for DrawList {
    fn attach(&mut self, drawable: Drawable, at: HexPoint) -> RenderHandle {
        self.next += 1;
        let handle = RenderHandle(self.next);
        self.entries.insert(handle, (drawable, at));
        handle
    }

    fn detach(&mut self, handle: RenderHandle) {
        self.entries.remove(&handle);
    }
}
