//! Host context: which OS layer group is on top of the layer stack.

use heapless::Vec;

use crate::host::LayerRead;

/// Maximum number of layer groups in [`LayerGroups`]
pub const LAYER_GROUP_MAX_NUM: usize = 8;

/// Coarse grouping of the active layer, selecting OS-appropriate modifier conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Context {
    /// Windows and Linux: Ctrl based shortcuts
    WindowsLike,
    /// macOS and iOS: Command based shortcuts
    MacLike,
}

/// Maps the highest active layer to a [`Context`].
///
/// Layers outside every group have no context.
pub trait ContextResolver {
    fn resolve(&self, layer: u8) -> Option<Context>;

    /// Resolve the context of the host's current highest layer
    fn current<H: LayerRead + ?Sized>(&self, host: &H) -> Option<Context>
    where
        Self: Sized,
    {
        self.resolve(host.highest_layer())
    }
}

impl<F: Fn(u8) -> Option<Context>> ContextResolver for F {
    fn resolve(&self, layer: u8) -> Option<Context> {
        self(layer)
    }
}

/// An inclusive range of layers sharing one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerGroup {
    pub first: u8,
    pub last: u8,
    pub context: Context,
}

impl LayerGroup {
    pub const fn new(first: u8, last: u8, context: Context) -> Self {
        Self { first, last, context }
    }

    pub fn contains(&self, layer: u8) -> bool {
        self.first <= layer && layer <= self.last
    }
}

/// Layer group table, the first group containing a layer wins.
#[derive(Debug, Clone, Default)]
pub struct LayerGroups {
    pub groups: Vec<LayerGroup, LAYER_GROUP_MAX_NUM>,
}

impl LayerGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group. Groups beyond [`LAYER_GROUP_MAX_NUM`] are dropped.
    pub fn with(mut self, first: u8, last: u8, context: Context) -> Self {
        self.push(LayerGroup::new(first, last, context));
        self
    }

    pub fn push(&mut self, group: LayerGroup) {
        if group.first > group.last {
            warn!("Empty layer group {}..={}, ignored", group.first, group.last);
            return;
        }
        if self.groups.push(group).is_err() {
            error!("Layer group table is full, dropping group {}..={}", group.first, group.last);
        }
    }
}

impl ContextResolver for LayerGroups {
    fn resolve(&self, layer: u8) -> Option<Context> {
        self.groups.iter().find(|g| g.contains(layer)).map(|g| g.context)
    }
}
