#![forbid(unsafe_code)]

//! In-memory host for tests.
//!
//! [`RecordingHost`] models just enough of a document for controllers to be
//! driven without a browser: per-node classes, attributes, `hidden` and
//! `disabled` flags, child lists, scroll metrics, and a deterministic
//! [`TimerQueue`]. Programmatic scrolls complete instantly (the offset is
//! clamped and applied) and are also logged for assertions.

use core::time::Duration;

use ahash::{AHashMap, AHashSet};

use crate::geometry::ScrollMetrics;
use crate::host::{ScrollBehavior, Surface, TimerHost};
use crate::timer::{TimerQueue, TimerToken};

/// Handle to a node in a [`RecordingHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Default)]
struct Node {
    classes: AHashSet<String>,
    attributes: AHashMap<String, String>,
    hidden: bool,
    disabled: bool,
    children: Vec<NodeId>,
    metrics: ScrollMetrics,
    detached: bool,
}

/// A recorded programmatic scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCall {
    pub element: NodeId,
    pub left: f64,
    pub behavior: ScrollBehavior,
}

/// Test double implementing [`Surface`] and [`TimerHost`].
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    nodes: Vec<Node>,
    scrolls: Vec<ScrollCall>,
    timers: TimerQueue,
    mutations: usize,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element.
    pub fn element(&mut self) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node::default());
        id
    }

    /// Create `count` elements.
    pub fn elements(&mut self, count: usize) -> Vec<NodeId> {
        (0..count).map(|_| self.element()).collect()
    }

    /// Create an element with an initial class list.
    pub fn element_with_classes(&mut self, classes: &str) -> NodeId {
        let id = self.element();
        self.set_classes(&id, classes, true);
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.mutations += 1;
        &mut self.nodes[id.0 as usize]
    }

    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.contains(class)
    }

    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).hidden
    }

    #[must_use]
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.node(id).disabled
    }

    /// Whether the node was removed by [`Surface::clear_children`].
    #[must_use]
    pub fn is_detached(&self, id: NodeId) -> bool {
        self.node(id).detached
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Set the measurements a scroll container reports.
    pub fn set_metrics(&mut self, id: NodeId, metrics: ScrollMetrics) {
        self.node_mut(id).metrics = metrics;
    }

    /// Change only the scroll offset, as a user scroll would.
    pub fn set_scroll_left(&mut self, id: NodeId, left: f64) {
        self.node_mut(id).metrics.scroll_left = left;
    }

    /// Every programmatic scroll so far.
    #[must_use]
    pub fn scrolls(&self) -> &[ScrollCall] {
        &self.scrolls
    }

    #[must_use]
    pub fn last_scroll(&self) -> Option<ScrollCall> {
        self.scrolls.last().copied()
    }

    /// Total number of node mutations, for churn assertions.
    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    #[must_use]
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Advance the timer clock and return every token that fired.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerToken> {
        self.timers.advance(dt)
    }

    /// Pop the earliest timeout due within `dt` of now.
    pub fn pop_due(&mut self, dt: Duration) -> Option<TimerToken> {
        let limit = self.timers.now().saturating_add(dt);
        self.timers.pop_next(limit)
    }

    /// Move the clock to `now + dt` after draining with [`Self::pop_due`].
    pub fn settle(&mut self, dt: Duration) {
        let target = self.timers.now().saturating_add(dt);
        self.timers.set_now(target);
    }
}

impl Surface for RecordingHost {
    type Element = NodeId;

    fn set_class(&mut self, element: &NodeId, class: &str, enabled: bool) {
        let node = self.node_mut(*element);
        if enabled {
            node.classes.insert(class.to_owned());
        } else {
            node.classes.remove(class);
        }
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        self.node_mut(*element)
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn set_hidden(&mut self, element: &NodeId, hidden: bool) {
        self.node_mut(*element).hidden = hidden;
    }

    fn set_disabled(&mut self, element: &NodeId, disabled: bool) {
        self.node_mut(*element).disabled = disabled;
    }

    fn scroll_metrics(&self, element: &NodeId) -> ScrollMetrics {
        self.node(*element).metrics
    }

    fn scroll_to(&mut self, element: &NodeId, left: f64, behavior: ScrollBehavior) {
        self.scrolls.push(ScrollCall {
            element: *element,
            left,
            behavior,
        });
        let node = self.node_mut(*element);
        let max = (node.metrics.scroll_width - node.metrics.client_width).max(0.0);
        node.metrics.scroll_left = left.clamp(0.0, max);
    }

    fn clear_children(&mut self, container: &NodeId) {
        let children = std::mem::take(&mut self.node_mut(*container).children);
        for child in children {
            self.node_mut(child).detached = true;
        }
    }

    fn append_indicator(&mut self, container: &NodeId, page: usize) -> Option<NodeId> {
        let id = self.element();
        self.set_attribute(&id, crate::markers::PAGE_INDEX, &page.to_string());
        self.node_mut(*container).children.push(id);
        Some(id)
    }
}

impl TimerHost for RecordingHost {
    fn set_timeout(&mut self, token: TimerToken, delay: Duration) {
        self.timers.schedule(token, delay);
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        self.timers.cancel(token);
    }
}
