#![forbid(unsafe_code)]

//! Disclosure group for nested navigation.
//!
//! Every [`Disclosure`] expands and collapses on its own; opening one never
//! closes a sibling. The owning drawer calls [`NestedMenu::reset_all`] when
//! it closes so the menu always reopens fully collapsed.

use vitrine_core::{MountError, Outcome, Surface};

/// Tunables for a [`NestedMenu`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NestedMenuConfig {
    /// Classes present on a collapsed panel.
    pub collapsed_class: String,
    /// Classes present on the icon of an expanded trigger.
    pub icon_expanded_class: String,
}

impl Default for NestedMenuConfig {
    fn default() -> Self {
        Self {
            collapsed_class: "hidden".to_owned(),
            icon_expanded_class: "rotate-180".to_owned(),
        }
    }
}

/// One trigger/panel pair, with an optional rotating icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure<E> {
    pub trigger: E,
    pub panel: E,
    pub icon: Option<E>,
}

impl<E> Disclosure<E> {
    #[must_use]
    pub fn new(trigger: E, panel: E) -> Self {
        Self {
            trigger,
            panel,
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: E) -> Self {
        self.icon = Some(icon);
        self
    }
}

#[derive(Debug, Clone)]
struct Entry<E> {
    parts: Disclosure<E>,
    expanded: bool,
}

/// Independent expand/collapse state for a group of disclosures.
#[derive(Debug, Clone)]
pub struct NestedMenu<E> {
    entries: Vec<Entry<E>>,
    config: NestedMenuConfig,
}

impl<E: Clone + PartialEq + core::fmt::Debug> NestedMenu<E> {
    /// Bind to a non-empty group of disclosures.
    pub fn new(group: Vec<Disclosure<E>>, config: NestedMenuConfig) -> Result<Self, MountError> {
        if group.is_empty() {
            return Err(MountError::EmptyGroup { role: "submenu" });
        }
        Ok(Self {
            entries: group
                .into_iter()
                .map(|parts| Entry {
                    parts,
                    expanded: false,
                })
                .collect(),
            config,
        })
    }

    /// Render every panel collapsed.
    pub fn mount<S: Surface<Element = E>>(&mut self, host: &mut S) {
        for index in 0..self.entries.len() {
            self.entries[index].expanded = false;
            self.render(host, index);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &NestedMenuConfig {
        &self.config
    }

    /// Whether the disclosure controlled by `trigger` is expanded.
    #[must_use]
    pub fn is_expanded(&self, trigger: &E) -> Option<bool> {
        self.position(trigger).map(|i| self.entries[i].expanded)
    }

    /// Number of expanded panels.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.expanded).count()
    }

    /// Flip the disclosure controlled by `trigger`.
    ///
    /// Returns the new expanded state, or `None` if `trigger` is not part of
    /// this group.
    pub fn toggle<S: Surface<Element = E>>(&mut self, host: &mut S, trigger: &E) -> Option<bool> {
        let index = self.position(trigger)?;
        let expanded = !self.entries[index].expanded;
        self.entries[index].expanded = expanded;
        self.render(host, index);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "menu.toggle", index, expanded);
        Some(expanded)
    }

    /// Collapse every panel.
    pub fn reset_all<S: Surface<Element = E>>(&mut self, host: &mut S) {
        for index in 0..self.entries.len() {
            self.entries[index].expanded = false;
            self.render(host, index);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "menu.reset", panels = self.entries.len());
    }

    /// A click landed on `origin` (the trigger the click resolved to, or the
    /// raw target). Clicks on a trigger toggle it and must not navigate;
    /// anything else is left alone.
    pub fn handle_click<S: Surface<Element = E>>(&mut self, host: &mut S, origin: &E) -> Outcome {
        match self.toggle(host, origin) {
            Some(_) => Outcome::Consumed,
            None => Outcome::Ignored,
        }
    }

    fn position(&self, trigger: &E) -> Option<usize> {
        self.entries.iter().position(|e| e.parts.trigger == *trigger)
    }

    fn render<S: Surface<Element = E>>(&self, host: &mut S, index: usize) {
        let entry = &self.entries[index];
        let expanded = entry.expanded;
        host.set_classes(&entry.parts.panel, &self.config.collapsed_class, !expanded);
        host.set_aria_flag(&entry.parts.trigger, "aria-expanded", expanded);
        if let Some(icon) = &entry.parts.icon {
            host.set_classes(icon, &self.config.icon_expanded_class, expanded);
        }
    }
}
