#![forbid(unsafe_code)]

//! Mobile navigation: a modal [`Drawer`] holding an optional [`NestedMenu`].
//!
//! Every open-to-closed transition collapses the nested menu exactly once,
//! whichever path closed the drawer (close button, scrim, toggle, Escape).

use vitrine_core::{Key, Outcome, Surface, UiEvent};

use crate::drawer::Drawer;
use crate::nested_menu::NestedMenu;

#[derive(Debug, Clone)]
pub struct MobileMenu<E> {
    drawer: Drawer<E>,
    submenus: Option<NestedMenu<E>>,
}

impl<E: Clone + PartialEq + core::fmt::Debug> MobileMenu<E> {
    #[must_use]
    pub fn new(drawer: Drawer<E>, submenus: Option<NestedMenu<E>>) -> Self {
        Self { drawer, submenus }
    }

    /// Render the closed drawer with every submenu collapsed.
    pub fn mount<S: Surface<Element = E>>(&mut self, host: &mut S) {
        self.drawer.mount(host);
        if let Some(menu) = &mut self.submenus {
            menu.mount(host);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.drawer.is_open()
    }

    #[must_use]
    pub fn drawer(&self) -> &Drawer<E> {
        &self.drawer
    }

    #[must_use]
    pub fn submenus(&self) -> Option<&NestedMenu<E>> {
        self.submenus.as_ref()
    }

    pub fn open<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        self.drawer.open(host)
    }

    /// Close the drawer and collapse the submenus if it was open.
    pub fn close<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        let closed = self.drawer.close(host);
        if closed {
            self.collapse(host);
        }
        closed
    }

    pub fn toggle<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        if self.drawer.is_open() {
            self.close(host)
        } else {
            self.open(host)
        }
    }

    /// Route a click. Drawer controls take precedence over submenu triggers.
    pub fn handle_click<S: Surface<Element = E>>(&mut self, host: &mut S, origin: &E) -> Outcome {
        let parts = self.drawer.parts();
        if parts.toggle.as_ref() == Some(origin) {
            self.toggle(host);
            return Outcome::Handled;
        }
        if parts.close.as_ref() == Some(origin) || parts.overlay.as_ref() == Some(origin) {
            self.close(host);
            return Outcome::Handled;
        }
        match &mut self.submenus {
            Some(menu) => menu.handle_click(host, origin),
            None => Outcome::Ignored,
        }
    }

    /// Escape closes an open menu.
    pub fn handle_event<S: Surface<Element = E>>(
        &mut self,
        host: &mut S,
        event: &UiEvent,
    ) -> Outcome {
        match *event {
            UiEvent::Key(input) if input.key == Key::Escape => {
                if self.close(host) {
                    Outcome::Handled
                } else {
                    Outcome::Ignored
                }
            }
            _ => Outcome::Ignored,
        }
    }

    fn collapse<S: Surface<Element = E>>(&mut self, host: &mut S) {
        if let Some(menu) = &mut self.submenus {
            menu.reset_all(host);
        }
    }
}
