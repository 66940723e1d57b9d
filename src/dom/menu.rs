//! Mobile menu binding.

use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Document, Element};

use super::{
    by_id, listen, query, query_all, DomError, HAMBURGER_ID, NAV_LINKS_SELECTOR, NAV_LINK_SELECTOR,
};
use crate::menu::{MenuEvent, MenuState};

const ACTIVE_CLASS: &str = "active";

struct MenuBinding {
    trigger: Element,
    panel: Element,
    state: Cell<MenuState>,
}

impl MenuBinding {
    fn dispatch(&self, event: MenuEvent) {
        let next = self.state.get().apply(event);
        self.state.set(next);
        if let Err(e) = self.render(next) {
            tracing::warn!("Failed to update menu: {}", e);
        }
    }

    /// Panel and trigger are updated together in one synchronous step.
    fn render(&self, state: MenuState) -> Result<(), DomError> {
        let open = state.is_open();
        self.panel.class_list().toggle_with_force(ACTIVE_CLASS, open)?;
        self.trigger.class_list().toggle_with_force(ACTIVE_CLASS, open)?;
        Ok(())
    }
}

pub fn mount(doc: &Document) -> Result<(), DomError> {
    let binding = Rc::new(MenuBinding {
        trigger: by_id(doc, HAMBURGER_ID)?,
        panel: query(doc, NAV_LINKS_SELECTOR)?,
        state: Cell::new(MenuState::Closed),
    });
    binding.render(MenuState::Closed)?;

    let on_trigger = binding.clone();
    listen(&binding.trigger, "click", move |_| {
        on_trigger.dispatch(MenuEvent::TriggerClicked)
    })?;

    for link in query_all(doc, NAV_LINK_SELECTOR)? {
        let on_link = binding.clone();
        listen(&link, "click", move |_| on_link.dispatch(MenuEvent::LinkClicked))?;
    }
    Ok(())
}
