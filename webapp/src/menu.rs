use std::{cell::Cell, rc::Rc};

use gloo_events::EventListener;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, Node};

use crate::page::{Bindings, BodyScrollLock, Page, query_all_in, set_attr, set_class};
use common::{menu::MenuState, scroll::ScrollHolder};

const PANEL_SHOWN: &str = "show";
const TOGGLE_ACTIVE: &str = "active";

// MobileMenu
//
// the collapsible navigation panel on small screens.  the toggle button flips it, while
// link clicks and clicks anywhere outside the menu always close it
pub struct MobileMenu {
    toggle: Element,
    panel: Element,
    state: Cell<MenuState>,
    scroll_lock: Rc<BodyScrollLock>,
}

impl MobileMenu {
    pub fn init(page: &Page, bindings: &mut Bindings) -> anyhow::Result<Option<Rc<Self>>> {
        let config = &page.config.menu;

        let (Some(toggle), Some(panel)) = (
            page.query(&config.toggle_selector)?,
            page.query(&config.panel_selector)?,
        ) else {
            debug!("no mobile menu on page");
            return Ok(None);
        };

        let menu = Rc::new(MobileMenu {
            toggle,
            panel,
            state: Cell::new(MenuState::default()),
            scroll_lock: page.scroll_lock.clone(),
        });

        let this = menu.clone();
        bindings.push(EventListener::new(&menu.toggle, "click", move |_| {
            this.toggle()
        }));

        let links = query_all_in(&menu.panel, &config.link_selector)?;
        debug!({ links = links.len() }, "found menu links");

        for link in links {
            let this = menu.clone();
            bindings.push(EventListener::new(&link, "click", move |_| this.close()));
        }

        let this = menu.clone();
        bindings.push(EventListener::new(&page.document, "click", move |event| {
            this.on_document_click(event.target())
        }));

        Ok(Some(menu))
    }

    pub fn toggle(&self) {
        let mut state = self.state.get();
        let state = state.toggle();

        self.set_state(state);

        if state.expanded() {
            self.scroll_lock.acquire(ScrollHolder::Menu);
        } else {
            self.scroll_lock.release(ScrollHolder::Menu);
        }
    }

    pub fn close(&self) {
        let mut state = self.state.get();
        state.close();

        self.set_state(state);
        self.scroll_lock.release(ScrollHolder::Menu);
    }

    pub fn on_document_click(&self, target: Option<EventTarget>) {
        let target = target.and_then(|t| t.dyn_into::<Node>().ok());

        let inside = |el: &Element| el.contains(target.as_ref());
        if !inside(&self.toggle) && !inside(&self.panel) {
            self.close();
        }
    }

    // all three reflections of the state are written together
    fn set_state(&self, state: MenuState) {
        self.state.set(state);

        set_class(&self.panel, PANEL_SHOWN, state.expanded());
        set_attr(&self.toggle, "aria-expanded", state.aria_expanded());
        set_class(&self.toggle, TOGGLE_ACTIVE, state.expanded());
    }
}
