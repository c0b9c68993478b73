use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use tracing::debug;
use web_sys::{Element, Window};

use crate::page::{Bindings, Page, set_class};
use common::scroll::NavbarScroll;

// NavbarEffect
//
// marks the header once the page has scrolled past the threshold
pub struct NavbarEffect {
    window: Window,
    header: Element,
    scrolled_class: String,
    state: RefCell<NavbarScroll>,
}

impl NavbarEffect {
    pub fn init(page: &Page, bindings: &mut Bindings) -> anyhow::Result<Option<Rc<Self>>> {
        let config = &page.config.navbar;

        let Some(header) = page.query(&config.selector)? else {
            debug!("no navbar on page");
            return Ok(None);
        };

        let effect = Rc::new(NavbarEffect {
            window: page.window.clone(),
            header,
            scrolled_class: config.scrolled_class.clone(),
            state: RefCell::new(NavbarScroll::new(config.scroll_threshold)),
        });

        // a reload can restore the page mid-scroll, so settle the header right away
        effect.on_scroll();

        let this = effect.clone();
        bindings.push(EventListener::new(&page.window, "scroll", move |_| {
            this.on_scroll()
        }));

        Ok(Some(effect))
    }

    pub fn on_scroll(&self) {
        let offset = self.window.scroll_y().unwrap_or(0.0);
        self.apply(offset);
    }

    pub fn apply(&self, offset: f64) {
        let change = self.state.borrow_mut().update(offset);

        if let Some(scrolled) = change {
            set_class(&self.header, &self.scrolled_class, scrolled);
        }
    }
}
