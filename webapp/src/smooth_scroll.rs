use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use tracing::debug;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::page::{Bindings, Page};
use common::anchor::{AnchorAction, classify};

pub struct SmoothScroll {
    document: Document,
}

impl SmoothScroll {
    pub fn init(page: &Page, bindings: &mut Bindings) -> anyhow::Result<Option<Rc<Self>>> {
        let anchors = page.query_all(&page.config.smooth_scroll.anchor_selector)?;
        if anchors.is_empty() {
            debug!("no same-page anchors on page");
            return Ok(None);
        }

        debug!({ anchors = anchors.len() }, "found same-page anchors");

        let scroll = Rc::new(SmoothScroll {
            document: page.document.clone(),
        });

        for anchor in anchors {
            let this = scroll.clone();
            let target = anchor.clone();
            bindings.push(EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| this.on_anchor_click(&target, event),
            ));
        }

        Ok(Some(scroll))
    }

    // the href is read at click time, as the browser would
    pub fn on_anchor_click(&self, anchor: &Element, event: &Event) {
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };

        match classify(&href) {
            AnchorAction::PassThrough => {}
            AnchorAction::ScrollTo(id) => {
                event.prevent_default();
                self.scroll_to(id);
            }
        }
    }

    pub fn scroll_to(&self, id: &str) {
        let Some(target) = self.document.get_element_by_id(id) else {
            debug!("no element for anchor #{id}");
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);

        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
