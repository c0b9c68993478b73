use std::{cell::RefCell, rc::Rc};

use anyhow::Context;
use gloo_events::EventListener;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use common::{
    config::SiteConfig,
    scroll::{LockChange, ScrollHolder, ScrollLock},
};

const CONFIG_ELEMENT_ID: &str = "site-config";

// js errors carry no useful rust type, so we keep their debug rendering
pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// Page
//
// the explicit page-session context.  it is built once the document is ready and handed
// to every controller initializer; nothing else in the webapp reaches for globals
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub config: SiteConfig,
    pub scroll_lock: Rc<BodyScrollLock>,
}

impl Page {
    pub fn discover() -> anyhow::Result<Self> {
        let window = web_sys::window().context("no global window exists")?;
        let document = window.document().context("window has no document")?;
        let body = document.body().context("document has no body")?;

        let config = load_config(&document);
        let scroll_lock = Rc::new(BodyScrollLock::new(body.clone()));

        Ok(Page {
            window,
            document,
            body,
            config,
            scroll_lock,
        })
    }

    pub fn query(&self, selector: &str) -> anyhow::Result<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(js_err)
            .with_context(|| format!("bad selector {selector}"))
    }

    pub fn query_all(&self, selector: &str) -> anyhow::Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(js_err)
            .with_context(|| format!("bad selector {selector}"))?;

        Ok(elements(list))
    }

    pub fn create(&self, tag: &str, class: &str) -> anyhow::Result<Element> {
        let element = self.document.create_element(tag).map_err(js_err)?;
        element.set_class_name(class);

        Ok(element)
    }
}

pub fn query_all_in(parent: &Element, selector: &str) -> anyhow::Result<Vec<Element>> {
    let list = parent
        .query_selector_all(selector)
        .map_err(js_err)
        .with_context(|| format!("bad selector {selector}"))?;

    Ok(elements(list))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// class writes only fail on malformed class names, which come from our own constants
// or the site config; log and move on rather than abort a handler halfway
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        warn!("failed to set class {class}: {err:?}");
    }
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        warn!("failed to set attribute {name}: {err:?}");
    }
}

// the page may carry a json override of the site config.  a broken override should
// not take the page down with it, so we fall back to the defaults
fn load_config(document: &Document) -> SiteConfig {
    let Some(doc) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        debug!("no site config on page, using defaults");
        return SiteConfig::default();
    };

    SiteConfig::from_json(&doc).unwrap_or_else(|err| {
        warn!("ignoring site config: {err:#}");
        SiteConfig::default()
    })
}

// BodyScrollLock
//
// the shared scroll lock, applied to the body's overflow style.  the style is only
// touched when the first holder arrives or the last one leaves
pub struct BodyScrollLock {
    body: HtmlElement,
    lock: RefCell<ScrollLock>,
}

impl BodyScrollLock {
    fn new(body: HtmlElement) -> Self {
        BodyScrollLock {
            body,
            lock: RefCell::new(ScrollLock::new()),
        }
    }

    pub fn acquire(&self, holder: ScrollHolder) {
        let change = self.lock.borrow_mut().acquire(holder);
        self.apply(change);
    }

    pub fn release(&self, holder: ScrollHolder) {
        let change = self.lock.borrow_mut().release(holder);
        self.apply(change);
    }

    fn apply(&self, change: Option<LockChange>) {
        let style = self.body.style();

        let result = match change {
            Some(LockChange::Locked) => style.set_property("overflow", "hidden"),
            Some(LockChange::Unlocked) => style.remove_property("overflow").map(|_| ()),
            None => return,
        };

        match result {
            Ok(()) => debug!({ change = ?change }, "body scroll lock changed"),
            Err(err) => warn!("failed to update body overflow: {err:?}"),
        }
    }
}

// Bindings
//
// owns every listener registered during initialization.  dropping it unregisters them,
// so the bindings live exactly as long as the page session that holds them
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<EventListener>,
}

impl Bindings {
    pub fn push(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}
