use std::{cell::RefCell, rc::Rc};

use anyhow::anyhow;
use gloo_events::{EventListener, EventListenerOptions};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlImageElement, KeyboardEvent, Node, TouchEvent};

use crate::page::{Bindings, BodyScrollLock, Page, js_err, query_all_in, set_attr, set_class};
use common::{
    config::LightboxConfig,
    input::{LightboxCommand, SwipeTracker, is_activation_key},
    lightbox::{ImageGroup, ImageRef, LightboxSession, Slide},
    scroll::ScrollHolder,
};

const OVERLAY_SHOWN: &str = "show";

// set on every image wired during discovery.  an image inside two group containers
// belongs to whichever container claimed it first
const GROUP_ATTR: &str = "data-lightbox-group";

// Lightbox
//
// one shared overlay for every image group on the page.  the session decides what to
// show; this struct only owns the overlay elements and applies the session's output
pub struct Lightbox {
    overlay: Element,
    image: HtmlImageElement,
    counter: Element,
    session: RefCell<LightboxSession>,
    swipe: RefCell<SwipeTracker>,
    scroll_lock: Rc<BodyScrollLock>,
}

struct Controls {
    close: Element,
    prev: Element,
    next: Element,
}

impl Lightbox {
    pub fn init(page: &Page, bindings: &mut Bindings) -> anyhow::Result<Option<Rc<Self>>> {
        let config = &page.config.lightbox;

        let containers = page.query_all(&config.group_selector)?;
        if containers.is_empty() {
            debug!("no image groups on page");
            return Ok(None);
        }

        let (lightbox, controls) = Lightbox::build(page, config)?;
        lightbox.bind_controls(page, &controls, bindings);

        for (n, container) in containers.iter().enumerate() {
            let (group, images) = discover_group(container, &config.image_selector)?;
            if group.is_empty() {
                debug!({ group = n }, "image group has no images");
                continue;
            }
            let group = Rc::new(group);

            let mut wired = 0;
            for (index, image) in images.into_iter().enumerate() {
                if image.has_attribute(GROUP_ATTR) {
                    continue;
                }

                image.set_attribute(GROUP_ATTR, &n.to_string()).map_err(js_err)?;
                lightbox.bind_image(&image, &group, index, bindings)?;
                wired += 1;
            }

            debug!({ group = n, images = group.len(), wired = wired }, "found image group");
        }

        Ok(Some(lightbox))
    }

    // builds the overlay and appends it to the body
    //
    // <div class="lightbox" role="dialog" aria-modal="true">
    //   <button class="lightbox-close"> <button class="lightbox-prev">
    //   <button class="lightbox-next"> <img> <div class="lightbox-counter">
    fn build(page: &Page, config: &LightboxConfig) -> anyhow::Result<(Rc<Self>, Controls)> {
        let overlay = page.create("div", "lightbox")?;
        set_attr(&overlay, "role", "dialog");
        set_attr(&overlay, "aria-modal", "true");
        set_attr(&overlay, "aria-label", &config.dialog_label);

        let button = |class: &str, label: &str, glyph: &str| -> anyhow::Result<Element> {
            let button = page.create("button", class)?;
            set_attr(&button, "type", "button");
            set_attr(&button, "aria-label", label);
            button.set_text_content(Some(glyph));
            Ok(button)
        };

        let controls = Controls {
            close: button("lightbox-close", &config.close_label, &config.close_glyph)?,
            prev: button("lightbox-prev", &config.prev_label, &config.prev_glyph)?,
            next: button("lightbox-next", &config.next_label, &config.next_glyph)?,
        };

        let image = page
            .create("img", "")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| anyhow!("created img is not an image element"))?;
        image.set_alt(&config.image_alt);

        let counter = page.create("div", "lightbox-counter")?;

        let children: [&Node; 5] = [&controls.close, &controls.prev, &controls.next, &image, &counter];
        for child in children {
            overlay.append_child(child).map_err(js_err)?;
        }
        page.body.append_child(&overlay).map_err(js_err)?;

        let lightbox = Rc::new(Lightbox {
            overlay,
            image,
            counter,
            session: RefCell::new(LightboxSession::new()),
            swipe: RefCell::new(SwipeTracker::new(config.swipe_threshold)),
            scroll_lock: page.scroll_lock.clone(),
        });

        Ok((lightbox, controls))
    }

    fn bind_controls(self: &Rc<Self>, page: &Page, controls: &Controls, bindings: &mut Bindings) {
        let this = self.clone();
        bindings.push(EventListener::new(&controls.close, "click", move |_| {
            this.close()
        }));

        let this = self.clone();
        bindings.push(EventListener::new(&controls.prev, "click", move |_| {
            this.prev()
        }));

        let this = self.clone();
        bindings.push(EventListener::new(&controls.next, "click", move |_| {
            this.next()
        }));

        let this = self.clone();
        bindings.push(EventListener::new(&self.overlay, "click", move |event| {
            this.on_overlay_click(event.target())
        }));

        let this = self.clone();
        bindings.push(EventListener::new(&page.document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                this.on_key(&event.key());
            }
        }));

        // both touch listeners are passive, swipes never cancel scrolling
        let this = self.clone();
        bindings.push(EventListener::new(&self.overlay, "touchstart", move |event| {
            if let Some(x) = touch_screen_x(event) {
                this.on_touch_start(x);
            }
        }));

        let this = self.clone();
        bindings.push(EventListener::new(&self.overlay, "touchend", move |event| {
            if let Some(x) = touch_screen_x(event) {
                this.on_touch_end(x);
            }
        }));
    }

    fn bind_image(
        self: &Rc<Self>,
        image: &HtmlImageElement,
        group: &Rc<ImageGroup>,
        index: usize,
        bindings: &mut Bindings,
    ) -> anyhow::Result<()> {
        image.style().set_property("cursor", "pointer").map_err(js_err)?;
        image.set_attribute("tabindex", "0").map_err(js_err)?;

        let this = self.clone();
        let target = group.clone();
        bindings.push(EventListener::new(image, "click", move |_| {
            this.activate(&target, index)
        }));

        // Enter and Space behave like a click; Space would otherwise scroll the page
        let this = self.clone();
        let target = group.clone();
        bindings.push(EventListener::new_with_options(
            image,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if is_activation_key(&event.key()) {
                    event.prevent_default();
                    this.activate(&target, index);
                }
            },
        ));

        Ok(())
    }

    pub fn activate(&self, group: &Rc<ImageGroup>, index: usize) {
        let slide = self.session.borrow_mut().activate(group.clone(), index);
        self.render(slide);
    }

    pub fn next(&self) {
        let slide = self.session.borrow_mut().next();
        self.render(slide);
    }

    pub fn prev(&self) {
        let slide = self.session.borrow_mut().prev();
        self.render(slide);
    }

    pub fn close(&self) {
        self.session.borrow_mut().close();

        set_class(&self.overlay, OVERLAY_SHOWN, false);
        self.scroll_lock.release(ScrollHolder::Lightbox);
    }

    pub fn run(&self, command: LightboxCommand) {
        match command {
            LightboxCommand::Next => self.next(),
            LightboxCommand::Prev => self.prev(),
            LightboxCommand::Close => self.close(),
        }
    }

    // only a click on the backdrop itself closes, not one on the image or the buttons
    pub fn on_overlay_click(&self, target: Option<EventTarget>) {
        let on_backdrop = target
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|node| node.is_same_node(Some(&self.overlay)));

        if on_backdrop {
            self.close();
        }
    }

    pub fn on_key(&self, key: &str) {
        let command = self.session.borrow().key_command(key);

        if let Some(command) = command {
            self.run(command);
        }
    }

    pub fn on_touch_start(&self, x: f64) {
        self.swipe.borrow_mut().begin(x);
    }

    pub fn on_touch_end(&self, x: f64) {
        let command = self.swipe.borrow_mut().end(x);

        if let Some(command) = command {
            self.run(command);
        }
    }

    fn render(&self, slide: Option<Slide>) {
        let Some(slide) = slide else {
            return;
        };

        self.image.set_src(&slide.src);
        self.image.set_alt(&slide.alt);
        self.counter.set_text_content(Some(&slide.counter));

        set_class(&self.overlay, OVERLAY_SHOWN, true);
        self.scroll_lock.acquire(ScrollHolder::Lightbox);
    }
}

// collects the images of one container, in document order.  the snapshot is what the
// overlay shows, the elements are what get wired
fn discover_group(
    container: &Element,
    selector: &str,
) -> anyhow::Result<(ImageGroup, Vec<HtmlImageElement>)> {
    let images: Vec<HtmlImageElement> = query_all_in(container, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect();

    let refs = images
        .iter()
        .map(|img| ImageRef::new(img.src(), img.alt()))
        .collect();

    Ok((ImageGroup::new(refs), images))
}

fn touch_screen_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}
