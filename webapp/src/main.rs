use std::cell::RefCell;

use gloo_console::error as console_error;
use gloo_events::EventListener;
use tracing::{Level, debug, error, info};

mod lightbox;
use lightbox::Lightbox;

mod menu;
use menu::MobileMenu;

mod navbar;
use navbar::NavbarEffect;

mod page;
use page::{Bindings, Page};

mod smooth_scroll;
use smooth_scroll::SmoothScroll;

// Session
//
// the page context together with every listener bound against it.  it is parked here
// once initialization finishes and lives until the page goes away
struct Session {
    _page: Page,
    _bindings: Bindings,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn main() {
    if let Err(err) = dioxus_logger::init(Level::DEBUG) {
        console_error!(format!("failed to init logger: {err}"));
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        console_error!("no document to attach to");
        return;
    };

    // the module may load before or after parsing finishes
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
    } else {
        start();
    }
}

fn start() {
    let page = match Page::discover() {
        Ok(page) => page,
        Err(err) => {
            error!("failed to set up page: {err:#}");
            return;
        }
    };

    let mut bindings = Bindings::default();

    // each controller stands alone, so one failing never keeps the others from loading
    report("mobile menu", MobileMenu::init(&page, &mut bindings));
    report("lightbox", Lightbox::init(&page, &mut bindings));
    report("smooth scroll", SmoothScroll::init(&page, &mut bindings));
    report("navbar", NavbarEffect::init(&page, &mut bindings));

    info!({ listeners = bindings.len() }, "site interactions ready");

    SESSION.with(|session| {
        *session.borrow_mut() = Some(Session {
            _page: page,
            _bindings: bindings,
        })
    });
}

fn report<T>(name: &str, result: anyhow::Result<Option<T>>) {
    match result {
        Ok(Some(_)) => debug!("{name} initialized"),
        Ok(None) => debug!("{name} skipped"),
        Err(err) => error!("failed to initialize {name}: {err:#}"),
    }
}
