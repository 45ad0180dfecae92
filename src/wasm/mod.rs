//! Browser entry point and the DOM-bound controllers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, Window};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::portfolio::Portfolio;

pub mod contact;
pub mod dom;
pub mod frame_loop;
pub mod gl;
pub mod grid;
pub mod modal;
pub mod nav;
pub mod render;
pub mod reveal;

use contact::ContactController;
use dom::{by_id, listen, optional_by_id, report, AlertNotifier};
use frame_loop::FrameLoop;
use grid::GridBuilder;
use modal::ModalController;
use nav::NavController;
use reveal::RevealObserver;

/// Everything wired into the page. Kept alive until the page unloads.
pub struct Site {
    pub config: SiteConfig,
    pub nav: Rc<RefCell<NavController>>,
    pub scene: Option<FrameLoop>,
    pub content: Option<Content>,
}

/// Controllers that need the full document.
pub struct Content {
    pub modal: Rc<RefCell<ModalController>>,
    pub cards: Vec<HtmlElement>,
    pub service_reveal: RevealObserver,
    pub work_reveal: RevealObserver,
    pub contact: Rc<ContactController<AlertNotifier>>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = boot() {
        web_sys::console::error_2(&"site startup failed:".into(), &err);
    }
}

fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let (config, rejected) = match document.body() {
        Some(body) => read_config(&body),
        None => (SiteConfig::default(), Vec::new()),
    };
    if let Some(level) = config.log_level.to_level() {
        console_log::init_with_level(level).ok();
    }
    for err in rejected {
        log::warn!("ignoring page setting: {err}");
    }
    log::info!("studio site starting");

    let ids = &config.ids;
    let nav = NavController::new(
        by_id::<Element>(&document, ids.menu_button)?,
        by_id::<HtmlElement>(&document, ids.mobile_nav)?,
    )?
    .attach()?;

    let scene = match optional_by_id::<HtmlElement>(&document, ids.scene_container) {
        Some(container) => match render::start(&window, &document, container) {
            Ok(frames) => Some(frames),
            Err(err) => {
                log::error!("hero scene disabled: {err:?}");
                None
            }
        },
        None => {
            log::info!("no #{} element, skipping hero scene", ids.scene_container);
            None
        }
    };
    style_brand_mark(&document, &config);

    SITE.with(|site| {
        *site.borrow_mut() = Some(Site {
            config,
            nav,
            scene,
            content: None,
        })
    });

    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_| {
            report("page wiring", wire_content())
        })?;
        Ok(())
    } else {
        wire_content()
    }
}

/// Reads the `data-*` overrides on `page` (normally `<body>`). Bad values are
/// returned alongside the config, not fatal.
pub fn read_config(page: &HtmlElement) -> (SiteConfig, Vec<SiteError>) {
    let mut config = SiteConfig::default();
    let mut rejected = Vec::new();
    let data = page.dataset();
    for key in ["logLevel", "showreel"] {
        if let Some(value) = data.get(key) {
            if let Err(err) = config.apply_override(key, &value) {
                rejected.push(err);
            }
        }
    }
    (config, rejected)
}

const BRAND_GRADIENT: &str = "linear-gradient(135deg,#e2a600,#ff8a00)";
const BRAND_SHADOW: &str = "0 10px 30px rgba(226,166,0,0.12)";

pub fn style_brand_mark(document: &Document, config: &SiteConfig) {
    let Some(mark) = optional_by_id::<HtmlElement>(document, config.ids.brand_mark) else {
        return;
    };
    let style = mark.style();
    let applied = style
        .set_property("background", BRAND_GRADIENT)
        .and_then(|_| style.set_property("box-shadow", BRAND_SHADOW));
    report("brand mark", applied);
}

fn wire_content() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = SITE
        .with(|site| site.borrow().as_ref().map(|s| s.config.clone()))
        .unwrap_or_default();

    let content = build_content(&window, &document, &config, Portfolio::showcase())?;
    set_footer_year(&document, &config);

    SITE.with(|site| {
        if let Some(site) = site.borrow_mut().as_mut() {
            site.content = Some(content);
        }
    });
    log::info!("page wired");
    Ok(())
}

/// Portfolio grid, modal, reveal observers and contact form.
pub fn build_content(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
    portfolio: Portfolio,
) -> Result<Content, JsValue> {
    let ids = &config.ids;
    let body = document.body().ok_or("no body")?;

    let modal = ModalController::new(
        by_id::<HtmlElement>(document, ids.video_modal)?,
        by_id::<Element>(document, ids.video_holder)?,
        body,
        portfolio.clone(),
    )?;
    let close = optional_by_id::<Element>(document, ids.modal_close);
    let modal = modal.attach(close, document)?;

    let grid = GridBuilder::new(
        window.clone(),
        document.clone(),
        by_id::<Element>(document, ids.portfolio_grid)?,
        config.stagger,
    );
    let cards = grid.build(&portfolio, &modal)?;

    if let Some(button) = optional_by_id::<Element>(document, ids.showreel_button) {
        grid::wire_showreel(&button, config.showreel_item, &modal)?;
    }

    let service_reveal = RevealObserver::new(config.service_reveal_threshold)?;
    service_reveal.observe_all(&document.query_selector_all(ids.service_card_selector)?);

    let work_reveal = RevealObserver::new(config.work_reveal_threshold)?;
    for card in &cards {
        work_reveal.observe(card);
    }

    let contact = ContactController::new(
        by_id::<HtmlFormElement>(document, ids.contact_form)?,
        by_id::<HtmlInputElement>(document, ids.contact_name)?,
        AlertNotifier::new(window.clone()),
    )
    .attach()?;

    Ok(Content {
        modal,
        cards,
        service_reveal,
        work_reveal,
        contact,
    })
}

pub fn set_footer_year(document: &Document, config: &SiteConfig) {
    if let Some(year) = optional_by_id::<Element>(document, config.ids.footer_year) {
        year.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
    }
}
