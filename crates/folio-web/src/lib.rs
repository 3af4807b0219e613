//! Folio Web — browser entry point for the portfolio page.
//!
//! Provides [`WebHost`], the [`folio_core::Host`] implementation over
//! `web-sys`, and [`ConsoleLogger`], a `log` backend writing to the browser
//! console. On `wasm32` the module start function runs page startup as soon
//! as the document is parsed.

#![doc = include_str!("../README.md")]

pub mod host;
pub mod logger;

pub use host::WebHost;
pub use logger::ConsoleLogger;

use folio_content::SiteDocument;
use folio_ui::PortfolioApp;
use std::rc::Rc;

/// Ready state the document reports while it is still parsing.
pub const LOADING_STATE: &str = "loading";

/// Parse the built-in site and install the console logger at its level.
pub fn prepare() -> folio_core::Result<SiteDocument> {
    let site = SiteDocument::builtin()?;
    logger::init(site.page.level_filter()?)?;
    log::debug!("Loaded {} projects", site.catalog.len());
    Ok(site)
}

/// Run page startup against the live document.
pub fn run(host: Rc<WebHost>, site: SiteDocument) -> PortfolioApp<WebHost> {
    let context = folio_ui::PortfolioContext::from_site(host, site);
    PortfolioApp::init(context)
}

#[cfg(target_arch = "wasm32")]
mod entry {
    use super::{LOADING_STATE, WebHost, prepare, run};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    thread_local! {
        static APP: RefCell<Option<folio_ui::PortfolioApp<WebHost>>> = const { RefCell::new(None) };
    }

    fn keep(app: folio_ui::PortfolioApp<WebHost>) {
        APP.with(|slot| *slot.borrow_mut() = Some(app));
    }

    /// Module start: run now, or once the document finishes parsing.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let site = prepare().map_err(|err| JsValue::from_str(&err.to_string()))?;
        let host = Rc::new(WebHost::new().map_err(|err| JsValue::from_str(&err.to_string()))?);

        if host.document().ready_state() != LOADING_STATE {
            keep(run(host, site));
            return Ok(());
        }

        let document = host.document().clone();
        let pending = RefCell::new(Some((host, site)));
        let on_ready = Closure::<dyn FnMut()>::new(move || {
            if let Some((host, site)) = pending.borrow_mut().take() {
                keep(run(host, site));
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        Ok(())
    }
}
