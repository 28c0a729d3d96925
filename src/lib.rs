//! # folio
//!
//! Browser host for the portfolio page's interactive behavior. The decisions
//! live in the [`page`] crate; this crate resolves the page's elements,
//! attaches listeners, and applies the actions the controller returns.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | reads the optional `#page-config` JSON block |
//! | [`dom`] | selectors and typed element lookup |
//! | [`error`] | browser environment errors |
//! | [`host`] | `Page`: dispatch, action application, timers |
//! | [`observe`] | viewport observers for the reveal effect |
//! | [`storage`] | `localStorage` preference store |
//! | [`wire`] | per-feature startup wiring |

pub mod config;
pub mod dom;
pub mod error;
pub mod host;
pub mod observe;
pub mod storage;
pub mod wire;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::dom::{Dom, listen};
use crate::host::Page;

/// Module entry point. Waits for `DOMContentLoaded` if the document is still
/// parsing, otherwise initializes right away.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let dom = match Dom::current() {
        Ok(dom) => dom,
        Err(err) => {
            web_sys::console::error_1(&err.to_string().into());
            return;
        }
    };

    let (config, config_err) = config::load(&dom);
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    if let Some(err) = config_err {
        log::warn!("ignoring page config: {err}");
    }

    if dom.ready_state() != "loading" {
        init(dom, config);
        return;
    }

    let document = dom.document.clone();
    let mut pending = Some((dom, config));
    let registered = listen(&document, "DOMContentLoaded", move |_| {
        if let Some((dom, config)) = pending.take() {
            init(dom, config);
        }
    });
    if let Err(err) = registered {
        log::error!("cannot wait for DOMContentLoaded: {err}");
    }
}

fn init(dom: Dom, config: page::config::PageConfig) {
    let page: Rc<Page> = Page::new(dom, config);
    wire::wire_all(&page);
    log::info!("portfolio ready");
}
