//! Viewport observers for the staggered reveal.
//!
//! Each observed element is tagged with `data-reveal-index` so a batch of
//! entries can be mapped back to the element's position among its kind.

use std::rc::Rc;

use js_sys::Array;
use page::reveal::{Intersection, RevealKind};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;
use crate::host::Page;

pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Parse a `data-reveal-index` value; anything but a plain index is ignored.
#[must_use]
pub fn parse_reveal_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok()
}

/// Observe `elements` as targets of `kind`.
///
/// The observer is built before anything is hidden, so a browser that
/// rejects it leaves every element visible and the feature simply off.
pub fn observe(page: &Rc<Page>, kind: RevealKind, elements: Vec<HtmlElement>) -> Result<(), DomError> {
    let observer = build_observer(page, kind)?;
    let count = elements.len();
    for (index, element) in elements.iter().enumerate() {
        element
            .set_attribute(REVEAL_INDEX_ATTR, &index.to_string())
            .map_err(|err| DomError::js("setAttribute", &err))?;
    }
    for (index, element) in elements.iter().enumerate() {
        page.register(kind.target(index), element.clone());
    }

    page.dispatch(|controller| controller.prepare_reveal(kind, count));
    for element in &elements {
        observer.observe(element);
    }
    page.set_observer(kind, observer);
    log::debug!("observing {count} {kind:?} elements");
    Ok(())
}

fn build_observer(page: &Rc<Page>, kind: RevealKind) -> Result<IntersectionObserver, DomError> {
    let config = page.config();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&config.reveal_threshold.into());
    options.set_root_margin(&config.reveal_root_margin);

    let handler_page = Rc::clone(page);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _: IntersectionObserver| {
        let batch: Vec<Intersection> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let index = parse_reveal_index(entry.target().get_attribute(REVEAL_INDEX_ATTR).as_deref())?;
                Some(Intersection { index, intersecting: entry.is_intersecting() })
            })
            .collect();
        log::trace!("{kind:?} visibility batch: {} entries", batch.len());
        handler_page.dispatch(|controller| controller.intersections(kind, &batch));
    });
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| DomError::js("IntersectionObserver", &err))?;
    callback.forget();
    Ok(observer)
}

#[cfg(test)]
#[path = "observe_test.rs"]
mod tests;
