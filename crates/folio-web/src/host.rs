//! [`Host`] over the browser DOM.
//!
//! Listeners are wrapped in `wasm-bindgen` closures and leaked with
//! `Closure::forget`; page behavior is installed once and lives as long as
//! the page.

use folio_core::{
    ClickEvent, ClickHandler, Error, Host, IntersectionEntry, IntersectionHandler,
    IntersectionOptions, Result, ScrollHandler,
};
use std::fmt;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

fn js_error(operation: &str, value: JsValue) -> Error {
    Error::host(format!("{operation}: {value:?}"))
}

/// The live browser window and document.
#[derive(Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl fmt::Debug for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebHost")
            .field("url", &self.document.url().ok())
            .finish()
    }
}

impl WebHost {
    /// Bind to the global window and its document.
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::host("No global window"))?;
        let document = window
            .document()
            .ok_or_else(|| Error::host("Window has no document"))?;
        Ok(Self { window, document })
    }

    /// The bound document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn html_element<'a>(&self, element: &'a Element) -> Result<&'a HtmlElement> {
        element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| Error::host(format!("<{}> is not an HTML element", element.tag_name())))
    }
}

impl Host for WebHost {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|err| Error::parse(format!("Invalid selector '{selector}': {err:?}")))?;
        Ok((0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn create_element(&self, tag: &str) -> Result<Element> {
        self.document
            .create_element(tag)
            .map_err(|err| js_error("createElement", err))
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|err| js_error("appendChild", err))
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<()> {
        element
            .set_attribute(name, value)
            .map_err(|err| js_error("setAttribute", err))
    }

    fn set_inner_html(&self, element: &Element, html: &str) -> Result<()> {
        element.set_inner_html(html);
        Ok(())
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> Result<()> {
        self.html_element(element)?
            .style()
            .set_property(property, value)
            .map_err(|err| js_error("style.setProperty", err))
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<()> {
        element
            .class_list()
            .add_1(class)
            .map_err(|err| js_error("classList.add", err))
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<()> {
        element
            .class_list()
            .remove_1(class)
            .map_err(|err| js_error("classList.remove", err))
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_into_view(&self, element: &Element) -> Result<()> {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn on_click(&self, element: &Element, mut handler: ClickHandler) -> Result<()> {
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let mut click = ClickEvent::new();
            handler(&mut click);
            if click.default_prevented() {
                event.prevent_default();
            }
        });
        element
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|err| js_error("addEventListener(click)", err))?;
        listener.forget();
        Ok(())
    }

    fn on_scroll(&self, mut handler: ScrollHandler) -> Result<()> {
        let listener = Closure::<dyn FnMut()>::new(move || handler());
        self.window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|err| js_error("addEventListener(scroll)", err))?;
        listener.forget();
        Ok(())
    }

    fn observe_intersections(
        &self,
        targets: &[Element],
        options: IntersectionOptions,
        mut handler: IntersectionHandler<Element>,
    ) -> Result<()> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |records: js_sys::Array, _observer: IntersectionObserver| {
                let entries: Vec<_> = records
                    .iter()
                    .filter_map(|record| record.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                    .collect();
                handler(&entries);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| js_error("IntersectionObserver", err))?;
        for target in targets {
            observer.observe(target);
        }
        callback.forget();
        Ok(())
    }
}
