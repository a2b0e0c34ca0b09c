//! [`Surface`] over the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::config::classes;
use crate::core::{LocalTask, PosterCard, Surface};
use crate::models::ScrollMetrics;
use crate::utils::dom;

/// Manipulates the page skeleton rendered by [`super::CatalogShell`].
///
/// Missing elements are ignored; the page keeps working with whatever parts
/// of the layout exist.
pub struct DomSurface {
    document: Option<Document>,
}

impl DomSurface {
    pub fn new() -> Self {
        Self {
            document: dom::document(),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(id)
    }
}

impl Default for DomSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DomSurface {
    type Card = DomCard;

    fn set_visible(&self, target: &str, visible: bool) {
        if let Some(element) = self.element(target) {
            dom::set_display(&element, visible);
        }
    }

    fn set_text(&self, target: &str, text: &str) {
        if let Some(element) = self.element(target) {
            element.set_text_content(Some(text));
        }
    }

    fn append_markup(&self, target: &str, markup: &str) {
        if let Some(element) = self.element(target) {
            let _ = element.insert_adjacent_html("beforeend", markup);
        }
    }

    fn replace_markup(&self, target: &str, markup: &str) {
        if let Some(element) = self.element(target) {
            element.set_inner_html(markup);
        }
    }

    fn cards(&self, target: &str) -> Vec<DomCard> {
        let Some(nodes) = self
            .element(target)
            .and_then(|el| el.query_selector_all(&format!(".{}", classes::CARD)).ok())
        else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| DomCard { element })
            .collect()
    }

    fn detach(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        dom::scroll_metrics()
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    fn on_scroll(&self, handler: Box<dyn Fn()>) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::prelude::Closure;

            let closure = Closure::wrap(handler);
            if let Some(window) = dom::window() {
                let _ = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }

            // The listener lives as long as the page
            closure.forget();
        }
    }
}

/// A rendered `.movie-card` element.
pub struct DomCard {
    element: Element,
}

impl DomCard {
    fn child(&self, class: &str) -> Option<Element> {
        self.element
            .query_selector(&format!(".{}", class))
            .ok()
            .flatten()
    }
}

impl PosterCard for DomCard {
    fn poster_url(&self) -> Option<String> {
        self.element.get_attribute("data-poster")
    }

    fn reveal_poster(&self, url: &str) {
        if let Some(image) = self
            .child(classes::POSTER)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            image.set_src(url);
            dom::set_display(&image, true);
        }
    }

    fn reveal_placeholder(&self) {
        if let Some(placeholder) = self.child(classes::PLACEHOLDER) {
            dom::set_display(&placeholder, true);
        }
    }
}
