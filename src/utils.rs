//! DOM-side helpers shared across components.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, EventTarget, HtmlLinkElement};

use estudio_web::tools::{font_link_id, font_stylesheet_url};

/// Blocking notification box, the page's only user-facing failure channel.
pub fn alert(message: &str) {
    let _ = gloo_utils::window().alert_with_message(message);
}

/// Current vertical scroll offset of the page.
pub fn scroll_top() -> f64 {
    gloo_utils::window().page_y_offset().unwrap_or(0.0)
}

/// Copy text to the clipboard and confirm with an alert.
pub fn copy_to_clipboard(text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let clipboard = gloo_utils::window().navigator().clipboard();
        if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
            alert("Copiado al portapapeles");
        }
    });
}

/// Inject the Google Fonts stylesheet for a family, at most once per
/// family: the link element id derived from the name guards reinsertion.
pub fn ensure_font_stylesheet(family: &str) {
    let family = family.trim();
    if family.is_empty() {
        return;
    }
    let document = gloo_utils::document();
    let id = font_link_id(family);
    if document.get_element_by_id(&id).is_some() {
        return;
    }
    let Some(head) = document.head() else { return };
    let Ok(element) = document.create_element("link") else {
        return;
    };
    let Ok(link) = element.dyn_into::<HtmlLinkElement>() else {
        return;
    };
    link.set_id(&id);
    link.set_rel("stylesheet");
    link.set_href(&font_stylesheet_url(family));
    let _ = head.append_child(&link);
}

/// An event listener detached from its target on drop, so components own
/// their global listeners the same way they own timer handles.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerHandle {
    fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target,
            event,
            closure,
        }
    }

    pub fn on_window(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
        Self::attach(gloo_utils::window().into(), event, handler)
    }

    pub fn on_document(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
        Self::attach(gloo_utils::document().into(), event, handler)
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Document-wide listener that blocks the context menu on images.
pub fn suppress_image_context_menu() -> ListenerHandle {
    ListenerHandle::on_document("contextmenu", |event| {
        let Some(target) = event.target() else { return };
        if let Ok(element) = target.dyn_into::<Element>() {
            if element.tag_name() == "IMG" {
                event.prevent_default();
            }
        }
    })
}
