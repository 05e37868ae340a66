//! Browser DOM glue used by dashboard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components keep their logic in `state` and call these helpers for the few
//! things only the browser can do, such as hit-testing click targets or
//! reading file lists. Outside a browser the remaining helpers are no-ops.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::state::upload::FileMeta;

/// Whether the event target is inside an element matching `selector`.
#[cfg(feature = "hydrate")]
pub fn target_within(ev: &web_sys::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Rendered text of the element the handler is attached to.
#[cfg(feature = "hydrate")]
pub fn current_target_text(ev: &web_sys::Event) -> Option<String> {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.inner_text())
}

/// Name and size of every file in a browser `FileList`, in order.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn file_metas(files: &web_sys::FileList) -> Vec<FileMeta> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| FileMeta {
            name: file.name(),
            // Sizes are exact integers well below 2^53.
            size: file.size() as u64,
        })
        .collect()
}

/// Local `blob:` URL for the first file in `files`.
#[cfg(feature = "hydrate")]
pub fn first_object_url(files: &web_sys::FileList) -> Option<String> {
    let file = files.get(0)?;
    web_sys::Url::create_object_url_with_blob(&file).ok()
}

/// Release a preview URL created by [`first_object_url`].
pub fn revoke_object_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Open the native file picker behind a hidden `<input type="file">`.
pub fn open_file_picker(input_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(input_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            input.click();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_id;
    }
}
