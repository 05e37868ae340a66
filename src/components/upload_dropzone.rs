//! Upload form with a drag-and-drop image dropzone and local preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form posts natively to `/upload`; this component only manages the
//! file input and the preview. The hidden input always holds the file being
//! previewed: accepted drops are copied into it, and a rejected pick or drop
//! puts the previewed file back (or empties the input).

use leptos::prelude::*;

use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use crate::state::upload::InputSync;
use crate::state::upload::UploadState;
use crate::util::dom;

const UPLOAD_INPUT_ID: &str = "uploadInput";

#[component]
pub fn UploadDropzone() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(feature = "hydrate")]
    let previewed_files = StoredValue::new_local(None::<web_sys::FileList>);
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.set_dragover(true));
    };

    let on_dragleave = move |_ev: leptos::ev::DragEvent| upload.update(|u| u.set_dragover(false));

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.set_dragover(false));

        #[cfg(feature = "hydrate")]
        {
            let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                return;
            };
            if files.length() == 0 {
                return;
            }
            let sync = config.with_value(|cfg| offer_files(upload, cfg, &files));
            sync_input(input_ref.get_untracked(), previewed_files, &files, sync);
        }
    };

    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = input_ref.get_untracked();
            if let Some(files) = input.as_ref().and_then(web_sys::HtmlInputElement::files) {
                let sync = config.with_value(|cfg| offer_files(upload, cfg, &files));
                sync_input(input, previewed_files, &files, sync);
            }
        }
    };

    // A remounted form has an empty file input, so drop the old preview with it.
    on_cleanup(move || {
        if let Some(Some(url)) = upload.try_update(UploadState::reset) {
            dom::revoke_object_url(&url);
        }
    });

    let preview_src = move || upload.with(|u| u.preview_url.clone().unwrap_or_default());
    let placeholder = move || upload.with(UploadState::shows_placeholder);

    view! {
        <form class="upload-form" action="/upload" method="post" enctype="multipart/form-data">
            <div
                id="uploadDropzone"
                class="upload-dropzone"
                class:dragover=move || upload.with(|u| u.dragover)
                on:click=move |_| dom::open_file_picker(UPLOAD_INPUT_ID)
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <img id="uploadPreview" class="upload-preview" class:d-none=placeholder src=preview_src alt="Preview"/>
                <Show when=move || upload.with(|u| u.preview_url.is_some() && u.file_name.is_some())>
                    <small class="upload-dropzone__file-name">{move || upload.with(|u| u.file_name.clone().unwrap_or_default())}</small>
                </Show>
                <div id="uploadPlaceholder" class="upload-placeholder" class:d-none=move || !placeholder()>
                    <p class="mb-1">"Drag & drop an image here"</p>
                    <small class="text-muted">"or click to browse"</small>
                </div>
            </div>
            <input
                id=UPLOAD_INPUT_ID
                class="d-none"
                type="file"
                name="image"
                accept="image/*"
                node_ref=input_ref
                on:change=on_change
            />
            <Show when=move || upload.with(|u| u.error.is_some())>
                <p class="upload-form__error text-danger">{move || upload.with(|u| u.error.clone().unwrap_or_default())}</p>
            </Show>
            <input class="form-control mb-2" type="text" name="title" placeholder="Title" required=true/>
            <textarea class="form-control mb-2" name="description" placeholder="Description"></textarea>
            <input class="form-control mb-2" type="text" name="tags" placeholder="Tags, comma separated"/>
            <button type="submit" class="btn btn-primary">"Upload"</button>
        </form>
    }
}

/// Validate the first file and preview it, revoking the URL it replaces.
/// Returns how the file input must change to match the preview.
#[cfg(feature = "hydrate")]
fn offer_files(upload: RwSignal<UploadState>, config: &ClientConfig, files: &web_sys::FileList) -> InputSync {
    use crate::state::upload::{Selection, select_files};

    let selection = select_files(&dom::file_metas(files), config);
    match &selection {
        Selection::Empty => {}
        Selection::Rejected(err) => {
            leptos::logging::warn!("upload rejected: {err}");
            upload.update(|u| u.reject(err));
        }
        Selection::Accepted(file) => {
            let Some(url) = dom::first_object_url(files) else {
                leptos::logging::warn!("could not create preview URL for {}", file.name);
                return upload.with_untracked(UploadState::restore_sync);
            };
            let mut replaced = None;
            upload.update(|u| replaced = u.show_preview(file, url));
            if let Some(old) = replaced {
                dom::revoke_object_url(&old);
            }
        }
    }
    upload.with_untracked(|u| u.input_sync(&selection))
}

/// Make the form's file input hold the previewed file.
#[cfg(feature = "hydrate")]
fn sync_input(
    input: Option<web_sys::HtmlInputElement>,
    previewed: StoredValue<Option<web_sys::FileList>, LocalStorage>,
    offered: &web_sys::FileList,
    sync: InputSync,
) {
    let Some(input) = input else {
        return;
    };
    match sync {
        InputSync::Unchanged => {}
        InputSync::UseOffered => {
            input.set_files(Some(offered));
            previewed.set_value(Some(offered.clone()));
        }
        InputSync::RestorePreviewed => previewed.with_value(|files| match files {
            Some(files) => input.set_files(Some(files)),
            None => input.set_value(""),
        }),
        InputSync::Clear => input.set_value(""),
    }
}
