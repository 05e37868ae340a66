//! Dashboard page: sidebar, top bar, and the four content sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The query string can open a section (`?tab=messages`) and a conversation
//! (`&chat_with=<user id>`). Section content mounts only while its section is
//! active, which also bounds the lifetime of the pollers inside it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::chat_thread::ChatThread;
use crate::components::pin_feed::{PinFeed, SavedPins};
use crate::components::sidebar::{Sidebar, TopBar};
use crate::components::toast_host::ToastHost;
use crate::components::upload_dropzone::UploadDropzone;
use crate::components::user_search::UserSearch;
use crate::net::types::UserId;
use crate::state::chat::ChatState;
use crate::state::share::ShareState;
use crate::state::sidebar::{Section, SidebarState};

/// Dashboard options carried in the URL query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub tab: Option<Section>,
    pub chat_with: Option<UserId>,
}

impl DashboardQuery {
    /// Parse raw `tab` / `chat_with` values. Unknown tabs and non-numeric ids
    /// are ignored.
    pub fn parse(tab: Option<&str>, chat_with: Option<&str>) -> Self {
        Self {
            tab: tab.and_then(|t| Section::from_id(t.trim())),
            chat_with: chat_with.and_then(|id| id.trim().parse().ok()),
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let share = expect_context::<RwSignal<ShareState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let query_map = use_query_map();

    let query = Memo::new(move |_| {
        query_map.with(|q| DashboardQuery::parse(q.get("tab").as_deref(), q.get("chat_with").as_deref()))
    });

    Effect::new(move || {
        let DashboardQuery { tab, chat_with } = query.get();
        if let Some(section) = tab {
            sidebar.set(SidebarState::opened_at(section));
        }
        if let Some(other_id) = chat_with {
            chat.update(|c| c.open(other_id));
        }
    });

    // Popups close on any click outside them, including the page background.
    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom::target_within;

        let listener = window_event_listener(leptos::ev::click, move |ev| {
            let inside_popup = target_within(&ev, ".share-popup");
            let on_share_btn = target_within(&ev, ".share-btn");
            if share.with_untracked(|s| s.open_pin.is_some()) {
                share.update(|s| {
                    s.document_click(inside_popup, on_share_btn);
                });
            }
        });
        on_cleanup(move || listener.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = share;

    let active = move |section: Section| sidebar.with(|s| s.is_active(section));

    view! {
        <div class="dashboard">
            <Sidebar/>
            <main class="dashboard__main">
                <TopBar/>
                <section id="home" class="page-section" class:active=move || active(Section::Home)>
                    <Show when=move || active(Section::Home)>
                        <PinFeed/>
                    </Show>
                </section>
                <section id="upload" class="page-section" class:active=move || active(Section::Upload)>
                    <Show when=move || active(Section::Upload)>
                        <UploadDropzone/>
                    </Show>
                </section>
                <section id="messages" class="page-section" class:active=move || active(Section::Messages)>
                    <Show when=move || active(Section::Messages)>
                        <UserSearch/>
                        <ChatThread/>
                    </Show>
                </section>
                <section id="saved" class="page-section" class:active=move || active(Section::Saved)>
                    <Show when=move || active(Section::Saved)>
                        <SavedPins/>
                    </Show>
                </section>
            </main>
            <ToastHost/>
        </div>
    }
}
