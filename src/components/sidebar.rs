//! Sidebar navigation and the top bar title.

use leptos::prelude::*;

use crate::state::sidebar::{Section, SidebarState};

/// Section links. Clicking one activates its section and copies the link's
/// text into the top bar title.
#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Pinboard"</div>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <a
                            href="#"
                            class="sidebar-link"
                            class:active=move || sidebar.with(|s| s.is_active(section))
                            data-target=section.id()
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                let label = link_label(&ev).unwrap_or_else(|| section.label().to_owned());
                                sidebar.update(|s| {
                                    s.select(section.id(), &label);
                                });
                            }
                        >
                            <span class="sidebar-link__label">{section.label()}</span>
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

/// Heading that mirrors the active section's label.
#[component]
pub fn TopBar() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();

    view! {
        <header class="topbar">
            <h1 id="topbarTitle" class="topbar__title">{move || sidebar.with(|s| s.title.clone())}</h1>
        </header>
    }
}

fn link_label(ev: &leptos::ev::MouseEvent) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        crate::util::dom::current_target_text(ev)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
