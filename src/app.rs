//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::dashboard::DashboardPage;
use crate::state::{
    chat::ChatState, feed::FeedState, share::ShareState, sidebar::SidebarState, toast::ToastState,
    upload::UploadState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_document();
    leptos::logging::log!(
        "pinboard client: pins every {:?}, messages every {:?}",
        config.pins_poll,
        config.messages_poll
    );
    provide_context(config);

    provide_context(RwSignal::new(SidebarState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(FeedState::default()));
    provide_context(RwSignal::new(ShareState::default()));
    provide_context(RwSignal::new(ChatState::default()));
    provide_context(RwSignal::new(UploadState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/pinboard.css"/>
        <Title text="Pinboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
