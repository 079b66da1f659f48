//! Server-side rendered homes app, hydrated on the client.

use crate::components::{BrandHeader, HomePage, NotFound};
use crate::config::{
    provide_change_detection, provide_client_hydration, provide_router, with_event_replay,
    AppConfig, RouteTable,
};
use dioxus::prelude::*;

pub const TITLE: &str = "Server Side Homes";

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[layout(AppComponent)]
    #[route("/")]
    HomePage {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl RouteTable for Route {
    fn is_fallback(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }
}

/// Static routes handed to the router provider.
pub fn route_table() -> Vec<String> {
    vec![Route::HomePage {}.to_string()]
}

pub fn app_config() -> AppConfig {
    AppConfig::new(vec![
        provide_change_detection(),
        provide_router(route_table()),
        provide_client_hydration([with_event_replay()]),
    ])
}

#[component]
pub fn AppComponent() -> Element {
    rsx! {
        main {
            BrandHeader { title: TITLE }
            section { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/server.css") }
        Router::<Route> {}
    }
}
