//! Client-side rendered homes app.

use crate::components::{BrandHeader, HomePage, NotFound};
use crate::config::{provide_change_detection, provide_router, AppConfig, RouteTable};
use dioxus::prelude::*;

pub const TITLE: &str = "Client Side Homes";

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
    AppConfig::new(vec![provide_change_detection(), provide_router(route_table())])
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
        document::Stylesheet { href: asset!("/assets/client.css") }
        Router::<Route> {}
    }
}
