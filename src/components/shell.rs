use dioxus::prelude::*;

/// Path of the brand logo, served as-is from `public/`.
pub const LOGO_SRC: &str = "/assets/logo.svg";

#[component]
pub fn BrandHeader(title: &'static str) -> Element {
    rsx! {
        header { class: "brand-name",
            img {
                class: "brand-logo",
                src: LOGO_SRC,
                alt: "Brand Logo",
                aria_hidden: "true",
            }
            h1 { class: "brand-title", "{title}" }
        }
    }
}
