use dioxus::prelude::*;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div { id: "home-page", class: "results",
            h2 { "Find a place to call home" }
            p { "Listings appear here once a housing source is connected." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_has_no_title_or_logo() {
        let mut dom = VirtualDom::new(HomePage);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"id="home-page""#));
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<img"));
    }
}
