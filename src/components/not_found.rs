use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "no route matched");

    rsx! {
        div { id: "not-found",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Missing() -> Element {
        rsx! { NotFound { segments: vec!["homes".to_string(), "42".to_string()] } }
    }

    #[test]
    fn test_not_found_echoes_path() {
        let mut dom = VirtualDom::new(Missing);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"id="not-found""#));
        assert!(html.contains("Nothing lives at /homes/42."));
    }
}
