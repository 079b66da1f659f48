use tracing::Level;

/// Installs the global subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = dioxus::logger::init(Level::INFO);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(false)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
        assert!(tracing::dispatcher::has_been_set());
        tracing::info!("logging initialized");
    }
}
