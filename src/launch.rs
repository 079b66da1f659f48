//! Process start: resolve the provider list once, then mount the variant's
//! root component.

use crate::config::{AppConfig, ConfigError, ResolvedConfig};
use crate::{client, server};
use dioxus::prelude::*;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Client,
    Server,
}

impl Variant {
    pub fn title(self) -> &'static str {
        match self {
            Variant::Client => client::TITLE,
            Variant::Server => server::TITLE,
        }
    }

    fn root(self) -> fn() -> Element {
        match self {
            Variant::Client => client::App,
            Variant::Server => server::App,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Client => f.write_str("homes-app"),
            Variant::Server => f.write_str("homes-app-ssr"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("invalid configuration for {variant}: {source}")]
    Config {
        variant: Variant,
        #[source]
        source: ConfigError,
    },
    #[error("{variant} registers a hydration provider but was built without the `fullstack` feature")]
    HydrationUnavailable { variant: Variant },
}

/// Whether the web client should attach to server markup instead of
/// rendering from scratch.
pub fn hydrates(resolved: &ResolvedConfig) -> bool {
    resolved.hydration.is_some() && cfg!(feature = "fullstack")
}

/// Validates `config` for `variant` and reports what will be installed.
pub fn prepare(variant: Variant, config: &AppConfig) -> Result<ResolvedConfig, LaunchError> {
    let resolved = match variant {
        Variant::Client => config.resolve::<client::Route>(),
        Variant::Server => config.resolve::<server::Route>(),
    }
    .map_err(|source| LaunchError::Config { variant, source })?;

    if resolved.hydration.is_some() && !cfg!(feature = "fullstack") {
        return Err(LaunchError::HydrationUnavailable { variant });
    }

    let event_replay = resolved.hydration.as_ref().is_some_and(|h| h.event_replay());
    info!(
        app = %variant,
        title = variant.title(),
        providers = config.providers.len(),
        routes = resolved.router.routes.len(),
        hydration = resolved.hydration.is_some(),
        event_replay,
        "configuration resolved"
    );
    match serde_json::to_string(config) {
        Ok(json) => debug!(providers = %json, "provider list"),
        Err(e) => debug!("provider list not serializable: {}", e),
    }

    match (variant, resolved.hydration.is_some()) {
        (Variant::Client, true) => {
            warn!(app = %variant, "hydration provider on a client-rendered app has no server markup to attach to")
        }
        (Variant::Server, false) => {
            warn!(app = %variant, "no hydration provider, server markup will be replaced on load")
        }
        _ => {}
    }

    Ok(resolved)
}

/// The single initialization pass: uninitialized -> mounted.
pub fn bootstrap(variant: Variant, config: AppConfig) -> Result<(), LaunchError> {
    let resolved = prepare(variant, &config)?;

    let hydrate = hydrates(&resolved);

    let builder = dioxus::LaunchBuilder::new();
    #[cfg(all(feature = "web", feature = "fullstack"))]
    let builder = builder.with_cfg(dioxus::web::Config::new().hydrate(hydrate));
    #[cfg(all(feature = "web", not(feature = "fullstack")))]
    let builder = builder.with_cfg(dioxus::web::Config::new());

    info!(app = %variant, hydrate, "mounting root component");
    builder.launch(variant.root());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{provide_change_detection, ProviderKind};

    #[test]
    fn test_prepare_accepts_client_config() {
        let client = prepare(Variant::Client, &client::app_config()).unwrap();
        assert!(client.hydration.is_none());
        assert!(!hydrates(&client));
    }

    #[cfg(feature = "fullstack")]
    #[test]
    fn test_prepare_accepts_server_config() {
        let server = prepare(Variant::Server, &server::app_config()).unwrap();
        assert!(server.hydration.is_some());
        assert!(hydrates(&server));
    }

    #[cfg(not(feature = "fullstack"))]
    #[test]
    fn test_client_build_never_hydrates() {
        assert!(!cfg!(feature = "fullstack"));

        let err = prepare(Variant::Server, &server::app_config()).unwrap_err();
        assert!(matches!(err, LaunchError::HydrationUnavailable { variant: Variant::Server }));
        assert_eq!(
            err.to_string(),
            "homes-app-ssr registers a hydration provider but was built without the `fullstack` feature"
        );
    }

    #[test]
    fn test_prepare_propagates_config_errors() {
        let config = AppConfig::new(vec![provide_change_detection(), provide_change_detection()]);
        let err = prepare(Variant::Server, &config).unwrap_err();

        match &err {
            LaunchError::Config { variant, source } => {
                assert_eq!(*variant, Variant::Server);
                assert_eq!(*source, ConfigError::DuplicateProvider(ProviderKind::ChangeDetection));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "invalid configuration for homes-app-ssr: provider `change-detection` registered more than once"
        );
    }

    #[test]
    fn test_variant_titles() {
        assert_eq!(Variant::Client.title(), "Client Side Homes");
        assert_eq!(Variant::Server.title(), "Server Side Homes");
    }
}
