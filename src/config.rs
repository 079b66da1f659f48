//! Declarative application configuration.
//!
//! An [`AppConfig`] is an ordered list of [`Provider`]s, built once per
//! process and consumed by [`crate::launch::bootstrap`]. Providers are plain
//! data: the list can be compared, serialized and resolved into a
//! [`ResolvedConfig`] independently of the order it was declared in.

use dioxus::prelude::Routable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no router provider registered")]
    MissingRouter,
    #[error("provider `{0}` registered more than once")]
    DuplicateProvider(ProviderKind),
    #[error("router provider has an empty route table")]
    EmptyRouteTable,
    #[error("invalid route path `{path}`: {reason}")]
    InvalidRoutePath { path: String, reason: String },
    #[error("route path `{0}` declared more than once")]
    DuplicateRoute(String),
    #[error("hydration feature `{0}` enabled more than once")]
    DuplicateHydrationFeature(HydrationFeature),
}

/// Scheduling hints for re-rendering. Dioxus schedules renders itself, so
/// these are recorded and reported, not acted upon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDetection {
    pub event_coalescing: bool,
    pub run_coalescing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterProvider {
    pub routes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HydrationFeature {
    /// Buffer events fired before hydration finishes and dispatch them after.
    EventReplay,
}

impl fmt::Display for HydrationFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HydrationFeature::EventReplay => f.write_str("event-replay"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationProvider {
    pub features: Vec<HydrationFeature>,
}

impl HydrationProvider {
    pub fn event_replay(&self) -> bool {
        self.features.contains(&HydrationFeature::EventReplay)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    ChangeDetection(ChangeDetection),
    Router(RouterProvider),
    ClientHydration(HydrationProvider),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    ChangeDetection,
    Router,
    ClientHydration,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::ChangeDetection => "change-detection",
            ProviderKind::Router => "router",
            ProviderKind::ClientHydration => "client-hydration",
        };
        f.write_str(name)
    }
}

impl Provider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::ChangeDetection(_) => ProviderKind::ChangeDetection,
            Provider::Router(_) => ProviderKind::Router,
            Provider::ClientHydration(_) => ProviderKind::ClientHydration,
        }
    }
}

pub fn provide_change_detection() -> Provider {
    Provider::ChangeDetection(ChangeDetection::default())
}

pub fn provide_router<I, S>(routes: I) -> Provider
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Provider::Router(RouterProvider {
        routes: routes.into_iter().map(Into::into).collect(),
    })
}

pub fn provide_client_hydration<I>(features: I) -> Provider
where
    I: IntoIterator<Item = HydrationFeature>,
{
    Provider::ClientHydration(HydrationProvider {
        features: features.into_iter().collect(),
    })
}

pub fn with_event_replay() -> HydrationFeature {
    HydrationFeature::EventReplay
}

/// A route enum the router provider's paths are checked against.
pub trait RouteTable: Routable {
    /// True for the catch-all route, which matches paths the app never declared.
    fn is_fallback(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub providers: Vec<Provider>,
}

/// The provider list collapsed into one slot per provider kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub change_detection: ChangeDetection,
    pub router: RouterProvider,
    pub hydration: Option<HydrationProvider>,
}

impl AppConfig {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    pub fn has(&self, kind: ProviderKind) -> bool {
        self.providers.iter().any(|p| p.kind() == kind)
    }

    /// Checks the provider list against the route enum `R` and collapses it.
    pub fn resolve<R>(&self) -> Result<ResolvedConfig, ConfigError>
    where
        R: RouteTable,
        <R as FromStr>::Err: fmt::Display,
    {
        let mut change_detection = None;
        let mut router = None;
        let mut hydration = None;

        for provider in &self.providers {
            match provider {
                Provider::ChangeDetection(cd) => {
                    set_once(&mut change_detection, *cd, ProviderKind::ChangeDetection)?
                }
                Provider::Router(r) => {
                    validate_routes::<R>(&r.routes)?;
                    set_once(&mut router, r.clone(), ProviderKind::Router)?
                }
                Provider::ClientHydration(h) => {
                    let mut seen = HashSet::new();
                    for feature in &h.features {
                        if !seen.insert(*feature) {
                            return Err(ConfigError::DuplicateHydrationFeature(*feature));
                        }
                    }
                    set_once(&mut hydration, h.clone(), ProviderKind::ClientHydration)?
                }
            }
        }

        Ok(ResolvedConfig {
            change_detection: change_detection.unwrap_or_default(),
            router: router.ok_or(ConfigError::MissingRouter)?,
            hydration,
        })
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, kind: ProviderKind) -> Result<(), ConfigError> {
    if slot.is_some() {
        return Err(ConfigError::DuplicateProvider(kind));
    }
    *slot = Some(value);
    Ok(())
}

fn validate_routes<R>(routes: &[String]) -> Result<(), ConfigError>
where
    R: RouteTable,
    <R as FromStr>::Err: fmt::Display,
{
    if routes.is_empty() {
        return Err(ConfigError::EmptyRouteTable);
    }

    let mut seen = HashSet::new();
    for path in routes {
        if !path.starts_with('/') {
            return Err(ConfigError::InvalidRoutePath {
                path: path.clone(),
                reason: "path must start with `/`".to_string(),
            });
        }
        let route = R::from_str(path).map_err(|e| ConfigError::InvalidRoutePath {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        if route.is_fallback() {
            return Err(ConfigError::InvalidRoutePath {
                path: path.clone(),
                reason: "only matches the catch-all route".to_string(),
            });
        }
        if route.to_string() != *path {
            return Err(ConfigError::InvalidRoutePath {
                path: path.clone(),
                reason: format!("not canonical, the route renders as `{}`", route),
            });
        }
        if !seen.insert(path.as_str()) {
            return Err(ConfigError::DuplicateRoute(path.clone()));
        }
    }
    Ok(())
}
