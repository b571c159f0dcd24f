//! Application-level navigation effects.
//!
//! Business logic never touches screens directly. It emits `MainEffect`s on
//! an [`EffectChannel`](crate::ui::mvi::EffectChannel), and whichever
//! navigation host is attached performs the transition.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ui::mvi::{Effect, EffectReceiver};

/// Opaque screen identifier.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Arc<str>);

impl Route {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route({})", self.0)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainEffect {
    Navigate { route: Route },
}

impl Effect for MainEffect {}

/// Performs screen transitions. Implemented by the presentation host.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Navigator that records visited routes.
#[derive(Debug, Default)]
pub struct BackStack {
    routes: Vec<Route>,
}

impl BackStack {
    pub fn new(root: Route) -> Self {
        Self { routes: vec![root] }
    }

    pub fn current(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn pop(&mut self) -> Option<Route> {
        if self.routes.len() > 1 {
            self.routes.pop()
        } else {
            None
        }
    }
}

impl Navigator for BackStack {
    fn navigate(&mut self, route: Route) {
        // Navigating to the current screen is a no-op.
        if self.current() == Some(&route) {
            return;
        }
        self.routes.push(route);
    }
}

/// Feed navigation effects into `navigator` until the observer is replaced
/// or the channel is gone.
pub async fn run_navigation<N: Navigator>(
    mut effects: EffectReceiver<MainEffect>,
    navigator: &mut N,
) {
    while let Some(effect) = effects.recv().await {
        match effect {
            MainEffect::Navigate { route } => {
                tracing::debug!(%route, "navigating");
                navigator.navigate(route);
            }
        }
    }
}
