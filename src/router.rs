//! Wizard routes and the navigation guard that loads the questionnaire

use crate::session::SessionStore;
use log::{debug, error};

pub const PREVIEW_MODE: &str = "preview";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Question,
    End,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Question => "/question",
            Route::End => "/end",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(Route::Welcome),
            "/question" => Some(Route::Question),
            "/end" => Some(Route::End),
            _ => None,
        }
    }
}

/// Query parameters a wizard route is entered with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
    pub id: Option<String>,
    pub mode: Option<String>,
}

impl RouteQuery {
    pub fn new(id: Option<String>, mode: Option<String>) -> Self {
        Self { id, mode }
    }

    pub fn is_preview(&self) -> bool {
        self.mode.as_deref() == Some(PREVIEW_MODE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
}

/// Initializes the session store before any wizard route is entered.
///
/// Runs initialization at most once per successful load and never blocks
/// navigation: a failed load is logged and the route renders empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationGuard;

impl NavigationGuard {
    pub fn new() -> Self {
        Self
    }

    pub async fn before_each(&self, store: &mut SessionStore, to: Route, query: &RouteQuery) -> Navigation {
        if store.is_initialized() {
            return Navigation::Proceed;
        }

        debug!("Entering {} with an uninitialized questionnaire", to.path());
        let initialized = store
            .initialize(query.id.as_deref(), query.is_preview())
            .await;
        if !initialized {
            error!("Failed to initialize questionnaire");
        }

        Navigation::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in [Route::Welcome, Route::Question, Route::End] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/unknown"), None);
    }

    #[test]
    fn test_only_preview_mode_enables_preview() {
        assert!(RouteQuery::new(None, Some("preview".to_string())).is_preview());
        assert!(!RouteQuery::new(None, Some("PREVIEW".to_string())).is_preview());
        assert!(!RouteQuery::new(Some("Q1".to_string()), None).is_preview());
    }
}
