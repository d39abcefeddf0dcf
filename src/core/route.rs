//! # Routes
//!
//! Two full-screen views. The dashboard carries the composer text handed over
//! from the landing page, if there was any; it is never addressable by path.
//!
//! ```text
//! "/"          → Landing
//! "/dashboard" → Dashboard { initial_input: None }
//! anything else → Landing (logged)
//! ```

use log::warn;

pub const LANDING_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Dashboard { initial_input: Option<String> },
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => LANDING_PATH,
            Route::Dashboard { .. } => DASHBOARD_PATH,
        }
    }

    /// Resolve a path typed on the command line or in config.
    ///
    /// A direct visit to the dashboard never has a payload.
    pub fn from_path(path: &str) -> Route {
        let normalized = path.trim().trim_end_matches('/');
        match normalized {
            "" => Route::Landing,
            DASHBOARD_PATH => Route::Dashboard {
                initial_input: None,
            },
            _ => {
                warn!("Unknown route {:?}, falling back to {}", path, LANDING_PATH);
                Route::Landing
            }
        }
    }

    /// Where the composer's text takes the user.
    ///
    /// Blank text still goes to the dashboard, just without a payload.
    pub fn get_started(user_input: &str) -> Route {
        let initial_input = (!user_input.trim().is_empty()).then(|| user_input.to_string());
        Route::Dashboard { initial_input }
    }

    pub fn initial_input(&self) -> Option<&str> {
        match self {
            Route::Dashboard { initial_input } => initial_input.as_deref(),
            Route::Landing => None,
        }
    }
}
