// Navigation contract - the site's route paths
// `/`, `/Hotels`, `/Hotels/{id}`, `/Search`, `/login`, plus the modeled
// hotel-not-found fallback for a detail route whose id is unknown.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Hotels,
    HotelDetail(u32),
    Search,
    Login,
}

impl Route {
    /// The path this route renders to
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Hotels => "/Hotels".to_string(),
            Route::HotelDetail(id) => format!("/Hotels/{}", id),
            Route::Search => "/Search".to_string(),
            Route::Login => "/login".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Hotels => "Hotel Rooms",
            Route::HotelDetail(_) => "Hotel Details",
            Route::Search => "Search",
            Route::Login => "Login",
        }
    }

    /// Recognize a path, ignoring any query string and a trailing slash.
    /// Detail ids must be numeric; anything else is not a route.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split('?').next().unwrap_or(path);
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match trimmed {
            "/" => Some(Route::Home),
            "/Hotels" => Some(Route::Hotels),
            "/Search" => Some(Route::Search),
            "/login" => Some(Route::Login),
            _ => {
                let id = trimmed.strip_prefix("/Hotels/")?;
                id.parse().ok().map(Route::HotelDetail)
            }
        }
    }
}

// ============================================================================
// NOT-FOUND FALLBACK
// ============================================================================

/// The fallback view rendered when a detail route names an unknown hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundPage {
    pub title: String,
    pub message: String,
    pub back_label: String,
    pub back_path: String,
}

impl NotFoundPage {
    pub fn hotel() -> Self {
        NotFoundPage {
            title: "Hotel Not Found".to_string(),
            message: "We couldn't find the hotel you're looking for.".to_string(),
            back_label: "Back to Hotels".to_string(),
            back_path: Route::Hotels.path(),
        }
    }
}
