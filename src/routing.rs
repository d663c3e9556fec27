//! Route table and active-link resolution
//!
//! Mirrors the path layout of the original site: five named routes plus a
//! catch-all not-found view. Matching is always exact, never by prefix.

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Stack,
    Projects,
    Contact,
    NotFound,
}

impl Route {
    /// Routes shown in the navigation, in display order
    pub const NAV_LINKS: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Stack,
        Route::Projects,
        Route::Contact,
    ];

    /// Resolve a path to a route; unknown paths land on the 404 view
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Route::Home,
            "/about" => Route::About,
            "/stack" => Route::Stack,
            "/projects" => Route::Projects,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Stack => "/stack",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
            Route::NotFound => "/404",
        }
    }

    /// Label used in navigation and window titles
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Stack => "Stack",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }
}

/// A nav link is highlighted only for the exact route it points at
pub fn is_active(current: Route, link: Route) -> bool {
    current == link
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/about"), Route::About);
        assert_eq!(Route::from_path("/stack"), Route::Stack);
        assert_eq!(Route::from_path("/projects"), Route::Projects);
        assert_eq!(Route::from_path("/contact"), Route::Contact);
    }

    #[test]
    fn test_unknown_paths_fall_through() {
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::NotFound);
        assert_eq!(Route::from_path("/about/"), Route::NotFound);
        assert_eq!(Route::from_path("/projects/1"), Route::NotFound);
    }

    #[test]
    fn test_path_roundtrip() {
        for route in Route::NAV_LINKS {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_exact_active_match() {
        // On /stack, only the Stack link is active
        let active: Vec<Route> = Route::NAV_LINKS
            .into_iter()
            .filter(|link| is_active(Route::Stack, *link))
            .collect();
        assert_eq!(active, vec![Route::Stack]);
    }

    #[test]
    fn test_home_is_not_a_prefix_of_everything() {
        assert!(!is_active(Route::About, Route::Home));
        assert!(!is_active(Route::NotFound, Route::Home));
    }
}
