//! Route table.
//!
//! Every screen is addressed by a path, the way the marketplace site
//! addresses its pages. Unknown paths map to `Route::NotFound`.

use std::fmt;

/// Specifying the different routes.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Route {
    Home,
    Onboarding,
    Auth(String),
    FreelancerPortfolio,
    FreelancerDashboard,
    ClientPostJob,
    ClientDashboard,
    NotFound(String),
}

impl Route {
    /// Parse a path. Trailing slashes are ignored.
    ///
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        let segments: Vec<&str> = normalized
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["onboarding"] => Route::Onboarding,
            ["auth", user_type] => Route::Auth(user_type.to_string()),
            ["freelancer", "portfolio"] => Route::FreelancerPortfolio,
            ["freelancer", "dashboard"] => Route::FreelancerDashboard,
            ["client", "post-job"] => Route::ClientPostJob,
            ["client", "dashboard"] => Route::ClientDashboard,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Onboarding => "/onboarding".to_string(),
            Route::Auth(user_type) => format!("/auth/{}", user_type),
            Route::FreelancerPortfolio => "/freelancer/portfolio".to_string(),
            Route::FreelancerDashboard => "/freelancer/dashboard".to_string(),
            Route::ClientPostJob => "/client/post-job".to_string(),
            Route::ClientDashboard => "/client/dashboard".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Freeness",
            Route::Onboarding => "Join Freeness",
            Route::Auth(_) => "Sign in",
            Route::FreelancerPortfolio => "Build your profile",
            Route::FreelancerDashboard => "Freelancer dashboard",
            Route::ClientPostJob => "Post a job",
            Route::ClientDashboard => "Hiring dashboard",
            Route::NotFound(_) => "Page not found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/onboarding"), Route::Onboarding);
        assert_eq!(
            Route::from_path("/auth/freelancer"),
            Route::Auth("freelancer".to_string())
        );
        assert_eq!(Route::from_path("/client/post-job/"), Route::ClientPostJob);
        assert_eq!(
            Route::from_path("/freelancer/dashboard"),
            Route::FreelancerDashboard
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(
            Route::from_path("/pricing"),
            Route::NotFound("/pricing".to_string())
        );
        assert_eq!(
            Route::from_path("/auth"),
            Route::NotFound("/auth".to_string())
        );
        assert_eq!(
            Route::from_path("/auth/client/extra"),
            Route::NotFound("/auth/client/extra".to_string())
        );
        assert_eq!(
            Route::from_path("onboarding-ish"),
            Route::NotFound("onboarding-ish".to_string())
        );
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::Onboarding,
            Route::Auth("client".to_string()),
            Route::FreelancerPortfolio,
            Route::ClientDashboard,
        ] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }
}
