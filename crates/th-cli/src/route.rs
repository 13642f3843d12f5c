//! The route table: which view lives behind which path.

/// A top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The game home: current progress and play actions.
    GameHome,
    /// The player's profile.
    UserCenter,
    /// The leaderboard.
    RankingPage,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 3] = [Route::GameHome, Route::UserCenter, Route::RankingPage];

    /// URL path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Self::GameHome => "/",
            Self::UserCenter => "/user",
            Self::RankingPage => "/ranking",
        }
    }

    /// Route name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GameHome => "GameHome",
            Self::UserCenter => "UserCenter",
            Self::RankingPage => "RankingPage",
        }
    }

    /// Resolve a path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::from_path("/"), Some(Route::GameHome));
        assert_eq!(Route::from_path("/user"), Some(Route::UserCenter));
        assert_eq!(Route::from_path("/ranking/"), Some(Route::RankingPage));
    }

    #[test]
    fn unknown_paths() {
        assert_eq!(Route::from_path("/shop"), None);
        assert_eq!(Route::from_path("user"), None);
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Route::RankingPage.to_string(), "RankingPage (/ranking)");
    }
}
