// SPDX-License-Identifier: GPL-3.0

/// Identifies a screen of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// List of every Pokémon, root of the navigation stack
    Catalog,
    /// Details of the Pokémon with the given name
    Detail(String),
    /// Pokémon marked as favorite
    Favorites,
}

/// Outcome of closing the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Back {
    /// Screen that was closed
    pub closed: Route,
    /// Screen shown again
    pub revealed: Route,
}

impl Back {
    /// Whether the favorites screen is visible again and must read the stored list
    pub fn reveals_favorites(&self) -> bool {
        self.revealed == Route::Favorites
    }
}

/// Stack of the screens the user went through, the catalog is always at the bottom
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::Catalog],
        }
    }
}

impl Navigator {
    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&Route::Catalog)
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Opens a screen on top of the current one.
    ///
    /// Only the catalog and the favorites link forward: the catalog to any detail or to the
    /// favorites, the favorites to any detail. Returns `false` for any other transition.
    pub fn push(&mut self, route: Route) -> bool {
        let allowed = matches!(
            (self.current(), &route),
            (Route::Catalog, Route::Detail(_) | Route::Favorites)
                | (Route::Favorites, Route::Detail(_))
        );

        if !allowed {
            tracing::debug!(from = ?self.current(), to = ?route, "navigation ignored");
            return false;
        }

        tracing::debug!(?route, depth = self.stack.len() + 1, "navigating");
        self.stack.push(route);
        true
    }

    /// Closes the current screen, the catalog is never closed
    pub fn back(&mut self) -> Option<Back> {
        if !self.can_go_back() {
            return None;
        }

        let closed = self.stack.pop()?;
        Some(Back {
            closed,
            revealed: self.current().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_catalog_without_back() {
        let navigator = Navigator::default();
        assert_eq!(navigator.current(), &Route::Catalog);
        assert!(!navigator.can_go_back());
    }

    #[test]
    fn push_and_pop_follow_stack_order() {
        let mut navigator = Navigator::default();

        assert!(navigator.push(Route::Favorites));
        assert!(navigator.push(Route::Detail(String::from("mew"))));
        assert_eq!(navigator.current(), &Route::Detail(String::from("mew")));

        assert_eq!(
            navigator.back(),
            Some(Back {
                closed: Route::Detail(String::from("mew")),
                revealed: Route::Favorites,
            })
        );
        assert_eq!(navigator.current(), &Route::Favorites);
        assert_eq!(
            navigator.back(),
            Some(Back {
                closed: Route::Favorites,
                revealed: Route::Catalog,
            })
        );
        assert_eq!(navigator.back(), None);
        assert_eq!(navigator.current(), &Route::Catalog);
    }

    #[test]
    fn only_forward_links_are_followed() {
        let mut navigator = Navigator::default();

        assert!(!navigator.push(Route::Catalog));
        assert!(navigator.push(Route::Favorites));
        assert!(!navigator.push(Route::Favorites));
        assert!(!navigator.push(Route::Catalog));
        assert_eq!(navigator.current(), &Route::Favorites);

        assert!(navigator.push(Route::Detail(String::from("abra"))));
        assert!(!navigator.push(Route::Detail(String::from("kadabra"))));
        assert!(!navigator.push(Route::Favorites));

        assert_eq!(
            navigator.back().map(|back| back.closed),
            Some(Route::Detail(String::from("abra")))
        );
        assert_eq!(
            navigator.back().map(|back| back.closed),
            Some(Route::Favorites)
        );
        assert!(!navigator.can_go_back());
    }

    #[test]
    fn only_returning_to_favorites_reveals_them() {
        let mut navigator = Navigator::default();
        navigator.push(Route::Favorites);
        navigator.push(Route::Detail(String::from("mew")));

        assert!(navigator.back().is_some_and(|back| back.reveals_favorites()));
        assert!(navigator.back().is_some_and(|back| !back.reveals_favorites()));

        navigator.push(Route::Detail(String::from("abra")));
        assert!(navigator.back().is_some_and(|back| !back.reveals_favorites()));
    }
}
