//! Client-side routes and the auth guard in front of them.
//!
//! The guard only asks whether a token is stored. It never calls the server;
//! a stale token is caught later when the API answers 403.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Root,
    Signup,
    Signin,
    Dashboard,
    /// Transfer screen for a recipient picked from the user list.
    Send { id: String, name: String },
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Send { .. })
    }

    /// Parse a browser path with optional query string. Unknown paths land on `Root`.
    pub fn from_path(path: &str) -> Route {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        match path.trim_end_matches('/') {
            "" => Route::Root,
            "/signup" => Route::Signup,
            "/signin" => Route::Signin,
            "/dashboard" => Route::Dashboard,
            "/send" => Route::Send {
                id: query_param(query, "id").unwrap_or_default(),
                name: query_param(query, "name").unwrap_or_default(),
            },
            _ => Route::Root,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Signin => "/signin".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Send { id, name } => format!(
                "/send?id={}&name={}",
                urlencoding::encode(id),
                urlencoding::encode(name)
            ),
        }
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            let v = v.replace('+', " ");
            urlencoding::decode(&v)
                .map(|s| s.into_owned())
                .unwrap_or(v)
        })
}

/// Where a navigation to `route` actually ends up.
///
/// `/` picks a home by auth state, the auth pages bounce signed-in users to the
/// dashboard, and protected pages send everyone else to sign-in.
pub fn resolve(route: Route, authenticated: bool) -> Route {
    match route {
        Route::Root | Route::Signup | Route::Signin if authenticated => Route::Dashboard,
        Route::Root => Route::Signin,
        r if r.requires_auth() && !authenticated => Route::Signin,
        r => r,
    }
}
