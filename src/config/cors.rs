//! CORS Layer Configuration

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer, ExposeHeaders};

use super::CorsSettings;

impl CorsSettings {
    /// True when the origin list contains the `*` wildcard.
    pub fn allows_any_origin(&self) -> bool {
        is_wildcard(&self.origins)
    }

    /// True when any of the origin, method, header or exposed-header lists
    /// contains the `*` wildcard.
    pub fn has_wildcard(&self) -> bool {
        [&self.origins, &self.methods, &self.headers, &self.expose_headers]
            .into_iter()
            .any(|list| is_wildcard(list))
    }

    /// Credentials as sent to browsers: never combined with a wildcard.
    pub fn allows_credentials(&self) -> bool {
        self.credentials && !self.has_wildcard()
    }

    /// Preflight cache lifetime, `None` when negative.
    pub fn max_age_duration(&self) -> Option<Duration> {
        u64::try_from(self.max_age).ok().map(Duration::from_secs)
    }

    /// Create CORS layer from settings.
    ///
    /// A `*` entry in any list allows anything for that list. Other entries
    /// that are not valid header values, methods or header names are
    /// skipped. Credentials are dropped whenever a list is a wildcard.
    pub fn layer(&self) -> CorsLayer {
        let origins: AllowOrigin = if self.allows_any_origin() {
            Any.into()
        } else {
            parse_all::<HeaderValue>(&self.origins).into()
        };
        let methods: AllowMethods = if is_wildcard(&self.methods) {
            Any.into()
        } else {
            parse_all::<Method>(&self.methods).into()
        };
        let headers: AllowHeaders = if is_wildcard(&self.headers) {
            Any.into()
        } else {
            parse_all::<HeaderName>(&self.headers).into()
        };
        let expose: ExposeHeaders = if is_wildcard(&self.expose_headers) {
            Any.into()
        } else {
            parse_all::<HeaderName>(&self.expose_headers).into()
        };

        let mut layer = CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .expose_headers(expose)
            .allow_credentials(self.allows_credentials());

        if let Some(max_age) = self.max_age_duration() {
            layer = layer.max_age(max_age);
        }

        layer
    }
}

fn is_wildcard(items: &[String]) -> bool {
    items.iter().any(|item| item == "*")
}

fn parse_all<T: FromStr>(items: &[String]) -> Vec<T> {
    items.iter().filter_map(|item| item.parse().ok()).collect()
}
