use std::sync::Arc;

use reqwest::Url;
use reqwest::cookie::Jar;

/// Where the locale cookie gets written. Hosts with their own cookie
/// handling implement this; everyone else can use [`LmsCookieJar`].
pub trait CookieStore: Send + Sync {
    fn set(&self, name: &str, value: &str);
}

/// Cookie store backed by a reqwest cookie jar, scoped to the LMS origin.
///
/// Share the same jar with the HTTP client (`cookie_provider`) so requests
/// issued after the write already carry the new cookie.
pub struct LmsCookieJar {
    jar: Arc<Jar>,
    origin: Url,
}

impl LmsCookieJar {
    pub fn new(jar: Arc<Jar>, origin: Url) -> Self {
        Self { jar, origin }
    }
}

impl CookieStore for LmsCookieJar {
    fn set(&self, name: &str, value: &str) {
        self.jar.add_cookie_str(&format!("{name}={value}"), &self.origin);
    }
}
