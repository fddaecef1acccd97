use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::Config;
use crate::cookies::CookieStore;
use crate::error::{LocaleError, Result};
use crate::identity::IdentityProvider;
use crate::keys;

const MERGE_PATCH: &str = "application/merge-patch+json";

/// Full-page reload primitive. Invoked once the cookie, preference, and
/// session writes have all succeeded; the host decides what a reload means.
pub trait Navigator: Send + Sync {
    fn reload(&self);
}

/// Applies a locale change to the cookie store, the signed-in user's
/// persisted preference, and the current server session, in that order,
/// then reloads the page.
///
/// Every collaborator is injected: the `client` is the host's authenticated
/// transport and is expected to attach its own auth headers. The coordinator
/// keeps no state between calls.
pub struct LocaleChangeCoordinator {
    client: Client,
    config: Config,
    cookies: Arc<dyn CookieStore>,
    identity: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
}

impl LocaleChangeCoordinator {
    pub fn new(
        client: Client,
        config: Config,
        cookies: Arc<dyn CookieStore>,
        identity: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            config,
            cookies,
            identity,
            navigator,
        }
    }

    /// Merge-patches the user's stored preferences. Keys are rewritten to
    /// the API's wire names (see `keys`); the payload is not retained.
    pub async fn update_persisted_preference(
        &self,
        username: &str,
        preferences: &Map<String, Value>,
    ) -> Result<()> {
        let body = keys::to_api_object(preferences);
        let url = self
            .config
            .endpoint(&format!("/api/user/v1/preferences/{username}"));
        debug!(%url, username, "updating persisted locale preference");

        let response = self
            .client
            .patch(url.clone())
            // set before .json(), which only fills Content-Type when absent
            .header(CONTENT_TYPE, MERGE_PATCH)
            .json(&body)
            .send()
            .await
            .map_err(|source| LocaleError::Transport {
                url: url.to_string(),
                source,
            })?;

        check_status(&url, response)
    }

    /// Tells the session endpoint to switch the current session's language.
    pub async fn set_session_language(&self, language_code: &str) -> Result<()> {
        let url = self.config.endpoint("/i18n/setlang/");
        debug!(%url, language_code, "setting session language");

        let response = self
            .client
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .form(&[("language", language_code)])
            .send()
            .await
            .map_err(|source| LocaleError::Transport {
                url: url.to_string(),
                source,
            })?;

        check_status(&url, response)
    }

    /// Changes the locale everywhere it is tracked, then reloads.
    ///
    /// Steps, each awaited before the next: write the locale cookie
    /// (unconditional), persist the preference for the signed-in user if
    /// there is one, notify the session endpoint, reload. If a server call
    /// fails the error propagates and the reload is skipped; the cookie is
    /// not rolled back, so local and server state can disagree until the
    /// next successful change.
    pub async fn change_user_session_language(&self, language_code: &str) -> Result<()> {
        info!(language_code, "changing session language");

        self.cookies
            .set(&self.config.language_preference_cookie_name, language_code);

        if let Some(user) = self.identity.authenticated_user() {
            let mut preferences = Map::new();
            preferences.insert(
                keys::PREF_LANG.to_string(),
                Value::String(language_code.to_string()),
            );
            self.update_persisted_preference(&user.username, &preferences)
                .await?;
        }

        self.set_session_language(language_code).await?;

        self.navigator.reload();
        Ok(())
    }
}

fn check_status(url: &Url, response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(LocaleError::RemoteRejection {
            url: url.to_string(),
            status,
        })
    }
}
