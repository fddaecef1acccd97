//! Client-side locale switching for an LMS-backed web application.
//!
//! Changing the locale touches three places that must agree: the locale
//! cookie, the signed-in user's persisted preference, and the current server
//! session. [`LocaleChangeCoordinator`] applies all three in order and then
//! asks the host to reload the page.
//!
//! The HTTP transport, cookie store, identity lookup, and reload primitive
//! are all injected, so the crate holds no ambient state of its own.
//!
//! ```ignore
//! use std::sync::Arc;
//! use locale_switch::{
//!     Config, LmsCookieJar, LocaleChangeCoordinator, StaticIdentity,
//! };
//!
//! let config = Config::from_env()?;
//! let jar = Arc::new(reqwest::cookie::Jar::default());
//! let client = reqwest::Client::builder()
//!     .cookie_provider(jar.clone())
//!     .build()?;
//!
//! let coordinator = LocaleChangeCoordinator::new(
//!     client,
//!     config.clone(),
//!     Arc::new(LmsCookieJar::new(jar, config.lms_base_url.clone())),
//!     Arc::new(StaticIdentity::signed_out()),
//!     Arc::new(my_navigator),
//! );
//!
//! coordinator.change_user_session_language("es").await?;
//! ```

mod config;
mod cookies;
mod coordinator;
mod error;
mod identity;
mod keys;

pub use config::{Config, ConfigError};
pub use cookies::{CookieStore, LmsCookieJar};
pub use coordinator::{LocaleChangeCoordinator, Navigator};
pub use error::{LocaleError, Result};
pub use identity::{AuthenticatedUser, IdentityProvider, StaticIdentity};
pub use keys::PREF_LANG;
