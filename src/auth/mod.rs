//! Authentication flows layered on the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bootstrap` runs the startup identity check once. `oauth` handles the
//! provider's `#session_id=` redirect. `credentials` covers password login
//! and registration forms.

pub mod bootstrap;
pub mod credentials;
pub mod oauth;

pub use bootstrap::AuthBootstrap;
pub use oauth::{Navigator, OAuthCallback, OAuthPhase};
