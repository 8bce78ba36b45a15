//! Route table and access guard.
//!
//! ARCHITECTURE
//! ============
//! `route` is the domain model of the URL space: parse a location into an
//! `AppRoute`, render one back into a path, and report its access policy.
//! `guard` turns (session, policy, location) into a navigation decision.
//! Neither touches the DOM, so both are shared by the browser and the CLI.

pub mod guard;
pub mod route;

pub use guard::{Access, GuardDecision};
pub use route::AppRoute;
