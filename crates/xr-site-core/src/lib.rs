//! Behaviour for the site's server-rendered pages: header state, the
//! navigation drawer's scroll lock, event filters and the per-page router.
//! Everything talks to the page through [`dom::Dom`], so it runs unchanged
//! against the browser and against the in-memory `FakeDom` (feature
//! `fake-dom`).

pub mod config;
pub mod context;
pub mod datetime;
pub mod dom;
pub mod embed;
#[cfg(any(test, feature = "fake-dom"))]
pub mod fake;
pub mod filter;
pub mod header;
pub mod modal;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod site;
