//! Server-rendered rendition of the Beacon and TBD demo fronts.
//!
//! Both sites share one library: the validation and simulated-submission
//! workflow in [`flow`], the per-variant form shapes in [`form`], the page
//! templates, and the HTTP handlers. Each front is its own binary serving
//! its own routes; nothing is persisted and no real backend is called.

pub mod error;
pub mod flow;
pub mod form;
pub mod messages;
pub mod routes;
pub mod template;
pub mod translation;
