//! # Host services
//!
//! - `api`: the `/api` scope. The host implements no endpoint; every request
//!   under it answers `404` with a JSON body.
//! - `assets`: the embedded web client, with `index.html` as fallback so
//!   client-side routes survive a reload.

pub mod api;
pub mod assets;
