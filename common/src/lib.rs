//! Domain core of the SaberAngola document workflow.

pub mod catalog;
pub mod changelog;
pub mod config;
pub mod dashboard;
pub mod entitlement;
pub mod form;
pub mod guide;
pub mod jobs;
pub mod landing;
pub mod model;
pub mod profile;
pub mod requests;
pub mod route;
pub mod schema;
pub mod storage;
pub mod studio;
