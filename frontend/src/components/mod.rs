pub mod catalog;
pub mod dashboard;
pub mod documents;
pub mod guide;
pub mod landing;
pub mod not_found;
pub mod profile;
pub mod shell;
pub mod studio;
pub mod updates;
