pub mod category;
pub mod document;
pub mod field;
pub mod profile;
pub mod release;
pub mod template;
