//! Usage: Infrastructure adapters (filesystem paths, persistence, OS integration).

pub(crate) mod app_paths;
pub(crate) mod login_item;
pub(crate) mod settings;
