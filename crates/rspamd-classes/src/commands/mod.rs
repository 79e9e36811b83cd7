//! CLI command implementations for rspamd-classes

mod classify;
mod common;
mod delete;
mod get;
mod set;
mod show;
mod users;

pub use classify::classify;
pub use common::resolve_classes_path;
pub use delete::delete;
pub use get::get;
pub use set::set;
pub use show::show;
pub use users::users;
