//! Core WordPress tool definitions: posts, taxonomies, users, comments,
//! plugins, media, and the raw SQL endpoint.

pub mod comments;
pub mod media;
pub mod plugins;
pub mod posts;
pub mod sql;
pub mod taxonomies;
pub mod users;

pub use comments::WpListCommentsTool;
pub use media::{WpGetMediaTool, WpListMediaTool};
pub use plugins::WpListPluginsTool;
pub use posts::{WpGetPostTool, WpListPostsTool, WpSearchPostsTool};
pub use sql::WpSqlQueryTool;
pub use taxonomies::{WpListCategoriesTool, WpListTagsTool};
pub use users::{WpGetUserTool, WpListUsersTool};
