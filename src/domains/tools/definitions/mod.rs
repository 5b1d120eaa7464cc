//! Tool definitions module.
//!
//! This module exports all available tool definitions, one file per
//! WordPress resource family, plus the shared normalization and envelope
//! helpers.

pub mod acf;
pub mod common;
pub mod normalize;
pub mod wc;
pub mod wp;

pub use acf::{GetAcfFieldsTool, ListAcfContentFieldsTool, UpdateAcfFieldsTool};
pub use wc::{
    WcGetProductTool, WcGetVariationTool, WcListProductsTool, WcListVariationsTool,
    WcSearchProductsTool,
};
pub use wp::{
    WpGetMediaTool, WpGetPostTool, WpGetUserTool, WpListCategoriesTool, WpListCommentsTool,
    WpListMediaTool, WpListPluginsTool, WpListPostsTool, WpListTagsTool, WpListUsersTool,
    WpSearchPostsTool, WpSqlQueryTool,
};
