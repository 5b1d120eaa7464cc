//! Advanced Custom Fields tool definitions.

pub mod fields;

pub use fields::{GetAcfFieldsTool, ListAcfContentFieldsTool, UpdateAcfFieldsTool};
