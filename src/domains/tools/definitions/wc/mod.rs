//! WooCommerce tool definitions: products and product variations.

pub mod products;
pub mod variations;

pub use products::{WcGetProductTool, WcListProductsTool, WcSearchProductsTool};
pub use variations::{WcGetVariationTool, WcListVariationsTool};
