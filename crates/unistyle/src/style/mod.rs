//! Styles and the range-remapping engine behind them.
//!
//! This module provides the core transcoding primitives:
//!
//! - [`CodePointRange`]: An inclusive block of scalar values
//! - [`RangeMapping`]: A plain range paired with an equally long styled range
//! - [`Style`]: A named table of mappings with encode/decode operations
//! - [`StyleBuilder`]: Fluent construction with hole handling and validation
//! - [`StyleError`]: Errors from construction, lookup and transcoding
//!
//! Styles are plain data. Every preset runs through the same conversion
//! routine; only the table differs.

mod builder;
mod error;
mod range;
#[allow(clippy::module_inception)]
mod style;
mod transcode;

pub use builder::StyleBuilder;
pub use error::StyleError;
pub use range::{CodePointRange, RangeMapping};
pub use style::Style;
