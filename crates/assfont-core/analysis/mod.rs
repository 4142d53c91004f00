//! Analysis passes over extracted script records
//!
//! Currently one pass: font attribution, which decides for every rendered
//! character which declared font will draw it.

pub mod fonts;

pub use fonts::{FontUsage, FontUsageAnalyzer, FontUsageMap};
