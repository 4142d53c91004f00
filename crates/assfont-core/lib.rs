//! # assfont-core
//!
//! Font usage analysis and embedding codec for ASS (Advanced `SubStation`
//! Alpha) subtitle scripts. Determines, per declared font, the exact set of
//! characters a renderer will draw, and transcodes binary font data into the
//! ASCII-safe inline form ASS uses to embed resources in a text file.
//!
//! ## Features
//!
//! - **Font attribution**: walks dialogue text with inline override tags and
//!   attributes every rendered character to the font that will draw it,
//!   including transient `\fn` overrides and `\p` drawing-mode exclusion
//! - **Style table**: extracts `Style:` font declarations with per-line
//!   error recovery
//! - **UU codec**: the 3-byte/4-char offset-33 scheme used by the `[Fonts]`
//!   section, plus section build/embed/inspect helpers
//! - **Graceful recovery**: malformed subtitle content never fails a scan;
//!   only I/O errors propagate
//!
//! ## Quick Start
//!
//! ```rust
//! use assfont_core::analysis::FontUsageAnalyzer;
//!
//! let script = r#"
//! [V4+ Styles]
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hi!
//! "#;
//!
//! let usage = FontUsageAnalyzer::new(script).analyze();
//! let arial = usage.get("Arial").expect("Arial referenced by dialogue");
//! assert!(arial.chars().contains(&'H'));
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod codec;
pub mod errors;
pub mod parser;
pub mod utils;

pub use analysis::{FontUsage, FontUsageAnalyzer, FontUsageMap};
pub use codec::{estimate_decoded_len, uu_encode, EmbeddedFontInfo};
pub use errors::CoreError;
pub use parser::{DialogueEvent, Style, StyleTable};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias using [`CoreError`]
pub type Result<T> = core::result::Result<T, CoreError>;
