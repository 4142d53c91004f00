//! Record extraction from ASS script text
//!
//! Only the two record kinds the font analysis needs are parsed: `Style:`
//! declarations and `Dialogue:` events, both recognized with line-anchored
//! matches. Everything else in the file (section headers, script info,
//! comments) passes through unexamined. Malformed records are dropped where
//! they occur; extraction itself never fails.

pub mod dialogue;
pub mod styles;

pub use dialogue::{parse_dialogues, DialogueEvent};
pub use styles::{Style, StyleTable};
