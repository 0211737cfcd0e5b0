//! Infrastructure layer
//!
//! Owns the expensive, long-lived resources. The parser is built once per run
//! and handed to the services that need it.

pub mod lexicon;
pub mod parser;

pub use lexicon::Lexicon;
pub use parser::{DependencyRole, ParsedSentence, RuleBasedParser, SyntacticParser, Token};
