//! Suffix automata over byte strings.
//!
//! A suffix automaton is the minimal deterministic automaton recognising
//! every factor (substring) of a string. It is built online, one symbol at
//! a time, and for a string of length `m ≥ 2` never holds more than
//! `2m − 1` states or `3m − 4` transitions.
//!
//! ```rust
//! use liblevelancestor::suffix::SuffixAutomaton;
//!
//! let sam = SuffixAutomaton::from_text("abcbc");
//! assert!(sam.contains_factor("bcb"));
//! assert!(!sam.contains_factor("cc"));
//! assert!(sam.is_suffix("cbc"));
//! assert!(!sam.is_suffix("abc"));
//! ```

mod automaton;

pub use automaton::{State, StateId, SuffixAutomaton};
