//  Library for inspecting CCG derivations.
// Copyright (C) 2018 to 2019 Charles Johnson
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! # Inspecting Combinatory Categorial Grammar derivations
//! Derivations of CCGbank-style treebanks are written in the AUTO bracket
//! notation, one sentence per line. This crate parses them into trees and
//! checks every binary node against an explicit set of combinatory rules,
//! reporting the nodes whose category no rule licenses.
//!
//! Categories are parsed from strings such as `(S[dcl]\NP)/NP`. Features in
//! square brackets are compared loosely: an unspecified feature, a variable
//! (`X`, `X1`, ...) or the wildcard `nb` is compatible with anything.
//!
//! # Examples
//!
//! ```
//! use ccg::{auto, Category, Grammar};
//!
//! let grammar = Grammar::english();
//!
//! // Ask which categories two constituents combine into
//! let verb: Category = "(S[dcl]\\NP)/NP".parse().unwrap();
//! let object: Category = "NP".parse().unwrap();
//! let results = grammar.derive(&verb, &object);
//! assert_eq!(results[0].0, "forward application");
//! assert_eq!(results[0].1.to_string(), "S[dcl]\\NP");
//!
//! // Check a whole derivation
//! let tree = auto::parse("(<T N 0 2> (<L N/N JJ JJ Black N/N>) (<L N NN NN Monday N>) )").unwrap();
//! assert!(grammar.check(&tree).is_empty());
//!
//! // Retag a leaf so that the parent is no longer derivable
//! let mut tree = tree;
//! if let ccg::Node::NonTerminal(root) = &mut tree.root {
//!     root.children[1].set_category("PP");
//! }
//! assert_eq!(grammar.check(&tree), vec!["No rule combining N/N and PP into N".to_string()]);
//! ```

/// Parsing and writing the AUTO bracket notation.
pub mod auto;

/// Categories, their parsing and their structural operations.
mod category;

/// The combinatory rules.
pub mod combinators;

/// The errors that inputs and commands could contain.
mod errors;

/// Features of atomic categories.
mod feature;

/// Rule sets and the derivation validator.
mod grammar;

// Trait for logging.
mod logging;

/// The command interpreter behind the interactive shell.
mod session;

/// Named batches of derivations.
mod treebank;

/// Derivation trees.
mod tree;

pub use category::{Category, Slash, MAX_NESTING};
pub use combinators::Combinator;
pub use errors::{CcgError, CcgResult};
pub use feature::{Feature, WILDCARD};
pub use grammar::{Grammar, Language, Rule};
pub use logging::Logger;
pub use session::Session;
pub use tree::{DerivationTree, NonTerminal, Node, Terminal};
pub use treebank::{NamedTree, Treebank};
