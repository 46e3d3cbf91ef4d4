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

use thiserror::Error;

pub type CcgResult<T> = Result<T, CcgError>;

/// All the expected ways a category, a derivation or a command could be invalid.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum CcgError {
    /// When brackets in a category string do not pair up.
    #[error("Mismatched brackets in category `{category}`")]
    MismatchedBrackets {
        category: String,
    },
    /// When a slash or a pair of brackets has nothing on one side.
    #[error("Empty category in `{category}`")]
    EmptyCategory {
        category: String,
    },
    /// When a feature is opened with `[` but not closed with `]`.
    #[error("Unterminated feature in category `{category}`")]
    UnterminatedFeature {
        category: String,
    },
    /// When a multi-valued feature has a token that isn't `key=value`.
    #[error("Invalid multi-valued feature `{feature}` in category `{category}`")]
    InvalidFeature {
        category: String,
        feature: String,
    },
    /// When a category is nested beyond the parser's recursion bound.
    #[error("Category `{category}` is nested more than {limit} levels deep")]
    CategoryTooDeep {
        category: String,
        limit: usize,
    },
    /// When the AUTO parser meets a token it cannot use at that point.
    #[error("Unexpected token `{found}` at position {position}, expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: String,
        expected: &'static str,
    },
    /// When an AUTO line ends in the middle of a record.
    #[error("Derivation ended unexpectedly, expected {expected}")]
    UnexpectedEnd {
        expected: &'static str,
    },
    /// When a non-terminal record declares a different number of children than it has.
    #[error("`{category}` declares {declared} children but has {found}")]
    ArityMismatch {
        category: String,
        declared: usize,
        found: usize,
    },
    /// When tokens remain after the root record of an AUTO line.
    #[error("Trailing token `{found}` at position {position}")]
    TrailingToken {
        position: usize,
        found: String,
    },
    /// When a derivation is nested beyond the parser's recursion bound.
    #[error("Derivation is nested more than {limit} levels deep")]
    DerivationTooDeep {
        limit: usize,
    },
    /// When a batch ends with a name line but no derivation line.
    #[error("`{name}` has no derivation")]
    MissingDerivation {
        name: String,
    },
    /// When saving a treebank that contains a node with more than two children.
    #[error("Derivation {position} `{name}` is not a valid CCG tree")]
    IllFormedDerivation {
        position: usize,
        name: String,
    },
    /// When a treebank file cannot be read or written.
    #[error("Could not access `{path}`: {message}")]
    Io {
        path: String,
        message: String,
    },
    #[error("Unknown grammar `{name}`, expected `english` or `japanese`")]
    UnknownGrammar {
        name: String,
    },
    /// When a command is neither a directive, an AUTO line nor a pair of categories.
    #[error("Expected a directive, an AUTO derivation or a pair of categories")]
    UnknownCommand,
}
