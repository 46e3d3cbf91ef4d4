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

//! The AUTO bracket notation of CCGbank. A terminal is written
//! `(<L cat tag1 tag2 word cat>)` and a non-terminal
//! `(<T cat head arity> child ... )`, all on one line. A batch alternates a
//! name line with an AUTO line.

use crate::{
    errors::{CcgError, CcgResult},
    tree::{DerivationTree, Node},
};
use log::{debug, trace};

/// How deep derivations may nest before parsing gives up.
pub const MAX_DEPTH: usize = 512;

const TERMINAL: &str = "(<L";
const NON_TERMINAL: &str = "(<T";
const CLOSER: &str = ")";

pub fn stringify(tree: &DerivationTree) -> String {
    stringify_node(&tree.root)
}

fn stringify_node(node: &Node) -> String {
    match node {
        Node::Terminal(terminal) => format!(
            "(<L {} {} {} {} {}>)",
            terminal.category, terminal.tag1, terminal.tag2, terminal.word, terminal.category
        ),
        Node::NonTerminal(non_terminal) => {
            let children: Vec<String> = non_terminal.children.iter().map(stringify_node).collect();
            format!(
                "(<T {} 0 {}> {} )",
                non_terminal.category,
                non_terminal.children.len(),
                children.join(" ")
            )
        },
    }
}

/// Parses one AUTO line. Leaves are numbered from 0 in the order they appear.
pub fn parse(line: &str) -> CcgResult<DerivationTree> {
    trace!("parse({})", line);
    let mut parser = Parser {
        tokens: line.split_whitespace().collect(),
        position: 0,
        leaves: 0,
    };
    let root = parser.node(0)?;
    match parser.tokens.get(parser.position) {
        Some(token) => Err(CcgError::TrailingToken {
            position: parser.position,
            found: (*token).into(),
        }),
        None => Ok(DerivationTree::new(root)),
    }
}

struct Parser<'a> {
    tokens: Vec<&'a str>,
    /// Index of the next token.
    position: usize,
    leaves: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    fn next(&mut self, expected: &'static str) -> CcgResult<&'a str> {
        let token = self.peek().ok_or(CcgError::UnexpectedEnd {
            expected,
        })?;
        self.position += 1;
        Ok(token)
    }

    fn unexpected(&self, found: &str, expected: &'static str) -> CcgError {
        CcgError::UnexpectedToken {
            position: self.position - 1,
            found: found.into(),
            expected,
        }
    }

    fn node(&mut self, depth: usize) -> CcgResult<Node> {
        if depth > MAX_DEPTH {
            return Err(CcgError::DerivationTooDeep {
                limit: MAX_DEPTH,
            });
        }
        match self.next("`(<L` or `(<T`")? {
            TERMINAL => self.terminal(),
            NON_TERMINAL => self.non_terminal(depth),
            token => Err(self.unexpected(token, "`(<L` or `(<T`")),
        }
    }

    fn terminal(&mut self) -> CcgResult<Node> {
        let category = self.next("a category")?;
        let tag1 = self.next("a tag")?;
        let tag2 = self.next("a tag")?;
        let word = self.next("a word")?;
        let closer = self.next("a category closed by `>)`")?;
        if !closer.ends_with(">)") {
            return Err(self.unexpected(closer, "a category closed by `>)`"));
        }
        let index = self.leaves;
        self.leaves += 1;
        Ok(Node::terminal(category, tag1, tag2, word, index))
    }

    fn non_terminal(&mut self, depth: usize) -> CcgResult<Node> {
        let category = self.next("a category")?;
        let head = self.next("a head flag")?;
        if head != "0" && head != "1" {
            return Err(self.unexpected(head, "a head flag of `0` or `1`"));
        }
        let arity_token = self.next("an arity such as `2>`")?;
        let declared = arity_token
            .strip_suffix('>')
            .and_then(|arity| arity.parse::<usize>().ok())
            .ok_or_else(|| self.unexpected(arity_token, "an arity such as `2>`"))?;
        let mut children = vec![];
        loop {
            match self.peek() {
                Some(CLOSER) => {
                    self.position += 1;
                    break;
                },
                Some(TERMINAL) | Some(NON_TERMINAL) => children.push(self.node(depth + 1)?),
                Some(token) => {
                    self.position += 1;
                    return Err(self.unexpected(token, "a child or `)`"));
                },
                None => {
                    return Err(CcgError::UnexpectedEnd {
                        expected: "a child or `)`",
                    })
                },
            }
        }
        if children.len() == declared {
            Ok(Node::non_terminal(category, children))
        } else {
            Err(CcgError::ArityMismatch {
                category: category.into(),
                declared,
                found: children.len(),
            })
        }
    }
}

/// Splits a batch into `(name, derivation)` pairs. A line that fails to parse
/// only spoils its own entry.
pub fn parse_batch(text: &str) -> Vec<(String, CcgResult<DerivationTree>)> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().map_or(false, |line| line.trim().is_empty()) {
        lines.pop();
    }
    let batch: Vec<_> = lines
        .chunks(2)
        .map(|pair| match pair {
            [name, line] => (name.to_string(), parse(line)),
            _ => {
                let name = pair.concat();
                let missing = CcgError::MissingDerivation {
                    name: name.clone(),
                };
                (name, Err(missing))
            },
        })
        .collect();
    debug!("parse_batch: {} derivations", batch.len());
    batch
}

/// Renders `name\nAUTO\n` for every derivation.
pub fn stringify_batch<'a>(trees: impl IntoIterator<Item = (&'a str, &'a DerivationTree)>) -> String {
    trees
        .into_iter()
        .map(|(name, tree)| format!("{}\n{}\n", name, stringify(tree)))
        .collect()
}
