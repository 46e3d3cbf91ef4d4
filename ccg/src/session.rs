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

use crate::{
    auto,
    category::Category,
    errors::{CcgError, CcgResult},
    grammar::{Grammar, Language},
    logging::{silent_logger, terminal_logger, Logger},
    treebank::Treebank,
};
use slog::{info, warn};
use std::fs;

/// Interprets the commands of the interactive shell against a grammar and a
/// loaded treebank.
///
/// ```
/// use ccg::Session;
///
/// let mut session = Session::silent();
/// assert_eq!(session.execute("S/NP NP"), "forward application: S");
/// assert_eq!(session.execute(":grammar japanese"), "Using the Japanese grammar");
/// ```
pub struct Session {
    grammar: Grammar,
    treebank: Treebank,
    logger: slog::Logger,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for Session {
    fn logger(&mut self) -> &mut slog::Logger {
        &mut self.logger
    }
}

impl Session {
    /// English grammar, empty treebank, log records on stderr.
    pub fn new() -> Self {
        Self::with_logger(terminal_logger())
    }

    /// Discards log records.
    pub fn silent() -> Self {
        Self::with_logger(silent_logger())
    }

    pub fn with_logger(logger: slog::Logger) -> Self {
        Self {
            grammar: Grammar::english(),
            treebank: Treebank::default(),
            logger,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn treebank(&self) -> &Treebank {
        &self.treebank
    }

    pub fn set_language(&mut self, language: Language) {
        info!(self.logger(), "Switched grammar"; "language" => %language);
        self.grammar = language.into();
    }

    /// Runs one command and renders its outcome, errors included.
    pub fn execute(&mut self, command: &str) -> String {
        self.run(command.trim()).unwrap_or_else(|error| error.to_string())
    }

    fn run(&mut self, command: &str) -> CcgResult<String> {
        if command.is_empty() {
            return Ok(String::new());
        }
        if command.starts_with("(<") {
            return Ok(auto::parse(command)?.check(&self.grammar).join("\n"));
        }
        let mut words = command.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(":grammar"), Some(name), None) => {
                self.set_language(name.parse()?);
                Ok(format!("Using the {} grammar", self.grammar.language()))
            },
            (Some(":load"), Some(path), None) => self.load(path),
            (Some(":save"), Some(path), None) => self.save(path),
            (Some(":check"), None, None) => Ok(self.check()),
            (Some(left), Some(right), None) if !left.starts_with(':') => {
                self.derive(left, right)
            },
            _ => Err(CcgError::UnknownCommand),
        }
    }

    fn derive(&self, left: &str, right: &str) -> CcgResult<String> {
        let left: Category = left.parse()?;
        let right: Category = right.parse()?;
        Ok(self
            .grammar
            .derive(&left, &right)
            .into_iter()
            .map(|(rule, result)| format!("{}: {}", rule, result))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Replaces the treebank with the batch file at `path`.
    pub fn load(&mut self, path: &str) -> CcgResult<String> {
        let text = fs::read_to_string(path).map_err(|error| CcgError::Io {
            path: path.into(),
            message: error.to_string(),
        })?;
        self.treebank = Treebank::load(&text);
        let loaded = self.treebank.len();
        let rejected = self.treebank.rejected.len();
        info!(self.logger(), "Loaded treebank"; "path" => path, "derivations" => loaded);
        let mut report = vec![format!("Loaded {} derivations", loaded)];
        for (name, error) in &self.treebank.rejected {
            report.push(format!("{}: {}", name, error));
        }
        if rejected > 0 {
            warn!(self.logger, "Rejected derivations"; "count" => rejected);
        }
        Ok(report.join("\n"))
    }

    pub fn save(&mut self, path: &str) -> CcgResult<String> {
        let text = self.treebank.save().map_err(|error| {
            warn!(self.logger, "Refused to save"; "path" => path);
            error
        })?;
        fs::write(path, text).map_err(|error| CcgError::Io {
            path: path.into(),
            message: error.to_string(),
        })?;
        let saved = self.treebank.len();
        info!(self.logger(), "Saved treebank"; "path" => path, "derivations" => saved);
        Ok(format!("Saved {} derivations", saved))
    }

    /// One line per derivation the grammar doesn't license.
    fn check(&self) -> String {
        self.treebank
            .check(&self.grammar)
            .into_iter()
            .filter(|(_, diagnostics)| !diagnostics.is_empty())
            .flat_map(|(name, diagnostics)| {
                diagnostics.into_iter().map(move |diagnostic| format!("{}: {}", name, diagnostic))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
