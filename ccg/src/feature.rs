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

use std::fmt;

/// Value of a single-valued feature that matches any other value.
pub const WILDCARD: &str = "nb";

/// A morphosyntactic annotation of an atomic category, the `dcl` of `S[dcl]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// A bare value. The empty string means the feature is unspecified.
    Single(String),
    /// Ordered `key=value` pairs, compared position by position.
    Multi(Vec<(String, String)>),
}

impl Default for Feature {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl<S: Into<String>> From<S> for Feature {
    fn from(value: S) -> Self {
        Self::Single(value.into())
    }
}

/// `X` on its own or `X` followed by digits.
pub fn is_variable(value: &str) -> bool {
    value
        .strip_prefix('X')
        .map_or(false, |digits| digits.chars().all(|c| c.is_ascii_digit()))
}

/// Values that reconcile with anything in a single-valued feature.
fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || is_variable(value) || value == WILDCARD
}

impl Feature {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_empty(),
            Self::Multi(items) => items.is_empty(),
        }
    }

    /// Whether the feature holds a unification variable anywhere.
    pub fn is_variable(&self) -> bool {
        match self {
            Self::Single(value) => is_variable(value),
            Self::Multi(items) => items.iter().any(|(_, value)| is_variable(value)),
        }
    }

    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Single(this), Self::Single(that)) => {
                is_unconstrained(this) || is_unconstrained(that) || this == that
            },
            (Self::Multi(these), Self::Multi(those)) => {
                these.len() == those.len()
                    && these.iter().zip(those).all(|((key, value), (other_key, other_value))| {
                        key == other_key
                            && (is_variable(value)
                                || is_variable(other_value)
                                || value == other_value)
                    })
            },
            _ => false,
        }
    }

    /// The most specific feature consistent with both sides, if there is one.
    pub fn unify(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Single(this), Self::Single(that)) => {
                if is_unconstrained(this) {
                    Some(other.clone())
                } else if is_unconstrained(that) || this == that {
                    Some(self.clone())
                } else {
                    None
                }
            },
            (Self::Multi(these), Self::Multi(those)) => {
                if these.len() != those.len() {
                    return None;
                }
                these
                    .iter()
                    .zip(those)
                    .map(|(pair, other_pair)| unify_pair(pair, other_pair))
                    .collect::<Option<Vec<_>>>()
                    .map(Self::Multi)
            },
            _ => None,
        }
    }
}

fn unify_pair(
    (key, value): &(String, String),
    (other_key, other_value): &(String, String),
) -> Option<(String, String)> {
    if key != other_key {
        None
    } else if is_variable(value) {
        Some((other_key.clone(), other_value.clone()))
    } else if is_variable(other_value) || value == other_value {
        Some((key.clone(), value.clone()))
    } else {
        None
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => f.write_str(value),
            Self::Multi(items) => {
                for (i, (key, value)) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_variable, Feature};

    fn multi(items: &[(&str, &str)]) -> Feature {
        Feature::Multi(
            items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        )
    }

    #[test]
    fn variables() {
        assert!(is_variable("X"));
        assert!(is_variable("X12"));
        assert!(!is_variable("X1a"));
        assert!(!is_variable("dcl"));
        assert!(!is_variable(""));
    }

    #[test]
    fn unspecified_and_wildcard_match_anything() {
        let dcl = Feature::from("dcl");
        assert!(Feature::default().matches(&dcl));
        assert!(dcl.matches(&Feature::default()));
        assert!(Feature::from("nb").matches(&dcl));
        assert!(Feature::from("X").matches(&dcl));
        assert!(!Feature::from("em").matches(&dcl));
    }

    #[test]
    fn single_unification_prefers_the_specific_side() {
        let dcl = Feature::from("dcl");
        assert_eq!(Feature::from("X").unify(&dcl), Some(dcl.clone()));
        assert_eq!(dcl.unify(&Feature::default()), Some(dcl.clone()));
        assert_eq!(dcl.unify(&Feature::from("ng")), None);
    }

    #[test]
    fn multi_valued_features_compare_positionally() {
        let concrete = multi(&[("case", "nc"), ("mod", "nm")]);
        let variable = multi(&[("case", "X1"), ("mod", "nm")]);
        let swapped = multi(&[("mod", "nm"), ("case", "nc")]);
        assert!(concrete.matches(&concrete));
        assert!(variable.matches(&concrete));
        assert!(!concrete.matches(&swapped));
        assert!(!concrete.matches(&multi(&[("case", "nc")])));
        assert_eq!(variable.unify(&concrete), Some(concrete.clone()));
        assert!(variable.is_variable());
        assert!(!concrete.is_variable());
    }

    #[test]
    fn single_and_multi_never_meet() {
        let concrete = multi(&[("case", "nc"), ("mod", "nm")]);
        assert!(!Feature::default().matches(&concrete));
        assert_eq!(Feature::from("X").unify(&concrete), None);
    }

    #[test]
    fn displays_as_written() {
        assert_eq!(multi(&[("case", "nc"), ("mod", "nm")]).to_string(), "case=nc,mod=nm");
        assert_eq!(Feature::from("dcl").to_string(), "dcl");
    }
}
