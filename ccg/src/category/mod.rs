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

/// Recursive descent over the category mini-language.
mod parser;

pub use self::parser::MAX_NESTING;
use crate::{errors::CcgError, feature::Feature};
use std::{fmt, str::FromStr};

/// Atomic bases that are punctuation despite being alphabetic.
const PUNCTUATION_BASES: [&str; 4] = ["LRB", "RRB", "LQU", "RQU"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slash {
    /// `/`, seeks its argument to the right.
    Forward,
    /// `\`, seeks its argument to the left.
    Backward,
}

impl fmt::Display for Slash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "/",
            Self::Backward => "\\",
        })
    }
}

/// A CCG category such as `NP`, `S[dcl]` or `(S[dcl]\NP)/NP`.
///
/// `PartialEq` is strict structural equality. The looser compatibility that
/// combinators test arguments with is [`Category::matches`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Atomic {
        base: String,
        feature: Feature,
    },
    /// `left` is the result and `right` the argument of the functor.
    Functor {
        left: Box<Category>,
        slash: Slash,
        right: Box<Category>,
    },
}

impl FromStr for Category {
    type Err = CcgError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parser::parse_category(source)
    }
}

impl Category {
    /// Parses a category string. Every call yields a fresh value.
    pub fn parse(source: &str) -> Result<Self, CcgError> {
        source.parse()
    }

    pub fn atomic(base: impl Into<String>, feature: Feature) -> Self {
        Self::Atomic {
            base: base.into(),
            feature,
        }
    }

    pub fn functor(left: Self, slash: Slash, right: Self) -> Self {
        Self::Functor {
            left: Box::new(left),
            slash,
            right: Box::new(right),
        }
    }

    /// `left/right`
    pub fn forward(left: Self, right: Self) -> Self {
        Self::functor(left, Slash::Forward, right)
    }

    /// `left\right`
    pub fn backward(left: Self, right: Self) -> Self {
        Self::functor(left, Slash::Backward, right)
    }

    pub fn is_functor(&self) -> bool {
        matches!(self, Self::Functor { .. })
    }

    pub fn slash(&self) -> Option<Slash> {
        match self {
            Self::Functor {
                slash,
                ..
            } => Some(*slash),
            Self::Atomic {
                ..
            } => None,
        }
    }

    /// The result and argument of a functor with the given slash.
    pub fn split(&self, wanted: Slash) -> Option<(&Self, &Self)> {
        match self {
            Self::Functor {
                left,
                slash,
                right,
            } if *slash == wanted => Some((&**left, &**right)),
            _ => None,
        }
    }

    /// The category reached by following `left` through `depth` functors.
    pub fn spine(&self, depth: usize) -> Option<&Self> {
        match (depth, self) {
            (0, _) => Some(self),
            (
                _,
                Self::Functor {
                    left,
                    ..
                },
            ) => left.spine(depth - 1),
            (
                _,
                Self::Atomic {
                    ..
                },
            ) => None,
        }
    }

    /// A functor whose result and argument are the same category, like `(S\NP)\(S\NP)`.
    pub fn is_modifier(&self) -> bool {
        match self {
            Self::Functor {
                left,
                right,
                ..
            } => left == right,
            Self::Atomic {
                ..
            } => false,
        }
    }

    pub fn is_punct(&self) -> bool {
        match self {
            Self::Atomic {
                base,
                ..
            } => {
                !base.chars().all(|c| c.is_ascii_alphabetic())
                    || PUNCTUATION_BASES.contains(&base.as_str())
            },
            Self::Functor {
                ..
            } => false,
        }
    }

    /// Structural compatibility, letting unspecified, variable and wildcard features through.
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Atomic {
                    base,
                    feature,
                },
                Self::Atomic {
                    base: other_base,
                    feature: other_feature,
                },
            ) => base == other_base && feature.matches(other_feature),
            (
                Self::Functor {
                    left,
                    slash,
                    right,
                },
                Self::Functor {
                    left: other_left,
                    slash: other_slash,
                    right: other_right,
                },
            ) => slash == other_slash && left.matches(other_left) && right.matches(other_right),
            _ => false,
        }
    }

    /// The feature that reconciles the two categories. For functors the first
    /// success wins, trying the results before the arguments.
    pub fn unification(&self, other: &Self) -> Option<Feature> {
        match (self, other) {
            (
                Self::Atomic {
                    base,
                    feature,
                },
                Self::Atomic {
                    base: other_base,
                    feature: other_feature,
                },
            ) if base == other_base => feature.unify(other_feature),
            (
                Self::Functor {
                    left,
                    slash,
                    right,
                },
                Self::Functor {
                    left: other_left,
                    slash: other_slash,
                    right: other_right,
                },
            ) if slash == other_slash => left
                .unification(other_left)
                .or_else(|| right.unification(other_right)),
            _ => None,
        }
    }

    /// A copy with every variable feature replaced by `feature`.
    pub fn insert(&self, feature: &Feature) -> Self {
        match self {
            Self::Atomic {
                base,
                feature: own,
            } => Self::atomic(
                base.clone(),
                if own.is_variable() {
                    feature.clone()
                } else {
                    own.clone()
                },
            ),
            Self::Functor {
                left,
                slash,
                right,
            } => Self::functor(left.insert(feature), *slash, right.insert(feature)),
        }
    }

    /// Materialises `template` with the feature unifying `a` and `b`. When they
    /// don't unify `template` is returned unresolved rather than rejected.
    pub fn unify(template: &Self, a: &Self, b: &Self) -> Self {
        match a.unification(b) {
            Some(feature) => template.insert(&feature),
            None => template.clone(),
        }
    }

    /// Replaces the bottom-most leaf of the left spine of `functor` with
    /// `result`, keeping every slash and argument along the way, e.g.
    /// `compose(U, ((X\Y)/Z)\W)` is `((U\Y)/Z)\W`.
    pub fn compose(result: &Self, functor: &Self) -> Self {
        match functor {
            Self::Functor {
                left,
                slash,
                right,
            } => Self::Functor {
                left: Box::new(Self::compose(result, left)),
                slash: *slash,
                right: right.clone(),
            },
            _ => result.clone(),
        }
    }
}

fn write_argument(f: &mut fmt::Formatter<'_>, cat: &Category) -> fmt::Result {
    if cat.is_functor() {
        write!(f, "({})", cat)
    } else {
        write!(f, "{}", cat)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic {
                base,
                feature,
            } => {
                if feature.is_empty() {
                    f.write_str(base)
                } else {
                    write!(f, "{}[{}]", base, feature)
                }
            },
            Self::Functor {
                left,
                slash,
                right,
            } => {
                write_argument(f, left)?;
                write!(f, "{}", slash)?;
                write_argument(f, right)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Category;
    use crate::feature::Feature;

    fn cat(source: &str) -> Category {
        source.parse().unwrap()
    }

    #[test]
    fn renders_nested_functors_in_brackets() {
        assert_eq!(cat("((S[dcl]\\NP)/NP)").to_string(), "(S[dcl]\\NP)/NP");
        assert_eq!(cat("S/(S\\NP)").to_string(), "S/(S\\NP)");
        assert_eq!(cat("NP[case=nc,mod=nm]").to_string(), "NP[case=nc,mod=nm]");
    }

    #[test]
    fn modifiers() {
        assert!(cat("(S\\NP)\\(S\\NP)").is_modifier());
        assert!(cat("N/N").is_modifier());
        assert!(!cat("S[dcl]/S").is_modifier());
        assert!(!cat("N").is_modifier());
    }

    #[test]
    fn punctuation() {
        for punct in &[",", ".", ";", ":", "LRB", "RQU", "NP2"] {
            assert!(cat(punct).is_punct(), "{}", punct);
        }
        for word in &["NP", "conj", "S[dcl]", "S/S"] {
            assert!(!cat(word).is_punct(), "{}", word);
        }
    }

    #[test]
    fn matching_is_looser_than_equality() {
        assert!(cat("S[dcl]\\NP").matches(&cat("S\\NP")));
        assert!(cat("S[X]").matches(&cat("S[ng]")));
        assert_ne!(cat("S[dcl]\\NP"), cat("S\\NP"));
        assert!(!cat("S[dcl]").matches(&cat("S[em]")));
        assert!(!cat("S/NP").matches(&cat("S\\NP")));
        assert!(!cat("NP").matches(&cat("N")));
    }

    #[test]
    fn functor_unification_tries_results_first() {
        assert_eq!(
            cat("S[dcl]/NP[nb]").unification(&cat("S/NP[obj]")),
            Some(Feature::from("dcl"))
        );
        assert_eq!(
            cat("S/NP[X]").unification(&cat("S/NP[obj]")),
            Some(Feature::default())
        );
        assert_eq!(
            cat("S[dcl]/NP[X]").unification(&cat("S[em]/NP[obj]")),
            Some(Feature::from("obj"))
        );
        assert_eq!(cat("S/NP").unification(&cat("S\\NP")), None);
    }

    #[test]
    fn insertion_fills_variables_only() {
        assert_eq!(
            cat("(S[X]\\NP)/S[X]").insert(&Feature::from("dcl")),
            cat("(S[dcl]\\NP)/S[dcl]")
        );
        assert_eq!(cat("S[ng]\\NP").insert(&Feature::from("dcl")), cat("S[ng]\\NP"));
    }

    #[test]
    fn unify_falls_back_to_the_template() {
        let template = cat("S[X]\\NP");
        assert_eq!(
            Category::unify(&template, &cat("S[dcl]"), &cat("S[X]")),
            cat("S[dcl]\\NP")
        );
        assert_eq!(
            Category::unify(&template, &cat("S[dcl]"), &cat("S[em]")),
            template
        );
    }

    #[test]
    fn compose_replaces_the_bottom_of_the_spine() {
        let functor = cat("((X\\Y)/Z)\\W");
        assert_eq!(Category::compose(&cat("U"), &functor), cat("((U\\Y)/Z)\\W"));
        assert_eq!(
            Category::compose(&cat("U"), &cat("((S\\NP)/Z)\\(A/B)")),
            cat("((U\\NP)/Z)\\(A/B)")
        );
        assert_eq!(
            Category::compose(&cat("T"), &cat("((S\\NP)\\NP)/NP")),
            cat("((T\\NP)\\NP)/NP")
        );
        assert_eq!(Category::compose(&cat("U/V"), &cat("X/Y")), cat("(U/V)/Y"));
    }

    #[test]
    fn spine() {
        let functor = cat("((X\\Y)/Z)\\W");
        assert_eq!(functor.spine(0), Some(&functor));
        assert_eq!(functor.spine(3), Some(&cat("X")));
        assert_eq!(functor.spine(4), None);
    }
}
