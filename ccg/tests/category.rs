/*  Library for inspecting CCG derivations.
    Copyright (C) 2018 to 2019 Charles Johnson

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program. If not, see <http://www.gnu.org/licenses/>.
*/
#[macro_use]
extern crate proptest;
#[macro_use]
extern crate assert_matches;

use ccg::{Category, CcgError, Feature, MAX_NESTING};
use test_ccg::{arb_category, arb_feature, cat};

proptest! {
    // Rendering a category and parsing it back gives the same category.
    #[test]
    fn round_trip(category in arb_category()) {
        let rendered = category.to_string();
        prop_assert_eq!(Category::parse(&rendered), Ok(category));
    }
    // Every category is compatible with itself, multi-valued features included.
    #[test]
    fn matches_itself(category in arb_category()) {
        let parsed = cat(&category.to_string());
        prop_assert!(parsed.matches(&parsed));
    }
    #[test]
    fn features_match_themselves(feature in arb_feature()) {
        prop_assert!(feature.matches(&feature));
        prop_assert!(feature.unify(&feature).is_some());
    }
    // Parsing never panics, whatever the input.
    #[test]
    fn arbitrary_input(source in "[A-Za-z/\\\\()\\[\\],=]{0,16}") {
        let _ = Category::parse(&source);
    }
}

#[test]
fn every_parse_is_fresh() {
    let first = cat("(S[dcl]\\NP)/NP");
    let second = cat("(S[dcl]\\NP)/NP");
    assert_eq!(first, second);
    assert!(!std::ptr::eq(&first, &second));
}

#[test]
fn transitive_verb() {
    match cat("(S[dcl]\\NP)/NP") {
        Category::Functor {
            left,
            right,
            ..
        } => {
            assert_eq!(left.to_string(), "S[dcl]\\NP");
            assert_eq!(*right, Category::atomic("NP", Feature::default()));
        },
        atomic => panic!("{} is not a functor", atomic),
    }
}

#[test]
fn parse_errors() {
    assert_matches!(Category::parse("(S[dcl]\\NP"), Err(CcgError::MismatchedBrackets { .. }));
    assert_matches!(Category::parse("S[dcl"), Err(CcgError::UnterminatedFeature { .. }));
    assert_matches!(Category::parse("NP[a=b,c]"), Err(CcgError::InvalidFeature { .. }));
    assert_matches!(Category::parse("NP/"), Err(CcgError::EmptyCategory { .. }));
    let deep = format!("{}NP{}", "(".repeat(MAX_NESTING + 2), ")".repeat(MAX_NESTING + 2));
    assert_eq!(Category::parse(&deep), Ok(cat("NP")));
}

#[test]
fn wildcards_and_variables() {
    assert!(cat("NP[nb]").matches(&cat("NP[obj]")));
    assert!(cat("S[X1]\\NP").matches(&cat("S[dcl]\\NP")));
    assert!(!cat("S[nb]").matches(&cat("S[a=b,c=d]")));
    assert_eq!(
        Category::unify(&cat("(S[X]\\NP)\\(S[X]\\NP)"), &cat("S[X]"), &cat("S[pss]")),
        cat("(S[pss]\\NP)\\(S[pss]\\NP)")
    );
}
