/*  Testing library for the CCG derivation inspector.
    Copyright (C) 2019 Charles Johnson

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
extern crate lazy_static;

use ccg::{auto, Category, DerivationTree, Feature, Grammar, Slash};
use proptest::prelude::*;

/// CCGbank's derivation of "No , it was n't Black Monday ."
pub const NO_IT_WASNT: &str = "(<T S[dcl] 0 2> \
    (<T S[dcl] 0 2> \
        (<L S/S RB RB No S/S>) \
        (<T S[dcl] 0 2> \
            (<L , , , , ,>) \
            (<T S[dcl] 0 2> \
                (<L NP PRP PRP it NP>) \
                (<T S[dcl]\\NP 0 2> \
                    (<T (S[dcl]\\NP)/NP 0 2> \
                        (<L (S[dcl]\\NP)/NP VBD VBD was (S[dcl]\\NP)/NP>) \
                        (<L (S\\NP)\\(S\\NP) RB RB n't (S\\NP)\\(S\\NP)>) \
                    ) \
                    (<T NP 0 1> \
                        (<T N 0 2> \
                            (<L N/N NNP NNP Black N/N>) \
                            (<L N NNP NNP Monday N>) \
                        ) \
                    ) \
                ) \
            ) \
        ) \
    ) \
    (<L . . . . .>) \
)";

pub const NO_IT_WASNT_WORDS: [&str; 8] = ["No", ",", "it", "was", "n't", "Black", "Monday", "."];

// Saves having to construct the grammars in every test.
lazy_static! {
    pub static ref ENGLISH: Grammar = Grammar::english();
    pub static ref JAPANESE: Grammar = Grammar::japanese();
}

pub fn no_it_wasnt() -> DerivationTree {
    auto::parse(NO_IT_WASNT).unwrap()
}

pub fn cat(source: &str) -> Category {
    source.parse().unwrap()
}

// Checks that some rule of the grammar combines two categories into a third
#[macro_export]
macro_rules! assert_derives {
    ($grammar:expr, $left:expr, $right:expr, $parent:expr) => {
        assert!(
            $grammar.licenses(
                &$crate::cat($left),
                &$crate::cat($right),
                &$crate::cat($parent)
            ),
            "{} {} should derive {}",
            $left,
            $right,
            $parent
        )
    };
}

#[macro_export]
macro_rules! assert_no_derivation {
    ($grammar:expr, $left:expr, $right:expr, $parent:expr) => {
        assert!(
            !$grammar.licenses(
                &$crate::cat($left),
                &$crate::cat($right),
                &$crate::cat($parent)
            ),
            "{} {} should not derive {}",
            $left,
            $right,
            $parent
        )
    };
}

pub fn arb_single_feature() -> impl Strategy<Value = Feature> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{1,3}",
        Just("X".to_string()),
        "X[0-9]{1,2}",
        Just("nb".to_string()),
    ]
    .prop_map(Feature::Single)
}

pub fn arb_multi_feature() -> impl Strategy<Value = Feature> {
    prop::collection::vec(("[a-z]{1,4}", prop_oneof!["[a-z]{1,3}", "X[0-9]?"]), 2..4)
        .prop_map(Feature::Multi)
}

pub fn arb_feature() -> impl Strategy<Value = Feature> {
    prop_oneof![3 => arb_single_feature(), 1 => arb_multi_feature()]
}

pub fn arb_atomic() -> impl Strategy<Value = Category> {
    let base = prop_oneof![
        "[A-Z][A-Za-z]{0,3}",
        Just(",".to_string()),
        Just(".".to_string()),
        Just("conj".to_string()),
    ];
    (base, arb_feature()).prop_map(|(base, feature)| Category::atomic(base, feature))
}

pub fn arb_slash() -> impl Strategy<Value = Slash> {
    prop_oneof![Just(Slash::Forward), Just(Slash::Backward)]
}

pub fn arb_category() -> impl Strategy<Value = Category> {
    arb_atomic().prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), arb_slash(), inner)
            .prop_map(|(left, slash, right)| Category::functor(left, slash, right))
    })
}
