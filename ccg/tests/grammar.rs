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
extern crate test_ccg;

use ccg::{auto, DerivationTree, Node};
use test_ccg::{no_it_wasnt, ENGLISH, JAPANESE};

fn leaf(category: &str, word: &str, index: usize) -> Node {
    Node::terminal(category, "XX", "XX", word, index)
}

#[test]
fn fixture_is_licensed() {
    assert_eq!(ENGLISH.check(&no_it_wasnt()), Vec::<String>::new());
    assert_eq!(no_it_wasnt().check(&ENGLISH), Vec::<String>::new());
}

#[test]
fn retagged_leaf_names_its_parent() {
    let mut tree = no_it_wasnt();
    if let Node::NonTerminal(root) = &mut tree.root {
        if let Node::NonTerminal(sentence) = &mut root.children[0] {
            if let Node::NonTerminal(clause) = &mut sentence.children[1] {
                if let Node::NonTerminal(core) = &mut clause.children[1] {
                    assert_eq!(core.children[0].category(), "NP");
                    core.children[0].set_category("PP");
                }
            }
        }
    }
    assert_eq!(
        ENGLISH.check(&tree),
        vec!["No rule combining PP and S[dcl]\\NP into S[dcl]".to_string()]
    );
}

#[test]
fn three_children() {
    let tree = DerivationTree::new(Node::non_terminal(
        "NP",
        vec![leaf("NP", "cats", 0), leaf("conj", "and", 1), leaf("NP", "dogs", 2)],
    ));
    assert_eq!(
        ENGLISH.check(&tree),
        vec!["There is a node with more than two children".to_string()]
    );
    assert!(!tree.is_well_formed());
}

#[test]
fn parallel_check_agrees() {
    let mut tree = no_it_wasnt();
    tree.root.push_child(leaf(".", ".", 8));
    assert_eq!(ENGLISH.par_check(&tree), ENGLISH.check(&tree));
    assert_eq!(JAPANESE.par_check(&tree), JAPANESE.check(&tree));
}

#[test]
fn japanese_fixture_lacks_punctuation_rules() {
    let diagnostics = JAPANESE.check(&no_it_wasnt());
    assert!(diagnostics.contains(&"No rule combining S[dcl] and . into S[dcl]".to_string()));
}

#[test]
fn english_rules() {
    assert_derives!(ENGLISH, "NP", "S[dcl]\\NP", "S[dcl]");
    assert_derives!(ENGLISH, "conj", "NP\\NP", "NP");
    assert_derives!(ENGLISH, ",", "S[ng]\\NP", "(S\\NP)\\(S\\NP)");
    assert_derives!(ENGLISH, "S[dcl]", "S[em]\\S[em]", "S[dcl]");
    assert_no_derivation!(ENGLISH, "X/Y", "Y\\Z", "X\\Z");
    assert_no_derivation!(ENGLISH, "NP", "NP", "NP");
}

#[test]
fn japanese_rules() {
    assert_derives!(JAPANESE, "NP[case=nc,mod=nm]", "NP[case=X1,mod=nm]", "NP[case=nc,mod=nm]");
    assert_derives!(JAPANESE, "X/Y", "((Y\\Z)/W)\\U", "((X\\Z)/W)\\U");
    assert_derives!(JAPANESE, "((S\\NP)/NP)/PP", "T\\S", "((T\\NP)/NP)/PP");
    assert_no_derivation!(JAPANESE, ",", "NP", "NP");
}

#[test]
fn composition_into_a_functor_argument_keeps_the_spine() {
    assert_derives!(JAPANESE, "((S\\NP)\\NP)/NP", "S\\(S\\NP)", "((S\\NP)\\NP)/NP");
    assert_no_derivation!(JAPANESE, "((S\\NP)\\NP)/NP", "S\\(S\\NP)", "(S\\NP)/NP");
    assert_derives!(JAPANESE, "X/(Y/V)", "((Y/V)\\Z)/W", "((X/V)\\Z)/W");
}

#[test]
fn auto_lines_round_trip_through_the_validator() {
    let line = auto::stringify(&no_it_wasnt());
    assert!(ENGLISH.check(&auto::parse(&line).unwrap()).is_empty());
}
