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

//! Combinatory rules. Each takes the categories of a left and a right
//! constituent and returns every category they may combine into, which is
//! empty when the rule doesn't apply. Templates are always materialised with
//! [`Category::unify`], so a functor that is a modifier passes its argument's
//! features through.

use crate::{
    category::{Category, Slash},
    feature::Feature,
};
use lazy_static::lazy_static;

pub type Combinator = fn(&Category, &Category) -> Vec<Category>;

fn atom(base: &str, feature: &str) -> Category {
    Category::atomic(base, Feature::from(feature))
}

lazy_static! {
    static ref NP: Category = atom("NP", "");
    static ref S_DCL: Category = atom("S", "dcl");
    static ref S_EM_MODIFIER: Category = Category::backward(atom("S", "em"), atom("S", "em"));
    static ref COMMA: Category = atom(",", "");
    static ref CONJ: Category = atom("conj", "");
    static ref NP_MODIFIER: Category = Category::backward(atom("NP", ""), atom("NP", ""));
    static ref GERUND_OR_PASSIVE_VP: [Category; 2] = [
        Category::backward(atom("S", "ng"), atom("NP", "")),
        Category::backward(atom("S", "pss"), atom("NP", "")),
    ];
    static ref SENTENCE_MODIFIER: Category = Category::forward(atom("S", "dcl"), atom("S", "dcl"));
    static ref VP: Category = Category::backward(atom("S", ""), atom("NP", ""));
    static ref VP_POST_MODIFIER: Category = Category::backward(VP.clone(), VP.clone());
    static ref VP_PRE_MODIFIER: Category = Category::forward(VP.clone(), VP.clone());
}

/// Atomic bases that can coordinate the constituent to their right.
const CONJUNCTS: [&str; 3] = [",", ";", "conj"];

/// `X/Y Y --> X`
pub fn forward_application(left: &Category, right: &Category) -> Vec<Category> {
    match left.split(Slash::Forward) {
        Some((result, argument)) if argument.matches(right) => {
            let template = if left.is_modifier() {
                right
            } else {
                result
            };
            vec![Category::unify(template, argument, right)]
        },
        _ => vec![],
    }
}

/// `Y X\Y --> X`
pub fn backward_application(left: &Category, right: &Category) -> Vec<Category> {
    match right.split(Slash::Backward) {
        Some((result, argument)) if argument.matches(left) => {
            let template = if right.is_modifier() {
                left
            } else {
                result
            };
            vec![Category::unify(template, argument, left)]
        },
        _ => vec![],
    }
}

/// `S[dcl] S[em]\S[em] --> S[dcl]`, otherwise backward application.
pub fn english_backward_application(left: &Category, right: &Category) -> Vec<Category> {
    if left.matches(&S_DCL) && right.matches(&S_EM_MODIFIER) {
        vec![S_DCL.clone()]
    } else {
        backward_application(left, right)
    }
}

/// `X/Y Y/Z --> X/Z`
pub fn forward_composition(left: &Category, right: &Category) -> Vec<Category> {
    match (left.split(Slash::Forward), right.split(Slash::Forward)) {
        (Some((x, y)), Some((other_y, z))) if y.matches(other_y) => {
            let template = if left.is_modifier() {
                right.clone()
            } else {
                Category::forward(x.clone(), z.clone())
            };
            vec![Category::unify(&template, y, other_y)]
        },
        _ => vec![],
    }
}

/// `X/Y Z\X --> Z/Y`
pub fn backward_composition(left: &Category, right: &Category) -> Vec<Category> {
    match (left.split(Slash::Forward), right.split(Slash::Backward)) {
        (Some((x, y)), Some((z, other_x))) if x.matches(other_x) => {
            let template = if right.is_modifier() {
                left.clone()
            } else {
                Category::forward(z.clone(), y.clone())
            };
            vec![Category::unify(&template, x, other_x)]
        },
        _ => vec![],
    }
}

/// `X/Y` composed into the left spine of `right`: the functor `depth` steps
/// down the spine must have `slash` and a result matching `Y`. `X` then
/// replaces the bottom of the spine.
fn compose_forward_into_spine(
    left: &Category,
    right: &Category,
    depth: usize,
    slash: Slash,
) -> Vec<Category> {
    let (x, y) = match left.split(Slash::Forward) {
        Some(parts) => parts,
        None => return vec![],
    };
    match right.spine(depth).and_then(|inner| inner.split(slash)) {
        Some((other_y, _)) if y.matches(other_y) => {
            let template = if left.is_modifier() {
                right.clone()
            } else {
                Category::compose(x, right)
            };
            vec![Category::unify(&template, y, other_y)]
        },
        _ => vec![],
    }
}

/// `W\X` composed into the left spine of `left`, the mirror image of
/// [`compose_forward_into_spine`] restricted to backward slashes.
fn compose_backward_into_spine(left: &Category, right: &Category, depth: usize) -> Vec<Category> {
    let (w, x) = match right.split(Slash::Backward) {
        Some(parts) => parts,
        None => return vec![],
    };
    match left.spine(depth).and_then(|inner| inner.split(Slash::Backward)) {
        Some((other_x, _)) if other_x.matches(x) => {
            let template = if right.is_modifier() {
                left.clone()
            } else {
                Category::compose(w, left)
            };
            vec![Category::unify(&template, x, other_x)]
        },
        _ => vec![],
    }
}

/// `X/Y (Y/Z)|W --> (X/Z)|W`
pub fn generalized_forward_composition(left: &Category, right: &Category) -> Vec<Category> {
    compose_forward_into_spine(left, right, 1, Slash::Forward)
}

/// `(X\Y)|Z W\X --> (W\Y)|Z`
pub fn generalized_backward_composition(left: &Category, right: &Category) -> Vec<Category> {
    compose_backward_into_spine(left, right, 1)
}

/// `((X\Y)|Z)|W U\X --> ((U\Y)|Z)|W`
pub fn generalized_backward_composition2(left: &Category, right: &Category) -> Vec<Category> {
    compose_backward_into_spine(left, right, 2)
}

/// `(((X\Y)|Z)|W)|U S\X --> (((S\Y)|Z)|W)|U`
pub fn generalized_backward_composition3(left: &Category, right: &Category) -> Vec<Category> {
    compose_backward_into_spine(left, right, 3)
}

/// `X/Y Y\Z --> X\Z`
pub fn crossed_forward_composition(left: &Category, right: &Category) -> Vec<Category> {
    compose_forward_into_spine(left, right, 0, Slash::Backward)
}

/// `X/Y (Y\Z)|W --> (X\Z)|W`
pub fn crossed_forward_composition1(left: &Category, right: &Category) -> Vec<Category> {
    compose_forward_into_spine(left, right, 1, Slash::Backward)
}

/// `X/Y ((Y\Z)|W)|U --> ((X\Z)|W)|U`
pub fn crossed_forward_composition2(left: &Category, right: &Category) -> Vec<Category> {
    compose_forward_into_spine(left, right, 2, Slash::Backward)
}

/// `PUNCT X --> X` or `X PUNCT --> X`
pub fn remove_punctuation(left: &Category, right: &Category) -> Vec<Category> {
    if left.is_punct() {
        vec![right.clone()]
    } else if right.is_punct() {
        vec![left.clone()]
    } else {
        vec![]
    }
}

/// `, S[ng|pss]\NP --> (S\NP)\(S\NP)`
pub fn comma_vp_to_adverbial(left: &Category, right: &Category) -> Vec<Category> {
    if left.matches(&COMMA) && GERUND_OR_PASSIVE_VP.iter().any(|vp| right.matches(vp)) {
        vec![VP_POST_MODIFIER.clone()]
    } else {
        vec![]
    }
}

/// `, S[dcl]/S[dcl] --> (S\NP)/(S\NP)`
pub fn parenthetical_direct_speech(left: &Category, right: &Category) -> Vec<Category> {
    if left.matches(&COMMA) && right.matches(&SENTENCE_MODIFIER) {
        vec![VP_PRE_MODIFIER.clone()]
    } else {
        vec![]
    }
}

/// `conj X --> X\X` (also after `,` and `;`) and `conj NP\NP --> NP`
pub fn conjunction(left: &Category, right: &Category) -> Vec<Category> {
    let mut results = vec![];
    if let Category::Atomic {
        base,
        ..
    } = left
    {
        if CONJUNCTS.contains(&base.as_str()) && !right.is_punct() {
            results.push(Category::backward(right.clone(), right.clone()));
        }
    }
    if left.matches(&CONJ) && right.matches(&NP_MODIFIER) {
        results.push(NP.clone());
    }
    results
}

/// `X X --> X` for atomic `X`
pub fn conjoin(left: &Category, right: &Category) -> Vec<Category> {
    if left.matches(right) && !left.is_functor() {
        vec![right.clone()]
    } else {
        vec![]
    }
}
