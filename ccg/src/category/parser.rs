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

use super::{Category, Slash};
use crate::{
    errors::{CcgError, CcgResult},
    feature::Feature,
};
use log::trace;

/// How many slashes deep a category may nest before parsing gives up.
pub const MAX_NESTING: usize = 64;

pub fn parse_category(source: &str) -> CcgResult<Category> {
    trace!("parse_category({})", source);
    parse_nested(source, source, 0)
}

fn parse_nested(whole: &str, cat: &str, depth: usize) -> CcgResult<Category> {
    if depth > MAX_NESTING {
        return Err(CcgError::CategoryTooDeep {
            category: whole.into(),
            limit: MAX_NESTING,
        });
    }
    let cat = drop_brackets(whole, cat)?;
    if cat.is_empty() {
        return Err(CcgError::EmptyCategory {
            category: whole.into(),
        });
    }
    match find_non_nested_slash(whole, cat)? {
        Some((index, slash)) => {
            let left = parse_nested(whole, &cat[..index], depth + 1)?;
            let right = parse_nested(whole, &cat[index + 1..], depth + 1)?;
            Ok(Category::functor(left, slash, right))
        },
        None => parse_atomic(whole, cat),
    }
}

/// Strips every bracket pair that encloses the whole of `cat`, so `(A)/(B)` is left alone.
fn drop_brackets<'a>(whole: &str, mut cat: &'a str) -> CcgResult<&'a str> {
    while cat.starts_with('(')
        && cat.ends_with(')')
        && find_closing_bracket(whole, cat)? == cat.len() - 1
    {
        cat = &cat[1..cat.len() - 1];
    }
    Ok(cat)
}

fn find_closing_bracket(whole: &str, cat: &str) -> CcgResult<usize> {
    let mut open_brackets = 0usize;
    for (index, letter) in cat.char_indices() {
        match letter {
            '(' => open_brackets += 1,
            ')' => open_brackets = open_brackets.saturating_sub(1),
            _ => {},
        }
        if open_brackets == 0 {
            return Ok(index);
        }
    }
    Err(CcgError::MismatchedBrackets {
        category: whole.into(),
    })
}

/// The first slash outside any brackets, so unbracketed chains group to the right.
/// The whole string is still scanned to catch unbalanced brackets.
fn find_non_nested_slash(whole: &str, cat: &str) -> CcgResult<Option<(usize, Slash)>> {
    let mismatched = || CcgError::MismatchedBrackets {
        category: whole.into(),
    };
    let mut open_brackets = 0usize;
    let mut in_feature = false;
    let mut found = None;
    for (index, letter) in cat.char_indices() {
        match letter {
            '[' => in_feature = true,
            ']' => in_feature = false,
            _ if in_feature => {},
            '(' => open_brackets += 1,
            ')' => {
                open_brackets = open_brackets.checked_sub(1).ok_or_else(mismatched)?;
            },
            '/' if open_brackets == 0 && found.is_none() => {
                found = Some((index, Slash::Forward))
            },
            '\\' if open_brackets == 0 && found.is_none() => {
                found = Some((index, Slash::Backward))
            },
            _ => {},
        }
    }
    if open_brackets == 0 {
        Ok(found)
    } else {
        Err(mismatched())
    }
}

fn parse_atomic(whole: &str, cat: &str) -> CcgResult<Category> {
    let (base, feature) = match cat.find('[') {
        Some(index) => {
            if !cat.ends_with(']') {
                return Err(CcgError::UnterminatedFeature {
                    category: whole.into(),
                });
            }
            (&cat[..index], parse_feature(whole, &cat[index + 1..cat.len() - 1])?)
        },
        None => (cat, Feature::default()),
    };
    if base.is_empty() {
        Err(CcgError::EmptyCategory {
            category: whole.into(),
        })
    } else if base.contains(|c: char| c == '(' || c == ')') {
        Err(CcgError::MismatchedBrackets {
            category: whole.into(),
        })
    } else {
        Ok(Category::atomic(base, feature))
    }
}

fn parse_feature(whole: &str, feature: &str) -> CcgResult<Feature> {
    let values: Vec<&str> = feature.split(',').collect();
    if values.len() == 1 {
        return Ok(Feature::Single(feature.into()));
    }
    values
        .into_iter()
        .map(|value| {
            let mut key_value = value.split('=');
            match (key_value.next(), key_value.next(), key_value.next()) {
                (Some(key), Some(value), None) => Ok((key.into(), value.into())),
                _ => Err(CcgError::InvalidFeature {
                    category: whole.into(),
                    feature: feature.into(),
                }),
            }
        })
        .collect::<CcgResult<Vec<_>>>()
        .map(Feature::Multi)
}
