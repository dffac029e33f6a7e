//! Selector Infrastructure
//!
//! Site knowledge lives here as data: predicate rule tables, CSS selector
//! lists and keyword lists. The extraction code iterates these tables in
//! order; a new board layout is supported by adding an entry, not a branch.

use dom_query::Selection;

pub mod content;
pub mod listing;
pub mod media;
pub mod pager;

pub mod utils;

/// A selector rule that tests if a selection matches certain criteria
///
/// Rules are simple predicate functions used to recognize listing rows and
/// other structural elements.
pub type Rule = fn(&Selection) -> bool;

/// True when any rule in `rules` accepts the selection
#[must_use]
pub fn matches_any(sel: &Selection, rules: &[Rule]) -> bool {
    rules.iter().any(|rule| rule(sel))
}
