use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use super::choices::ChoiceSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderPolicy {
    Alphabetical,
    Manual,
}

impl OrderPolicy {
    pub const ALL: [OrderPolicy; 2] = [OrderPolicy::Alphabetical, OrderPolicy::Manual];

    pub fn label(self) -> &'static str {
        match self {
            OrderPolicy::Alphabetical => "Display choices Alphabetical",
            OrderPolicy::Manual => "Manual",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderPolicy::Alphabetical => "Alphabetical",
            OrderPolicy::Manual => "Manual",
        }
    }

    /// Display sequence for `choices`. The set itself is never touched.
    pub fn apply(self, choices: &ChoiceSet) -> Vec<String> {
        let mut ordered = choices.as_slice().to_vec();
        if self == OrderPolicy::Alphabetical {
            ordered.sort_by(|a, b| locale_compare(a, b));
        }
        ordered
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderPolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "alphabetical" => Ok(OrderPolicy::Alphabetical),
            "manual" => Ok(OrderPolicy::Manual),
            other => Err(format!("unknown order '{other}'")),
        }
    }
}

/// Display sequence for an optional policy; an unset order shows the
/// stored sequence.
pub fn ordered_view(choices: &ChoiceSet, policy: Option<OrderPolicy>) -> Vec<String> {
    policy
        .unwrap_or(OrderPolicy::Manual)
        .apply(choices)
}

/// Collation for the alphabetical view. Letters compare by their base form
/// first, so "Éire" sorts among the e's and "apple" next to "Apple". Accents
/// break ties before case does, and the exact text settles the rest.
fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowered(a).cmp(lowered(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    lowered(text).filter(|ch| !is_combining_mark(*ch))
}

fn lowered(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}
