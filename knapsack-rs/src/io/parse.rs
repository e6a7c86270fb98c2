//! Parser for the plain-text instance format:
//!
//! ```text
//! <item_count> <capacity>
//! <value_1> <weight_1>
//! ...
//! <value_N> <weight_N>
//! ```
//!
//! Anything after the N-th item line is ignored.

use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::entities::{Instance, Item};
use crate::solvers::dp;

/// Errors that can occur when parsing an instance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("found {found} lines, but {expected} lines are expected")]
    TooFewLines { found: usize, expected: usize },

    #[error("header must contain the item count and capacity, got: {0:?}")]
    InvalidHeader(String),

    #[error("line {line_no} must contain the value and weight of an item, got: {line:?}")]
    InvalidItem { line_no: usize, line: String },

    #[error("capacity {0} is too large to be solved on this platform")]
    CapacityOverflow(u64),

    #[error("the item values sum to more than {}", u64::MAX)]
    ValueOverflow,
}

/// Parses an instance from its plain-text representation.
pub fn parse_instance(content: &str) -> Result<Instance, ParseError> {
    let lines = content.lines().collect_vec();
    if lines.len() < 2 {
        return Err(ParseError::TooFewLines {
            found: lines.len(),
            expected: 2,
        });
    }

    let (n_items, capacity) = parse_pair::<usize, u64>(lines[0])
        .ok_or_else(|| ParseError::InvalidHeader(lines[0].to_string()))?;

    if capacity > dp::MAX_CAPACITY {
        return Err(ParseError::CapacityOverflow(capacity));
    }

    let expected = n_items.saturating_add(1);
    if lines.len() < expected {
        return Err(ParseError::TooFewLines {
            found: lines.len(),
            expected,
        });
    }

    let items = lines[1..expected]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            parse_pair::<u64, u64>(line)
                .map(Item::from)
                .ok_or_else(|| ParseError::InvalidItem {
                    line_no: i + 2,
                    line: line.to_string(),
                })
        })
        .collect::<Result<Vec<Item>, ParseError>>()?;

    let instance = Instance::new(capacity, items);
    if instance.total_value().is_none() {
        return Err(ParseError::ValueOverflow);
    }
    Ok(instance)
}

/// Parses a line consisting of exactly two whitespace-separated integers.
fn parse_pair<A: FromStr, B: FromStr>(line: &str) -> Option<(A, B)> {
    let (a, b) = line.split_whitespace().collect_tuple()?;
    Some((a.parse().ok()?, b.parse().ok()?))
}
