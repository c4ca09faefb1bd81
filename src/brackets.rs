use std::collections::BTreeMap;

use crate::error::{Bracket, Error, Result};
use crate::program::{LOOP_CLOSE, LOOP_OPEN};

/// Bidirectional loop jump table for one program.
///
/// `targets[i]` is the index of the bracket matching the bracket at `i`, or
/// `None` when position `i` is not a bracket. Built once, eagerly, before
/// any instruction runs; a table only exists for a balanced program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTable {
    targets: Vec<Option<usize>>,
    pairs: usize,
}

impl JumpTable {
    /// Resolve every bracket pair in `program` with a single left-to-right
    /// scan over a stack of pending `[` indices.
    ///
    /// Fails on the first `]` with no pending `[`, or, after the scan, on the
    /// innermost `[` that was never closed.
    pub fn build(program: &[char]) -> Result<Self> {
        let mut targets = vec![None; program.len()];
        let mut stack = Vec::new();
        let mut pairs = 0;

        for (i, &c) in program.iter().enumerate() {
            match c {
                LOOP_OPEN => stack.push(i),
                LOOP_CLOSE => {
                    let open = stack.pop().ok_or(Error::UnmatchedBracket {
                        bracket: Bracket::Close,
                        index: i,
                    })?;
                    targets[open] = Some(i);
                    targets[i] = Some(open);
                    pairs += 1;
                }
                _ => {}
            }
        }

        if let Some(index) = stack.pop() {
            return Err(Error::UnmatchedBracket {
                bracket: Bracket::Open,
                index,
            });
        }

        Ok(Self { targets, pairs })
    }

    /// Index of the bracket paired with the bracket at `index`.
    #[inline(always)]
    pub fn target(&self, index: usize) -> Option<usize> {
        self.targets.get(index).copied().flatten()
    }

    /// Number of loop pairs.
    pub fn len(&self) -> usize {
        self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }

    /// `(open, close)` pairs in order of their open index.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| t.filter(|&j| j > i).map(|j| (i, j)))
    }

    pub fn open_to_close(&self) -> BTreeMap<usize, usize> {
        self.pairs().collect()
    }

    pub fn close_to_open(&self) -> BTreeMap<usize, usize> {
        self.pairs().map(|(open, close)| (close, open)).collect()
    }
}

/// Map each `]` index in `program` to the index of its matching `[`.
pub fn bracket_map(program: &str) -> Result<BTreeMap<usize, usize>> {
    let chars: Vec<char> = program.chars().collect();
    Ok(JumpTable::build(&chars)?.close_to_open())
}
