use std::collections::VecDeque;

use crate::error::{Error, Result};

/// A single tape cell. Arithmetic wraps at 32 bits in both directions.
pub type Cell = i32;

/// An unbounded, bidirectionally growable tape with one read/write cursor.
///
/// Only a contiguous window of cells is materialized. Moving the cursor past
/// either edge materializes exactly one zero cell at that edge. Cells are
/// stored contiguously and addressed by offset from the left edge, so left
/// growth is a `push_front` that keeps the cursor at offset 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: VecDeque<Cell>,
    cursor: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// A tape holding a single zero cell, cursor on it.
    pub fn new() -> Self {
        Self {
            cells: VecDeque::from([0]),
            cursor: 0,
        }
    }

    /// Build a tape from an ordered, non-empty sequence. The cursor starts on
    /// the first cell.
    pub fn from_values<I: IntoIterator<Item = Cell>>(values: I) -> Result<Self> {
        let cells: VecDeque<Cell> = values.into_iter().collect();
        if cells.is_empty() {
            return Err(Error::EmptyTape);
        }
        Ok(Self { cells, cursor: 0 })
    }

    /// Discard the current contents and rebuild from `values`.
    ///
    /// On error the tape is left unchanged.
    pub fn replace_all(&mut self, values: &[Cell]) -> Result<()> {
        *self = Self::from_values(values.iter().copied())?;
        Ok(())
    }

    #[inline(always)]
    pub fn move_right(&mut self) {
        self.cursor += 1;
        if self.cursor == self.cells.len() {
            self.cells.push_back(0);
        }
    }

    #[inline(always)]
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            self.cells.push_front(0);
        } else {
            self.cursor -= 1;
        }
    }

    #[inline(always)]
    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_add(1);
    }

    #[inline(always)]
    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_sub(1);
    }

    #[inline(always)]
    pub fn current_value(&self) -> Cell {
        self.cells[self.cursor]
    }

    /// Move the cursor to the leftmost materialized cell.
    pub fn move_to_head(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the rightmost materialized cell.
    pub fn move_to_tail(&mut self) {
        self.cursor = self.cells.len() - 1;
    }

    /// Offset of the cursor from the leftmost materialized cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of materialized cells. Never zero.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true: a tape always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The tape contents from the left edge forward, in order.
    pub fn to_vec(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }

    /// The tape contents from the cursor forward, as if the cursor cell were
    /// the head. Cells to the left of the cursor are not visited.
    pub fn values_from_cursor(&self) -> Vec<Cell> {
        self.cells.range(self.cursor..).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape_single_zero() {
        let tape = Tape::new();
        assert_eq!(tape.to_vec(), vec![0]);
        assert_eq!(tape.current_value(), 0);
        assert_eq!(tape.cursor(), 0);
    }

    #[test]
    fn test_move_right_grows_one_cell() {
        let mut tape = Tape::new();
        tape.move_right();
        assert_eq!(tape.len(), 2);
        tape.move_right();
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.cursor(), 2);
        // Moving back inside the window never allocates.
        tape.move_left();
        tape.move_left();
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.cursor(), 0);
    }

    #[test]
    fn test_move_left_grows_at_head() {
        let mut tape = Tape::new();
        tape.increment();
        tape.move_left();
        tape.move_left();
        tape.increment();
        tape.increment();
        assert_eq!(tape.to_vec(), vec![2, 0, 1]);
        assert_eq!(tape.cursor(), 0);
        assert_eq!(tape.current_value(), 2);
    }

    #[test]
    fn test_increment_decrement() {
        let mut tape = Tape::new();
        tape.decrement();
        tape.decrement();
        tape.decrement();
        assert_eq!(tape.current_value(), -3);
        tape.increment();
        assert_eq!(tape.current_value(), -2);
    }

    #[test]
    fn test_arithmetic_wraps() {
        let mut tape = Tape::from_values([Cell::MAX]).unwrap();
        tape.increment();
        assert_eq!(tape.current_value(), Cell::MIN);
        tape.decrement();
        assert_eq!(tape.current_value(), Cell::MAX);
    }

    #[test]
    fn test_from_values() {
        let tape = Tape::from_values([5, 7, 3]).unwrap();
        assert_eq!(tape.to_vec(), vec![5, 7, 3]);
        assert_eq!(tape.current_value(), 5);
        assert_eq!(tape.cursor(), 0);
    }

    #[test]
    fn test_from_values_single() {
        let tape = Tape::from_values([42]).unwrap();
        assert_eq!(tape.to_vec(), vec![42]);
        assert_eq!(tape.len(), 1);
    }

    #[test]
    fn test_from_values_empty_rejected() {
        assert_eq!(Tape::from_values(Vec::new()), Err(Error::EmptyTape));
    }

    #[test]
    fn test_replace_all_resets_cursor() {
        let mut tape = Tape::new();
        tape.move_right();
        tape.move_right();
        tape.replace_all(&[10, 20, 30]).unwrap();
        assert_eq!(tape.to_vec(), vec![10, 20, 30]);
        assert_eq!(tape.cursor(), 0);
        assert_eq!(tape.current_value(), 10);
    }

    #[test]
    fn test_replace_all_empty_leaves_tape() {
        let mut tape = Tape::from_values([1, 2]).unwrap();
        tape.move_right();
        assert_eq!(tape.replace_all(&[]), Err(Error::EmptyTape));
        assert_eq!(tape.to_vec(), vec![1, 2]);
        assert_eq!(tape.current_value(), 2);
    }

    #[test]
    fn test_values_from_cursor() {
        let mut tape = Tape::from_values([10, 20, 30]).unwrap();
        tape.move_right();
        assert_eq!(tape.values_from_cursor(), vec![20, 30]);
        assert_eq!(tape.to_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn test_move_to_head_and_tail() {
        let mut tape = Tape::from_values([1, 2, 3, 4]).unwrap();
        tape.move_to_tail();
        assert_eq!(tape.current_value(), 4);
        tape.move_to_head();
        assert_eq!(tape.current_value(), 1);
        assert_eq!(tape.len(), 4);
    }

    #[test]
    fn test_snapshot_idempotent() {
        let mut tape = Tape::new();
        tape.move_left();
        tape.increment();
        assert_eq!(tape.to_vec(), tape.to_vec());
    }
}
