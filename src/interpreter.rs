use crate::brackets::JumpTable;
use crate::error::Result;
use crate::program::{DECREMENT, INCREMENT, LOOP_CLOSE, LOOP_OPEN, MOVE_LEFT, MOVE_RIGHT, OUTPUT};
use crate::tape::{Cell, Tape};

/// Outcome of a bounded [`Interpreter::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// One character per executed `.`.
    pub output: String,
    /// Instructions dispatched, inert characters and loop jumps included.
    pub steps: usize,
    /// True if the instruction pointer ran off the end of the program;
    /// false if the step budget ran out first.
    pub halted: bool,
}

/// A Screwtape interpreter.
///
/// Owns one [`Tape`] for its whole lifetime; tape state carries over from
/// one `execute` call to the next on the same instance.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    tape: Tape,
}

impl Interpreter {
    /// An interpreter whose tape is a single zero cell.
    pub fn new() -> Self {
        Self { tape: Tape::new() }
    }

    /// Execute `program` to completion and return its output.
    ///
    /// Bracket structure is resolved before the first instruction runs, so a
    /// malformed program fails without touching the tape. A program that never
    /// terminates makes this call never return; use [`Interpreter::run`] for a
    /// bounded execution.
    pub fn execute(&mut self, program: &str) -> Result<String> {
        Ok(self.run(program, usize::MAX)?.output)
    }

    /// Execute `program`, dispatching at most `step_limit` instructions.
    pub fn run(&mut self, program: &str, step_limit: usize) -> Result<Run> {
        let program: Vec<char> = program.chars().collect();
        let jumps = JumpTable::build(&program)?;

        let len = program.len();
        let mut output = String::new();
        let mut ip: usize = 0;
        let mut steps: usize = 0;

        while ip < len && steps < step_limit {
            steps += 1;
            match program[ip] {
                INCREMENT => self.tape.increment(),
                DECREMENT => self.tape.decrement(),
                MOVE_RIGHT => self.tape.move_right(),
                MOVE_LEFT => self.tape.move_left(),
                OUTPUT => output.push(cell_to_char(self.tape.current_value())),
                // The zero test lives at the close bracket only.
                LOOP_OPEN => {}
                LOOP_CLOSE => {
                    if self.tape.current_value() != 0 {
                        if let Some(open) = jumps.target(ip) {
                            ip = open;
                            continue;
                        }
                    }
                }
                _ => {} // inert
            }
            ip += 1;
        }

        Ok(Run {
            output,
            steps,
            halted: ip >= len,
        })
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Tape contents from the leftmost materialized cell.
    pub fn tape_data(&self) -> Vec<Cell> {
        self.tape.to_vec()
    }

    /// Value of the cell under the cursor.
    pub fn tape_pointer_value(&self) -> Cell {
        self.tape.current_value()
    }

    /// Replace the tape with `data`, cursor on the first cell.
    pub fn set_tape(&mut self, data: &[Cell]) -> Result<()> {
        self.tape.replace_all(data)
    }

    pub fn move_tape_pointer_to_head(&mut self) {
        self.tape.move_to_head();
    }

    pub fn move_tape_pointer_to_tail(&mut self) {
        self.tape.move_to_tail();
    }
}

/// Interpret a cell as a Unicode scalar value. Negative cells and values
/// that are not scalar values (surrogates, above U+10FFFF) become U+FFFD.
pub fn cell_to_char(value: Cell) -> char {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn random_programs_never_panic(
            program in prop::collection::vec(prop::sample::select(vec!['+', '-', '<', '>', '.', '[', ']', 'x']), 0..128)
        ) {
            let program: String = program.into_iter().collect();
            let mut interp = Interpreter::new();
            if let Ok(run) = interp.run(&program, 4096) {
                prop_assert!(run.steps <= 4096);
                prop_assert!(interp.tape().cursor() < interp.tape().len());
            }
        }

        #[test]
        fn output_length_matches_dot_count(n in 0usize..64) {
            let program = format!("{}{}", "+".repeat(65), ".".repeat(n));
            let mut interp = Interpreter::new();
            let output = interp.execute(&program).unwrap();
            prop_assert_eq!(output.chars().count(), n);
        }
    }
}
