//! The Screwtape instruction set.
//!
//! Seven characters are significant; every other character is a no-op and
//! is preserved in the source so that indices stay stable:
//!
//! | char | effect |
//! |------|--------|
//! | `+`  | increment the cell under the cursor |
//! | `-`  | decrement the cell under the cursor |
//! | `>`  | move the cursor right, growing the tape if needed |
//! | `<`  | move the cursor left, growing the tape if needed |
//! | `.`  | output the cell under the cursor as a character |
//! | `[`  | no-op; marks the start of a loop |
//! | `]`  | jump back to the matching `[` if the cell is non-zero |

use crate::brackets::JumpTable;
use crate::error::Result;

pub const INCREMENT: char = '+';
pub const DECREMENT: char = '-';
pub const MOVE_RIGHT: char = '>';
pub const MOVE_LEFT: char = '<';
pub const OUTPUT: char = '.';
pub const LOOP_OPEN: char = '[';
pub const LOOP_CLOSE: char = ']';

pub const INSTRUCTION_COUNT: usize = 7;

/// Every significant character, in the order of the table above.
pub const INSTRUCTIONS: [char; INSTRUCTION_COUNT] = [
    INCREMENT, DECREMENT, MOVE_RIGHT, MOVE_LEFT, OUTPUT, LOOP_OPEN, LOOP_CLOSE,
];

/// Returns true if `c` has an effect when executed.
pub fn is_instruction(c: char) -> bool {
    INSTRUCTIONS.contains(&c)
}

/// The program with every inert character removed.
pub fn strip(program: &str) -> String {
    program.chars().filter(|&c| is_instruction(c)).collect()
}

/// Pretty-print a listing of `program` for human inspection.
///
/// Each line shows the character index where an instruction group starts,
/// indented by loop depth. Consecutive identical non-bracket instructions are
/// shown as one group with a repeat count; this is purely presentational.
/// Inert characters are skipped but still count toward indices.
pub fn disassemble(program: &str) -> Result<String> {
    use std::fmt::Write;

    let chars: Vec<char> = program.chars().collect();
    // Reject malformed programs up front, same as execution does.
    JumpTable::build(&chars)?;

    let mut out = String::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !is_instruction(c) {
            i += 1;
            continue;
        }
        if c == LOOP_CLOSE {
            depth -= 1;
        }
        let start = i;
        let mut count = 1;
        if c != LOOP_OPEN && c != LOOP_CLOSE {
            while i + count < chars.len() && chars[i + count] == c {
                count += 1;
            }
        }
        let indent = "  ".repeat(depth);
        let mnemonic = mnemonic(c);
        if count > 1 {
            let _ = writeln!(out, "{start:04} {indent}{mnemonic} x{count}");
        } else {
            let _ = writeln!(out, "{start:04} {indent}{mnemonic}");
        }
        if c == LOOP_OPEN {
            depth += 1;
        }
        i += count;
    }
    Ok(out)
}

fn mnemonic(c: char) -> &'static str {
    match c {
        INCREMENT => "INC",
        DECREMENT => "DEC",
        MOVE_RIGHT => "RIGHT",
        MOVE_LEFT => "LEFT",
        OUTPUT => "OUT",
        LOOP_OPEN => "LOOP",
        LOOP_CLOSE => "JNZ",
        _ => "NOP",
    }
}
