use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

use crate::error::Result;
use crate::interpreter::{Interpreter, Run};
use crate::program::{INSTRUCTIONS, LOOP_CLOSE, LOOP_OPEN};

/// Configuration for a batch of random programs.
pub struct BatchConfig {
    /// Number of programs to generate.
    pub program_count: usize,
    /// Characters per program.
    pub program_size: usize,
    /// Maximum steps per program execution.
    pub step_limit: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            program_count: 1 << 12, // 4096
            program_size: 64,
            step_limit: 1 << 13, // 8192
        }
    }
}

/// Aggregate results of running a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub programs: usize,
    /// Programs that ran off their end within the step limit.
    pub halted: usize,
    /// Programs rejected before running (malformed brackets).
    pub failed: usize,
    pub total_steps: u64,
    pub output_chars: usize,
    /// Every program's output, concatenated in program order.
    pub output: String,
}

/// A seeded set of random, well-formed Screwtape programs.
pub struct Batch {
    pub programs: Vec<String>,
    pub config: BatchConfig,
}

impl Batch {
    /// Generate `config.program_count` programs from `seed`.
    pub fn new(config: BatchConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let programs = (0..config.program_count)
            .map(|_| random_program(&mut rng, config.program_size))
            .collect();
        Self { programs, config }
    }

    /// Run every program on its own fresh interpreter, in parallel.
    pub fn run(&self) -> BatchReport {
        let step_limit = self.config.step_limit;
        let runs: Vec<Result<Run>> = self
            .programs
            .par_iter()
            .map(|program| Interpreter::new().run(program, step_limit))
            .collect();

        let mut report = BatchReport {
            programs: self.programs.len(),
            ..Default::default()
        };
        for run in runs {
            let Ok(run) = run else {
                report.failed += 1;
                continue;
            };
            if run.halted {
                report.halted += 1;
            }
            report.total_steps += run.steps as u64;
            report.output_chars += run.output.chars().count();
            report.output.push_str(&run.output);
        }
        report
    }
}

/// A random program of exactly `size` characters with balanced brackets.
///
/// Closing brackets are only drawn while a loop is open, and the tail of the
/// program is reserved for closing whatever is still open.
fn random_program(rng: &mut SmallRng, size: usize) -> String {
    let mut program = String::with_capacity(size);
    let mut depth = 0usize;
    for remaining in (1..=size).rev() {
        let c = if depth == remaining {
            LOOP_CLOSE
        } else {
            let mut c = INSTRUCTIONS[rng.gen_range(0..INSTRUCTIONS.len())];
            // An open needs room for its close.
            if (c == LOOP_CLOSE && depth == 0) || (c == LOOP_OPEN && depth + 1 >= remaining) {
                c = INSTRUCTIONS[rng.gen_range(0..INSTRUCTIONS.len() - 2)];
            }
            c
        };
        match c {
            LOOP_OPEN => depth += 1,
            LOOP_CLOSE => depth -= 1,
            _ => {}
        }
        program.push(c);
    }
    program
}
