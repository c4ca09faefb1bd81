pub mod error;
pub mod program;
pub mod tape;
pub mod brackets;
pub mod interpreter;
pub mod batch;
pub mod metrics;

pub use error::{Bracket, Error, Result};
pub use interpreter::{Interpreter, Run};
pub use tape::{Cell, Tape};
