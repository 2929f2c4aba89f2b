//! Type-checker output parsers. Each accepts raw tool output and
//! returns zero or more `TypeError` facts; malformed or empty output
//! yields an empty sequence, never an error.

pub mod mypy;
pub mod tsc;

use witness_core::facts::{Fact, TypeErrorFact};

fn fact(file_path: String, line: Option<u32>, message: String) -> Fact {
    Fact::TypeError(TypeErrorFact {
        file_path,
        line,
        message,
    })
}
