use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::question::{Difficulty, Operation};

/// Operand bounds for one (operation, difficulty) pair. For division the
/// first pair bounds the quotient and the second the divisor; for
/// subtraction the first bounds the minuend and the second the subtrahend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandRanges {
    pub min1: i32,
    pub max1: i32,
    pub min2: i32,
    pub max2: i32,
}

const fn ranges(min1: i32, max1: i32, min2: i32, max2: i32) -> OperandRanges {
    OperandRanges {
        min1,
        max1,
        min2,
        max2,
    }
}

static RANGE_TABLE: Lazy<HashMap<(Operation, Difficulty), OperandRanges>> = Lazy::new(|| {
    HashMap::from([
        ((Operation::Addition, Difficulty::Easy), ranges(1, 10, 1, 10)),
        ((Operation::Addition, Difficulty::Medium), ranges(10, 50, 10, 50)),
        ((Operation::Addition, Difficulty::Hard), ranges(50, 100, 50, 100)),
        ((Operation::Subtraction, Difficulty::Easy), ranges(5, 20, 1, 5)),
        ((Operation::Subtraction, Difficulty::Medium), ranges(20, 50, 10, 20)),
        ((Operation::Subtraction, Difficulty::Hard), ranges(50, 100, 25, 50)),
        ((Operation::Multiplication, Difficulty::Easy), ranges(1, 5, 1, 5)),
        ((Operation::Multiplication, Difficulty::Medium), ranges(2, 10, 2, 10)),
        ((Operation::Multiplication, Difficulty::Hard), ranges(5, 12, 5, 12)),
        ((Operation::Division, Difficulty::Easy), ranges(1, 5, 1, 5)),
        ((Operation::Division, Difficulty::Medium), ranges(2, 10, 2, 10)),
        ((Operation::Division, Difficulty::Hard), ranges(5, 12, 2, 10)),
    ])
});

/// Fixed configuration; not mutable at runtime.
pub fn operand_ranges(operation: Operation, difficulty: Difficulty) -> OperandRanges {
    // The table covers the full enum product, so the lookup cannot miss.
    RANGE_TABLE[&(operation, difficulty)]
}
