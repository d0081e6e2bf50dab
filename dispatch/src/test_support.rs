//! Test-only fixtures shared across unit tests.

/// Operand pairs covering signs, zero, and both overflow edges.
pub const SAMPLE_OPERANDS: &[(i32, i32)] = &[
    (0, 0),
    (1, 2),
    (2, 1),
    (-5, 3),
    (3, -5),
    (-7, -9),
    (1_000_000, 999_999),
    (i32::MAX, 1),
    (i32::MIN, 1),
    (i32::MIN, -1),
    (i32::MAX, i32::MIN),
];

/// Every prime in `1..=100`, ascending.
pub const PRIMES_UP_TO_100: [i32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97,
];
