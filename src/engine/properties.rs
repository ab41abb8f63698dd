// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One test per property.
//!
//! Every function is total over `i64`. The classic domain is the natural
//! numbers; for negative inputs the digit-based tests read the magnitude and
//! the arithmetic ones (parity, squares, gapful) use the signed value.

use crate::config::HappyLimits;
use crate::engine::digits;
use std::collections::HashSet;
use tracing::warn;

pub fn is_even(value: i64) -> bool {
    value % 2 == 0
}

pub fn is_odd(value: i64) -> bool {
    !is_even(value)
}

/// Ends with 7 or is divisible by 7.
pub fn is_buzz(value: i64) -> bool {
    value.unsigned_abs() % 10 == 7 || value % 7 == 0
}

/// Has a zero digit anywhere but the leading position.
pub fn is_duck(value: i64) -> bool {
    let mut rest = value.unsigned_abs();
    while rest > 9 {
        if rest % 10 == 0 {
            return true;
        }
        rest /= 10;
    }
    false
}

pub fn is_palindromic(value: i64) -> bool {
    let magnitude = value.unsigned_abs();
    digits::reverse_digits(magnitude) == Some(magnitude)
}

/// At least three digits and divisible by the number formed from its first
/// and last digit.
pub fn is_gapful(value: i64) -> bool {
    if value < 100 {
        return false;
    }
    let magnitude = value.unsigned_abs();
    // leading digit is at least 1, so the divisor is at least 10
    let divisor = digits::leading_digit(magnitude) * 10 + magnitude % 10;
    magnitude % divisor == 0
}

pub fn is_spy(value: i64) -> bool {
    let magnitude = value.unsigned_abs();
    digits::digit_sum(magnitude) == digits::digit_product(magnitude)
}

/// Integer square root, rounded down.
///
/// Starts from the floating-point estimate and corrects it by whole steps,
/// so the result is exact across the whole `u64` range.
pub fn integer_sqrt(value: u64) -> u64 {
    let square = |root: u64| u128::from(root) * u128::from(root);
    let target = u128::from(value);

    let mut root = (value as f64).sqrt() as u64;
    while square(root) > target {
        root -= 1;
    }
    while square(root + 1) <= target {
        root += 1;
    }
    root
}

pub fn is_perfect_square(value: i64) -> bool {
    match u64::try_from(value) {
        Ok(magnitude) => {
            let root = integer_sqrt(magnitude);
            root * root == magnitude
        }
        Err(_) => false,
    }
}

/// The successor is a perfect square. `i64::MAX` has no successor and is not sunny.
pub fn is_sunny(value: i64) -> bool {
    value.checked_add(1).is_some_and(is_perfect_square)
}

/// Adjacent digits differ by exactly one.
pub fn is_jumping(value: i64) -> bool {
    let mut rest = value.unsigned_abs();
    let mut previous = rest % 10;
    while rest > 9 {
        rest /= 10;
        let current = rest % 10;
        if previous.abs_diff(current) != 1 {
            return false;
        }
        previous = current;
    }
    true
}

/// Iterating the sum of squared digits reaches 1.
///
/// Any value seen twice means the orbit has entered a cycle that avoids 1.
/// If the step budget runs out first the number is reported as not happy.
pub fn is_happy(value: i64, limits: &HappyLimits) -> bool {
    let mut current = value.unsigned_abs();
    // at most one value is recorded per step
    let mut seen = HashSet::with_capacity(limits.seen_capacity.min(limits.step_budget));
    let mut steps = 0;

    while current != 1 {
        if steps >= limits.step_budget {
            warn!(value, steps, "happy number step budget exhausted");
            return false;
        }
        current = digits::sum_of_squared_digits(current);
        if !seen.insert(current) {
            return false;
        }
        steps += 1;
    }
    true
}

pub fn is_sad(value: i64, limits: &HappyLimits) -> bool {
    !is_happy(value, limits)
}
