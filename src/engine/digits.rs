// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decimal digit arithmetic shared by the digit-based properties.
//!
//! All helpers work on magnitudes (`u64`), so any `i64` can be passed in via
//! `unsigned_abs()` without overflow.

/// Iterator over the decimal digits of a number, least significant first.
///
/// Zero has no digits.
#[derive(Debug, Clone, Copy)]
pub struct Digits(u64);

impl Iterator for Digits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        let digit = self.0 % 10;
        self.0 /= 10;
        Some(digit)
    }
}

pub fn digits(value: u64) -> Digits {
    Digits(value)
}

/// Reverse the decimal digits of `value`.
///
/// Trailing zeros are dropped: 120 reverses to 21. Returns `None` only when
/// the reversal does not fit in a `u64`, which cannot happen for magnitudes
/// of `i64` values.
pub fn reverse_digits(value: u64) -> Option<u64> {
    digits(value).try_fold(0u64, |reversed, digit| {
        reversed.checked_mul(10)?.checked_add(digit)
    })
}

/// The most significant digit (0 for 0).
pub fn leading_digit(mut value: u64) -> u64 {
    while value > 9 {
        value /= 10;
    }
    value
}

pub fn digit_sum(value: u64) -> u64 {
    digits(value).sum()
}

/// Product of the digits; the empty product of 0 is 1.
///
/// Nineteen nines fit in a `u64`, so the product of any `i64` magnitude does.
pub fn digit_product(value: u64) -> u64 {
    digits(value).product()
}

/// One step of the happy-number map.
pub fn sum_of_squared_digits(value: u64) -> u64 {
    digits(value).map(|digit| digit * digit).sum()
}
