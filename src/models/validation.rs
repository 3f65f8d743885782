// Net Inspect - Validation Utilities
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! IPv4 address and subnet mask validation.
//!
//! Both checks return a [`Verdict`] rather than an error: a rejected input
//! is a normal outcome the caller turns into messaging, not a failure of
//! the program.

use serde::{Deserialize, Serialize};

/// Outcome of an address or mask check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Input passed every check.
    Valid,
    /// A character other than a digit or a dot.
    InvalidCharacters,
    /// Not exactly four dot-separated octets.
    WrongOctetCount,
    /// An octet outside 0-255 (or one that does not parse at all).
    OctetOutOfRange,
    /// Mask bits are not a single run of 1s followed by 0s.
    NonContiguousMask,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// One-line explanation for user-facing output.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::InvalidCharacters => {
                "only digits and a dot are allowed ([0-9] and '.'), e.g. 192.168.0.1"
            }
            Self::WrongOctetCount => {
                "an IPv4 address consists of four octets separated by a dot, e.g. 192.168.0.1"
            }
            Self::OctetOutOfRange => "every octet must be a number between 0 and 255",
            Self::NonContiguousMask => {
                "a subnet mask is a run of 1 bits followed by a run of 0 bits, e.g. 255.255.255.0"
            }
        }
    }
}

/// Validate a dotted-decimal IPv4 address literal.
///
/// Checks run in a fixed order and the first failure wins: character set,
/// then octet count, then octet range. `"999.1.1"` therefore reports the
/// octet count, never the range. Leading zeros are accepted; only the
/// numeric value is checked.
pub fn validate_ipv4(literal: &str) -> Verdict {
    if literal.chars().any(|c| !c.is_ascii_digit() && c != '.') {
        return Verdict::InvalidCharacters;
    }

    if literal.matches('.').count() != 3 {
        return Verdict::WrongOctetCount;
    }

    for octet in literal.split('.') {
        // empty octets ("1..2.3") and overflowing digit runs land here too
        match octet.parse::<u32>() {
            Ok(value) if value <= 255 => {}
            _ => return Verdict::OctetOutOfRange,
        }
    }

    Verdict::Valid
}

/// Validate a dotted-decimal IPv4 subnet mask literal.
///
/// Runs [`validate_ipv4`] first and propagates any non-valid verdict
/// unchanged, then requires the mask bits to be contiguous. All-zeros and
/// all-ones both count as contiguous.
pub fn validate_ipv4_mask(literal: &str) -> Verdict {
    let verdict = validate_ipv4(literal);
    if !verdict.is_valid() {
        return verdict;
    }

    // assemble most-significant octet first
    let mask = literal
        .split('.')
        .fold(0u32, |acc, octet| (acc << 8) | octet.parse::<u32>().unwrap_or(0));

    let mut seen_zero = false;
    for bit in (0..32).rev() {
        let set = mask & (1 << bit) != 0;
        if set && seen_zero {
            return Verdict::NonContiguousMask;
        }
        if !set {
            seen_zero = true;
        }
    }

    Verdict::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ipv4() {
        assert_eq!(validate_ipv4("192.168.0.1"), Verdict::Valid);
        assert_eq!(validate_ipv4("0.0.0.0"), Verdict::Valid);
        assert_eq!(validate_ipv4("255.255.255.255"), Verdict::Valid);
    }

    #[test]
    fn test_validate_ipv4_rejects_bad_characters() {
        assert_eq!(validate_ipv4("192.168.0.1x"), Verdict::InvalidCharacters);
        assert_eq!(validate_ipv4("192,168.0.1"), Verdict::InvalidCharacters);
        assert_eq!(validate_ipv4(" 192.168.0.1"), Verdict::InvalidCharacters);
    }

    #[test]
    fn test_validate_ipv4_rejects_wrong_octet_count() {
        assert_eq!(validate_ipv4("192.168.0"), Verdict::WrongOctetCount);
        assert_eq!(validate_ipv4("192.168.0.1.5"), Verdict::WrongOctetCount);
        assert_eq!(validate_ipv4(""), Verdict::WrongOctetCount);
    }

    #[test]
    fn test_validate_ipv4_rejects_out_of_range_octets() {
        assert_eq!(validate_ipv4("192.168.0.999"), Verdict::OctetOutOfRange);
        assert_eq!(validate_ipv4("256.0.0.1"), Verdict::OctetOutOfRange);
        assert_eq!(validate_ipv4("1..2.3"), Verdict::OctetOutOfRange);
    }

    #[test]
    fn test_octet_count_checked_before_range() {
        // both problems at once: the count check wins
        assert_eq!(validate_ipv4("999.1.1"), Verdict::WrongOctetCount);
    }

    #[test]
    fn test_leading_zero_octets_are_valid() {
        assert_eq!(validate_ipv4("192.168.01.1"), Verdict::Valid);
        assert_eq!(validate_ipv4("010.001.000.255"), Verdict::Valid);
    }

    #[test]
    fn test_validate_mask_contiguous() {
        assert_eq!(validate_ipv4_mask("255.255.255.0"), Verdict::Valid);
        assert_eq!(validate_ipv4_mask("255.255.254.0"), Verdict::Valid);
        assert_eq!(validate_ipv4_mask("128.0.0.0"), Verdict::Valid);
        assert_eq!(validate_ipv4_mask("255.255.255.255"), Verdict::Valid);
        // degenerate all-zero mask is accepted
        assert_eq!(validate_ipv4_mask("0.0.0.0"), Verdict::Valid);
    }

    #[test]
    fn test_validate_mask_non_contiguous() {
        assert_eq!(validate_ipv4_mask("255.0.255.0"), Verdict::NonContiguousMask);
        assert_eq!(validate_ipv4_mask("0.255.0.0"), Verdict::NonContiguousMask);
        assert_eq!(validate_ipv4_mask("255.255.255.1"), Verdict::NonContiguousMask);
    }

    #[test]
    fn test_validate_mask_propagates_address_verdicts() {
        assert_eq!(validate_ipv4_mask("255.255.255.256"), Verdict::OctetOutOfRange);
        assert_eq!(validate_ipv4_mask("255.255.0"), Verdict::WrongOctetCount);
        assert_eq!(validate_ipv4_mask("mask"), Verdict::InvalidCharacters);
    }
}
