//! Validation of user-entered form fields: wagers, amounts and emails.

use crate::errors::{BetError, BetResult};

/// Largest wager accepted when creating or joining a team.
pub const MAX_WAGER: u64 = 500;

/// Longest amount the wallet form accepts.
pub const MAX_AMOUNT_DIGITS: usize = 9;

/// Keep only ASCII digits, as the numeric inputs do while typing.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Wager to send for a raw wager input.
///
/// Non-digits are dropped, an empty value counts as zero and the result is
/// capped at [`MAX_WAGER`].
pub fn clamp_wager(input: &str) -> u64 {
    let digits = digits_only(input);
    if digits.is_empty() {
        return 0;
    }
    // only overflow can fail here
    digits.parse::<u64>().map_or(MAX_WAGER, |coin| coin.min(MAX_WAGER))
}

/// Whether the typed wager is over the limit, which disables confirming.
pub fn wager_exceeds_limit(input: &str) -> bool {
    let digits = digits_only(input);
    // too long to parse is certainly too large
    !digits.is_empty() && digits.parse::<u64>().map_or(true, |coin| coin > MAX_WAGER)
}

/// Parse a top-up or withdrawal amount.
pub fn parse_amount(input: &str) -> BetResult<u64> {
    let digits = digits_only(input);
    if digits.len() > MAX_AMOUNT_DIGITS {
        return Err(BetError::Validation(format!(
            "Amount may have at most {} digits",
            MAX_AMOUNT_DIGITS
        )));
    }

    match digits.parse::<u64>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(BetError::Validation("Enter an amount".to_string())),
    }
}

/// Loose email check: some `a@b.c` run of non-whitespace characters.
pub fn is_valid_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// Reject a blank required field.
pub fn require(field: &str, value: &str) -> BetResult<()> {
    if value.trim().is_empty() {
        Err(BetError::Validation(format!("{} is required", field)))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wager_is_clamped() {
        assert_eq!(clamp_wager(""), 0);
        assert_eq!(clamp_wager("abc"), 0);
        assert_eq!(clamp_wager("120"), 120);
        assert_eq!(clamp_wager("1,000"), MAX_WAGER);
        assert_eq!(clamp_wager("99999999999999999999999"), MAX_WAGER);
    }

    #[test]
    fn wager_limit() {
        assert!(!wager_exceeds_limit(""));
        assert!(!wager_exceeds_limit("500"));
        assert!(wager_exceeds_limit("501"));
        assert!(wager_exceeds_limit("99999999999999999999999"));
    }

    #[test]
    fn amount_must_be_positive() {
        assert_eq!(parse_amount("1 000").unwrap(), 1000);
        assert!(parse_amount("").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("1234567890").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("sleeper@example.com"));
        assert!(!is_valid_email("sleeper@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("sleeper@.com"));
        assert!(!is_valid_email("sleeper@example."));
    }
}
