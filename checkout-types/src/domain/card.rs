//! Credit card model, brand classification, and acceptance checks.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Card brands the classifier can recognize.
///
/// Only VISA and MasterCard are accepted for charging; every other brand is
/// classified first so rejections name the brand instead of looking like a
/// checksum failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Unknown,
}

/// One row of the brand classification table.
struct BrandRule {
    prefixes: &'static [&'static str],
    length: Option<usize>,
    brand: CardBrand,
}

/// Evaluated in order; first match wins. New brands are added here without
/// touching the validation flow.
const BRAND_RULES: &[BrandRule] = &[
    BrandRule {
        prefixes: &["34", "37"],
        length: Some(15),
        brand: CardBrand::Amex,
    },
    BrandRule {
        prefixes: &["4"],
        length: None,
        brand: CardBrand::Visa,
    },
    BrandRule {
        prefixes: &["51", "52", "53", "54", "55"],
        length: None,
        brand: CardBrand::Mastercard,
    },
    BrandRule {
        prefixes: &["6011"],
        length: None,
        brand: CardBrand::Discover,
    },
];

impl CardBrand {
    /// Classifies a digit string by its leading digits.
    pub fn detect(number: &str) -> CardBrand {
        for rule in BRAND_RULES {
            let length_ok = rule.length.is_none_or(|len| number.len() == len);
            if length_ok && rule.prefixes.iter().any(|p| number.starts_with(p)) {
                return rule.brand;
            }
        }
        CardBrand::Unknown
    }

    /// Returns true for brands the storefront can charge.
    pub fn is_accepted(&self) -> bool {
        matches!(self, CardBrand::Visa | CardBrand::Mastercard)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardBrand::Visa => "VISA",
            CardBrand::Mastercard => "MasterCard",
            CardBrand::Amex => "American Express",
            CardBrand::Discover => "Discover",
            CardBrand::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Credit card details submitted with a charge request.
///
/// Constructed per request and discarded after validation; never persisted.
/// The CVV is carried but not verified against an issuer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    /// Card number as a digit string.
    pub number: String,
    pub cvv: i32,
    pub expiration_year: i32,
    pub expiration_month: u32,
}

impl CreditCard {
    /// Classifies and validates the card against the given reference time.
    ///
    /// Checks run in increasing cost and specificity, short-circuiting on the
    /// first failure: digit format, Luhn checksum, accepted brand, then
    /// expiration. A card expiring in the reference month is still valid
    /// through the end of that month.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<CardBrand, DomainError> {
        if self.number.is_empty() || !self.number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::MalformedCardNumber);
        }

        if !luhn_valid(&self.number) {
            return Err(DomainError::InvalidCardNumber);
        }

        let brand = CardBrand::detect(&self.number);
        if !brand.is_accepted() {
            return Err(DomainError::UnsupportedCardBrand { brand });
        }

        if !(1..=12).contains(&self.expiration_month) {
            return Err(DomainError::InvalidExpiration {
                year: self.expiration_year,
                month: self.expiration_month,
            });
        }

        // First day after the expiration month; midnight of that day is the
        // expiration boundary.
        let (next_year, next_month) = if self.expiration_month == 12 {
            let year =
                self.expiration_year
                    .checked_add(1)
                    .ok_or(DomainError::InvalidExpiration {
                        year: self.expiration_year,
                        month: self.expiration_month,
                    })?;
            (year, 1)
        } else {
            (self.expiration_year, self.expiration_month + 1)
        };
        let boundary =
            NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(DomainError::InvalidExpiration {
                year: self.expiration_year,
                month: self.expiration_month,
            })?;

        if now.date_naive() >= boundary {
            return Err(DomainError::CardExpired {
                last4: self.last4().to_string(),
                year: self.expiration_year,
                month: self.expiration_month,
            });
        }

        Ok(brand)
    }

    /// Last four characters of the number, for user-facing messages. The
    /// full number never leaves this type through errors or logs. Counts
    /// characters rather than bytes, since rejection logging sees raw input
    /// that may not be ASCII.
    pub fn last4(&self) -> &str {
        let start = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.number[start..]
    }
}

/// Luhn checksum: doubling every second digit from the right, subtracting 9
/// from doubled digits above 9, the total must be a multiple of 10.
fn luhn_valid(number: &str) -> bool {
    let mut sum = 0u32;
    for (i, b) in number.bytes().rev().enumerate() {
        let mut digit = (b - b'0') as u32;
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn card(number: &str, year: i32, month: u32) -> CreditCard {
        CreditCard {
            number: number.to_string(),
            cvv: 123,
            expiration_year: year,
            expiration_month: month,
        }
    }

    fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn luhn_accepts_known_good_numbers() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("5555555555554444"));
        assert!(luhn_valid("378282246310005"));
        assert!(luhn_valid("6011111111111117"));
    }

    #[test]
    fn luhn_rejects_known_bad_numbers() {
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid("1234567890123456"));
    }

    #[test]
    fn detects_visa_by_leading_four() {
        assert_eq!(CardBrand::detect("4111111111111111"), CardBrand::Visa);
    }

    #[test]
    fn detects_mastercard_bin_range() {
        assert_eq!(CardBrand::detect("5555555555554444"), CardBrand::Mastercard);
        assert_eq!(CardBrand::detect("5105105105105100"), CardBrand::Mastercard);
    }

    #[test]
    fn detects_amex_and_discover() {
        assert_eq!(CardBrand::detect("378282246310005"), CardBrand::Amex);
        assert_eq!(CardBrand::detect("6011111111111117"), CardBrand::Discover);
    }

    #[test]
    fn unrecognized_prefix_is_unknown() {
        assert_eq!(CardBrand::detect("9999999999999995"), CardBrand::Unknown);
    }

    #[test]
    fn validate_accepts_visa() {
        let brand = card("4111111111111111", 2030, 12)
            .validate(reference_time())
            .unwrap();
        assert_eq!(brand, CardBrand::Visa);
    }

    #[test]
    fn validate_accepts_mastercard() {
        let brand = card("5555555555554444", 2029, 6)
            .validate(reference_time())
            .unwrap();
        assert_eq!(brand, CardBrand::Mastercard);
    }

    #[test]
    fn validate_rejects_empty_number_as_malformed() {
        let err = card("", 2030, 12).validate(reference_time()).unwrap_err();
        assert!(matches!(err, DomainError::MalformedCardNumber));
    }

    #[test]
    fn validate_rejects_letters_as_malformed() {
        let err = card("411111111111ABCD", 2030, 12)
            .validate(reference_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedCardNumber));
    }

    #[test]
    fn validate_rejects_bad_checksum_as_invalid() {
        let err = card("4111111111111112", 2030, 12)
            .validate(reference_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCardNumber));
    }

    #[test]
    fn validate_rejects_amex_as_unsupported_not_invalid() {
        let err = card("378282246310005", 2030, 12)
            .validate(reference_time())
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnsupportedCardBrand {
                brand: CardBrand::Amex
            }
        ));
    }

    #[test]
    fn validate_rejects_discover_as_unsupported() {
        let err = card("6011111111111117", 2030, 12)
            .validate(reference_time())
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnsupportedCardBrand {
                brand: CardBrand::Discover
            }
        ));
    }

    #[test]
    fn card_expiring_in_current_month_is_accepted() {
        let brand = card("4111111111111111", 2024, 6)
            .validate(reference_time())
            .unwrap();
        assert_eq!(brand, CardBrand::Visa);
    }

    #[test]
    fn card_expired_one_month_earlier_is_rejected() {
        let err = card("4111111111111111", 2024, 5)
            .validate(reference_time())
            .unwrap_err();
        match err {
            DomainError::CardExpired { last4, year, month } => {
                assert_eq!(last4, "1111");
                assert_eq!(year, 2024);
                assert_eq!(month, 5);
            }
            other => panic!("expected CardExpired, got {other:?}"),
        }
    }

    #[test]
    fn expired_error_message_contains_last4() {
        let err = card("4111111111111111", 2020, 1)
            .validate(reference_time())
            .unwrap_err();
        assert!(err.to_string().contains("1111"));
        assert!(!err.to_string().contains("4111111111111111"));
    }

    #[test]
    fn last4_stays_on_char_boundaries() {
        assert_eq!(card("4111111111111111", 2030, 12).last4(), "1111");
        assert_eq!(card("€€", 2030, 12).last4(), "€€");
        assert_eq!(card("12", 2030, 12).last4(), "12");
        assert_eq!(card("", 2030, 12).last4(), "");
    }

    #[test]
    fn validate_rejects_non_ascii_number_as_malformed() {
        let err = card("€€", 2030, 12).validate(reference_time()).unwrap_err();
        assert!(matches!(err, DomainError::MalformedCardNumber));
    }

    #[test]
    fn expiration_year_at_integer_limit_is_rejected() {
        let err = card("4111111111111111", i32::MAX, 12)
            .validate(reference_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidExpiration { .. }));

        let err = card("4111111111111111", i32::MAX, 6)
            .validate(reference_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidExpiration { .. }));
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let err = card("4111111111111111", 2030, 13)
            .validate(reference_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidExpiration { .. }));
    }
}
