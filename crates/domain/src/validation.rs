//! Named pattern rules for user-supplied form text.
//!
//! Every rule is a full-string regular expression paired with one canonical
//! message. Input is trimmed before matching; empty input is reported before
//! the rule is even looked up so the message can name the field.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crowdfund_core::{AppError, AppResult, format_money, format_money_whole};
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Largest number of integer digits a `Decimal` can hold.
const DECIMAL_MAX_INTEGER_DIGITS: usize = 28;

/// Matches one Unicode decimal digit, the class `\d` accepts.
const DECIMAL_DIGIT_PATTERN: &str = r"^\d$";

/// Enumerated set of validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    /// Person names: letters, spaces, hyphens, apostrophes.
    Name,
    /// `local@domain.tld` addresses.
    Email,
    /// Phone numbers with optional `+` and country digit.
    Phone,
    /// Campaign titles with basic punctuation.
    CampaignTitle,
    /// Street-style locations.
    Location,
    /// Monetary amounts with at most two decimals.
    Amount,
    /// Medical condition descriptions.
    MedicalCondition,
    /// Organization and hospital names.
    Organization,
}

impl RuleName {
    /// Returns all rules in catalog order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RuleName] = &[
            RuleName::Name,
            RuleName::Email,
            RuleName::Phone,
            RuleName::CampaignTitle,
            RuleName::Location,
            RuleName::Amount,
            RuleName::MedicalCondition,
            RuleName::Organization,
        ];

        ALL
    }

    /// Returns the stable rule name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CampaignTitle => "campaign_title",
            Self::Location => "location",
            Self::Amount => "amount",
            Self::MedicalCondition => "medical_condition",
            Self::Organization => "organization",
        }
    }

    /// Returns the anchored regular expression source for this rule.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Name => r"^[A-Za-z\s\-']{2,50}$",
            Self::Email => r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
            Self::Phone => r"^[\+]?[1-9]?[\d\s\-\(\)]{10,15}$",
            Self::CampaignTitle => r#"^[A-Za-z0-9\s\-.,!?'"()]{5,100}$"#,
            Self::Location => r"^[A-Za-z0-9\s,.\-#]{3,100}$",
            Self::Amount => r"^\d+(\.\d{1,2})?$",
            Self::MedicalCondition => r"^[A-Za-z\s\-()]{3,100}$",
            Self::Organization => r#"^[A-Za-z0-9\s\-.,&'"()]{2,80}$"#,
        }
    }

    /// Returns the canonical message shown when input does not match.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Name => {
                "Name must contain only letters, spaces, hyphens, or apostrophes (2-50 characters)"
            }
            Self::Email => "Please enter a valid email address (e.g., user@example.com)",
            Self::Phone => "Please enter a valid phone number (10-15 digits)",
            Self::CampaignTitle => {
                "Title must be 5-100 characters with letters, numbers, and basic punctuation"
            }
            Self::Location => {
                "Location must be 3-100 characters (letters, numbers, spaces, commas, periods)"
            }
            Self::Amount => "Amount must be a positive number with max 2 decimal places",
            Self::MedicalCondition => {
                "Condition must be 3-100 characters (letters, spaces, hyphens, parentheses)"
            }
            Self::Organization => {
                "Organization name must be 2-80 characters with basic punctuation allowed"
            }
        }
    }

    /// Returns the human title of the rule (`campaign_title` becomes `Campaign Title`).
    #[must_use]
    pub fn title(&self) -> String {
        title_case(self.as_str())
    }
}

impl Display for RuleName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|rule| rule.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownRule {
                name: value.to_owned(),
            })
    }
}

/// Reasons a piece of input text was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input was empty or whitespace-only.
    #[error("{field} cannot be empty")]
    EmptyInput {
        /// Title-cased field name.
        field: String,
    },

    /// The rule name is not part of the enumerated set.
    #[error("unknown validation rule '{name}'")]
    UnknownRule {
        /// Rule name that was requested.
        name: String,
    },

    /// Trimmed input does not match the rule pattern.
    #[error("{}", .rule.message())]
    PatternMismatch {
        /// Rule that rejected the input.
        rule: RuleName,
    },

    /// Amount is lower than the accepted minimum.
    #[error("Amount must be at least ${}", format_money(*.min))]
    BelowMinimum {
        /// Inclusive lower bound.
        min: Decimal,
    },

    /// Amount is higher than the accepted maximum.
    #[error("Amount cannot exceed ${}", format_money_whole(*.max))]
    AboveMaximum {
        /// Inclusive upper bound.
        max: Decimal,
    },

    /// Text passed the amount pattern but could not be parsed.
    #[error("Invalid amount format")]
    ParseError {
        /// Trimmed input that failed to parse.
        input: String,
    },
}

impl ValidationError {
    /// Returns whether the failure points at a defect in calling code or the
    /// rule table rather than at user input.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::UnknownRule { .. } | Self::ParseError { .. })
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        if value.is_defect() {
            Self::Internal(match &value {
                ValidationError::ParseError { input } => {
                    format!("amount '{input}' passed the amount rule but failed to parse")
                }
                _ => value.to_string(),
            })
        } else {
            Self::Validation(value.to_string())
        }
    }
}

/// Reference entry describing one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalogEntry {
    /// Rule this entry describes.
    pub rule: RuleName,
    /// Human title of the rule.
    pub title: String,
    /// Regular expression source.
    pub pattern: &'static str,
    /// What the rule accepts, phrased as its canonical message.
    pub purpose: &'static str,
}

/// Compiled rule table.
#[derive(Debug, Clone)]
pub struct Validator {
    compiled: Vec<(RuleName, Regex)>,
    decimal_digit: Regex,
}

impl Validator {
    /// Compiles every rule pattern.
    pub fn new() -> AppResult<Self> {
        let compiled = RuleName::all()
            .iter()
            .map(|rule| {
                Regex::new(rule.pattern())
                    .map(|regex| (*rule, regex))
                    .map_err(|error| {
                        AppError::Internal(format!(
                            "pattern for rule '{rule}' does not compile: {error}"
                        ))
                    })
            })
            .collect::<AppResult<Vec<_>>>()?;
        let decimal_digit = Regex::new(DECIMAL_DIGIT_PATTERN).map_err(|error| {
            AppError::Internal(format!("decimal digit pattern does not compile: {error}"))
        })?;

        Ok(Self {
            compiled,
            decimal_digit,
        })
    }

    /// Validates raw text against the rule with the given name.
    ///
    /// Emptiness is checked before the rule lookup, so an empty value is
    /// reported as [`ValidationError::EmptyInput`] even for unknown names.
    pub fn validate(&self, rule_name: &str, raw_text: &str) -> Result<(), ValidationError> {
        if raw_text.trim().is_empty() {
            return Err(ValidationError::EmptyInput {
                field: title_case(rule_name),
            });
        }

        let rule = rule_name.parse::<RuleName>()?;
        self.check(rule, raw_text)
    }

    /// Validates raw text against a known rule.
    pub fn check(&self, rule: RuleName, raw_text: &str) -> Result<(), ValidationError> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput { field: rule.title() });
        }

        let regex = self
            .compiled
            .iter()
            .find_map(|(candidate, regex)| (*candidate == rule).then_some(regex))
            .ok_or_else(|| ValidationError::UnknownRule {
                name: rule.as_str().to_owned(),
            })?;

        if regex.is_match(trimmed) {
            Ok(())
        } else {
            Err(ValidationError::PatternMismatch { rule })
        }
    }

    /// Validates an amount and checks it against the closed range `[min, max]`.
    ///
    /// Returns the parsed amount when accepted. Digits from any script the
    /// amount rule accepts (`١٠٠`, `１００`) are read as their ASCII values.
    pub fn validate_amount_range(
        &self,
        raw_text: &str,
        min: Decimal,
        max: Decimal,
    ) -> Result<Decimal, ValidationError> {
        self.check(RuleName::Amount, raw_text)?;

        let trimmed = raw_text.trim();
        let ascii_text = self.ascii_digits(trimmed);
        let amount = match Decimal::from_str(&ascii_text) {
            Ok(amount) => amount,
            // With digits folded to ASCII, only magnitude can break parsing.
            Err(_) if integer_digits(&ascii_text) > DECIMAL_MAX_INTEGER_DIGITS => {
                return Err(ValidationError::AboveMaximum { max });
            }
            Err(_) => {
                return Err(ValidationError::ParseError {
                    input: trimmed.to_owned(),
                });
            }
        };

        if amount < min {
            return Err(ValidationError::BelowMinimum { min });
        }
        if amount > max {
            return Err(ValidationError::AboveMaximum { max });
        }

        Ok(amount)
    }

    /// Rewrites every non-ASCII decimal digit as its ASCII counterpart.
    fn ascii_digits(&self, text: &str) -> String {
        text.chars()
            .map(|character| {
                if character.is_ascii() {
                    character
                } else {
                    self.ascii_digit(character).unwrap_or(character)
                }
            })
            .collect()
    }

    /// Decimal digits are laid out in runs of ten starting at zero, so the
    /// value is the count of digit code points right before it, modulo ten.
    fn ascii_digit(&self, character: char) -> Option<char> {
        if !self.is_decimal_digit(character) {
            return None;
        }

        let preceding = (1_u32..)
            .map_while(|step| u32::from(character).checked_sub(step).and_then(char::from_u32))
            .take_while(|previous| self.is_decimal_digit(*previous))
            .count();

        char::from_digit(u32::try_from(preceding % 10).ok()?, 10)
    }

    fn is_decimal_digit(&self, character: char) -> bool {
        let mut buffer = [0_u8; 4];
        self.decimal_digit
            .is_match(character.encode_utf8(&mut buffer))
    }

    /// Lists every rule with its pattern and purpose, in catalog order.
    #[must_use]
    pub fn catalog() -> Vec<RuleCatalogEntry> {
        RuleName::all()
            .iter()
            .map(|rule| RuleCatalogEntry {
                rule: *rule,
                title: rule.title(),
                pattern: rule.pattern(),
                purpose: rule.message(),
            })
            .collect()
    }
}

fn title_case(rule_name: &str) -> String {
    rule_name
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut characters = word.chars();
            match characters.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(characters.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn integer_digits(amount_text: &str) -> usize {
    amount_text
        .split('.')
        .next()
        .unwrap_or_default()
        .trim_start_matches('0')
        .chars()
        .count()
}
