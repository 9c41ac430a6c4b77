// ============================================================================
// QUOTE - Quote record returned by the backend
// ============================================================================
// Backend format: "QUOTE TEXT" - PHILOSOPHER NAME, SOURCE, PUBLISHED YEAR
// The year is optional.
// ============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_QUOTE_LEN: usize = 50;
const ATTRIBUTION_SEPARATOR: &str = " - ";
const CLOSING_SEPARATOR: &str = "\" - ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteFormatError {
    #[error("quote is shorter than 50 characters")]
    TooShort,
    #[error("quote text is not wrapped in double quotes")]
    Unquoted,
    #[error("quote has no ' - ' attribution")]
    MissingAttribution,
    #[error("attribution has no philosopher")]
    MissingPhilosopher,
    #[error("attribution has no source")]
    MissingSource,
}

/// Same acceptance rule the backend applies before returning a quote
pub fn is_valid_quote(raw: &str) -> bool {
    raw.chars().count() >= MIN_QUOTE_LEN
        && raw.starts_with('"')
        && raw.matches('"').count() >= 2
        && raw.contains(ATTRIBUTION_SEPARATOR)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub philosopher: String,
    pub source: String,
    pub year: Option<String>,
}

impl Attribution {
    /// Parses `PHILOSOPHER, SOURCE[, YEAR]`. Sources may contain commas; the
    /// last segment counts as a year only when it has a digit in it.
    pub fn parse(raw: &str) -> Result<Self, QuoteFormatError> {
        let parts: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let (philosopher, rest) = parts
            .split_first()
            .ok_or(QuoteFormatError::MissingPhilosopher)?;
        if rest.is_empty() {
            return Err(QuoteFormatError::MissingSource);
        }

        let (source_parts, year) = match rest.split_last() {
            Some((last, init)) if !init.is_empty() && last.chars().any(|c| c.is_ascii_digit()) => {
                (init, Some(last.to_string()))
            }
            _ => (rest, None),
        };

        Ok(Self {
            philosopher: philosopher.to_string(),
            source: source_parts.join(", "),
            year,
        })
    }
}

impl std::fmt::Display for Attribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.philosopher, self.source)?;
        if let Some(year) = &self.year {
            write!(f, ", {}", year)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub philosopher: String,
    pub source: String,
    pub year: Option<String>,
}

impl Quote {
    pub fn parse(raw: &str) -> Result<Self, QuoteFormatError> {
        let raw = raw.trim();
        if raw.chars().count() < MIN_QUOTE_LEN {
            return Err(QuoteFormatError::TooShort);
        }
        if !is_valid_quote(raw) {
            return if raw.contains(ATTRIBUTION_SEPARATOR) {
                Err(QuoteFormatError::Unquoted)
            } else {
                Err(QuoteFormatError::MissingAttribution)
            };
        }

        // The text ends at the first closing quote followed by the separator;
        // dashes may appear on either side of it.
        let body = raw.strip_prefix('"').ok_or(QuoteFormatError::Unquoted)?;
        let (text, attribution) = body
            .split_once(CLOSING_SEPARATOR)
            .ok_or(QuoteFormatError::Unquoted)?;
        let attribution = Attribution::parse(attribution)?;

        Ok(Self {
            text: text.trim().to_string(),
            philosopher: attribution.philosopher,
            source: attribution.source,
            year: attribution.year,
        })
    }

    pub fn attribution(&self) -> Attribution {
        Attribution {
            philosopher: self.philosopher.clone(),
            source: self.source.clone(),
            year: self.year.clone(),
        }
    }
}
