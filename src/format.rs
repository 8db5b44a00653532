//! Output date templates.
//!
//! Templates are written with `YYYY`, `MM` and `DD` placeholders, e.g.
//! `MM/DD/YYYY`. strftime directives such as `%b` or `%j` may be mixed in
//! and are passed to chrono as they are; everything else is copied verbatim.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::{self, Write};

use crate::error::{MarketDatesError, Result};

pub const DEFAULT_TEMPLATE: &str = "YYYY-MM-DD";

const TOKENS: [(&str, &str); 3] = [("YYYY", "%Y"), ("MM", "%m"), ("DD", "%d")];

/// Date template translated to a chrono strftime pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    template: String,
    pattern: String,
}

impl DateFormat {
    /// Translate `template`, rejecting directives chrono cannot render for a
    /// plain date (unknown ones, a dangling `%`, time fields like `%H`).
    pub fn parse(template: &str) -> Result<DateFormat> {
        let pattern = to_strftime(template);
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(MarketDatesError::InvalidFormat {
                template: template.to_string(),
                reason: "unknown or incomplete % directive".to_string(),
            });
        }
        // rendering depends only on which fields are available, not on the date
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::MIN.format(&pattern)).is_err() {
            return Err(MarketDatesError::InvalidFormat {
                template: template.to_string(),
                reason: "directive needs a time or time zone".to_string(),
            });
        }
        Ok(DateFormat {
            template: template.to_string(),
            pattern,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The equivalent strftime pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat {
            template: DEFAULT_TEMPLATE.to_string(),
            pattern: to_strftime(DEFAULT_TEMPLATE),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Scan left to right replacing placeholders. A `%` and the character after
/// it are copied as one directive, so `%D` or `%%` never start a placeholder.
fn to_strftime(template: &str) -> String {
    let mut pattern = String::with_capacity(template.len() + 4);
    let mut rest = template;
    'scan: while let Some(c) = rest.chars().next() {
        for (token, spec) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                pattern.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }
        pattern.push(c);
        rest = &rest[c.len_utf8()..];
        if c == '%' {
            if let Some(next) = rest.chars().next() {
                pattern.push(next);
                rest = &rest[next.len_utf8()..];
            }
        }
    }
    pattern
}
