use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One row of the PRODUCT_CODE table.
///
/// The record knows nothing about storage; reading and writing rows is the
/// job of [`crate::db::queries`].
///
/// Equality (and therefore hashing) is keyed on `code` and `description`
/// only: two records differing just by `discount_code` compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCode {
    code: String,          // ⇔ PRODUCT_CODE.Code (business key)
    discount_code: char,   // ⇔ PRODUCT_CODE.discountCode (1-char TEXT)
    description: String,   // ⇔ PRODUCT_CODE.Description
}

impl ProductCode {
    pub fn new(code: impl Into<String>, discount_code: char, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            discount_code,
            description: description.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn discount_code(&self) -> char {
        self.discount_code
    }

    pub fn set_discount_code(&mut self, discount_code: char) {
        self.discount_code = discount_code;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Discount code as stored in the table (a one-character string).
    pub fn discount_code_str(&self) -> String {
        self.discount_code.to_string()
    }

    /// Parse a stored/typed discount code: exactly one character.
    pub fn parse_discount_code(s: &str) -> AppResult<char> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(AppError::InvalidDiscountCode(s.to_string())),
        }
    }
}

impl PartialEq for ProductCode {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.description == other.description
    }
}

impl Eq for ProductCode {}

impl Hash for ProductCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must stay in sync with PartialEq.
        self.code.hash(state);
        self.description.hash(state);
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product code: {}, discount code: {}, description: {}.",
            self.code, self.discount_code, self.description
        )
    }
}
