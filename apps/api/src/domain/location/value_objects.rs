use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    // ASCII digits only; `\d` would also accept other Unicode digits.
    static ref PIN_CODE_REGEX: regex::Regex = regex::Regex::new(r"^[0-9]{6}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PinCode {
    #[validate(regex(path = *PIN_CODE_REGEX))]
    pub value: String,
}

impl PinCode {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let pin_code = Self { value };
        pin_code.validate()?;
        Ok(pin_code)
    }

    /// Like [`PinCode::new`] but for input that arrives as a borrowed string,
    /// where a malformed value is an expected case rather than a fault.
    pub fn parse(value: &str) -> Option<Self> {
        Self::new(value.to_string()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Numeric form used for range comparisons.
    pub fn as_number(&self) -> u32 {
        // Six ASCII digits always fit in a u32.
        self.value
            .bytes()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl std::fmt::Display for PinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
