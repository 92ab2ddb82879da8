//! Thai Prep - Thai text preprocessing for speech synthesis
//!
//! This crate provides:
//! - Thai numeral reading (หนึ่ง, สอง, สาม... with สิบเอ็ด/ยี่สิบ forms)
//! - Mai yamok (ๆ) expansion into literal word repetition
//! - A preprocessing pipeline that prepares raw text for a TTS model
//!
//! # Example
//!
//! ```
//! use thai_prep::{preprocess_text, num_to_thai, expand_maiyamok};
//!
//! // Full pipeline: numbers first, then repetition marks
//! let text = preprocess_text("มี 5 คนๆ").unwrap();
//! assert_eq!(text, "มี ห้า คนคน");
//!
//! // Individual transforms
//! assert_eq!(num_to_thai("ฉันมี 123 บาท").unwrap(), "ฉันมี หนึ่งร้อยยี่สิบสาม บาท");
//! assert_eq!(expand_maiyamok("ดีๆ"), "ดีดี");
//! ```

mod maiyamok;
mod numbers;
mod preprocess;

pub use maiyamok::{expand_maiyamok, MAI_YAMOK};
pub use numbers::{num_to_thai, read_thai_number};
pub use preprocess::{preprocess_text, preprocess_text_with, PreprocessOptions, Preprocessor};

use thiserror::Error;

/// Errors that can occur during Thai text preprocessing
#[derive(Debug, Error)]
pub enum ThaiPrepError {
    #[error("Invalid numeral: {0}")]
    InvalidNumeral(String),
}

/// Result type for Thai text preprocessing operations
pub type Result<T> = std::result::Result<T, ThaiPrepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_thai_number() {
        assert_eq!(read_thai_number("0").unwrap(), "ศูนย์");
        assert_eq!(read_thai_number("11").unwrap(), "สิบเอ็ด");
        assert_eq!(read_thai_number("21").unwrap(), "ยี่สิบเอ็ด");
        assert_eq!(read_thai_number("100").unwrap(), "หนึ่งร้อย");
    }

    #[test]
    fn test_preprocess_text() {
        assert_eq!(preprocess_text("ดีๆ").unwrap(), "ดีดี");
        assert_eq!(preprocess_text("มี 5 คนๆ").unwrap(), "มี ห้า คนคน");
    }
}
