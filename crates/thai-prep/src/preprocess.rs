//! Preprocessing pipeline for TTS input text

use serde::{Deserialize, Serialize};

use crate::maiyamok::expand_maiyamok;
use crate::numbers::num_to_thai;
use crate::Result;

fn default_enabled() -> bool {
    true
}

/// Switches for the preprocessing steps
///
/// Both steps are enabled by default. With every step disabled the input
/// passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessOptions {
    /// Convert digit runs to Thai number words
    #[serde(default = "default_enabled")]
    pub expand_numbers: bool,

    /// Expand mai yamok (ๆ) into literal repetition
    #[serde(default = "default_enabled")]
    pub expand_maiyamok: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            expand_numbers: true,
            expand_maiyamok: true,
        }
    }
}

/// Text preprocessor with configurable steps
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    /// Step switches
    options: PreprocessOptions,
}

impl Preprocessor {
    /// Create a preprocessor with every step enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preprocessor with the given options
    pub fn with_options(options: PreprocessOptions) -> Self {
        Self { options }
    }

    /// Run the preprocessing pipeline on `text`
    pub fn preprocess(&self, text: &str) -> Result<String> {
        preprocess_text_with(text, &self.options)
    }

    /// Get the configured options
    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }
}

/// Preprocess `text` for speech synthesis with the default options.
///
/// Numbers are converted before mai yamok expansion, so a digit run directly
/// in front of a mark ("5ๆ") is duplicated in its word form.
///
/// # Examples
/// ```
/// use thai_prep::preprocess_text;
/// assert_eq!(preprocess_text("มี 5 คนๆ").unwrap(), "มี ห้า คนคน");
/// ```
pub fn preprocess_text(text: &str) -> Result<String> {
    preprocess_text_with(text, &PreprocessOptions::default())
}

/// Preprocess `text` with explicit step switches
pub fn preprocess_text_with(text: &str, options: &PreprocessOptions) -> Result<String> {
    let mut result = text.to_string();

    if options.expand_numbers {
        result = num_to_thai(&result)?;
    }
    if options.expand_maiyamok {
        result = expand_maiyamok(&result);
    }

    Ok(result)
}
