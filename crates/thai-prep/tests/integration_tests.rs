//! Integration tests for thai-prep
//!
//! These tests run the full preprocessing pipeline the way a synthesis
//! frontend would, on whole sentences.

use pretty_assertions::assert_eq;
use thai_prep::{
    expand_maiyamok, num_to_thai, preprocess_text, preprocess_text_with, PreprocessOptions,
    Preprocessor, MAI_YAMOK,
};

/// Characters the synthesis model cannot speak
fn is_unspoken(c: char) -> bool {
    c.is_ascii_digit() || ('๐'..='๙').contains(&c) || c == MAI_YAMOK
}

#[test]
fn test_full_pipeline() {
    assert_eq!(preprocess_text("มี 5 คนๆ").unwrap(), "มี ห้า คนคน");
    assert_eq!(
        preprocess_text("ฉันมี 123 บาท ดีๆ").unwrap(),
        "ฉันมี หนึ่งร้อยยี่สิบสาม บาท ดีดี"
    );
    assert_eq!(
        preprocess_text("ราคา 2500.50 บาท").unwrap(),
        "ราคา สองพันห้าร้อยจุดห้าศูนย์ บาท"
    );
}

#[test]
fn test_output_contains_no_digits_or_marker() {
    let inputs = [
        "มี 5 คนๆ",
        "ฉันมี 123 บาท",
        "๑๒๓ กับ 456.78",
        "ดีๆๆ",
        "อุณหภูมิ -5.5 องศา เย็นๆ",
    ];

    for input in inputs {
        let output = preprocess_text(input).unwrap();
        assert!(
            !output.chars().any(is_unspoken),
            "unspoken character left in {output:?}"
        );
    }
}

#[test]
fn test_transforms_leave_foreign_text_alone() {
    let text = "Hello, world! 🎉 ขอบคุณครับ";
    assert_eq!(num_to_thai(text).unwrap(), text);
    assert_eq!(expand_maiyamok(text), text);
    assert_eq!(preprocess_text(text).unwrap(), text);
}

#[test]
fn test_disabled_pipeline_is_identity() {
    let options = PreprocessOptions {
        expand_numbers: false,
        expand_maiyamok: false,
    };
    let text = "มี 5 คนๆ";
    assert_eq!(preprocess_text_with(text, &options).unwrap(), text);
}

#[test]
fn test_preprocessor_from_json_options() {
    let options: PreprocessOptions =
        serde_json::from_str(r#"{ "expand_numbers": true, "expand_maiyamok": false }"#).unwrap();
    let prep = Preprocessor::with_options(options);

    assert_eq!(prep.preprocess("มี 5 คนๆ").unwrap(), "มี ห้า คนๆ");
}

#[test]
fn test_concurrent_calls_are_independent() {
    let cases = [
        ("มี 5 คนๆ", "มี ห้า คนคน"),
        ("ดีๆ", "ดีดี"),
        ("ฉันมี 123 บาท", "ฉันมี หนึ่งร้อยยี่สิบสาม บาท"),
        ("21", "ยี่สิบเอ็ด"),
    ];

    let handles: Vec<_> = cases
        .into_iter()
        .map(|(input, expected)| {
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(preprocess_text(input).unwrap(), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
