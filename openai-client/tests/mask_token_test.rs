//! Unit tests for [`openai_client::mask_token`].
//!
//! API keys must never appear in logs in full: long keys keep the first 7 and
//! last 4 characters, anything of length <= 11 is fully masked.

use openai_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
///
/// **Expected:** Any token of length <= 11 returns `"***"`.
#[test]
fn mask_token_short_is_fully_masked() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("x"), "***");
    assert_eq!(mask_token("sk-abcdef"), "***");
    assert_eq!(mask_token("12345678901"), "***");
}

/// **Test: Multi-byte tokens are masked by chars and never panic.**
#[test]
fn mask_token_multibyte_is_char_safe() {
    assert_eq!(mask_token("ключ-доступа-абвгд"), "ключ-до***бвгд");
    assert_eq!(mask_token("ñññññññññ"), "***");
}

/// **Test: Long tokens keep head(7) and tail(4) around the mask.**
#[test]
fn mask_token_long_keeps_head_and_tail() {
    assert_eq!(mask_token("sk-proj-abcdefghijklmnop"), "sk-proj***mnop");
    let key = "sk-1234567890abcdefghijklmnop";
    let masked = mask_token(key);
    assert!(masked.starts_with("sk-1234"));
    assert!(masked.ends_with("mnop"));
    assert_eq!(masked.len(), 7 + 3 + 4);
}
