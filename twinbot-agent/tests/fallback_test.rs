//! Totality tests for [`twinbot_agent::FallbackResponder`].
//!
//! The fallback is the last line of defense of the gate: it must return a
//! non-empty string for any input, including empty, unicode, and emoji-only
//! messages.

use twinbot_agent::{CvProfile, FallbackResponder};

fn profile_from_defaults() -> CvProfile {
    CvProfile::from_env()
}

/// Deterministic pseudo-random string generator (LCG over a mixed alphabet),
/// so the test corpus is reproducible without extra dependencies.
fn generated_strings(count: usize) -> Vec<String> {
    const ALPHABET: &[char] = &[
        'a', 'z', 'Z', '0', '9', ' ', '\n', '\t', '?', '¡', 'ñ', 'é', '中', '文', 'д', 'ж', '🤖',
        '🚀', '💬', '´', '`', '"', '\\', '{', '}',
    ];
    let mut state: u64 = 0x2545F4914F6CDD1D;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let len = (state >> 33) as usize % 64;
        let mut s = String::new();
        for _ in 0..len {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            s.push(ALPHABET[(state >> 48) as usize % ALPHABET.len()]);
        }
        out.push(s);
    }
    out
}

/// **Test: respond() is total — 1,000 generated strings plus edge cases all
/// produce a non-empty reply and never panic.**
#[test]
fn test_fallback_is_total() {
    let responder = FallbackResponder::new(profile_from_defaults());

    let mut corpus = generated_strings(1_000);
    corpus.push(String::new());
    corpus.push("🤖🤖🤖".to_string());
    corpus.push("¿Cuál es tu experiencia?".to_string());
    corpus.push("中文消息".to_string());
    corpus.push("\0".to_string());

    for message in &corpus {
        let reply = responder.respond(message);
        assert!(!reply.is_empty(), "empty reply for input {:?}", message);
    }
}

/// **Test: Replies are deterministic for the same message.**
#[test]
fn test_fallback_deterministic() {
    let responder = FallbackResponder::new(profile_from_defaults());
    assert_eq!(responder.respond("hola"), responder.respond("hola"));
    assert_eq!(responder.respond("projects?"), responder.respond("projects?"));
}
