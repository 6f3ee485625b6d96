// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Rendering of masked text from scan results

use sha2::{Digest, Sha256};
use std::borrow::Cow;
use uuid::Uuid;

use super::config::{FilterConfig, MaskingStrategy};
use super::scanner::Span;

/// Apply masking to matched spans in text
///
/// # Arguments
/// * `text` - Original text
/// * `spans` - Ordered, non-overlapping spans in char offsets
/// * `config` - Configuration with masking preferences
///
/// # Returns
/// Masked text. With `MaskingStrategy::Char` every scalar inside a span,
/// stoppers included, becomes one `mask_char`, so the char count is unchanged.
pub fn mask_spans<'a>(text: &'a str, spans: &[Span], config: &FilterConfig) -> Cow<'a, str> {
    if spans.is_empty() {
        // Zero-copy optimization when no masking needed
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut pending = spans.iter().peekable();

    for (idx, c) in text.chars().enumerate() {
        while pending.next_if(|span| span.end() <= idx).is_some() {}

        match pending.peek() {
            Some(span) if span.start == idx => result.push_str(&replacement(span, config)),
            Some(span) if span.start < idx => {}
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}

/// Replacement text for a whole span
fn replacement(span: &Span, config: &FilterConfig) -> String {
    match config.mask_strategy {
        MaskingStrategy::Char => std::iter::repeat(config.mask_char).take(span.len).collect(),
        MaskingStrategy::Redact => config.redaction_text.clone(),
        MaskingStrategy::Hash => hash_mask(&span.text),
        MaskingStrategy::Tokenize => tokenize_mask(),
        MaskingStrategy::Remove => String::new(),
    }
}

/// Hash masking using SHA256
fn hash_mask(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("[HASH:{}]", &format!("{:x}", result)[..8])
}

/// Tokenize using UUID v4
fn tokenize_mask() -> String {
    let token = Uuid::new_v4();
    format!("[TOKEN:{}]", &token.simple().to_string()[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, start: usize) -> Span {
        Span {
            start,
            len: text.chars().count(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_char_mask_counts_scalars_not_bytes() {
        let config = FilterConfig::default();
        let spans = vec![span("微信", 2)];

        let result = mask_spans("请加微信号", &spans, &config);
        assert_eq!(result, "请加**号");
    }

    #[test]
    fn test_adjacent_spans() {
        let config = FilterConfig::default();
        let spans = vec![span("ab", 0), span("cd", 2)];

        assert_eq!(mask_spans("abcde", &spans, &config), "****e");
    }

    #[test]
    fn test_custom_mask_char() {
        let config = FilterConfig {
            mask_char: '#',
            ..Default::default()
        };
        let spans = vec![span("v-x", 1)];

        assert_eq!(mask_spans("加v-x", &spans, &config), "加###");
    }

    #[test]
    fn test_redact_strategy() {
        let config = FilterConfig {
            mask_strategy: MaskingStrategy::Redact,
            ..Default::default()
        };
        let spans = vec![span("shit", 0), span("微信", 6)];

        let result = mask_spans("shit，加微信", &spans, &config);
        assert_eq!(result, "[REDACTED]，加[REDACTED]");
    }

    #[test]
    fn test_remove_strategy() {
        let config = FilterConfig {
            mask_strategy: MaskingStrategy::Remove,
            ..Default::default()
        };
        let spans = vec![span("bad", 2)];

        assert_eq!(mask_spans("a bad day", &spans, &config), "a  day");
    }

    #[test]
    fn test_hash_strategy_replaces_whole_span() {
        let config = FilterConfig {
            mask_strategy: MaskingStrategy::Hash,
            ..Default::default()
        };
        let spans = vec![span("微信", 2)];

        let expected = format!("请加{}号", hash_mask("微信"));
        assert_eq!(mask_spans("请加微信号", &spans, &config), expected);
    }

    #[test]
    fn test_hash_mask() {
        let result = hash_mask("sensitive");
        assert!(result.starts_with("[HASH:"));
        assert!(result.ends_with("]"));
        assert_eq!(result.len(), 15); // [HASH:xxxxxxxx]
        assert_eq!(result, hash_mask("sensitive"));
    }

    #[test]
    fn test_tokenize_mask() {
        let result = tokenize_mask();
        assert!(result.starts_with("[TOKEN:"));
        assert!(result.ends_with("]"));
    }

    #[test]
    fn test_mask_empty() {
        let config = FilterConfig::default();
        let text = "nothing here";

        let result = mask_spans(text, &[], &config);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, text);
    }
}
