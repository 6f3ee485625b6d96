// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Codepoint folding applied before every trie operation

/// First full-width form mirroring printable ASCII ('！')
const FULLWIDTH_START: u32 = 0xFF01;
/// Last full-width form mirroring printable ASCII ('～')
const FULLWIDTH_END: u32 = 0xFF5E;
/// Distance between a full-width form and its ASCII counterpart
const FULLWIDTH_OFFSET: u32 = 0xFEE0;
/// Ideographic space, which does not follow the block offset
const FULLWIDTH_SPACE: char = '\u{3000}';

/// Fold a scalar to its canonical matching form.
///
/// Full-width ASCII variants become half-width, the ideographic space becomes
/// `' '`, and ASCII uppercase letters become lowercase. Everything else is
/// returned unchanged. The mapping is idempotent.
#[inline]
pub fn normalize(c: char) -> char {
    let code = c as u32;
    let folded = if (FULLWIDTH_START..=FULLWIDTH_END).contains(&code) {
        // Result lands in 0x21..=0x7E, always a valid scalar
        char::from_u32(code - FULLWIDTH_OFFSET).unwrap_or(c)
    } else if c == FULLWIDTH_SPACE {
        ' '
    } else {
        c
    };
    folded.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_letters_fold_to_lowercase() {
        assert_eq!(normalize('Ａ'), 'a');
        assert_eq!(normalize('ｆ'), 'f');
        assert_eq!(normalize('Ｚ'), 'z');
    }

    #[test]
    fn test_fullwidth_punctuation_and_digits() {
        assert_eq!(normalize('！'), '!');
        assert_eq!(normalize('～'), '~');
        assert_eq!(normalize('３'), '3');
        assert_eq!(normalize('＠'), '@');
    }

    #[test]
    fn test_fullwidth_space() {
        assert_eq!(normalize('\u{3000}'), ' ');
    }

    #[test]
    fn test_ascii_case_folding() {
        assert_eq!(normalize('A'), 'a');
        assert_eq!(normalize('q'), 'q');
        assert_eq!(normalize('7'), '7');
    }

    #[test]
    fn test_other_scalars_unchanged() {
        for c in ['你', '。', '、', 'é', 'Σ', '😊', '\u{FF00}', '\u{FF5F}'] {
            assert_eq!(normalize(c), c);
        }
    }
}
