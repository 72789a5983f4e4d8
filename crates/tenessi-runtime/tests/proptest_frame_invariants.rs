//! Property-based invariant tests for the text frame.
//!
//! 1. No drawn line is wider than the frame.
//! 2. Clipping keeps a prefix of the input.
//! 3. Lines without newlines produce exactly one frame line.

use proptest::prelude::*;
use tenessi_runtime::Frame;
use unicode_segmentation::UnicodeSegmentation;

proptest! {
    #[test]
    fn lines_never_exceed_width(width in 0u16..40, text in "\\PC{0,60}") {
        let mut frame = Frame::new(width);
        frame.line(&text);
        for line in frame.lines() {
            prop_assert!(line.graphemes(true).count() <= width as usize);
        }
    }

    #[test]
    fn clipping_keeps_prefix(width in 1u16..40, text in "[a-zA-Zçãé ]{0,60}") {
        let mut frame = Frame::new(width);
        frame.line(&text);
        prop_assert_eq!(frame.height(), 1);
        prop_assert!(text.starts_with(frame.lines()[0].as_str()));
    }
}
