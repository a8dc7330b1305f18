//! Greedy word wrapping

use iotlogger_core::traits::{TextRenderer, WrappedLine, WrappedLines, MAX_WRAPPED_LINES};

/// Wraps on spaces, keeps explicit newlines and splits words wider than
/// the line
///
/// Output stops silently once the line buffer is full.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordWrap;

impl WordWrap {
    pub const fn new() -> Self {
        Self
    }
}

struct Builder {
    lines: WrappedLines,
    current: WrappedLine,
    width: usize,
    used: usize,
}

impl Builder {
    fn push_char(&mut self, c: char) {
        if self.current.push(c).is_ok() {
            self.used += 1;
        } else {
            log::debug!("wrapped line full, dropped {:?}", c);
        }
    }

    fn break_line(&mut self) {
        let line = core::mem::take(&mut self.current);
        if self.lines.push(line).is_err() {
            log::debug!("wrap output full at {} lines", MAX_WRAPPED_LINES);
        }
        self.used = 0;
    }

    fn push_word(&mut self, word: &str) {
        let len = word.chars().count();
        if self.used > 0 && self.used + 1 + len > self.width {
            self.break_line();
        }
        if self.used > 0 {
            self.push_char(' ');
        }
        for c in word.chars() {
            if self.used == self.width {
                self.break_line();
            }
            self.push_char(c);
        }
    }
}

impl TextRenderer for WordWrap {
    fn wrap(&self, text: &str, max_chars: usize) -> WrappedLines {
        let mut builder = Builder {
            lines: WrappedLines::new(),
            current: WrappedLine::new(),
            width: max_chars.max(1),
            used: 0,
        };
        for segment in text.split('\n') {
            for word in segment.split(' ').filter(|w| !w.is_empty()) {
                builder.push_word(word);
            }
            builder.break_line();
        }
        builder.lines
    }
}
