//! Terminal-rendered page content.
//!
//! A `ContentPage` wraps its body text to the last layout width and
//! keeps its own inner scroll offset. It implements the core `Page`
//! trait so the navigator can query live overflow metrics without
//! knowing anything about terminals.

use cascade_core::{Page, ScrollMetrics};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct ContentPage {
    pub title: String,
    body: Vec<String>,
    wrapped: Vec<String>,
    wrap_width: u16,
    viewport_height: u16,
    scroll: u16,
    focused: bool,
}

impl ContentPage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let body: String = body.into();
        Self {
            title: title.into(),
            body: body.lines().map(str::to_string).collect(),
            wrapped: Vec::new(),
            wrap_width: 0,
            viewport_height: 0,
            scroll: 0,
            focused: false,
        }
    }

    /// Recompute wrapped lines for the current panel geometry. Called
    /// by the app before every draw; cheap when the width is unchanged.
    pub fn reflow(&mut self, width: u16, viewport_height: u16) {
        self.viewport_height = viewport_height;
        if width == self.wrap_width && !self.wrapped.is_empty() {
            self.clamp_scroll();
            return;
        }
        self.wrap_width = width;
        self.wrapped.clear();
        for line in &self.body {
            wrap_line(line, width as usize, &mut self.wrapped);
        }
        self.clamp_scroll();
    }

    pub fn wrapped_lines(&self) -> &[String] {
        &self.wrapped
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn max_scroll(&self) -> u16 {
        (self.wrapped.len() as u16).saturating_sub(self.viewport_height)
    }

    /// Scroll the inner content by `delta` lines, clamped to range.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(self.max_scroll())) as u16;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

impl Page for ContentPage {
    fn metrics(&self) -> Option<ScrollMetrics> {
        // No layout yet: report nothing and let the navigator fail
        // open to plain page navigation.
        if self.viewport_height == 0 {
            return None;
        }
        Some(ScrollMetrics {
            offset: u32::from(self.scroll),
            extent: self.wrapped.len() as u32,
            viewport: u32::from(self.viewport_height),
        })
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

/// Word-wrap one source line into `out`, breaking on spaces and falling
/// back to hard breaks for words wider than the panel.
fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if width == 0 {
        out.push(line.to_string());
        return;
    }
    if line.is_empty() {
        out.push(String::new());
        return;
    }

    let start_len = out.len();
    let mut current = String::new();
    let mut current_width = 0usize;
    for word in line.split_whitespace() {
        let word_width = word.width();
        if current_width == 0 {
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                hard_break(word, width, out, &mut current, &mut current_width);
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::take(&mut current));
            current_width = 0;
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                hard_break(word, width, out, &mut current, &mut current_width);
            }
        }
    }
    if !current.is_empty() || out.len() == start_len {
        out.push(current);
    }
}

fn hard_break(
    word: &str,
    width: usize,
    out: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if *current_width + ch_width > width && *current_width > 0 {
            out.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push(ch);
        *current_width += ch_width;
    }
}
