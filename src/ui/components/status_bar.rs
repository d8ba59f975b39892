#![allow(dead_code)]
// Status bar component - 상태줄 컴포넌트
//
// 선택 항목의 모드/개수/크기/수정시각 한 줄 표시

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

/// 상태줄 컴포넌트
pub struct StatusBar<'a> {
    /// 표시 텍스트
    text: &'a str,
    /// 전경색
    fg_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            text: " Ready ",
            fg_color: Color::White,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 표시 텍스트 설정
    pub fn text(mut self, text: &'a str) -> Self {
        self.text = text;
        self
    }

    /// 전경색 설정
    pub fn fg_color(mut self, color: Color) -> Self {
        self.fg_color = color;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph =
            Paragraph::new(self.text).style(Style::default().fg(self.fg_color));
        paragraph.render(area, buf);
    }
}
