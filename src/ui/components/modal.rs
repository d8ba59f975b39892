#![allow(dead_code)]
// Modal component - 모달 오버레이 컴포넌트
//
// 알림/확인 공용 중앙 박스. 내용에 맞춰 폭을 정하고 배경을 지운다.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 모달 박스 최소 폭
const MIN_MODAL_WIDTH: u16 = 20;
/// 모달 박스 높이
const MODAL_HEIGHT: u16 = 5;
/// 텍스트 좌우 여백 (테두리 포함)
const TEXT_INSET: u16 = 3;

/// 모달 박스 컴포넌트
pub struct ModalBox<'a> {
    /// 표시 텍스트
    text: &'a str,
    /// 테두리 색상
    border_color: Color,
    /// 텍스트 색상
    text_color: Color,
}

impl<'a> Default for ModalBox<'a> {
    fn default() -> Self {
        Self {
            text: "",
            border_color: Color::White,
            text_color: Color::White,
        }
    }
}

impl<'a> ModalBox<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    /// 테두리 색상 설정
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// 텍스트 색상 설정
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// 화면 중앙의 박스 영역 계산
    fn modal_area(&self, area: Rect) -> Rect {
        let text_width = self.text.width() as u16;
        let width = (text_width + TEXT_INSET * 2)
            .max(MIN_MODAL_WIDTH)
            .min(area.width);
        let height = MODAL_HEIGHT.min(area.height);

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for ModalBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let modal_area = self.modal_area(area);

        // 패널 위에 겹쳐 그리므로 먼저 배경을 지운다
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));
        block.render(modal_area, buf);

        if modal_area.height >= 3 && modal_area.width > TEXT_INSET * 2 {
            let max_width = (modal_area.width - TEXT_INSET * 2) as usize;
            let mut text = self.text.to_string();
            while text.width() > max_width {
                text.pop();
            }
            buf.set_string(
                modal_area.x + TEXT_INSET,
                modal_area.y + modal_area.height / 2,
                text,
                Style::default().fg(self.text_color),
            );
        }
    }
}
