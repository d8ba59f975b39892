#![allow(dead_code)]
// Panel component - 목록 패널 컴포넌트
//
// 북마크/파일 목록 표시, 커서 강조, 테두리 렌더링

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

/// 패널 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Inactive,
    Active,
}

/// 목록 패널 컴포넌트
pub struct Panel<'a> {
    /// 패널 제목 (경로) - 테두리가 있을 때만 표시
    title: &'a str,
    /// 패널 상태
    status: PanelStatus,
    /// 표시 항목
    items: &'a [String],
    /// 항목별 디렉토리 여부 (None이면 전부 디렉토리 취급)
    dir_flags: Option<&'a [bool]>,
    /// 커서 위치
    cursor: usize,
    /// 스크롤 오프셋
    scroll_offset: usize,
    /// 테두리 여부
    bordered: bool,
    /// 활성 테두리 색상
    active_border_color: Color,
    /// 비활성 테두리 색상
    inactive_border_color: Color,
    /// 디렉토리 색상
    directory_color: Color,
    /// 파일 색상
    file_color: Color,
    /// 비활성 패널 텍스트 색상
    dimmed_color: Color,
}

impl<'a> Default for Panel<'a> {
    fn default() -> Self {
        Self {
            title: "",
            status: PanelStatus::default(),
            items: &[],
            dir_flags: None,
            cursor: 0,
            scroll_offset: 0,
            bordered: false,
            active_border_color: Color::White,
            inactive_border_color: Color::DarkGray,
            directory_color: Color::White,
            file_color: Color::Gray,
            dimmed_color: Color::DarkGray,
        }
    }
}

impl<'a> Panel<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 제목 설정
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// 패널 상태 설정
    pub fn status(mut self, status: PanelStatus) -> Self {
        self.status = status;
        self
    }

    /// 표시 항목 설정
    pub fn items(mut self, items: &'a [String]) -> Self {
        self.items = items;
        self
    }

    /// 항목별 디렉토리 여부 설정
    pub fn dir_flags(mut self, flags: &'a [bool]) -> Self {
        self.dir_flags = Some(flags);
        self
    }

    /// 커서 위치 설정
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// 스크롤 오프셋 설정
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// 테두리 여부 설정
    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// 항목이 디렉토리인지 판단
    fn is_dir(&self, index: usize) -> bool {
        match self.dir_flags {
            Some(flags) => flags.get(index).copied().unwrap_or(false),
            None => true,
        }
    }

    /// 항목 한 줄의 스타일 결정
    fn row_style(&self, index: usize) -> Style {
        if self.status == PanelStatus::Inactive {
            // 비활성 패널은 전체를 흐리게
            return Style::default().fg(self.dimmed_color);
        }

        let mut style = if self.is_dir(index) {
            Style::default().fg(self.directory_color)
        } else {
            Style::default().fg(self.file_color)
        };
        if index == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

/// 표시 폭에 맞춰 문자열 자르기
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result
}

impl Widget for Panel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if self.bordered {
            let border_color = match self.status {
                PanelStatus::Active => self.active_border_color,
                PanelStatus::Inactive => self.inactive_border_color,
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(truncate_to_width(self.title, area.width as usize));
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let visible = inner.height as usize;
        for row in 0..visible {
            let index = row + self.scroll_offset;
            let Some(item) = self.items.get(index) else {
                break;
            };

            // 좌우 한 칸 여백
            let max_width = (inner.width as usize).saturating_sub(2);
            let text = truncate_to_width(item, max_width);
            buf.set_string(
                inner.x + 1,
                inner.y + row as u16,
                text,
                self.row_style(index),
            );
        }
    }
}
