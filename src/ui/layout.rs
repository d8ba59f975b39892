#![allow(dead_code)]
// Layout system - 화면 영역 계산
//
// 좌측 고정폭 북마크 사이드바 + 우측 파일 패널/상태줄.
// 터미널이 최소 크기보다 작으면 경고 모드로 전환.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;
/// 북마크 사이드바 폭
pub const SIDEBAR_WIDTH: u16 = 25;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 일반 모드 (사이드바 + 파일 패널)
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 활성 패널
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    /// 북마크 사이드바
    #[default]
    Bookmarks,
    /// 파일 목록
    Files,
}

impl ActivePanel {
    /// 패널 전환
    pub fn toggle(&mut self) {
        *self = match self {
            ActivePanel::Bookmarks => ActivePanel::Files,
            ActivePanel::Files => ActivePanel::Bookmarks,
        };
    }
}

/// 계산된 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 북마크 사이드바 영역
    pub sidebar: Rect,
    /// 파일 패널 영역
    pub file_panel: Rect,
    /// 상태줄 영역
    pub status_bar: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기로 영역 재계산
    pub fn update(&mut self, size: Rect) {
        self.terminal_size = (size.width, size.height);

        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            self.mode = LayoutMode::TooSmall;
            return;
        }
        self.mode = LayoutMode::Normal;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(size);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(columns[1]);

        self.areas = LayoutAreas {
            sidebar: columns[0],
            file_panel: right[0],
            status_bar: right[1],
        };
    }

    /// 현재 레이아웃 모드
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// 계산된 영역
    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    /// 터미널 크기
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
