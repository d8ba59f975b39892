#![allow(dead_code)]

use crate::core::actions::Action;
use crate::models::{ModalState, PanelState, StagingRegisters};
use crate::system::{BookmarkStore, FileSystem};
use crate::ui::{ActivePanel, LayoutManager};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

mod navigation;
mod operations;

/// 앱 상태
///
/// 패널 두 개, 대기 레지스터, 모달, 숨김 플래그 등 세션 전체 상태를
/// 한 곳에 모은다. 상태 변경은 전부 메인 스레드의 `execute_action`
/// 경로를 통해서만 일어난다.
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 포커스된 패널
    pub focus: ActivePanel,
    /// 북마크 사이드바 패널
    pub sidebar: PanelState,
    /// 파일 목록 패널
    pub filelist: PanelState,
    /// 파일 패널 항목별 디렉토리 여부 (렌더 색상용, items와 같은 길이)
    pub filelist_dirs: Vec<bool>,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 북마크 저장소
    bookmark_store: BookmarkStore,
    /// 이동/복사 대기 레지스터
    pub staging: StagingRegisters,
    /// 모달 상태
    pub modal: ModalState,
    /// 숨김 파일 표시 여부
    pub show_hidden: bool,
    /// 홈 디렉토리 ("Home" 북마크의 해석 결과)
    home_dir: PathBuf,
    /// 알림 표시 시간
    notice_duration: Duration,
}

impl App {
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let bookmark_store = BookmarkStore::new();
        Self::build(home_dir.clone(), home_dir, bookmark_store)
    }

    /// 공통 초기화
    ///
    /// 초기 디렉토리 목록 읽기 실패는 치명적이지 않다 - 빈 패널로 시작한다.
    fn build(
        home_dir: PathBuf,
        start_dir: PathBuf,
        bookmark_store: BookmarkStore,
    ) -> Result<Self> {
        let bookmarks = bookmark_store.load(&home_dir);

        let mut sidebar = PanelState::new(None, false);
        sidebar.set_content(bookmarks);
        sidebar.focused = true;

        let filelist = PanelState::new(Some(start_dir.clone()), true);

        let mut app = Self {
            should_quit: false,
            layout: LayoutManager::new(),
            focus: ActivePanel::Bookmarks,
            sidebar,
            filelist,
            filelist_dirs: Vec::new(),
            filesystem: FileSystem::new(),
            bookmark_store,
            staging: StagingRegisters::new(),
            modal: ModalState::Idle,
            show_hidden: false,
            home_dir,
            notice_duration: crate::models::modal::NOTICE_DURATION,
        };
        let _ = app.load_directory(start_dir);
        Ok(app)
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(home: &Path, start_dir: &Path) -> Self {
        let bookmark_store = BookmarkStore::with_store_path(home.join("bookmarks.json"));
        Self::build(home.to_path_buf(), start_dir.to_path_buf(), bookmark_store)
            .expect("test app construction")
    }

    /// 종료
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 종료 상태 확인
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 파일 패널의 현재 디렉토리
    pub fn current_dir(&self) -> PathBuf {
        self.filelist
            .path
            .clone()
            .unwrap_or_else(|| self.home_dir.clone())
    }

    /// 홈 디렉토리
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// 액션 실행 (단일 진입점)
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::DismissOrQuit => self.dismiss_or_quit(),
            Action::SwitchPanel => self.switch_panel(),
            Action::MoveUp => self.move_selection_up(),
            Action::MoveDown => self.move_selection_down(),
            Action::Activate => self.activate_selected(),
            Action::GoToParent => self.go_to_parent(),
            Action::ToggleHidden => self.toggle_hidden(),
            Action::AddBookmark => self.add_bookmark(),
            Action::DeleteBookmarkIntent => self.delete_bookmark_intent(),
            Action::DeleteEntryIntent => self.delete_entry_intent(),
            Action::MarkMove => self.mark_move(),
            Action::MarkCopy => self.mark_copy(),
            Action::Paste => self.paste(),
            Action::Refresh => self.refresh(),
            Action::ConfirmAccept => self.confirm_accept(),
            Action::ConfirmCancel => self.confirm_cancel(),
        }
    }

    // === 모달 헬퍼 ===

    /// 알림 표시 (기존 모달은 대체됨)
    pub(crate) fn set_notice(&mut self, text: impl Into<String>) {
        self.modal = ModalState::notice(text, Instant::now(), self.notice_duration);
    }

    /// 만료된 알림 정리 (매 루프 반복마다 호출)
    pub fn expire_notice(&mut self, now: Instant) {
        self.modal.expire(now);
    }

    /// 활성 알림의 남은 표시 시간 (Confirm/Idle이면 None)
    pub fn notice_remaining(&self, now: Instant) -> Option<Duration> {
        self.modal.notice_remaining(now)
    }

    // === 렌더링 지원 ===

    /// 레이아웃 영역 높이를 패널에 반영
    pub fn sync_viewports(&mut self) {
        let sidebar_height = self.layout.areas().sidebar.height;
        let file_height = self.layout.areas().file_panel.height;
        self.sidebar.set_viewport_height(sidebar_height);
        self.filelist.set_viewport_height(file_height);
    }

    /// 사이드바 표시 라벨 (경로 북마크는 마지막 구성요소만)
    pub fn sidebar_labels(&self) -> Vec<String> {
        self.sidebar
            .items
            .iter()
            .map(|item| {
                if item == "Home" {
                    item.clone()
                } else {
                    Path::new(item)
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_else(|| item.clone())
                }
            })
            .collect()
    }

    /// 상태줄 텍스트
    ///
    /// 파일 패널에 포커스가 있고 선택이 유효할 때만 항목 정보를 보여준다.
    pub fn status_text(&self) -> String {
        if self.focus == ActivePanel::Files {
            if let Some(name) = self.filelist.selected() {
                let path = self.current_dir().join(name);
                return self.filesystem.status_line(&path);
            }
        }
        " Ready ".to_string()
    }
}
