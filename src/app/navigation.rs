use super::*;
use crate::ui::ActivePanel;

impl App {
    // === 커서 이동 ===

    /// 포커스된 패널에서 커서 위로
    pub fn move_selection_up(&mut self) {
        self.focused_panel_mut().move_cursor(-1);
    }

    /// 포커스된 패널에서 커서 아래로
    pub fn move_selection_down(&mut self) {
        self.focused_panel_mut().move_cursor(1);
    }

    /// 패널 전환 (Tab)
    pub fn switch_panel(&mut self) {
        self.focus.toggle();
        self.sidebar.focused = self.focus == ActivePanel::Bookmarks;
        self.filelist.focused = self.focus == ActivePanel::Files;
    }

    /// 포커스된 패널 반환 (mutable)
    pub fn focused_panel_mut(&mut self) -> &mut PanelState {
        match self.focus {
            ActivePanel::Bookmarks => &mut self.sidebar,
            ActivePanel::Files => &mut self.filelist,
        }
    }

    /// 포커스된 패널 반환
    pub fn focused_panel(&self) -> &PanelState {
        match self.focus {
            ActivePanel::Bookmarks => &self.sidebar,
            ActivePanel::Files => &self.filelist,
        }
    }

    // === 디렉토리 이동 ===

    /// 파일 패널 내용을 지정 디렉토리로 교체
    ///
    /// 목록 읽기에 실패하면 아무것도 바꾸지 않는다 - 이전 내용 유지.
    pub(crate) fn load_directory(&mut self, path: PathBuf) -> Result<()> {
        let items = self.filesystem.list_directory(&path, self.show_hidden)?;
        self.filelist_dirs = items
            .iter()
            .map(|name| self.filesystem.is_directory(&path.join(name)))
            .collect();
        self.filelist.path = Some(path);
        self.filelist.set_content(items);
        Ok(())
    }

    /// 현재 디렉토리 다시 읽기 (커서/스크롤 리셋)
    pub(crate) fn reload_current(&mut self) -> Result<()> {
        self.load_directory(self.current_dir())
    }

    /// 선택 항목 활성화 (Enter / Right)
    ///
    /// 북마크 패널: 파일 패널을 해당 북마크 디렉토리로 재지정.
    /// 파일 패널: 디렉토리면 진입, 파일이면 외부 프로그램으로 연다.
    pub fn activate_selected(&mut self) {
        match self.focus {
            ActivePanel::Bookmarks => {
                let Some(item) = self.sidebar.selected() else {
                    return;
                };
                let target = self.resolve_bookmark_path(item);
                let _ = self.load_directory(target);
            }
            ActivePanel::Files => {
                let Some(name) = self.filelist.selected() else {
                    return;
                };
                let full_path = self.current_dir().join(name);
                if self.filesystem.is_directory(&full_path) {
                    let _ = self.load_directory(full_path);
                } else {
                    // 외부 열기 실패는 조용히 무시
                    let _ = self.filesystem.open_with_default_app(&full_path);
                }
            }
        }
    }

    /// 상위 디렉토리로 이동 (Left) - 파일 패널 전용, 루트에서는 no-op
    pub fn go_to_parent(&mut self) {
        if self.focus != ActivePanel::Files {
            return;
        }
        let current = self.current_dir();
        let Some(parent) = current.parent() else {
            return;
        };
        let _ = self.load_directory(parent.to_path_buf());
    }

    /// 북마크 항목을 디렉토리 경로로 해석
    pub(crate) fn resolve_bookmark_path(&self, item: &str) -> PathBuf {
        if item == "Home" {
            self.home_dir.clone()
        } else {
            PathBuf::from(item)
        }
    }
}
