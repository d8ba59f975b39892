use super::*;
use crate::models::{PendingAction, TransferKind};
use crate::ui::ActivePanel;

impl App {
    // === 보기 ===

    /// 숨김 파일 표시 토글
    ///
    /// 목록 읽기에 실패해도 플래그 자체는 바뀐다 (이전 내용 유지).
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        let _ = self.reload_current();
        self.set_notice("Toggled hidden files");
    }

    /// 현재 디렉토리 새로고침
    pub fn refresh(&mut self) {
        match self.reload_current() {
            Ok(()) => self.set_notice("Refreshed"),
            Err(e) => self.set_notice(format!("Refresh error: {}", e)),
        }
    }

    // === 북마크 ===

    /// 현재 디렉토리를 북마크로 추가
    ///
    /// 이미 있는 경로는 조용히 무시한다.
    pub fn add_bookmark(&mut self) {
        let path = self.current_dir().to_string_lossy().to_string();
        if self.sidebar.items.contains(&path) {
            return;
        }
        self.sidebar.items.push(path);
        self.sidebar.ensure_visible();
        self.save_bookmarks();
        self.set_notice("Bookmark added");
    }

    /// 선택된 북마크 삭제 확인 요청 ('d')
    ///
    /// 북마크 패널 전용. "Home"은 삭제할 수 없으므로 확인조차 띄우지 않는다.
    pub fn delete_bookmark_intent(&mut self) {
        if self.focus != ActivePanel::Bookmarks {
            return;
        }
        let Some(item) = self.sidebar.selected() else {
            return;
        };
        if item == "Home" {
            return;
        }

        let base = Path::new(item)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| item.to_string());
        self.modal = ModalState::confirm(
            format!("Delete bookmark \"{}\"? (y/n)", base),
            PendingAction::DeleteBookmark(self.sidebar.cursor),
        );
    }

    /// 선택된 파일/디렉토리 삭제 확인 요청 (Delete)
    pub fn delete_entry_intent(&mut self) {
        if self.focus != ActivePanel::Files {
            return;
        }
        let Some(name) = self.filelist.selected() else {
            return;
        };
        self.modal = ModalState::confirm(
            format!("Delete \"{}\"? (y/n)", name),
            PendingAction::DeleteEntry(self.filelist.cursor),
        );
    }

    /// 북마크 목록 저장 (실패는 무시)
    fn save_bookmarks(&self) {
        let _ = self.bookmark_store.save(&self.sidebar.items);
    }

    // === 확인 응답 ===

    /// 확인 승인 ('y') - 대기 작업을 정확히 한 번 실행하고 결과를 알림으로
    pub fn confirm_accept(&mut self) {
        let Some(action) = self.modal.pending_action() else {
            return;
        };

        match action {
            PendingAction::DeleteBookmark(index) => {
                let valid = self
                    .sidebar
                    .items
                    .get(index)
                    .is_some_and(|item| item != "Home");
                if !valid {
                    self.modal.dismiss();
                    return;
                }
                self.sidebar.remove_item(index);
                self.save_bookmarks();
                self.set_notice("Bookmark deleted");
            }
            PendingAction::DeleteEntry(index) => {
                let Some(name) = self.filelist.items.get(index).cloned() else {
                    self.modal.dismiss();
                    return;
                };
                let full_path = self.current_dir().join(&name);
                match self.filesystem.delete_entry(&full_path) {
                    Ok(()) => {
                        let _ = self.reload_current();
                        self.set_notice(format!("Deleted: {}", name));
                    }
                    Err(e) => self.set_notice(format!("Delete error: {}", e)),
                }
            }
        }
    }

    /// 확인 취소 ('n' / Escape) - 부수 효과 없음
    pub fn confirm_cancel(&mut self) {
        self.modal.dismiss();
    }

    /// Escape - 모달이 떠 있으면 닫고, 없으면 종료
    pub fn dismiss_or_quit(&mut self) {
        if self.modal.is_idle() {
            self.quit();
        } else {
            self.modal.dismiss();
        }
    }

    // === 이동/복사 ===

    /// 선택 항목을 이동 대상으로 지정 ('m') - 파일 패널 전용
    pub fn mark_move(&mut self) {
        if self.focus != ActivePanel::Files {
            return;
        }
        let Some(name) = self.filelist.selected() else {
            return;
        };
        let name = name.to_string();
        let full_path = self.current_dir().join(&name);
        self.staging.mark_move(full_path);
        self.set_notice(format!("Marked for move: {}", name));
    }

    /// 선택 항목을 복사 대상으로 지정 ('c') - 파일 패널 전용
    pub fn mark_copy(&mut self) {
        if self.focus != ActivePanel::Files {
            return;
        }
        let Some(name) = self.filelist.selected() else {
            return;
        };
        let name = name.to_string();
        let full_path = self.current_dir().join(&name);
        self.staging.mark_copy(full_path);
        self.set_notice(format!("Marked for copy: {}", name));
    }

    /// 대기 중인 이동/복사를 현재 디렉토리로 붙여넣기 ('p')
    ///
    /// 레지스터는 성공/실패와 무관하게 비워진다 - 재시도하려면 다시
    /// 마크해야 한다. 무장된 레지스터가 없으면 no-op.
    pub fn paste(&mut self) {
        let Some((src, kind)) = self.staging.consume() else {
            return;
        };

        let dest_dir = self.current_dir();
        let Some(base) = src.file_name() else {
            self.set_notice(format!("Paste error: invalid source {}", src.display()));
            return;
        };
        let dest = dest_dir.join(base);

        let result = match kind {
            TransferKind::Move => self.filesystem.move_entry(&src, &dest),
            TransferKind::Copy => self.filesystem.copy_tree(&src, &dest),
        };

        match (kind, result) {
            (TransferKind::Move, Ok(())) => {
                let _ = self.reload_current();
                self.set_notice(format!("Moved to: {}", dest_dir.display()));
            }
            (TransferKind::Copy, Ok(())) => {
                let _ = self.reload_current();
                self.set_notice(format!("Copied to: {}", dest_dir.display()));
            }
            (TransferKind::Move, Err(e)) => self.set_notice(format!("Move error: {}", e)),
            (TransferKind::Copy, Err(e)) => self.set_notice(format!("Copy error: {}", e)),
        }
    }
}
