#![allow(dead_code)]
//! 키 입력 디스패처
//!
//! 키 이벤트와 모달 상태로부터 액션 하나를 결정하는 순수 함수.
//! 패널 범위 제한(파일 패널 전용 키 등)은 실행 단계에서 적용된다.

use crossterm::event::{KeyCode, KeyModifiers};

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    Activate,
    GoToParent,
    SwitchPanel,
    // File Operations
    DeleteEntryIntent,
    MarkMove,
    MarkCopy,
    Paste,
    Refresh,
    // Bookmarks
    AddBookmark,
    DeleteBookmarkIntent,
    // View
    ToggleHidden,
    // System
    DismissOrQuit,
    Quit,
    // Confirm 모드 응답
    ConfirmAccept,
    ConfirmCancel,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 일반 모드 키 바인딩 테이블
pub static KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        code: KeyCode::Tab,
        modifiers: None,
        action: Action::SwitchPanel,
    },
    KeyBinding {
        code: KeyCode::Up,
        modifiers: None,
        action: Action::MoveUp,
    },
    KeyBinding {
        code: KeyCode::Down,
        modifiers: None,
        action: Action::MoveDown,
    },
    KeyBinding {
        code: KeyCode::Right,
        modifiers: None,
        action: Action::Activate,
    },
    KeyBinding {
        code: KeyCode::Enter,
        modifiers: None,
        action: Action::Activate,
    },
    KeyBinding {
        code: KeyCode::Left,
        modifiers: None,
        action: Action::GoToParent,
    },
    KeyBinding {
        code: KeyCode::Delete,
        modifiers: None,
        action: Action::DeleteEntryIntent,
    },
    KeyBinding {
        code: KeyCode::Esc,
        modifiers: None,
        action: Action::DismissOrQuit,
    },
    KeyBinding {
        code: KeyCode::Char('c'),
        modifiers: Some(KeyModifiers::CONTROL),
        action: Action::Quit,
    },
    KeyBinding {
        code: KeyCode::Char('.'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::ToggleHidden,
    },
    KeyBinding {
        code: KeyCode::Char('a'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::AddBookmark,
    },
    KeyBinding {
        code: KeyCode::Char('d'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::DeleteBookmarkIntent,
    },
    KeyBinding {
        code: KeyCode::Char('m'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::MarkMove,
    },
    KeyBinding {
        code: KeyCode::Char('c'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::MarkCopy,
    },
    KeyBinding {
        code: KeyCode::Char('p'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::Paste,
    },
    KeyBinding {
        code: KeyCode::Char('r'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::Refresh,
    },
];

/// 일반 모드 바인딩 테이블 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    Some(required) => required == modifiers,
                    None => true,
                }
        })
        .map(|binding| binding.action)
}

/// 키 이벤트를 액션으로 해석
///
/// Confirm 모달이 떠 있으면 y/n/Esc만 인식하고 나머지 키는 무시한다.
/// 그 외에는 일반 바인딩 테이블을 조회한다.
pub fn resolve_action(in_confirm: bool, modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    if in_confirm {
        return match code {
            KeyCode::Char('y') => Some(Action::ConfirmAccept),
            KeyCode::Char('n') | KeyCode::Esc => Some(Action::ConfirmCancel),
            _ => None,
        };
    }
    find_action(modifiers, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_bindings() {
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Tab),
            Some(Action::SwitchPanel)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Up),
            Some(Action::MoveUp)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Down),
            Some(Action::MoveDown)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::Activate)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Right),
            Some(Action::Activate)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Left),
            Some(Action::GoToParent)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Delete),
            Some(Action::DeleteEntryIntent)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Char('.')),
            Some(Action::ToggleHidden)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Char('p')),
            Some(Action::Paste)
        );
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_marks_copy() {
        assert_eq!(
            resolve_action(false, KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Char('c')),
            Some(Action::MarkCopy)
        );
    }

    #[test]
    fn test_escape_is_dismiss_or_quit() {
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Esc),
            Some(Action::DismissOrQuit)
        );
    }

    #[test]
    fn test_confirm_mode_accepts_only_replies() {
        assert_eq!(
            resolve_action(true, KeyModifiers::NONE, KeyCode::Char('y')),
            Some(Action::ConfirmAccept)
        );
        assert_eq!(
            resolve_action(true, KeyModifiers::NONE, KeyCode::Char('n')),
            Some(Action::ConfirmCancel)
        );
        assert_eq!(
            resolve_action(true, KeyModifiers::NONE, KeyCode::Esc),
            Some(Action::ConfirmCancel)
        );

        // 그 외의 키는 전부 무시
        assert_eq!(resolve_action(true, KeyModifiers::NONE, KeyCode::Tab), None);
        assert_eq!(
            resolve_action(true, KeyModifiers::NONE, KeyCode::Char('p')),
            None
        );
        assert_eq!(
            resolve_action(true, KeyModifiers::NONE, KeyCode::Delete),
            None
        );
        assert_eq!(resolve_action(true, KeyModifiers::NONE, KeyCode::Up), None);
    }

    #[test]
    fn test_unbound_key_resolves_to_none() {
        assert_eq!(
            resolve_action(false, KeyModifiers::NONE, KeyCode::Char('z')),
            None
        );
        assert_eq!(resolve_action(false, KeyModifiers::NONE, KeyCode::F(5)), None);
    }
}
