#![allow(dead_code)]

use std::time::{Duration, Instant};

/// 알림 기본 표시 시간
pub const NOTICE_DURATION: Duration = Duration::from_millis(750);

/// 확인 다이얼로그에 연결된 대기 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// 북마크 삭제 (사이드바 인덱스)
    DeleteBookmark(usize),
    /// 파일/디렉토리 삭제 (파일 패널 인덱스)
    DeleteEntry(usize),
}

/// 모달 오버레이 상태 머신
///
/// Notice는 만료 시각을 가지는 자동 소멸 알림, Confirm은 y/n/Esc 응답을
/// 기다리는 차단형 확인이다. 타이머로 확인이 자동 승인되는 일이 없도록
/// Confirm에는 만료가 없다.
#[derive(Debug, Clone)]
pub enum ModalState {
    /// 모달 없음
    Idle,
    /// 자동 소멸 알림
    Notice { text: String, expiry: Instant },
    /// 차단형 확인 (만료 없음)
    Confirm { text: String, action: PendingAction },
}

impl ModalState {
    /// 알림 생성
    pub fn notice(text: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self::Notice {
            text: text.into(),
            expiry: now + duration,
        }
    }

    /// 확인 생성
    pub fn confirm(text: impl Into<String>, action: PendingAction) -> Self {
        Self::Confirm {
            text: text.into(),
            action,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_notice(&self) -> bool {
        matches!(self, Self::Notice { .. })
    }

    pub fn is_confirm(&self) -> bool {
        matches!(self, Self::Confirm { .. })
    }

    /// 표시 텍스트 반환
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Notice { text, .. } | Self::Confirm { text, .. } => Some(text),
        }
    }

    /// 확인에 연결된 작업 반환
    pub fn pending_action(&self) -> Option<PendingAction> {
        match self {
            Self::Confirm { action, .. } => Some(*action),
            _ => None,
        }
    }

    /// 알림 만료까지 남은 시간
    ///
    /// Notice가 아니면 None, 이미 만료됐으면 Duration::ZERO.
    pub fn notice_remaining(&self, now: Instant) -> Option<Duration> {
        match self {
            Self::Notice { expiry, .. } => Some(expiry.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// 만료된 알림을 닫는다. 닫았으면 true.
    ///
    /// Confirm은 만료가 없으므로 건드리지 않는다.
    pub fn expire(&mut self, now: Instant) -> bool {
        if let Self::Notice { expiry, .. } = self {
            if *expiry <= now {
                *self = Self::Idle;
                return true;
            }
        }
        false
    }

    /// 모달을 명시적으로 닫는다 (Escape)
    pub fn dismiss(&mut self) {
        *self = Self::Idle;
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires_once_instant_reached() {
        let now = Instant::now();
        let mut modal = ModalState::notice("Refreshed", now, NOTICE_DURATION);
        assert!(modal.is_notice());

        // 만료 전에는 유지
        assert!(!modal.expire(now));
        assert!(modal.is_notice());

        // 만료 후에는 Idle
        assert!(modal.expire(now + NOTICE_DURATION));
        assert!(modal.is_idle());

        // 두 번째 expire는 아무 일도 하지 않음
        assert!(!modal.expire(now + NOTICE_DURATION));
    }

    #[test]
    fn test_notice_remaining_counts_down() {
        let now = Instant::now();
        let modal = ModalState::notice("msg", now, Duration::from_millis(100));

        assert_eq!(
            modal.notice_remaining(now),
            Some(Duration::from_millis(100))
        );
        assert_eq!(
            modal.notice_remaining(now + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        // 이미 지난 시각이면 ZERO
        assert_eq!(
            modal.notice_remaining(now + Duration::from_millis(200)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_confirm_never_expires() {
        let now = Instant::now();
        let mut modal = ModalState::confirm("Delete \"a\"? (y/n)", PendingAction::DeleteEntry(0));

        assert!(!modal.expire(now + Duration::from_secs(3600)));
        assert!(modal.is_confirm());
        assert_eq!(modal.notice_remaining(now), None);
        assert_eq!(modal.pending_action(), Some(PendingAction::DeleteEntry(0)));
    }

    #[test]
    fn test_dismiss_clears_any_state() {
        let now = Instant::now();

        let mut notice = ModalState::notice("msg", now, NOTICE_DURATION);
        notice.dismiss();
        assert!(notice.is_idle());

        let mut confirm = ModalState::confirm("msg", PendingAction::DeleteBookmark(1));
        confirm.dismiss();
        assert!(confirm.is_idle());
    }
}
