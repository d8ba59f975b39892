//! 입력 이벤트 프로듀서
//!
//! 터미널 입력을 블로킹으로 읽어 바운디드 채널로 넘기는 백그라운드 스레드
//! 하나. 이 스레드는 채널에 쓰기만 하고 앱 상태는 절대 건드리지 않는다.
//! 입력 소스가 끝나면 송신단이 drop되어 채널이 닫히고, 소비자는 이를
//! 무조건 종료로 취급한다.

use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread;

/// 메인 루프가 소비하는 입력 이벤트
#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// 채널 버퍼 크기
const EVENT_QUEUE_BOUND: usize = 16;

/// 입력 프로듀서 스레드 시작
pub fn spawn_input_thread() -> Receiver<InputEvent> {
    let (tx, rx) = sync_channel(EVENT_QUEUE_BOUND);

    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if tx.send(InputEvent::Key(key)).is_err() {
                    break;
                }
            }
            Ok(Event::Resize(width, height)) => {
                if tx.send(InputEvent::Resize(width, height)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            // 입력 스트림 종료 - 송신단을 닫아 소비자에게 알린다
            Err(_) => break,
        }
    });

    rx
}
