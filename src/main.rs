mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use app::App;
use crate::core::actions::resolve_action;
use crate::core::events::{spawn_input_thread, InputEvent};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Instant;
use ui::{ActivePanel, LayoutMode, ModalBox, Panel, PanelStatus, StatusBar, WarningScreen};
use utils::error::Result;

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app + input producer
    let mut app = App::new()?;
    let events = spawn_input_thread();

    // Run app
    let res = run_app(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &Receiver<InputEvent>,
) -> Result<()> {
    loop {
        // 이미 지난 알림은 그리기 전에 정리
        app.expire_notice(Instant::now());

        terminal.draw(|f| {
            let size = f.area();
            app.layout.update(size);
            app.sync_viewports();

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new().current_size(width, height);
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => {
                    render_main_ui(f, app);
                }
            }
        })?;

        // 알림이 떠 있으면 남은 시간만큼만 입력을 기다리고,
        // 없으면 다음 이벤트까지 블로킹한다. 타이머는 매 반복마다
        // 남은 시간으로 새로 계산된다.
        let waited = match app.notice_remaining(Instant::now()) {
            Some(remaining) => events.recv_timeout(remaining),
            None => events.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match waited {
            Ok(InputEvent::Key(key)) => {
                if let Some(action) = resolve_action(app.modal.is_confirm(), key.modifiers, key.code)
                {
                    app.execute_action(action);
                }
            }
            // 리사이즈는 다음 프레임의 레이아웃 재계산으로 처리됨
            Ok(InputEvent::Resize(_, _)) => {}
            // 타이머 만료 - 알림 닫기
            Err(RecvTimeoutError::Timeout) => app.expire_notice(Instant::now()),
            // 입력 스트림 종료는 무조건 종료로 취급
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 북마크 사이드바 렌더링
fn render_sidebar(f: &mut ratatui::Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let labels = app.sidebar_labels();
    let panel = Panel::new()
        .items(&labels)
        .cursor(app.sidebar.cursor)
        .scroll_offset(app.sidebar.scroll_offset)
        .status(if app.focus == ActivePanel::Bookmarks {
            PanelStatus::Active
        } else {
            PanelStatus::Inactive
        });
    f.render_widget(panel, area);
}

/// 파일 목록 패널 렌더링
fn render_filelist(f: &mut ratatui::Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let title = app.current_dir().to_string_lossy().to_string();
    let panel = Panel::new()
        .title(&title)
        .items(&app.filelist.items)
        .dir_flags(&app.filelist_dirs)
        .cursor(app.filelist.cursor)
        .scroll_offset(app.filelist.scroll_offset)
        .bordered(true)
        .status(if app.focus == ActivePanel::Files {
            PanelStatus::Active
        } else {
            PanelStatus::Inactive
        });
    f.render_widget(panel, area);
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas().clone();

    render_sidebar(f, app, areas.sidebar);
    render_filelist(f, app, areas.file_panel);

    let status = app.status_text();
    f.render_widget(StatusBar::new().text(&status), areas.status_bar);

    // 모달은 항상 마지막에 겹쳐 그린다
    if let Some(text) = app.modal.text() {
        f.render_widget(ModalBox::new(text), f.area());
    }
}
