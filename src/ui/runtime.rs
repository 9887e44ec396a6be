use crate::api::{command_channel, run_worker, SettingsClient};
use crate::config::{Config, SecureString};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the interactive settings panel until the user quits.
///
/// Without a key no API worker is started, so the panel can never issue a
/// request.
pub fn run(config: &Config, key: Option<SecureString>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let tick_rate = Duration::from_millis(config.ui.tick_ms.max(1));
    let mut app = App::new(Duration::from_secs(config.ui.notice_seconds));

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let client = key.map(|key| SettingsClient::new(&config.server, &config.auth, &key));
    match client {
        Some(Ok(client)) => {
            let (tx, rx) = command_channel();
            let event_tx = events.sender();
            runtime.spawn(run_worker(client, rx, move |event| {
                let _ = event_tx.send(AppEvent::Api(event));
            }));
            app.set_api_sender(tx);
            app.mount();
        }
        Some(Err(err)) => app.mount_without_client(err.user_message()),
        None => app.mount(),
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
