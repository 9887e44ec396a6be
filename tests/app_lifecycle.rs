//! App wiring between the panel and the API worker channel.

mod common;

use anysettings::api::{command_channel, ApiCommand, ApiEvent};
use anysettings::ui::app::App;
use anysettings::ui::panel::{NoticeKind, PanelIntent, PanelState, UnavailableReason};
use serde_json::json;
use std::time::Duration;

use common::{loaded_app, sample_settings};

#[test]
fn no_credential_never_fetches() {
    let mut app = App::new(Duration::from_secs(4));
    app.mount();

    assert!(!app.panel().is_loading());
    assert!(matches!(
        app.panel(),
        PanelState::Unavailable {
            reason: UnavailableReason::NoCredential,
            ..
        }
    ));

    app.refresh();
    assert!(!app.panel().is_loading());
}

#[test]
fn mount_requests_fetch() {
    let (tx, mut rx) = command_channel();
    let mut app = App::new(Duration::from_secs(4));
    app.set_api_sender(tx);
    app.mount();

    assert!(app.panel().is_loading());
    assert_eq!(rx.try_recv().ok(), Some(ApiCommand::Fetch));

    app.on_api_event(ApiEvent::Fetched(Ok(sample_settings())));
    assert!(app.panel().settings().is_some());
}

#[test]
fn fetch_error_becomes_notice() {
    let (tx, _rx) = command_channel();
    let mut app = App::new(Duration::from_secs(4));
    app.set_api_sender(tx);
    app.mount();
    app.on_api_event(ApiEvent::Fetched(Err("Permission denied".to_string())));

    assert!(!app.panel().is_loading());
    let notice = app.panel().notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Failed to load settings: Permission denied");
}

#[test]
fn save_sends_buffer_once() {
    let (tx, mut rx) = command_channel();
    let mut app = loaded_app();
    app.set_api_sender(tx);

    app.dispatch(PanelIntent::BeginEdit);
    app.dispatch(PanelIntent::Toggle);
    app.save();
    app.save();

    let Ok(ApiCommand::Save { values }) = rx.try_recv() else {
        panic!("expected a save command");
    };
    assert_eq!(values.get("enabled"), Some(&json!(true)));
    assert_eq!(values.get("mode"), Some(&json!("a")));
    assert!(rx.try_recv().is_err());
    assert!(app.panel().is_saving());
}

#[test]
fn save_outside_edit_mode_is_ignored() {
    let (tx, mut rx) = command_channel();
    let mut app = loaded_app();
    app.set_api_sender(tx);
    app.save();
    assert!(rx.try_recv().is_err());
}

#[test]
fn save_result_round_trip() {
    let (tx, _rx) = command_channel();
    let mut app = loaded_app();
    app.set_api_sender(tx);
    app.dispatch(PanelIntent::BeginEdit);
    app.dispatch(PanelIntent::Toggle);
    app.save();

    app.on_api_event(ApiEvent::Saved(Err("Could not reach the server".to_string())));
    assert!(app.panel().is_editing());
    assert!(!app.panel().is_saving());
    assert_eq!(
        app.panel().settings().map(|s| s.values.clone()),
        Some(sample_settings().values)
    );

    app.save();
    let mut values = sample_settings().values;
    values.insert("enabled".to_string(), json!(true));
    app.on_api_event(ApiEvent::Saved(Ok(values.clone())));
    assert!(!app.panel().is_editing());
    assert_eq!(app.panel().settings().map(|s| s.values.clone()), Some(values));
    assert_eq!(
        app.panel().notice().map(|n| n.message.as_str()),
        Some("Settings saved")
    );
}

#[test]
fn closed_worker_fails_save_locally() {
    let (tx, rx) = command_channel();
    drop(rx);
    let mut app = loaded_app();
    app.set_api_sender(tx);
    app.dispatch(PanelIntent::BeginEdit);
    app.save();

    assert!(app.panel().is_editing());
    assert!(!app.panel().is_saving());
    assert_eq!(
        app.panel().notice().map(|n| n.kind),
        Some(NoticeKind::Error)
    );
}

#[test]
fn client_setup_failure_is_not_reported_as_missing_key() {
    let mut app = App::new(Duration::from_secs(4));
    app.mount_without_client("HTTP client error: invalid TLS root".to_string());

    assert!(!app.panel().is_loading());
    assert!(matches!(
        app.panel(),
        PanelState::Unavailable {
            reason: UnavailableReason::ClientFailed { .. },
            ..
        }
    ));
    assert_eq!(app.panel().notice().map(|n| n.kind), Some(NoticeKind::Error));

    app.refresh();
    assert!(!app.panel().is_loading());
}
