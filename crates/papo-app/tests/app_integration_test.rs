//! End-to-end tests for the App state machine.
//!
//! Drives full event sequences through [`App`] and asserts on the
//! resulting actions and observable state, without a terminal or network.

use std::time::{Duration, Instant};

use papo_app::{App, AppAction, AppEvent, KeyInput, TOAST_DURATION};
use papo_client::ConnState;
use papo_proto::{Inbound, MessageKind};

fn app_at(base: Instant) -> App {
    App::new("wss://example.test/ws/user_abc123def".into(), base)
}

fn open_app_at(base: Instant) -> App {
    let mut app = app_at(base);
    let _ = app.handle(AppEvent::Connecting);
    let _ = app.handle(AppEvent::Opened);
    app
}

fn submit(app: &mut App, text: &str) -> Vec<AppAction> {
    for c in text.chars() {
        let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
    app.handle(AppEvent::Key(KeyInput::Enter))
}

fn inbound(json: &str) -> Inbound {
    Inbound::from_json(json).unwrap()
}

#[test]
fn connection_lifecycle_drives_status_and_toasts() {
    let base = Instant::now();
    let mut app = app_at(base);
    assert_eq!(app.connection_state(), ConnState::Disconnected);

    let _ = app.handle(AppEvent::Connecting);
    assert_eq!(app.connection_state(), ConnState::Connecting);
    assert_eq!(app.toast_text(), None);

    let _ = app.handle(AppEvent::Opened);
    assert_eq!(app.connection_state(), ConnState::Open);
    assert_eq!(app.toast_text(), Some("Connected to server"));

    let _ = app.handle(AppEvent::Closed);
    assert_eq!(app.connection_state(), ConnState::Closed);
    assert_eq!(app.toast_text(), Some("Disconnected from server"));
}

#[test]
fn transcript_preserves_arrival_order() {
    let mut app = open_app_at(Instant::now());

    let _ = submit(&mut app, "first");
    let _ = app.handle(AppEvent::MessageReceived(inbound(r#"{"texto":"second"}"#)));
    let _ = app.handle(AppEvent::MessageReceived(inbound(
        r#"{"tipo":"sistema","texto":"third"}"#,
    )));
    let _ = submit(&mut app, "fourth");

    let entries = app.transcript().entries();
    let kinds: Vec<MessageKind> = entries.iter().map(|e| e.kind).collect();
    let bodies: Vec<&str> = entries.iter().map(|e| e.body.as_str()).collect();

    assert_eq!(
        kinds,
        [MessageKind::Sent, MessageKind::Received, MessageKind::System, MessageKind::Sent]
    );
    assert_eq!(bodies, ["first", "second", "third", "fourth"]);
}

#[test]
fn welcome_survives_system_notices_until_first_chat_message() {
    let mut app = open_app_at(Instant::now());
    assert!(app.transcript().has_welcome());

    let _ = app.handle(AppEvent::MessageReceived(inbound(
        r#"{"tipo":"sistema","texto":"bem-vindo ao chat"}"#,
    )));
    assert!(app.transcript().has_welcome());

    let _ = app.handle(AppEvent::MessageReceived(inbound(r#"{"texto":"oi"}"#)));
    assert!(!app.transcript().has_welcome());
}

#[test]
fn send_is_rejected_in_every_non_open_state() {
    for events in [
        vec![],
        vec![AppEvent::Connecting],
        vec![AppEvent::Connecting, AppEvent::Opened, AppEvent::Closed],
    ] {
        let mut app = app_at(Instant::now());
        for event in events {
            let _ = app.handle(event);
        }

        let actions = submit(&mut app, "oi");
        assert!(!actions.contains(&AppAction::Send { body: "oi".into() }));
        assert_eq!(app.toast_text(), Some("Not connected to server"));
    }
}

#[test]
fn send_resumes_after_reopen() {
    let mut app = open_app_at(Instant::now());
    let _ = app.handle(AppEvent::Closed);
    let _ = submit(&mut app, "lost");

    let _ = app.handle(AppEvent::Connecting);
    let _ = app.handle(AppEvent::Opened);
    let actions = submit(&mut app, "back");
    assert!(actions.contains(&AppAction::Send { body: "back".into() }));
}

#[test]
fn whitespace_only_input_is_not_sent() {
    let mut app = open_app_at(Instant::now());
    let actions = submit(&mut app, "   ");

    assert!(!actions.iter().any(|a| matches!(a, AppAction::Send { .. })));
    assert!(app.transcript().entries().is_empty());
    assert!(app.input_buffer().is_empty());
}

#[test]
fn sent_bodies_are_trimmed() {
    let mut app = open_app_at(Instant::now());
    let actions = submit(&mut app, "  oi  ");

    assert!(actions.contains(&AppAction::Send { body: "oi".into() }));
    assert_eq!(app.transcript().entries()[0].body, "oi");
}

#[test]
fn toast_last_write_wins_across_event_sources() {
    let base = Instant::now();
    let mut app = open_app_at(base);
    assert_eq!(app.toast_text(), Some("Connected to server"));

    // A transport error 2s later replaces the toast and restarts its timer
    let _ = app.handle(AppEvent::Tick { now: base + Duration::from_millis(2000) });
    let _ = app.handle(AppEvent::TransportError { message: "io error".into() });
    assert_eq!(app.toast_text(), Some("Connection error"));

    // 3s after the first toast: the replacement is still up
    let _ = app.handle(AppEvent::Tick { now: base + Duration::from_millis(3500) });
    assert_eq!(app.toast_text(), Some("Connection error"));

    // 3s after the replacement: gone
    let _ = app.handle(AppEvent::Tick { now: base + Duration::from_millis(2000) + TOAST_DURATION });
    assert_eq!(app.toast_text(), None);
}

#[test]
fn transport_error_does_not_change_connection_state() {
    let mut app = open_app_at(Instant::now());
    let _ = app.handle(AppEvent::TransportError { message: "io error".into() });

    assert_eq!(app.connection_state(), ConnState::Open);
}

#[test]
fn clear_chat_never_produces_a_send() {
    let mut app = open_app_at(Instant::now());
    let _ = submit(&mut app, "oi");

    let actions = submit(&mut app, "/clear");
    assert!(!actions.iter().any(|a| matches!(a, AppAction::Send { .. })));
    assert!(app.transcript().entries().is_empty());
    assert!(app.transcript().has_welcome());
}

#[test]
fn limpar_goes_to_the_server_unlike_clear() {
    let mut app = open_app_at(Instant::now());
    let actions = submit(&mut app, "/limpar");

    assert!(actions.contains(&AppAction::Send { body: "/limpar".into() }));
}

#[test]
fn install_offer_is_one_shot() {
    let mut app = open_app_at(Instant::now());
    let _ = app.handle(AppEvent::InstallOffered);

    let first = submit(&mut app, "/install");
    assert!(first.contains(&AppAction::TriggerInstall));

    let _ = app.handle(AppEvent::InstallConsumed { accepted: true });
    assert_eq!(app.toast_text(), Some("App installed"));

    let second = submit(&mut app, "/install");
    assert!(!second.contains(&AppAction::TriggerInstall));
    assert_eq!(app.toast_text(), Some("App already installed or unavailable"));
}

#[test]
fn declined_install_still_spends_the_offer() {
    let mut app = open_app_at(Instant::now());
    let _ = app.handle(AppEvent::InstallOffered);
    let _ = submit(&mut app, "/install");
    let _ = app.handle(AppEvent::InstallConsumed { accepted: false });

    // No toast for a declined flow, and the handle stays spent
    let actions = submit(&mut app, "/install");
    assert!(!actions.contains(&AppAction::TriggerInstall));
}

#[test]
fn menu_local_entries_act_without_sending() {
    let mut app = open_app_at(Instant::now());
    let _ = submit(&mut app, "oi");

    // Tab opens the menu; move to "Clear chat" (index 3) and activate it
    let _ = app.handle(AppEvent::Key(KeyInput::Tab));
    for _ in 0..3 {
        let _ = app.handle(AppEvent::Key(KeyInput::Down));
    }
    let actions = app.handle(AppEvent::Key(KeyInput::Enter));

    assert!(!actions.iter().any(|a| matches!(a, AppAction::Send { .. })));
    assert!(app.transcript().entries().is_empty());
    assert_eq!(app.menu_selection(), None);
}

#[test]
fn menu_shortcut_replaces_draft_and_clears_input() {
    let mut app = open_app_at(Instant::now());
    for c in "draft".chars() {
        let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
    }

    let _ = app.handle(AppEvent::Key(KeyInput::Tab));
    let _ = app.handle(AppEvent::Key(KeyInput::Down));
    let actions = app.handle(AppEvent::Key(KeyInput::Enter));

    // Second entry populates /hora over the draft and submits it
    assert!(actions.contains(&AppAction::Send { body: "/hora".into() }));
    assert_eq!(app.input_buffer(), "");
    assert_eq!(app.input_cursor(), 0);
}

#[test]
fn typing_is_ignored_while_menu_is_open() {
    let mut app = open_app_at(Instant::now());
    let _ = app.handle(AppEvent::Key(KeyInput::Tab));
    let _ = app.handle(AppEvent::Key(KeyInput::Char('x')));

    assert!(app.input_buffer().is_empty());
}

#[test]
fn resize_is_tracked_and_rendered() {
    let mut app = open_app_at(Instant::now());
    let actions = app.handle(AppEvent::Resize(120, 40));

    assert!(actions.contains(&AppAction::Render));
    assert_eq!(app.terminal_size(), (120, 40));
}
