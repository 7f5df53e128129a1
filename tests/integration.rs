// SPDX-License-Identifier: MPL-2.0
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::tempdir;
use toastq::config::{self, Config, MIN_REMOVE_DELAY_MS};
use toastq::{JournalEventKind, Manager, Severity, ToastPatch, ToastRequest};

fn fast_config() -> Config {
    Config {
        remove_delay_ms: Some(MIN_REMOVE_DELAY_MS),
        ..Config::default()
    }
}

#[test]
fn full_lifecycle_show_dismiss_purge() {
    let mut manager = Manager::with_config(fast_config());
    let observed_lens = Arc::new(Mutex::new(Vec::new()));

    let observed_in_cb = Arc::clone(&observed_lens);
    let _subscription = manager.subscribe(move |state| {
        observed_in_cb.lock().unwrap().push(state.len());
    });

    let id = manager.show(ToastRequest::success("Image saved"));
    assert!(manager.state().get(id).unwrap().is_open());

    manager.dismiss(id);
    assert!(!manager.state().get(id).unwrap().is_open());
    assert!(manager.state().contains(id), "dismissed toast stays queued");

    std::thread::sleep(Duration::from_millis(MIN_REMOVE_DELAY_MS + 20));
    manager.tick();
    assert!(manager.state().is_empty());

    // Observers saw show, dismiss, and the purge, in order.
    assert_eq!(*observed_lens.lock().unwrap(), vec![1, 1, 0]);
}

#[test]
fn showing_a_second_toast_replaces_the_first() {
    let mut manager = Manager::new();
    manager.show(ToastRequest::success("A"));
    manager.show(ToastRequest::success("B"));

    let toasts = manager.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title(), Some("B"));
    assert!(toasts[0].is_open());
}

#[test]
fn update_transforms_a_toast_without_moving_it() {
    let mut manager = Manager::new();
    let id = manager.show(ToastRequest::loading("Uploading"));

    manager.update(id, ToastPatch::success("Uploaded").with_description("3 files"));

    let toast = manager.state().get(id).unwrap();
    assert_eq!(toast.severity(), Severity::Success);
    assert_eq!(toast.title(), Some("Uploaded"));
    assert_eq!(toast.description(), Some("3 files"));
}

#[test]
fn config_file_drives_manager_behavior() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    config::save_to_path(&fast_config(), &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(
        loaded.remove_delay(),
        Duration::from_millis(MIN_REMOVE_DELAY_MS)
    );

    let mut manager = Manager::with_config(loaded);
    let id = manager.show(ToastRequest::success("configured"));
    manager.dismiss(id);

    std::thread::sleep(Duration::from_millis(MIN_REMOVE_DELAY_MS + 20));
    manager.tick();
    assert!(manager.state().is_empty());
}

#[test]
fn journal_export_captures_the_session() {
    let dir = tempdir().expect("failed to create temporary directory");
    let export_path = dir.path().join("journal.json");

    let mut manager = Manager::new();
    let id = manager.show(ToastRequest::warning("Low disk space"));
    manager.dismiss(id);

    manager
        .journal()
        .export_to_path(&export_path)
        .expect("export should succeed");

    let content = std::fs::read_to_string(&export_path).expect("readable");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let events: Vec<&str> = parsed
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|entry| entry["event"].as_str())
        .collect();
    assert_eq!(events, vec!["shown", "dismissed", "removal_scheduled"]);
}

#[test]
fn dismiss_all_then_clear_leaves_nothing_pending() {
    let mut manager = Manager::new();
    manager.show(ToastRequest::error("broken"));
    manager.dismiss_all();
    assert!(manager.needs_tick());

    manager.clear();
    assert!(manager.state().is_empty());
    assert!(!manager.needs_tick());
    assert!(manager
        .journal()
        .entries()
        .any(|entry| matches!(entry.kind, JournalEventKind::Removed { id: None })));
}
