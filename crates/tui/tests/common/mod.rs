//! Common test utilities for TUI side effects and app flow tests.
//!
//! This module provides shared helper functions for testing the TUI's async
//! side effect handlers against a wiremock gateway, plus small builders for
//! driving the `App` state machine without a terminal.
//!
//! # Invariants
//! - All mock servers use random available ports to avoid conflicts
//! - Each test gets its own isolated mock server, action channel and config file
//!
//! # What this does NOT handle
//! - TUI rendering or terminal management

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gateway_client::GatewayClient;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::sync::{Mutex, mpsc};

pub use gateway_config::ConfigManager;
pub use gateway_tui::action::Action;
pub use gateway_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wrap a payload in the gateway's success envelope.
pub fn ok_envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// A failed envelope with a server-provided message.
pub fn failed_envelope(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

/// Test harness for side effects testing.
///
/// Provides a mock HTTP server, action channel, and shared client
/// for testing async side effect handlers in isolation.
pub struct SideEffectsTestHarness {
    /// The mock HTTP server for intercepting API calls
    pub mock_server: MockServer,
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Sender for actions (clone this to pass to handlers)
    pub action_tx: Sender<Action>,
    /// Shared gateway client pointing to the mock server
    pub client: SharedClient,
    /// Configuration manager backed by a temp file
    pub config_manager: Arc<Mutex<ConfigManager>>,
    pub task_tracker: TaskTracker,
    /// Keeps the config directory alive for the test's duration
    pub config_dir: TempDir,
}

impl SideEffectsTestHarness {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = create_test_client(&mock_server.uri());
        let config_dir = TempDir::new().expect("Failed to create temp dir");
        let config_manager = Arc::new(Mutex::new(ConfigManager::new_with_path(
            config_dir.path().join("config.json"),
        )));

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            config_manager,
            task_tracker: TaskTracker::new(),
            config_dir,
        }
    }

    /// Dispatch an action. The dispatcher must return promptly because all
    /// network work happens in spawned tasks.
    pub async fn dispatch(&self, action: Action) {
        let handle_future = handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.config_manager.clone(),
            self.task_tracker.clone(),
        );
        if tokio::time::timeout(Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!("handle_side_effects blocked instead of spawning a task");
        }
    }

    /// Expect a specific action within a timeout.
    pub async fn expect_action(&mut self, timeout_ms: u64) -> Action {
        tokio::time::timeout(Duration::from_millis(timeout_ms), self.action_rx.recv())
            .await
            .expect("Timeout waiting for action")
            .expect("Channel closed while waiting for action")
    }

    /// Assert that nothing arrives within `timeout_ms`.
    pub async fn expect_silence(&mut self, timeout_ms: u64) {
        if let Ok(Some(action)) =
            tokio::time::timeout(Duration::from_millis(timeout_ms), self.action_rx.recv()).await
        {
            panic!("Unexpected action: {action:?}");
        }
    }
}

/// Create a test client pointing to the mock server.
pub fn create_test_client(mock_uri: &str) -> SharedClient {
    let client = GatewayClient::builder()
        .base_url(mock_uri.to_string())
        .api_token(secrecy::SecretString::new("test-token".to_string().into()))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");
    Arc::new(client)
}

pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn shift_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn user_json(id: i64, username: &str, activity: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "status": "active",
        "quota": 1000,
        "used_quota": 10,
        "request_count": 5,
        "activity": activity
    })
}
