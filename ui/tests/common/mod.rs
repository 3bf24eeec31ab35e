//! Shared harness for panel integration tests: a wiremock server plus a
//! kittest harness rendering the users panel over real application state.

use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::state::State;
use roster_ui::widgets::users_panel;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    pub mock_server: MockServer,
    pub harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Start a mock server answering the initial list load with `initial`,
    /// exactly once, then build the harness. The first frame already issues
    /// that request, so the mock must exist before the harness does.
    pub async fn new(initial: serde_json::Value) -> TestCtx<'a> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        mount_list_once(&mock_server, initial).await;

        let state = State::test(mock_server.uri());
        let harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                users_panel(&mut state.ctx, ui);
            },
            state,
        );

        TestCtx {
            mock_server,
            harness,
        }
    }

    /// Step frames with short sleeps in between so in-flight responses get
    /// published and polled.
    pub async fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    }
}

/// Mount a list mock that serves `users` exactly once, then stops matching
/// so a later mount can take over. The single expected call is verified when
/// the server shuts down.
#[allow(dead_code)]
pub async fn mount_list_once(server: &MockServer, users: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a list mock for the reload phase, expected to be hit exactly once.
#[allow(dead_code)]
pub async fn mount_list_reload(server: &MockServer, users: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .expect(1)
        .mount(server)
        .await;
}

/// A user row in the wire format the server speaks.
#[allow(dead_code)]
pub fn user_json(
    user_id: i64,
    user_name: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    user_status: &str,
    department: &str,
) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "user_name": user_name,
        "first_name": first_name,
        "last_name": last_name,
        "email": email,
        "user_status": user_status,
        "department": department,
    })
}
