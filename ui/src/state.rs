use roster_business::BusinessConfig;
use roster_states::StateCtx;

use crate::widgets::UsersPanelState;

/// The main application state.
pub struct State {
    /// The state context for configuration and view state.
    pub ctx: StateCtx,
}

impl State {
    fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        ctx.add_state(config);
        ctx.add_state(UsersPanelState::new());

        Self { ctx }
    }

    /// State wired to an explicit base URL, for tests against a mock server.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}
