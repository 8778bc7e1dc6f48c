//! Property-based tests for persisted preferences and connection config.
//!
//! Test coverage:
//! - PersistedState: arbitrary preferences survive a save/load cycle
//! - ConfigLoader: any well-formed base URL and token build a config

use proptest::prelude::*;
use secrecy::ExposeSecret;
use tempfile::TempDir;

use gateway_config::{
    ConfigLoader, ConfigManager, LeaderboardMetric, PersistedState, RefreshInterval, TimeWindow,
    UsagePeriod,
};

fn refresh_strategy() -> impl Strategy<Value = RefreshInterval> {
    prop::sample::select(RefreshInterval::ALL.to_vec())
}

fn window_strategy() -> impl Strategy<Value = TimeWindow> {
    prop_oneof![
        Just(TimeWindow::OneHour),
        Just(TimeWindow::SixHours),
        Just(TimeWindow::OneDay),
        Just(TimeWindow::SevenDays),
    ]
}

fn state_strategy() -> impl Strategy<Value = PersistedState> {
    (
        refresh_strategy(),
        refresh_strategy(),
        window_strategy(),
        prop::collection::vec("[a-z0-9\\-\\.]{3,20}", 0..6),
        1u64..=200u64,
        1u64..=10_000_000u64,
    )
        .prop_map(
            |(dashboard_refresh, models_refresh, models_window, models, page_size, rows)| {
                PersistedState {
                    dashboard_refresh,
                    dashboard_period: UsagePeriod::Week,
                    models_refresh,
                    models_window,
                    monitored_models: models,
                    leaderboard_window: models_window,
                    leaderboard_metric: LeaderboardMetric::Quota,
                    page_size,
                    cost_guard_rows: rows,
                }
            },
        )
}

fn base_url_strategy() -> impl Strategy<Value = String> {
    let host = prop_oneof![Just("gateway"), Just("api-gw"), Just("llm-proxy")];
    let domain = prop_oneof![Just("example.com"), Just("internal.local")];
    (host, domain, 1024u16..=65535u16)
        .prop_map(|(host, domain, port)| format!("https://{host}.{domain}:{port}"))
}

proptest! {
    #[test]
    fn persisted_state_survives_save_load(state in state_strategy()) {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new_with_path(dir.path().join("config.json"));
        manager.save(&state).unwrap();
        prop_assert_eq!(manager.load(), state);
    }

    #[test]
    fn loader_builds_from_any_valid_url(
        url in base_url_strategy(),
        token in "[a-zA-Z0-9_\\-]{16,64}",
    ) {
        let config = ConfigLoader::new()
            .with_base_url(url.clone())
            .with_api_token(token.clone())
            .build()
            .unwrap();
        prop_assert_eq!(config.connection.base_url, url);
        prop_assert_eq!(config.auth.token.expose_secret(), token.as_str());
    }
}
