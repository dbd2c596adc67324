use portfolio_assistant::config::{config_file_path, load_or_default, save, AppConfig};
use portfolio_assistant::profile::ProfileStore;
use portfolio_assistant::{ChatSession, PlaceholderAssistant};
use std::path::PathBuf;
use std::sync::Arc;

use super::IntegrationHarness;

// Only test in this binary that touches PORTFOLIO_HOME.
#[test]
fn config_lives_under_portfolio_home() {
    let harness = IntegrationHarness::new();
    harness.use_as_home();

    let path = config_file_path().unwrap();
    assert!(path.starts_with(harness.workspace_path()));
    assert_eq!(load_or_default().unwrap(), AppConfig::default());

    let mut config = AppConfig::default();
    config.profile.document_path = PathBuf::from("custom/profile.yaml");
    config.pacing.min_delay_ms = 0;
    config.pacing.max_delay_ms = 0;
    config.chat.quick_questions = vec!["Education?".into()];
    config.remote.remote_allowed = true;
    let written = save(&config).unwrap();
    assert_eq!(written, path);

    let reloaded = load_or_default().unwrap();
    assert_eq!(reloaded, config);

    let session = ChatSession::from_config(
        &reloaded,
        Arc::new(ProfileStore::new()),
        Box::new(PlaceholderAssistant),
    );
    assert_eq!(session.quick_questions().get(1), Some("Education?"));
    assert!(session.remote_preview("ping").is_ok());
}
