use buzzwin_core::errors::*;

#[test]
fn user_not_found_carries_id() {
    let err = BuzzwinError::UserNotFound {
        id: "user-42".into(),
    };
    assert!(err.to_string().contains("user-42"));
    assert_eq!(err.error_code(), "USER_NOT_FOUND");
    assert!(err.is_client_error());
}

#[test]
fn invalid_action_carries_name() {
    let err = BuzzwinError::InvalidAction {
        action: "bogus".into(),
    };
    assert!(err.to_string().contains("bogus"));
    assert_eq!(err.coded_string(), "[INVALID_ACTION] unrecognized karma action: bogus");
}

#[test]
fn storage_error_converts_and_keeps_code() {
    let storage_err = StorageError::MigrationFailed {
        version: 2,
        message: "no such table".into(),
    };
    let err: BuzzwinError = storage_err.into();
    assert!(matches!(err, BuzzwinError::StorageError(_)));
    assert_eq!(err.error_code(), "MIGRATION_FAILED");
    assert!(!err.is_client_error());
}

#[test]
fn config_error_converts() {
    let err: BuzzwinError = ConfigError::OutOfRange {
        field: "stats.top_tags".into(),
        message: "must be at least 1".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("stats.top_tags"));
}
