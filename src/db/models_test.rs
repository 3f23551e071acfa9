//! Tests for domain models.

use std::str::FromStr;

use crate::db::ItemStatus;

#[test]
fn item_status_displays_as_storage_string() {
    assert_eq!(ItemStatus::Active.to_string(), "active");
    assert_eq!(ItemStatus::Completed.to_string(), "completed");
}

#[test]
fn item_status_parses_storage_strings() {
    assert_eq!(ItemStatus::from_str("active").unwrap(), ItemStatus::Active);
    assert_eq!(
        ItemStatus::from_str("completed").unwrap(),
        ItemStatus::Completed
    );
}

#[test]
fn item_status_rejects_unknown_strings() {
    assert!(ItemStatus::from_str("done").is_err());
    assert!(ItemStatus::from_str("").is_err());
}

#[test]
fn item_status_defaults_to_active() {
    assert_eq!(ItemStatus::default(), ItemStatus::Active);
}
