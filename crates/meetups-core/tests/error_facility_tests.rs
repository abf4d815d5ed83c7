use meetups_core::errors::{ExError, ExErrorKind, MeetupsError};

#[test]
fn test_category_not_found_maps_to_not_found() {
    let err: ExError = MeetupsError::CategoryNotFound {
        name: "Networking".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.code(), "ERR_NOT_FOUND");
    assert_eq!(err.entity_id(), Some("Networking"));
    assert_eq!(err.op(), Some("find_category_by_name"));
}

#[test]
fn test_category_id_not_found_carries_id() {
    let err: ExError = MeetupsError::CategoryIdNotFound { category_id: 7 }.into();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("7"));
}

#[test]
fn test_domain_error_display() {
    let err = MeetupsError::CategoryIdNotFound { category_id: 12 };
    assert_eq!(err.to_string(), "Category not found for id 12");
}

#[test]
fn test_ex_error_display_mentions_entity() {
    let err: ExError = MeetupsError::CategoryNotFound {
        name: "Networking".to_string(),
    }
    .into();

    let text = err.to_string();
    assert!(text.starts_with("[ERR_NOT_FOUND]"));
    assert!(text.contains("No category named 'Networking'"));
    assert!(text.contains("(entity_id: Networking)"));
}
