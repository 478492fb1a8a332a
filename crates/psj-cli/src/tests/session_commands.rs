use crate::commands::RegisterArgs;
use crate::error::CliError;
use crate::session_commands::{
    draft_from, login, post_registration_route, register, require_non_empty,
};
use crate::tests::test_store;

use psj_core::Role;

fn register_args() -> RegisterArgs {
    RegisterArgs {
        role: None,
        name: None,
        email: None,
        location: None,
        interests: vec![],
        focus_areas: vec![],
        needs: vec![],
    }
}

#[test]
fn test_require_non_empty() {
    assert!(require_non_empty("email", "donor@mypsj.com").is_ok());
    assert!(matches!(
        require_non_empty("email", ""),
        Err(CliError::EmptyField { field: "email", .. })
    ));
    assert!(matches!(
        require_non_empty("password", "   "),
        Err(CliError::EmptyField {
            field: "password",
            ..
        })
    ));
}

#[test]
fn test_draft_from_collects_repeated_tags() {
    let args = RegisterArgs {
        role: Some(Role::Ngo),
        name: Some("River Trust".to_string()),
        interests: vec![],
        focus_areas: vec!["Environment".to_string(), "Environment".to_string()],
        needs: vec!["Funds".to_string(), "Volunteers".to_string()],
        ..register_args()
    };

    let draft = draft_from(args);

    assert_eq!(draft.role, Some(Role::Ngo));
    // Sets deduplicate repeated flags
    assert_eq!(draft.focus_areas.len(), 1);
    assert_eq!(draft.needs.len(), 2);
}

#[test]
fn test_post_registration_route_by_role() {
    assert_eq!(post_registration_route(Role::Ngo), "/ngo-portal");
    assert_eq!(post_registration_route(Role::Donor), "/donor-portal");
    assert_eq!(post_registration_route(Role::Admin), "/donor-portal");
}

#[tokio::test]
async fn given_empty_email_when_logging_in_then_store_is_never_called() {
    let store = test_store();

    let result = login(&store, "", "password123", None, false).await;

    assert!(matches!(result, Err(CliError::EmptyField { .. })));
    assert_eq!(store.current_identity(), None);
    // A rejected submission must not surface as a sign-in failure
    assert_eq!(store.last_error(), None);
}

#[tokio::test]
async fn given_demo_credentials_when_logging_in_then_session_is_current() {
    let store = test_store();

    login(&store, "admin@mypsj.com", "password123", Some("/admin"), false)
        .await
        .unwrap();

    assert_eq!(store.current_identity().unwrap().role, Role::Admin);
}

#[tokio::test]
async fn given_register_args_when_registering_then_account_is_signed_in() {
    let store = test_store();
    let args = RegisterArgs {
        role: Some(Role::Ngo),
        name: Some("X".to_string()),
        ..register_args()
    };

    register(&store, args, false).await.unwrap();

    let identity = store.current_identity().unwrap();
    assert_eq!(identity.role, Role::Ngo);
    assert_eq!(identity.verified, Some(false));
}
