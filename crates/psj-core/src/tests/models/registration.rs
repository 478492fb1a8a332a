use crate::{RegistrationDraft, Role};

#[test]
fn test_registration_draft_default_is_empty() {
    let draft = RegistrationDraft::default();

    assert_eq!(draft.role, None);
    assert_eq!(draft.name, None);
    assert_eq!(draft.email, None);
    assert!(draft.interests.is_empty());
    assert!(draft.focus_areas.is_empty());
    assert!(draft.needs.is_empty());
}

#[test]
fn test_registration_draft_for_role() {
    let draft = RegistrationDraft::for_role(Role::Ngo);

    assert_eq!(draft.role, Some(Role::Ngo));
    assert_eq!(draft.name, None);
}
