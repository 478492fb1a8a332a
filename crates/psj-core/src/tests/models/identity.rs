use crate::{Identity, Role};

#[test]
fn test_identity_new_ngo_starts_unverified() {
    let identity = Identity::new(
        "hope@mypsj.com".to_string(),
        "Hope Foundation".to_string(),
        Role::Ngo,
    );

    assert_eq!(identity.role, Role::Ngo);
    assert_eq!(identity.verified, Some(false));
    assert!(!identity.is_verified_ngo());
    assert!(!identity.id.is_empty());
}

#[test]
fn test_identity_new_donor_has_no_verification_flag() {
    let identity = Identity::new(
        "donor@mypsj.com".to_string(),
        "John Donor".to_string(),
        Role::Donor,
    );

    assert_eq!(identity.verified, None);
    assert!(!identity.is_verified_ngo());
}

#[test]
fn test_identity_new_assigns_unique_ids() {
    let a = Identity::new("a@mypsj.com".to_string(), "A".to_string(), Role::Donor);
    let b = Identity::new("b@mypsj.com".to_string(), "B".to_string(), Role::Donor);

    assert_ne!(a.id, b.id);
}

#[test]
fn test_is_verified_ngo_requires_ngo_role() {
    let mut identity = Identity::new(
        "admin@mypsj.com".to_string(),
        "Portal Admin".to_string(),
        Role::Admin,
    );

    // Even a stray verified flag on a non-NGO must not count
    identity.verified = Some(true);
    assert!(!identity.is_verified_ngo());

    let mut ngo = Identity::new("n@mypsj.com".to_string(), "N".to_string(), Role::Ngo);
    ngo.verified = Some(true);
    assert!(ngo.is_verified_ngo());
}

#[test]
fn test_identity_serde_round_trip() {
    let mut identity = Identity::new(
        "hope@mypsj.com".to_string(),
        "Hope Foundation".to_string(),
        Role::Ngo,
    );
    identity.location = Some("New York".to_string());
    identity.focus_areas = ["Healthcare".to_string(), "Medical Supplies".to_string()].into();
    identity.needs = ["Funds".to_string()].into();

    let json = serde_json::to_string(&identity).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, identity);
}

#[test]
fn test_identity_deserializes_without_optional_fields() {
    let json = r#"{"id":"1","email":"d@mypsj.com","name":"D","role":"donor"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.role, Role::Donor);
    assert_eq!(identity.verified, None);
    assert!(identity.interests.is_empty());
    assert!(identity.focus_areas.is_empty());
    assert!(identity.needs.is_empty());
}
