use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Ngo.as_str(), "ngo");
    assert_eq!(Role::Donor.as_str(), "donor");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("ngo").unwrap(), Role::Ngo);
    assert_eq!(Role::from_str("donor").unwrap(), Role::Donor);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("superuser").is_err());
    assert!(Role::from_str("NGO").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_default_is_donor() {
    assert_eq!(Role::default(), Role::Donor);
}

#[test]
fn test_role_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Ngo).unwrap(), "\"ngo\"");
    assert_eq!(
        serde_json::from_str::<Role>("\"admin\"").unwrap(),
        Role::Admin
    );
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
}

#[test]
fn test_role_all_covers_every_variant() {
    let all = Role::all();
    assert_eq!(all.len(), 3);
    assert!(all.contains(&Role::Ngo));
    assert!(all.contains(&Role::Donor));
    assert!(all.contains(&Role::Admin));
}
