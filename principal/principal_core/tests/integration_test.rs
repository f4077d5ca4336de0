//! Integration tests for the principal library.
//!
//! These tests exercise the principal types through the public API: the
//! shared trait, heterogeneous collections, message formatting and the
//! persisted-state round trip.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use principal_core::message::{keys, KeyEchoFormatter, MessageFormatter, ResourceBundle};
use principal_core::persist::{self, PersistedPrincipal};
use principal_core::principal::{
    NtUserPrincipalRecord, UnixNumericGroupPrincipalRecord, UserPrincipalRecord,
};
use principal_core::{
    principal_equals, AnyPrincipal, Error, ErrorKind, MessageConfig, NtUserPrincipal, Principal,
    PrincipalKind, UnixNumericGroupPrincipal, UserPrincipal,
};

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn all_kinds() -> Vec<Box<dyn Principal>> {
    vec![
        Box::new(UserPrincipal::new("1000")),
        Box::new(NtUserPrincipal::new("1000")),
        Box::new(UnixNumericGroupPrincipal::new("1000", true)),
        Box::new(UnixNumericGroupPrincipal::new("1000", false)),
    ]
}

#[test]
fn test_cross_type_inequality() {
    let principals = all_kinds();
    for (i, a) in principals.iter().enumerate() {
        for (j, b) in principals.iter().enumerate() {
            assert_eq!(a.as_ref() == b.as_ref(), i == j, "{a:?} vs {b:?}");
        }
    }

    let user = UserPrincipal::new("1000");
    let group = UnixNumericGroupPrincipal::new("1000", false);
    assert!(!user.principal_eq(&group));
    assert!(!principal_equals(&user, None));
    assert!(principal_equals(&user, Some(&UserPrincipal::new("1000"))));
}

#[test]
fn test_trait_object_hash_matches_concrete_hash() {
    let user = UserPrincipal::new("grace");
    let boxed: Box<dyn Principal> = Box::new(user.clone());
    assert_eq!(hash_of(boxed.as_ref()), hash_of(&user));
    assert_eq!(hash_of(&user), hash_of(&UserPrincipal::new(String::from("grace"))));
}

#[test]
fn test_heterogeneous_set() {
    let mut set: HashSet<Box<dyn Principal>> = all_kinds().into_iter().collect();
    assert_eq!(set.len(), 4);

    set.insert(Box::new(NtUserPrincipal::new("1000")));
    assert_eq!(set.len(), 4);

    let kinds: HashSet<PrincipalKind> = set.iter().map(|p| p.kind()).collect();
    assert_eq!(kinds.len(), 3);
    assert!(set.iter().all(|p| p.name() == "1000"));
}

#[test]
fn test_absent_name_fails_for_every_type() {
    let errors = [
        UserPrincipal::try_new(None).unwrap_err(),
        NtUserPrincipal::try_new(None).unwrap_err(),
        UnixNumericGroupPrincipal::try_new(None, true).unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.kind(), Some(ErrorKind::InvalidArgument));
    }
}

#[test]
fn test_round_trip_every_type() {
    let user = UserPrincipal::new("heidi");
    let nt_user = NtUserPrincipal::new("DOMAIN\\heidi");
    let group = UnixNumericGroupPrincipal::from_gid(-2, true);

    let json = persist::to_json(&user).unwrap();
    assert_eq!(persist::from_json::<UserPrincipal>(&json).unwrap(), user);

    let json = persist::to_json(&nt_user).unwrap();
    assert_eq!(persist::from_json::<NtUserPrincipal>(&json).unwrap(), nt_user);

    let json = persist::to_json(&group).unwrap();
    assert_eq!(
        persist::from_json::<UnixNumericGroupPrincipal>(&json).unwrap(),
        group
    );
}

#[test]
fn test_absent_name_record_is_invalid_persisted_state() {
    let errors = [
        persist::from_json::<UserPrincipal>("{}").unwrap_err(),
        persist::from_json::<NtUserPrincipal>(r#"{"name":null}"#).unwrap_err(),
        persist::from_json::<UnixNumericGroupPrincipal>(r#"{"primary_group":true}"#)
            .unwrap_err(),
        UserPrincipal::restore(UserPrincipalRecord { name: None }).unwrap_err(),
        NtUserPrincipal::restore(NtUserPrincipalRecord { name: None }).unwrap_err(),
        UnixNumericGroupPrincipal::restore(UnixNumericGroupPrincipalRecord {
            name: None,
            primary_group: false,
        })
        .unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.kind(), Some(ErrorKind::InvalidPersistedState), "{err}");
    }
}

#[test]
fn test_direct_serde_rejects_absent_name() {
    let err = serde_json::from_str::<NtUserPrincipal>("{}").unwrap_err();
    assert!(err.to_string().contains("invalid null input: name"), "{err}");

    let err = serde_json::from_str::<UserPrincipal>(r#"{"name":null}"#).unwrap_err();
    assert!(err.to_string().contains("null name is illegal"), "{err}");
}

#[test]
fn test_embedded_in_larger_structure() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Session {
        user: UserPrincipal,
        groups: Vec<UnixNumericGroupPrincipal>,
    }

    let session = Session {
        user: UserPrincipal::new("ivan"),
        groups: vec![
            UnixNumericGroupPrincipal::from_gid(100, true),
            UnixNumericGroupPrincipal::from_gid(27, false),
        ],
    };
    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);

    let tampered = r#"{"user":{"name":"ivan"},"groups":[{"primary_group":true}]}"#;
    assert!(serde_json::from_str::<Session>(tampered).is_err());
}

#[test]
fn test_any_principal_persistence() {
    let principals = vec![
        AnyPrincipal::from(UserPrincipal::new("judy")),
        AnyPrincipal::from(NtUserPrincipal::new("judy")),
        AnyPrincipal::from(UnixNumericGroupPrincipal::from_gid(4, false)),
    ];

    let json = serde_json::to_string(&principals).unwrap();
    let restored: Vec<AnyPrincipal> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, principals);

    for principal in &principals {
        let json = persist::to_json(principal).unwrap();
        assert_eq!(&persist::from_json::<AnyPrincipal>(&json).unwrap(), principal);
    }

    let err = persist::from_json::<AnyPrincipal>(r#"{"type":"nt_user"}"#).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidPersistedState));

    let err = persist::from_json::<AnyPrincipal>(r#"{"type":"robot","name":"x"}"#).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_primary_and_supplementary_display_differ() {
    let primary = UnixNumericGroupPrincipal::new("100", true);
    let supplementary = UnixNumericGroupPrincipal::new("100", false);

    assert_ne!(
        primary.describe(&KeyEchoFormatter),
        supplementary.describe(&KeyEchoFormatter)
    );
    assert_ne!(primary.to_string(), supplementary.to_string());
}

#[test]
fn test_injected_formatter() {
    let bundle = ResourceBundle::new("de")
        .with_template(keys::NT_USER_NAME, "NT-Benutzer: {0}")
        .with_template(keys::UNIX_PRIMARY_GROUP_NAME, "Primärgruppe {0}");

    assert_eq!(
        NtUserPrincipal::new("karl").describe(&bundle),
        "NT-Benutzer: karl"
    );
    assert_eq!(
        UnixNumericGroupPrincipal::new("9", true).describe(&bundle),
        "Primärgruppe 9"
    );
    // No template registered: the key is echoed.
    assert_eq!(
        UnixNumericGroupPrincipal::new("9", false).describe(&bundle),
        "UnixNumericGroupPrincipal.Supplementary.Group.name(9)"
    );
    // User principals are never localized.
    assert_eq!(UserPrincipal::new("karl").describe(&bundle), "karl");
}

#[test]
fn test_configured_bundle_renders_errors() {
    let config = MessageConfig::from_toml_str(
        r#"
        [messages]
        "invalid.null.input.value" = "{0} fehlt"
        "#,
    )
    .unwrap();
    let bundle = config.bundle();

    let Error::Principal(err) = NtUserPrincipal::try_new(None).unwrap_err() else {
        panic!("expected a principal error");
    };
    assert_eq!(err.render(&bundle), "name fehlt");
    assert_eq!(
        bundle.format(keys::INVALID_NULL_INPUT, &["gid"]),
        "gid fehlt"
    );
}
