use std::fs;

use crate::credentials::{CredentialError, KeyStore};

fn write_key(store: &KeyStore, network: &str, account: &str, contents: &str) {
    let path = store.path_for(network, account);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_load_reads_the_network_scoped_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = KeyStore::new(dir.path());
    write_key(
        &store,
        "testnet",
        "alice",
        r#"{"account_id":"alice","mnemonic":"word word word","address":"neutron1alice"}"#,
    );

    let credential = store.load("testnet", "alice").unwrap();
    assert_eq!(credential.mnemonic, "word word word");
    assert_eq!(credential.address.as_deref(), Some("neutron1alice"));

    // The same account on another network is a different key
    let err = store.load("mainnet", "alice").unwrap_err();
    assert!(matches!(err, CredentialError::NotFound { .. }));
}

#[test]
fn test_address_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    let store = KeyStore::new(dir.path());
    write_key(
        &store,
        "mainnet",
        "bob",
        r#"{"account_id":"bob","mnemonic":"word"}"#,
    );

    let credential = store.load("mainnet", "bob").unwrap();
    assert!(credential.address.is_none());
}

#[test]
fn test_malformed_and_mismatched_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = KeyStore::new(dir.path());
    write_key(&store, "testnet", "broken", "{ not json");
    write_key(
        &store,
        "testnet",
        "carol",
        r#"{"account_id":"dave","mnemonic":"word"}"#,
    );

    let err = store.load("testnet", "broken").unwrap_err();
    assert!(matches!(err, CredentialError::Parse { .. }));

    let err = store.load("testnet", "carol").unwrap_err();
    assert!(matches!(
        err,
        CredentialError::AccountMismatch { ref found, .. } if found == "dave"
    ));
}

#[test]
fn test_debug_output_hides_the_mnemonic() {
    let dir = tempfile::tempdir().unwrap();
    let store = KeyStore::new(dir.path());
    write_key(
        &store,
        "testnet",
        "alice",
        r#"{"account_id":"alice","mnemonic":"secret phrase"}"#,
    );

    let credential = store.load("testnet", "alice").unwrap();
    let printed = format!("{credential:?}");
    assert!(!printed.contains("secret phrase"));
    assert!(printed.contains("alice"));
}
