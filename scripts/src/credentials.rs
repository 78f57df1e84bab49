use std::{fmt, fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default store location, relative to the home directory.
pub const CREDENTIALS_DIR: &str = ".coin-flip-credentials";

/// Overrides the store location.
pub const CREDENTIALS_DIR_ENV: &str = "COIN_FLIP_CREDENTIALS_DIR";

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("No home directory to look for credentials in, set {CREDENTIALS_DIR_ENV}")]
    NoHomeDir {},

    #[error("No credentials for {account} at {}", path.display())]
    NotFound { account: String, path: PathBuf },

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed credentials in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Credentials in {} belong to {found}, not {account}", path.display())]
    AccountMismatch {
        account: String,
        found: String,
        path: PathBuf,
    },
}

/// A signing key stored as `<network>/<account>.json`.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Credential {
    pub account_id: String,
    pub mnemonic: String,
    /// Expected on-chain address of the key, checked at login when present.
    #[serde(default)]
    pub address: Option<String>,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("account_id", &self.account_id)
            .field("mnemonic", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct KeyStore {
    root: PathBuf,
}

impl KeyStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        KeyStore { root: root.into() }
    }

    /// Uses the override variable if set, the home directory otherwise.
    pub fn from_env() -> Result<Self, CredentialError> {
        if let Ok(root) = std::env::var(CREDENTIALS_DIR_ENV) {
            return Ok(KeyStore::new(root));
        }

        let home = home::home_dir().ok_or(CredentialError::NoHomeDir {})?;
        Ok(KeyStore::new(home.join(CREDENTIALS_DIR)))
    }

    pub fn path_for(&self, network: &str, account: &str) -> PathBuf {
        self.root.join(network).join(format!("{account}.json"))
    }

    pub fn load(&self, network: &str, account: &str) -> Result<Credential, CredentialError> {
        let path = self.path_for(network, account);

        let contents = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CredentialError::NotFound {
                account: account.to_string(),
                path: path.clone(),
            },
            _ => CredentialError::Io {
                path: path.clone(),
                source,
            },
        })?;

        let credential: Credential =
            serde_json::from_str(&contents).map_err(|source| CredentialError::Parse {
                path: path.clone(),
                source,
            })?;

        if credential.account_id != account {
            return Err(CredentialError::AccountMismatch {
                account: account.to_string(),
                found: credential.account_id,
                path,
            });
        }

        Ok(credential)
    }
}
