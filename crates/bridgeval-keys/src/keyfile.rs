// Copyright (c) Hetu Project
// SPDX-License-Identifier: Apache-2.0

//! JSON key files for private validators.

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{KeyError, KeyResult, KeyType, MockPV, PrivValidator, PublicKey};

/// On-disk representation of a private validator key.
#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
struct KeyFile {
    #[zeroize(skip)]
    key_type: KeyType,
    /// Hex-encoded public key, kept for operator inspection
    pub_key: String,
    /// Hex-encoded secret key
    secret: String,
}

/// Write a private validator's key to `path`.
pub fn save_priv_validator(path: impl AsRef<Path>, pv: &MockPV) -> KeyResult<()> {
    let path = path.as_ref();
    let file = KeyFile {
        key_type: pv.key_type(),
        pub_key: hex::encode(pv.pub_key().to_bytes()),
        secret: hex::encode(&*pv.secret_bytes()),
    };
    let json = Zeroizing::new(
        serde_json::to_string_pretty(&file)
            .map_err(|e| KeyError::KeyFile(format!("failed to serialize key file: {}", e)))?,
    );

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut out = options.open(path)?;
    // mode() only applies on creation
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        out.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    out.write_all(json.as_bytes())?;
    info!(path = %path.display(), key_type = %pv.key_type(), "Saved validator key");
    Ok(())
}

/// Load a private validator from a key file written by [`save_priv_validator`].
///
/// The stored public key must match the one derived from the secret.
pub fn load_priv_validator(path: impl AsRef<Path>) -> KeyResult<MockPV> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading validator key");

    let contents = Zeroizing::new(fs::read_to_string(path)?);
    let file: KeyFile = serde_json::from_str(&contents)
        .map_err(|e| KeyError::KeyFile(format!("failed to parse key file: {}", e)))?;

    let secret = Zeroizing::new(hex::decode(&file.secret)?);
    let pv = MockPV::from_secret(file.key_type, &secret)?;

    let stored = PublicKey::from_hex(file.key_type, &file.pub_key)?;
    if stored != pv.pub_key() {
        return Err(KeyError::KeyFile(
            "public key does not match secret key".to_string(),
        ));
    }

    info!(path = %path.display(), address = %pv.pub_key().address(), "Loaded validator key");
    Ok(pv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("priv_validator_key.json");

        for key_type in [KeyType::Ed25519, KeyType::Secp256k1] {
            let pv = MockPV::generate(key_type);
            save_priv_validator(&path, &pv).unwrap();
            let loaded = load_priv_validator(&path).unwrap();
            assert_eq!(loaded.pub_key(), pv.pub_key());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_key_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("priv_validator_key.json");
        // Pre-existing world-readable file gets tightened on overwrite
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save_priv_validator(&path, &MockPV::new()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "key file mode = {:o}", mode & 0o777);
        assert!(load_priv_validator(&path).is_ok());
    }

    #[test]
    fn test_mismatched_pub_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.json");

        let pv = MockPV::new();
        let other = MockPV::new();
        let json = serde_json::json!({
            "key_type": "ed25519",
            "pub_key": hex::encode(other.pub_key().to_bytes()),
            "secret": hex::encode(&*pv.secret_bytes()),
        });
        fs::write(&path, json.to_string()).unwrap();

        assert!(matches!(
            load_priv_validator(&path),
            Err(KeyError::KeyFile(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_priv_validator(dir.path().join("absent.json")),
            Err(KeyError::Io(_))
        ));
    }
}
