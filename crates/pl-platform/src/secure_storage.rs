//! Secure storage selection and default keychain factory.

use std::{fs, path::PathBuf, sync::Arc};

use pl_core::ports::CredentialKeychainPort;

use crate::{
    capability::{detect_storage_capability, SecureStorageCapability},
    file_keychain::FileKeychain,
    keychain::SystemKeychain,
};

#[derive(Debug, thiserror::Error)]
pub enum KeychainFactoryError {
    #[error("secure storage unsupported: {capability:?}")]
    Unsupported { capability: SecureStorageCapability },

    #[error("failed to initialize file-based keychain: {0}")]
    FileBasedInit(#[from] std::io::Error),
}

fn keychain_from_capability_with_base_dir(
    capability: SecureStorageCapability,
    base_dir: Option<PathBuf>,
) -> Result<Arc<dyn CredentialKeychainPort>, KeychainFactoryError> {
    match capability {
        SecureStorageCapability::SystemKeychain => {
            Ok(Arc::new(SystemKeychain {}) as Arc<dyn CredentialKeychainPort>)
        }
        SecureStorageCapability::FileBasedKeystore => {
            if let Some(base_dir) = base_dir {
                fs::create_dir_all(&base_dir)?;
                Ok(Arc::new(FileKeychain::with_base_dir(base_dir)) as Arc<dyn CredentialKeychainPort>)
            } else {
                Err(KeychainFactoryError::FileBasedInit(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "FileKeychain requires app data root",
                )))
            }
        }
        SecureStorageCapability::Unsupported => {
            Err(KeychainFactoryError::Unsupported { capability })
        }
    }
}

pub fn create_default_keychain() -> Result<Arc<dyn CredentialKeychainPort>, KeychainFactoryError> {
    let capability = detect_storage_capability();
    log::debug!("Detected secure storage capability: {:?}", capability);

    match capability {
        SecureStorageCapability::SystemKeychain => {
            log::info!("Using system keychain for credential storage");
            keychain_from_capability_with_base_dir(capability, None)
        }
        SecureStorageCapability::FileBasedKeystore => {
            log::warn!(
                "File-based keychain requires app data root; use create_default_keychain_in_app_data_root"
            );
            Err(KeychainFactoryError::FileBasedInit(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "FileKeychain requires app data root",
            )))
        }
        SecureStorageCapability::Unsupported => {
            log::error!("Secure storage unsupported: {:?}", capability);
            Err(KeychainFactoryError::Unsupported { capability })
        }
    }
}

pub fn create_default_keychain_in_app_data_root(
    app_data_root: PathBuf,
) -> Result<Arc<dyn CredentialKeychainPort>, KeychainFactoryError> {
    let capability = detect_storage_capability();
    log::debug!("Detected secure storage capability: {:?}", capability);

    keychain_from_capability_with_base_dir(capability, Some(app_data_root.join("keychain")))
}
