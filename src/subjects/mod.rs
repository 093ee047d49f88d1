pub mod vault;

pub use vault::{FolderVault, VaultError};
