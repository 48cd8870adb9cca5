use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::primitives::{Address, B256};
use serde::Deserialize;

use crate::{
    errors::custom::CustomError,
    utils::{
        constants::{
            crate_root, CONFIG_FILE_PATH, FILES_TO_PATCH, LOCAL_FACTORY_ADDRESS,
            LOCAL_INIT_CODE_HASH, LOCAL_WETH_ADDRESS, MAINNET_FACTORY_ADDRESS,
            MAINNET_INIT_CODE_HASH, MAINNET_WETH_ADDRESS, SDK_DIST_PATH,
        },
        files::{file_exists, read_file},
    },
};

/// One set of values the SDK bundle can point at.
///
/// The strings are matched literally, so they must be spelled exactly as they
/// appear in the bundle (same case, init code hash without `0x`).
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct PatchValues {
    pub factory_address: String,
    pub init_code_hash: String,
    pub weth_address: String,
}

impl PatchValues {
    pub fn local() -> Self {
        Self {
            factory_address: LOCAL_FACTORY_ADDRESS.to_string(),
            init_code_hash: LOCAL_INIT_CODE_HASH.to_string(),
            weth_address: LOCAL_WETH_ADDRESS.to_string(),
        }
    }

    pub fn mainnet() -> Self {
        Self {
            factory_address: MAINNET_FACTORY_ADDRESS.to_string(),
            init_code_hash: MAINNET_INIT_CODE_HASH.to_string(),
            weth_address: MAINNET_WETH_ADDRESS.to_string(),
        }
    }

    /// Pairs each of `self`'s values with the matching value of `replacement`.
    pub fn pairs<'a>(&'a self, replacement: &'a PatchValues) -> [(&'a str, &'a str); 3] {
        [
            (self.factory_address.as_str(), replacement.factory_address.as_str()),
            (self.init_code_hash.as_str(), replacement.init_code_hash.as_str()),
            (self.weth_address.as_str(), replacement.weth_address.as_str()),
        ]
    }

    fn validate(&self, table: &'static str) -> Result<(), CustomError> {
        check_field(table, "FACTORY_ADDRESS", &self.factory_address, is_address)?;
        check_field(table, "INIT_CODE_HASH", &self.init_code_hash, is_init_code_hash)?;
        check_field(table, "WETH_ADDRESS", &self.weth_address, is_address)
    }
}

fn is_address(value: &str) -> bool {
    Address::from_str(value).is_ok()
}

// The bundle writes the hash as `'0x' + value`, so a prefixed value would double up.
fn is_init_code_hash(value: &str) -> bool {
    value.len() == 64 && B256::from_str(value).is_ok()
}

fn check_field(
    table: &'static str,
    field: &'static str,
    value: &str,
    well_formed: fn(&str) -> bool,
) -> Result<(), CustomError> {
    if well_formed(value) {
        Ok(())
    } else {
        Err(CustomError::InvalidValue {
            field: format!("{table}.{field}"),
            value: value.to_string(),
        })
    }
}

fn default_sdk_dist_path() -> PathBuf {
    PathBuf::from(SDK_DIST_PATH)
}

fn default_files_to_patch() -> Vec<String> {
    FILES_TO_PATCH.iter().map(|file| file.to_string()).collect()
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct Config {
    #[serde(default = "PatchValues::local")]
    pub local: PatchValues,
    #[serde(default = "PatchValues::mainnet")]
    pub mainnet: PatchValues,
    #[serde(default = "default_sdk_dist_path")]
    pub sdk_dist_path: PathBuf,
    #[serde(default = "default_files_to_patch")]
    pub files_to_patch: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            local: PatchValues::local(),
            mainnet: PatchValues::mainnet(),
            sdk_dist_path: default_sdk_dist_path(),
            files_to_patch: default_files_to_patch(),
        }
    }
}

impl Config {
    pub async fn read_from_file(path: impl AsRef<Path>) -> Result<Self, CustomError> {
        let cfg_str = read_file(path.as_ref()).await?;
        Ok(toml::from_str(&cfg_str)?)
    }

    /// Reads `data/patcher.toml` if present, otherwise falls back to the embedded values.
    pub async fn read_default() -> Result<Self, CustomError> {
        let path = crate_root().join(CONFIG_FILE_PATH);

        let config = if file_exists(&path).await? {
            tracing::info!("Using overrides from `{}`", path.display());
            Self::read_from_file(&path).await?
        } else {
            Self::default()
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        self.local.validate("LOCAL")?;
        self.mainnet.validate("MAINNET")
    }

    /// Directory holding the bundle files; relative paths hang off the crate root.
    pub fn sdk_dir(&self) -> PathBuf {
        crate_root().join(&self.sdk_dist_path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_embedded_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.local.factory_address, LOCAL_FACTORY_ADDRESS);
        assert_eq!(config.mainnet.init_code_hash, MAINNET_INIT_CODE_HASH);
        assert_eq!(
            config.files_to_patch,
            vec!["sdk.esm.js", "sdk.cjs.production.min.js"]
        );
    }

    #[test]
    fn tables_override_values() {
        let config: Config = toml::from_str(
            r#"
            SDK_DIST_PATH = "/tmp/sdk/dist"
            FILES_TO_PATCH = ["sdk.esm.js"]

            [LOCAL]
            FACTORY_ADDRESS = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            INIT_CODE_HASH = "1111111111111111111111111111111111111111111111111111111111111111"
            WETH_ADDRESS = "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.local.factory_address,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
        assert_eq!(config.mainnet, PatchValues::mainnet());
        assert_eq!(config.sdk_dir(), PathBuf::from("/tmp/sdk/dist"));
        assert_eq!(config.files_to_patch, vec!["sdk.esm.js"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("FACTORY = \"0x00\"").is_err());
    }

    #[tokio::test]
    async fn read_from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patcher.toml");
        tokio::fs::write(&path, "[LOCAL\n").await.unwrap();

        let err = Config::read_from_file(&path).await.unwrap_err();

        assert!(matches!(err, CustomError::ConfigParse(_)));
    }

    #[test]
    fn embedded_defaults_are_well_formed() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn malformed_values_are_rejected() {
        let mut config = Config::default();
        config.local.init_code_hash = "4a164ea5".to_string();

        match config.validate() {
            Err(CustomError::InvalidValue { field, value }) => {
                assert_eq!(field, "LOCAL.INIT_CODE_HASH");
                assert_eq!(value, "4a164ea5");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let mut config = Config::default();
        config.mainnet.weth_address = String::new();

        let err = config.validate().unwrap_err();

        assert_eq!(err.to_string(), "Invalid MAINNET.WETH_ADDRESS: ``");
    }

    #[test]
    fn prefixed_init_code_hash_is_rejected() {
        let mut config = Config::default();
        config.local.init_code_hash = format!("0x{LOCAL_INIT_CODE_HASH}");

        match config.validate() {
            Err(CustomError::InvalidValue { field, .. }) => {
                assert_eq!(field, "LOCAL.INIT_CODE_HASH")
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let config: Config = toml::from_str(&format!(
            "[MAINNET]\n\
             FACTORY_ADDRESS = \"{MAINNET_FACTORY_ADDRESS}\"\n\
             INIT_CODE_HASH = \"0x{MAINNET_INIT_CODE_HASH}\"\n\
             WETH_ADDRESS = \"{MAINNET_WETH_ADDRESS}\"\n"
        ))
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn hash_field_is_not_checked_as_an_address() {
        let mut config = Config::default();
        // A well-formed address in the hash slot must not pass.
        config.local.init_code_hash = LOCAL_WETH_ADDRESS.to_string();

        assert!(config.validate().is_err());
    }
}
