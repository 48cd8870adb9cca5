use std::path::Path;

use crate::{
    config::{Config, PatchValues},
    errors::custom::CustomError,
    utils::files::{file_exists, read_file, write_file},
};

pub mod report;

pub use report::{PatchOutcome, PatchReport};

/// Swaps every literal occurrence of each `mainnet` value for its `local` counterpart.
///
/// Fields are handled in order (factory, init code hash, WETH). Returns the new
/// content and whether anything was replaced.
pub fn apply_replacements(
    content: &str,
    mainnet: &PatchValues,
    local: &PatchValues,
) -> (String, bool) {
    let mut patched = content.to_string();
    let mut modified = false;

    for (from, to) in mainnet.pairs(local) {
        if patched.contains(from) {
            patched = patched.replace(from, to);
            modified = true;
        }
    }

    (patched, modified)
}

pub async fn patch_file(
    path: &Path,
    mainnet: &PatchValues,
    local: &PatchValues,
) -> Result<PatchOutcome, CustomError> {
    if !file_exists(path).await? {
        return Ok(PatchOutcome::Missing);
    }

    let content = read_file(path).await?;
    let (patched, modified) = apply_replacements(&content, mainnet, local);

    let outcome = if modified {
        write_file(path, &patched).await?;
        PatchOutcome::Patched
    } else if content.contains(local.factory_address.as_str()) {
        PatchOutcome::AlreadyPatched
    } else {
        PatchOutcome::NoChanges
    };

    Ok(outcome)
}

/// Patches every configured bundle file, one after another.
///
/// Missing files are skipped; the first read or write failure aborts the run.
pub async fn patch_sdk(config: &Config) -> Result<PatchReport, CustomError> {
    tracing::info!("Patching @uniswap/sdk for local deployment...");

    let sdk_dir = config.sdk_dir();
    let mut report = PatchReport::default();

    for file in &config.files_to_patch {
        let outcome = patch_file(&sdk_dir.join(file), &config.mainnet, &config.local).await?;
        outcome.log(file);

        report.push(file, outcome);
    }

    Ok(report)
}
