use colored::Colorize;

use crate::config::PatchValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Missing,
    Patched,
    AlreadyPatched,
    NoChanges,
}

impl PatchOutcome {
    pub fn log(&self, file: &str) {
        match self {
            Self::Missing => tracing::warn!("File not found: {file}"),
            Self::Patched => tracing::info!("Patched: {file}"),
            Self::AlreadyPatched => tracing::info!("Already patched: {file}"),
            Self::NoChanges => tracing::info!("No changes needed: {file}"),
        }
    }
}

/// Per-file outcomes of one run, in processing order.
#[derive(Debug, Default)]
pub struct PatchReport(Vec<(String, PatchOutcome)>);

impl PatchReport {
    pub fn push(&mut self, file: &str, outcome: PatchOutcome) {
        self.0.push((file.to_string(), outcome))
    }

    #[cfg(test)]
    pub fn outcome(&self, file: &str) -> Option<PatchOutcome> {
        self.0
            .iter()
            .find(|(name, _)| name == file)
            .map(|(_, outcome)| *outcome)
    }

    pub fn modified_count(&self) -> usize {
        self.0
            .iter()
            .filter(|(_, outcome)| *outcome == PatchOutcome::Patched)
            .count()
    }

    pub fn summary(&self, local: &PatchValues) -> String {
        format!(
            "Patch complete! ({} files modified)\n\n\
             Local configuration:\n   \
             Factory: {}\n   \
             Init Hash: 0x{}\n   \
             WETH (Ropsten): {}",
            self.modified_count(),
            local.factory_address,
            local.init_code_hash,
            local.weth_address
        )
    }

    pub fn log_summary(&self, local: &PatchValues) {
        tracing::info!("{}", self.summary(local).green());
    }
}
