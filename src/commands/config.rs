//! Config command implementation

use crate::{
    config::SheetsConfig,
    core::config_path,
    Result, SheetRange, SpreadsheetId,
};

/// Changes requested by `config set`.
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub spreadsheet_id: Option<SpreadsheetId>,
    pub api_key: Option<String>,
    pub range: Option<SheetRange>,
    pub use_service_account: Option<bool>,
    pub api_base_url: Option<String>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.spreadsheet_id.is_none()
            && self.api_key.is_none()
            && self.range.is_none()
            && self.use_service_account.is_none()
            && self.api_base_url.is_none()
    }

    pub fn apply(self, mut config: SheetsConfig) -> SheetsConfig {
        if let Some(id) = self.spreadsheet_id {
            config.spreadsheet_id = Some(id);
        }
        if let Some(key) = self.api_key {
            config.api_key = Some(key).filter(|k| !k.is_empty());
        }
        if let Some(range) = self.range {
            config.range = range;
        }
        if let Some(flag) = self.use_service_account {
            config.use_service_account = flag;
        }
        if let Some(url) = self.api_base_url {
            config.api_base_url = url;
        }
        config
    }
}

/// Show the API key as its last four characters. Keys that short are hidden
/// entirely.
pub fn mask_key(key: &str) -> String {
    if key.chars().count() <= 4 {
        return "****".to_string();
    }
    let tail: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{}", tail)
}

pub fn describe(config: &SheetsConfig) -> String {
    format!(
        "Spreadsheet ID: {}\nAPI key: {}\nRange: {}\nUse service account: {}\nProxy URL: {}\n",
        config
            .spreadsheet_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        config
            .api_key
            .as_deref()
            .map(mask_key)
            .unwrap_or_else(|| "(not set)".to_string()),
        config.range,
        config.use_service_account,
        config.api_base_url,
    )
}

/// Handle `config show`
pub fn handle_config_show() -> Result<()> {
    let config = SheetsConfig::load()?;
    println!("Config file: {}", config_path().display());
    print!("{}", describe(&config));
    Ok(())
}

/// Handle `config set`; only the stored file is changed, env overrides are
/// not written back.
pub fn handle_config_set(update: ConfigUpdate) -> Result<()> {
    if update.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }

    let stored = SheetsConfig::load_from(&config_path())?;
    let path = update.apply(stored).save()?;
    tracing::info!(path = %path.display(), "config saved");
    println!("✓ Config saved to {}", path.display());
    Ok(())
}
