use std::path::Path;

use anyhow::anyhow;
use config::{Config, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// Show documentation on hover
    pub hover: bool,
    /// Offer quick fixes for validation diagnostics
    pub quick_fixes: bool,
    /// Destination webhook written into generated templates
    pub default_destination: String,
    /// Cron schedule written into generated read objects
    pub default_schedule: String,
    /// Providers eligible for an example subscribe block
    pub subscribe_providers: Vec<String>,
}

impl Settings {
    pub fn new(root_dir: Option<&Path>) -> anyhow::Result<Settings> {
        let expanded = shellexpand::tilde("~/.config/manifest-ls/settings");
        let mut builder = Config::builder().add_source(File::with_name(&expanded).required(false));

        if let Some(root_dir) = root_dir {
            builder = builder.add_source(
                File::with_name(&format!(
                    "{}/.manifestls",
                    root_dir
                        .to_str()
                        .ok_or(anyhow!("Can't convert root_dir to str"))?
                ))
                .required(false),
            );
        }

        let settings = builder
            .set_default("hover", true)?
            .set_default("quick_fixes", true)?
            .set_default("default_destination", "defaultWebhook")?
            .set_default("default_schedule", "*/30 * * * *")?
            .set_default(
                "subscribe_providers",
                vec!["salesforce".to_string(), "hubspot".to_string()],
            )?
            .build()
            .map_err(|err| anyhow!("Build err: {err}"))?;

        let settings = settings.try_deserialize::<Settings>()?;

        anyhow::Ok(settings)
    }

    /// Whether `provider` may receive an example subscribe block.
    pub fn subscribe_eligible(&self, provider: &str) -> bool {
        self.subscribe_providers.iter().any(|p| p == provider)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hover: true,
            quick_fixes: true,
            default_destination: "defaultWebhook".to_string(),
            default_schedule: "*/30 * * * *".to_string(),
            subscribe_providers: vec!["salesforce".to_string(), "hubspot".to_string()],
        }
    }
}
