use report_wizard::shared::config::Settings;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn merge(base: &mut Value, overrides: &Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge(base.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

/// Writes a settings file for one scenario, logging into the scenario dir.
/// Returns the path to hand to `REPORT_WIZARD_CONFIG`.
pub fn write_config_for(dir: &Path, overrides: Option<&Value>) -> String {
    let mut settings = Settings::default();
    settings.logging.log_dir = dir.join("logs").to_string_lossy().into_owned();
    settings.logging.stdout_level = "error".to_string();

    let mut value = serde_json::to_value(&settings).expect("Failed to encode settings");
    if let Some(overrides) = overrides {
        merge(&mut value, overrides);
    }
    let settings: Settings = serde_json::from_value(value).expect("Invalid config overrides");

    let path = dir.join("config.toml");
    let toml_str = toml::to_string_pretty(&settings).expect("Failed to serialize config");
    fs::write(&path, toml_str).expect("Failed to write config file");
    path.to_string_lossy().into_owned()
}

pub fn write_raw_config(dir: &Path, content: &str) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config file");
    path.to_string_lossy().into_owned()
}
