use crate::integration::matcher::Matcher;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct ScenarioInput {
    /// File name inside the scenario's temp dir; the extension picks the loader.
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct TestScenario {
    pub name: String,
    #[serde(default)]
    pub input: Option<ScenarioInput>,
    /// CLI arguments; `{input}` is replaced by the written input path.
    #[serde(default)]
    pub args: Vec<String>,
    /// Settings overrides merged over the defaults, same shape as the config file.
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    /// Written verbatim as the config file instead of the merged settings.
    #[serde(default)]
    pub raw_config: Option<String>,
    /// When set, the run must exit non-zero and matchers apply to stderr.
    #[serde(default)]
    pub expect_failure: bool,
    pub matchers: Vec<Matcher>,
}

pub fn load_scenarios_from_json(path: &str) -> Vec<TestScenario> {
    let content = fs::read_to_string(path).expect("Failed to read scenario file");
    serde_json::from_str(&content).expect("Invalid JSON format")
}
