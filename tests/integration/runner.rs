use crate::integration::config::{write_config_for, write_raw_config};
use crate::integration::scenarios::TestScenario;
use std::fs;
use std::process::Command;
use tracing::{debug, error, info};

pub fn run_scenario(scenario: &TestScenario) {
    info!("▶ Running scenario: {}", scenario.name);
    let dir = tempfile::tempdir().expect("Failed to create scenario dir");

    let config_path = match &scenario.raw_config {
        Some(raw) => write_raw_config(dir.path(), raw),
        None => write_config_for(dir.path(), scenario.config.as_ref()),
    };
    debug!("Using config path: {}", config_path);

    let input_path = scenario.input.as_ref().map(|input| {
        let path = dir.path().join(&input.file_name);
        fs::write(&path, &input.content).expect("Failed to write scenario input");
        path.to_string_lossy().into_owned()
    });

    let args: Vec<String> = scenario
        .args
        .iter()
        .map(|arg| match &input_path {
            Some(path) => arg.replace("{input}", path),
            None => arg.clone(),
        })
        .collect();
    debug!("Args: {:?}", args);

    let output = Command::new(env!("CARGO_BIN_EXE_report_wizard"))
        .args(&args)
        .env("REPORT_WIZARD_CONFIG", &config_path)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run report_wizard");

    if output.status.success() == scenario.expect_failure {
        error!(
            "❌ {} exited with {:?}\nstderr:\n{}",
            scenario.name,
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
        panic!("Scenario '{}' failed", scenario.name);
    }

    let actual = if scenario.expect_failure {
        String::from_utf8_lossy(&output.stderr).into_owned()
    } else {
        String::from_utf8_lossy(&output.stdout).into_owned()
    };
    debug!("Actual output:\n{}", actual);

    let all_pass = scenario.matchers.iter().all(|m| m.matches(&actual));
    if all_pass {
        info!("✅ {} passed", scenario.name);
    } else {
        error!("❌ {} failed", scenario.name);
        error!(
            "Expected all matchers to pass. Matchers: {:?}\nActual:\n{}",
            scenario.matchers, actual
        );
        panic!("Scenario '{}' failed", scenario.name);
    }
}
