use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rigcheck_core::config::{resolve_config_path, LoadOptions};
use serde::Serialize;
use toml::Value;

use crate::commands::{load_config, CommandResult};

const COMMAND: &str = "config";

#[derive(Debug, Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct ConfigReport {
    config_file: Option<PathBuf>,
    entries: Vec<ConfigEntry>,
}

pub fn run(options: &LoadOptions) -> CommandResult {
    let config = match load_config(options) {
        Ok(config) => config,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };

    let config_file_path = resolve_config_path(options.config_path.as_deref());
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let file = FileSource { doc: config_file_doc.as_ref(), path: config_file_path.as_deref() };

    let catalog_flag = options.overrides.catalog_path.is_some().then_some("--catalog");
    let entries = vec![
        ConfigEntry {
            key: "catalog.path",
            value: config
                .catalog
                .path
                .as_ref()
                .map_or_else(|| "<embedded>".to_string(), |path| path.display().to_string()),
            source: field_source("catalog.path", catalog_flag, &["RIGCHECK_CATALOG_PATH"], &file),
        },
        ConfigEntry {
            key: "logging.level",
            value: config.logging.level.clone(),
            source: field_source(
                "logging.level",
                None,
                &["RIGCHECK_LOGGING_LEVEL", "RIGCHECK_LOG_LEVEL"],
                &file,
            ),
        },
        ConfigEntry {
            key: "logging.format",
            value: config.logging.format.to_string(),
            source: field_source(
                "logging.format",
                None,
                &["RIGCHECK_LOGGING_FORMAT", "RIGCHECK_LOG_FORMAT"],
                &file,
            ),
        },
    ];

    let report = ConfigReport { config_file: config_file_path.clone(), entries };
    CommandResult::success_with_data(
        COMMAND,
        "effective config (source precedence: flag > env > file > default)",
        &report,
    )
}

struct FileSource<'a> {
    doc: Option<&'a Value>,
    path: Option<&'a Path>,
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    flag: Option<&str>,
    env_keys: &[&str],
    file: &FileSource<'_>,
) -> String {
    if let Some(flag) = flag {
        return format!("flag ({flag})");
    }

    let set_env = env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()));
    if let Some(env_key) = set_env {
        return format!("env ({env_key})");
    }

    if let Some(doc) = file.doc {
        if contains_path(doc, key_path) {
            let file_path = file
                .path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}
