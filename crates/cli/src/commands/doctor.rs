use rigcheck_core::catalog::CatalogBundle;
use rigcheck_core::config::LoadOptions;
use serde::Serialize;

use crate::commands::{load_bundle, load_config, CommandResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(options: &LoadOptions, json_output: bool) -> CommandResult {
    let report = build_report(options);
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    if json_output {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
        return CommandResult { exit_code, output };
    }

    CommandResult { exit_code, output: render_human(&report) }
}

fn build_report(options: &LoadOptions) -> DoctorReport {
    let mut checks = Vec::new();

    match load_config(options) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            let origin = config.catalog.path.as_ref().map_or_else(
                || "the embedded catalog".to_string(),
                |path| format!("`{}`", path.display()),
            );
            match load_bundle(&config) {
                Ok(bundle) => {
                    checks.push(DoctorCheck {
                        name: "catalog_load",
                        status: CheckStatus::Pass,
                        details: format!(
                            "{} component(s) and {} preset(s) from {origin}",
                            bundle.catalog.len(),
                            bundle.presets.len()
                        ),
                    });
                    checks.push(check_preset_references(&bundle));
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "catalog_load",
                        status: CheckStatus::Fail,
                        details: format!("{error:#}"),
                    });
                    checks.push(skipped("preset_references", "catalog did not load"));
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: format!("{error:#}"),
            });
            checks.push(skipped("catalog_load", "configuration did not load"));
            checks.push(skipped("preset_references", "configuration did not load"));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_preset_references(bundle: &CatalogBundle) -> DoctorCheck {
    let broken: Vec<String> = bundle
        .presets
        .iter()
        .flat_map(|preset| {
            preset
                .unresolved(&bundle.catalog)
                .into_iter()
                .map(move |(slot, id)| format!("{}: {slot}={}", preset.id.0, id.as_str()))
        })
        .collect();

    if broken.is_empty() {
        DoctorCheck {
            name: "preset_references",
            status: CheckStatus::Pass,
            details: format!("all {} preset(s) resolve against the catalog", bundle.presets.len()),
        }
    } else {
        DoctorCheck {
            name: "preset_references",
            status: CheckStatus::Fail,
            details: format!("unknown components referenced: {}", broken.join(", ")),
        }
    }
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        details: format!("skipped because {reason}"),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
