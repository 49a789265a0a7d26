use std::fmt;

use clap::ValueEnum;

use crate::config;
use crate::types;

mod json;
mod pretty;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table with one row per case
    #[default]
    Pretty,
    /// Single JSON document
    Json,
}

/// Renders a finished run in the requested output format.
pub enum Formatter {
    Pretty(pretty::Pretty),
    Json(json::Json),
}

impl Formatter {
    pub fn new(format: OutputFormat, config: &config::Config, result: types::FullResult) -> Self {
        match format {
            OutputFormat::Pretty => {
                Formatter::Pretty(pretty::Pretty::new(config.display_group, result))
            }
            OutputFormat::Json => Formatter::Json(json::Json::new(result)),
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatter::Pretty(p) => p.fmt(f),
            Formatter::Json(j) => j.fmt(f),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::path::PathBuf;

    use crate::cases;
    use crate::config::Config;
    use crate::types::{AccessDecision, CaseResult, FullResult, Outcome};

    fn config(display_group: bool) -> Config {
        Config {
            kubeconfig: PathBuf::from("/home/dave/.kube/config"),
            context: None,
            display_group,
        }
    }

    pub(crate) fn sample_result() -> FullResult {
        FullResult {
            items: vec![
                CaseResult {
                    case: cases::CREATE_DEPLOYMENT,
                    outcome: Outcome::Passed,
                },
                CaseResult {
                    case: cases::GET_PODS_KUBE_SYSTEM,
                    outcome: Outcome::Mismatch {
                        actual: AccessDecision {
                            allowed: true,
                            reason: Some(
                                "RBAC: allowed by ClusterRoleBinding \"oops\"".to_string(),
                            ),
                        },
                    },
                },
                CaseResult {
                    case: cases::CREATE_AGGREGATED_CRD,
                    outcome: Outcome::Errored("connection refused".to_string()),
                },
            ],
        }
    }

    #[test]
    fn format_follows_the_requested_output() {
        let formatter =
            super::Formatter::new(super::OutputFormat::Json, &config(false), sample_result());
        assert!(matches!(formatter, super::Formatter::Json(_)));
        let formatter =
            super::Formatter::new(super::OutputFormat::Pretty, &config(true), sample_result());
        assert!(matches!(formatter, super::Formatter::Pretty(_)));
    }

    #[test]
    fn output_names_are_lowercase() {
        use clap::ValueEnum;

        let names: Vec<String> = super::OutputFormat::value_variants()
            .iter()
            .filter_map(|f| f.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["pretty", "json"]);
        assert_eq!(
            super::OutputFormat::from_str("json", false),
            Ok(super::OutputFormat::Json)
        );
        assert!(super::OutputFormat::from_str("yaml", false).is_err());
    }
}
