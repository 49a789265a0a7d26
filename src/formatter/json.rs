use std::fmt::Display;

use serde::Serialize;

use crate::types;

pub struct Json {
    result: JsonFullResult,
}

#[derive(Serialize)]
struct JsonCaseResult {
    name: &'static str,
    user: &'static str,
    namespace: &'static str,
    group: &'static str,
    resource: &'static str,
    verb: &'static str,
    expected_allowed: bool,
    allowed: Option<bool>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonFullResult {
    passed: bool,
    items: Vec<JsonCaseResult>,
}

impl From<types::CaseResult> for JsonCaseResult {
    fn from(value: types::CaseResult) -> Self {
        let case = value.case;
        let allowed = value.outcome.allowed(&case);
        let (status, reason, error) = match value.outcome {
            types::Outcome::Passed => ("passed", None, None),
            types::Outcome::Mismatch { actual } => ("mismatch", actual.reason, None),
            types::Outcome::Errored(e) => ("error", None, Some(e)),
        };
        Self {
            name: case.name,
            user: case.user,
            namespace: case.namespace,
            group: case.group,
            resource: case.resource,
            verb: case.verb,
            expected_allowed: case.expected_allowed,
            allowed,
            status,
            reason,
            error,
        }
    }
}

impl From<types::FullResult> for JsonFullResult {
    fn from(value: types::FullResult) -> Self {
        Self {
            passed: value.passed(),
            items: value
                .items
                .into_iter()
                .map(|i| i.into())
                .collect::<Vec<JsonCaseResult>>(),
        }
    }
}

impl Json {
    pub fn new(full_result: types::FullResult) -> Self {
        Self {
            result: full_result.into(),
        }
    }
}

impl Display for Json {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.result) {
            Ok(output) => f.write_str(&output),
            Err(_e) => Err(std::fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::Value;

    use crate::formatter::tests::sample_result;

    #[test]
    fn reports_each_case_status() -> Result<()> {
        let output = super::Json::new(sample_result()).to_string();
        let value: Value = serde_json::from_str(&output)?;

        assert_eq!(value["passed"], false);
        let items = value["items"].as_array().expect("items must be an array");
        assert_eq!(items.len(), 3);

        assert_eq!(items[0]["status"], "passed");
        assert_eq!(items[0]["allowed"], true);
        assert_eq!(items[0]["group"], "apps");

        assert_eq!(items[1]["status"], "mismatch");
        assert_eq!(items[1]["expected_allowed"], false);
        assert_eq!(items[1]["allowed"], true);
        assert_eq!(items[1]["namespace"], "kube-system");
        assert!(items[1]["reason"].as_str().is_some());

        assert_eq!(items[2]["status"], "error");
        assert_eq!(items[2]["allowed"], Value::Null);
        assert_eq!(items[2]["error"], "connection refused");
        Ok(())
    }
}
