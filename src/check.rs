use anyhow::{Context, Result};

use kube::{api::PostParams, Client, Resource};

use serde_json::json;

use k8s_openapi::api::authorization::v1::SubjectAccessReview;

use crate::types::AccessCheckCase;
use crate::types::AccessDecision;
use crate::types::CaseResult;
use crate::types::FullResult;
use crate::types::Outcome;

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn review_for(case: &AccessCheckCase) -> Result<SubjectAccessReview> {
    let sar: SubjectAccessReview = serde_json::from_value(json!({
        "apiVersion": "authorization.k8s.io/v1",
        "kind": "SubjectAccessReview",
        "metadata": {},
        "spec": {
            "user": case.user,
            "resourceAttributes": {
                "group": non_empty(case.group),
                "resource": case.resource,
                "namespace": non_empty(case.namespace),
                "verb": case.verb,
            },
        }
    }))?;
    Ok(sar)
}

pub fn review_request(case: &AccessCheckCase) -> Result<http::Request<Vec<u8>>> {
    let sar = review_for(case)?;
    let request = kube::core::Request::new(SubjectAccessReview::url_path(&(), None));
    let http_request = request.create(&PostParams::default(), serde_json::to_vec(&sar)?)?;
    Ok(http_request)
}

pub async fn check_case(client: &Client, case: &AccessCheckCase) -> Result<AccessDecision> {
    let http_request = review_request(case)?;
    let res = client
        .request::<SubjectAccessReview>(http_request)
        .await
        .with_context(|| format!("SubjectAccessReview failed for {:?}", case.name))?;
    let status = res.status.context("K8s answered with an empty status")?;
    Ok(AccessDecision {
        allowed: status.allowed,
        reason: status.reason,
    })
}

/// Runs cases against one client, built by the caller and shared by every check.
pub struct Checker {
    pub client: Client,
}

impl Checker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn check(&self, case: &AccessCheckCase) -> CaseResult {
        tracing::debug!(
            case = case.name,
            user = case.user,
            namespace = case.namespace,
            verb = case.verb,
            group = case.group,
            resource = case.resource,
            "reviewing access"
        );
        let outcome = Outcome::evaluate(case, check_case(&self.client, case).await);
        match &outcome {
            Outcome::Passed => tracing::info!(case = case.name, "passed"),
            Outcome::Mismatch { actual } => tracing::warn!(
                case = case.name,
                expected = case.expected_allowed,
                allowed = actual.allowed,
                reason = actual.reason.as_deref().unwrap_or(""),
                "unexpected decision"
            ),
            Outcome::Errored(error) => tracing::warn!(case = case.name, %error, "review failed"),
        }
        CaseResult {
            case: *case,
            outcome,
        }
    }

    /// Runs every case in order, one request at a time.
    pub async fn check_all(&self, cases: &[AccessCheckCase]) -> FullResult {
        let mut items = Vec::with_capacity(cases.len());
        for case in cases {
            items.push(self.check(case).await);
        }

        FullResult { items }
    }
}
