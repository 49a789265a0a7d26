use anyhow::Result;

/// A single access question and the answer the cluster policy should give.
///
/// An empty `namespace` asks about a cluster-scoped permission and an empty
/// `group` targets the core API group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessCheckCase {
    pub name: &'static str,
    pub user: &'static str,
    pub namespace: &'static str,
    pub verb: &'static str,
    pub group: &'static str,
    pub resource: &'static str,
    pub expected_allowed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Mismatch { actual: AccessDecision },
    Errored(String),
}

impl Outcome {
    pub fn evaluate(case: &AccessCheckCase, result: Result<AccessDecision>) -> Self {
        match result {
            Ok(decision) if decision.allowed == case.expected_allowed => Outcome::Passed,
            Ok(decision) => Outcome::Mismatch { actual: decision },
            Err(e) => Outcome::Errored(format!("{:#}", e)),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// The decision returned by the cluster, if the query got that far.
    pub fn allowed(&self, case: &AccessCheckCase) -> Option<bool> {
        match self {
            Outcome::Passed => Some(case.expected_allowed),
            Outcome::Mismatch { actual } => Some(actual.allowed),
            Outcome::Errored(_) => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CaseResult {
    pub case: AccessCheckCase,
    pub outcome: Outcome,
}

#[derive(Clone, Debug)]
pub struct FullResult {
    pub items: Vec<CaseResult>,
}

impl FullResult {
    pub fn passed(&self) -> bool {
        self.items.iter().all(|r| r.outcome.is_passed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.items.iter().filter(|r| !r.outcome.is_passed())
    }
}
