use serde::Serialize;
use std::collections::HashMap;

/// One person and their reporting line, as read from the input file.
///
/// Values are never mutated once parsed: the extractor derives a copy
/// carrying the transitive report count via [`Employee::with_reports`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_count: Option<usize>,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        manager_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let manager_id = manager_id.into();
        Self {
            id: id.into(),
            name: name.into(),
            manager_id: if manager_id.is_empty() {
                None
            } else {
                Some(manager_id)
            },
            title: title.into(),
            report_count: None,
        }
    }

    pub fn with_reports(&self, report_count: usize) -> Self {
        Self {
            report_count: Some(report_count),
            ..self.clone()
        }
    }

    /// Transitive report count, zero until the extractor has run.
    pub fn reports(&self) -> usize {
        self.report_count.unwrap_or(0)
    }

    pub fn is_manager(&self) -> bool {
        self.reports() > 0
    }

    /// Exact match on either the id or the display name.
    pub fn matches(&self, target: &str) -> bool {
        self.id == target || self.name == target
    }
}

/// An employee together with the id of the manager it resolved to.
/// `manager == None` marks a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub employee: Employee,
    pub manager: Option<String>,
}

/// Direct employee -> manager associations, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportsMap {
    reports: Vec<Report>,
}

impl ReportsMap {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn roots(&self) -> impl Iterator<Item = &Employee> {
        self.reports
            .iter()
            .filter(|r| r.manager.is_none())
            .map(|r| &r.employee)
    }

    /// Direct reports keyed by manager id. Built once; sibling order follows input order.
    pub fn direct_reports(&self) -> HashMap<&str, Vec<&Employee>> {
        let mut index: HashMap<&str, Vec<&Employee>> = HashMap::new();
        for report in &self.reports {
            if let Some(manager) = report.manager.as_deref() {
                index.entry(manager).or_default().push(&report.employee);
            }
        }
        index
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgNode {
    #[serde(flatten)]
    pub employee: Employee,
    pub reports: Vec<OrgNode>,
}

impl OrgNode {
    pub fn new(employee: Employee, reports: Vec<OrgNode>) -> Self {
        Self { employee, reports }
    }

    pub fn is_leaf(&self) -> bool {
        self.reports.is_empty()
    }

    /// Number of nodes below this one in the tree as it stands.
    pub fn descendant_count(&self) -> usize {
        self.reports
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// A forest of organizations, one entry per root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrgTree {
    pub roots: Vec<OrgNode>,
}

impl OrgTree {
    pub fn new(roots: Vec<OrgNode>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Every node in pre-order.
    pub fn nodes(&self) -> Vec<&OrgNode> {
        fn walk<'a>(node: &'a OrgNode, out: &mut Vec<&'a OrgNode>) {
            out.push(node);
            for child in &node.reports {
                walk(child, out);
            }
        }

        let mut out = Vec::new();
        for root in &self.roots {
            walk(root, &mut out);
        }
        out
    }
}
