use crate::model::{OrgNode, OrgTree};

/// One manager's line in the org-size report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgSizeRow {
    pub name: String,
    pub title: String,
    pub total: usize,
    pub directs: usize,
}

/// Lists every manager in pre-order with total org size and direct report count.
///
/// `directs` counts the children present in `tree`, so a filtered tree reports
/// direct sub-managers only.
pub fn run(tree: &OrgTree) -> Vec<OrgSizeRow> {
    let mut rows = Vec::new();
    for root in &tree.roots {
        collect(root, &mut rows);
    }
    rows
}

fn collect(node: &OrgNode, rows: &mut Vec<OrgSizeRow>) {
    if !node.employee.is_manager() {
        return;
    }
    rows.push(OrgSizeRow {
        name: node.employee.name.clone(),
        title: node.employee.title.clone(),
        total: node.employee.reports(),
        directs: node.reports.len(),
    });
    for child in &node.reports {
        collect(child, rows);
    }
}
