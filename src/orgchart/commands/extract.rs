use crate::error::{OrgError, Result};
use crate::model::{Employee, OrgNode, OrgTree, ReportsMap};
use std::collections::{HashMap, HashSet};

type Index<'a> = HashMap<&'a str, Vec<&'a Employee>>;

/// Builds the organization forest, annotating every employee with the number
/// of people anywhere below them.
///
/// Roots and siblings keep the order of the reports map. Employees that no
/// root reaches (the reports of a dropped orphan) are left out.
pub fn run(reports: &ReportsMap) -> Result<OrgTree> {
    let index = reports.direct_reports();
    let mut on_path = HashSet::new();

    let roots = reports
        .roots()
        .map(|root| extract_node(root, &index, &mut on_path))
        .collect::<Result<Vec<_>>>()?;
    let tree = OrgTree::new(roots);

    let placed: usize = tree.roots.iter().map(|r| 1 + r.descendant_count()).sum();
    if placed < reports.len() {
        tracing::warn!(
            unreachable = reports.len() - placed,
            "some employees are not below any root and were left out"
        );
    }
    tracing::debug!(roots = tree.roots.len(), employees = placed, "extracted org tree");

    Ok(tree)
}

fn extract_node<'a>(
    employee: &'a Employee,
    index: &Index<'a>,
    on_path: &mut HashSet<&'a str>,
) -> Result<OrgNode> {
    if !on_path.insert(employee.id.as_str()) {
        return Err(OrgError::CycleDetected(vec![
            employee.id.clone(),
            employee.id.clone(),
        ]));
    }

    let reports = match index.get(employee.id.as_str()) {
        Some(direct) => direct
            .iter()
            .map(|report| extract_node(*report, index, on_path))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    on_path.remove(employee.id.as_str());

    let count = reports.iter().map(|r| r.employee.reports()).sum::<usize>() + reports.len();
    Ok(OrgNode::new(employee.with_reports(count), reports))
}
