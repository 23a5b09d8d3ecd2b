use crate::config::OrphanPolicy;
use crate::error::{OrgError, Result};
use crate::model::{Employee, Report, ReportsMap};
use std::collections::{HashMap, HashSet};

/// Resolves every employee's manager id against the employee table.
///
/// Duplicate ids and cyclic reporting lines are fatal. Unknown manager ids
/// are handled per `orphans`.
pub fn build(employees: Vec<Employee>, orphans: OrphanPolicy) -> Result<ReportsMap> {
    let mut known = HashSet::with_capacity(employees.len());
    for employee in &employees {
        if !known.insert(employee.id.as_str()) {
            return Err(OrgError::DuplicateId(employee.id.clone()));
        }
    }

    let mut reports = Vec::with_capacity(employees.len());
    for employee in &employees {
        let manager = match employee.manager_id.as_deref() {
            None => None,
            Some(id) if known.contains(id) => Some(id.to_string()),
            Some(id) => match orphans {
                OrphanPolicy::Drop => {
                    tracing::warn!(
                        employee = %employee.id,
                        manager = id,
                        "manager id not found, leaving employee out"
                    );
                    continue;
                }
                OrphanPolicy::Root => {
                    tracing::warn!(
                        employee = %employee.id,
                        manager = id,
                        "manager id not found, charting employee as a root"
                    );
                    None
                }
            },
        };
        reports.push(Report {
            employee: employee.clone(),
            manager,
        });
    }

    let reports = ReportsMap::new(reports);
    check_acyclic(&reports)?;
    Ok(reports)
}

/// Follows each manager chain until it reaches a root, a chain already known
/// to end at one, or an employee seen earlier on the same chain.
pub fn check_acyclic(reports: &ReportsMap) -> Result<()> {
    let manager_of: HashMap<&str, Option<&str>> = reports
        .iter()
        .map(|r| (r.employee.id.as_str(), r.manager.as_deref()))
        .collect();

    let mut settled: HashSet<&str> = HashSet::new();
    for report in reports.iter() {
        let mut path: Vec<&str> = Vec::new();
        let mut on_path: HashSet<&str> = HashSet::new();
        let mut current = Some(report.employee.id.as_str());

        while let Some(id) = current {
            if settled.contains(id) {
                break;
            }
            if !on_path.insert(id) {
                let start = path.iter().position(|p| *p == id).unwrap_or(0);
                let mut cycle: Vec<String> = path[start..].iter().map(|p| p.to_string()).collect();
                cycle.push(id.to_string());
                return Err(OrgError::CycleDetected(cycle));
            }
            path.push(id);
            // An id missing from the map belongs to a dropped orphan: the chain ends there.
            current = manager_of.get(id).copied().flatten();
        }

        settled.extend(path);
    }
    Ok(())
}
