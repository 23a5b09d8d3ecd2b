use crate::config::OrphanPolicy;
use crate::model::{Employee, OrgTree, ReportsMap};
use crate::{commands, model::OrgNode};

/// The ten-person sample organization used across the test suite.
///
/// ```text
/// Chuck Norris (CEO) -- 9
/// ├── Alice Johnson (Engineering Manager) -- 3
/// │   ├── Carol White, Dave Brown, Eve Davis
/// └── Bob Smith (Sales Manager) -- 4
///     ├── Frank Wilson (Sales Lead) -- 2
///     │   ├── Henry Taylor, Ivy Anderson
///     └── Grace Miller
/// ```
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("CEO", "Chuck Norris", "", "CEO"),
        Employee::new("E1", "Alice Johnson", "CEO", "Engineering Manager"),
        Employee::new("E2", "Bob Smith", "CEO", "Sales Manager"),
        Employee::new("E3", "Carol White", "E1", "Senior Developer"),
        Employee::new("E4", "Dave Brown", "E1", "Developer"),
        Employee::new("E5", "Eve Davis", "E1", "Junior Developer"),
        Employee::new("E6", "Frank Wilson", "E2", "Sales Lead"),
        Employee::new("E7", "Grace Miller", "E2", "Account Manager"),
        Employee::new("E8", "Henry Taylor", "E6", "Sales Rep"),
        Employee::new("E9", "Ivy Anderson", "E6", "Sales Rep"),
    ]
}

pub fn reports_for(employees: Vec<Employee>) -> ReportsMap {
    commands::reports::build(employees, OrphanPolicy::Drop).expect("valid sample data")
}

pub fn sample_tree() -> OrgTree {
    commands::extract::run(&reports_for(sample_employees())).expect("acyclic sample data")
}

/// Finds a node anywhere in the tree by id.
pub fn node<'a>(tree: &'a OrgTree, id: &str) -> &'a OrgNode {
    tree.nodes()
        .into_iter()
        .find(|n| n.employee.id == id)
        .unwrap_or_else(|| panic!("no node with id {id}"))
}

/// Child ids of a node, in tree order.
pub fn child_ids(node: &OrgNode) -> Vec<&str> {
    node.reports.iter().map(|c| c.employee.id.as_str()).collect()
}
