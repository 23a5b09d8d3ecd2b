use crate::model::{OrgNode, OrgTree};

/// Keeps only people with at least one report, at every level.
///
/// Manager to sub-manager links are preserved; individual contributors vanish.
pub fn only_managers(tree: &OrgTree) -> OrgTree {
    OrgTree::new(managers_among(&tree.roots))
}

fn managers_among(nodes: &[OrgNode]) -> Vec<OrgNode> {
    nodes
        .iter()
        .filter(|n| n.employee.is_manager())
        .map(|n| OrgNode::new(n.employee.clone(), managers_among(&n.reports)))
        .collect()
}
