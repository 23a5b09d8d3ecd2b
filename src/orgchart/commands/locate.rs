use crate::error::{OrgError, Result};
use crate::model::{OrgNode, OrgTree};

/// Returns the single-root tree under the one node whose id or name equals `target`.
///
/// The whole tree is searched; no match and more than one match are both errors.
pub fn run(tree: &OrgTree, target: &str) -> Result<OrgTree> {
    let mut matches = Vec::new();
    for root in &tree.roots {
        collect_matches(root, target, &mut matches);
    }

    match matches.as_slice() {
        [only] => Ok(OrgTree::new(vec![(*only).clone()])),
        _ => Err(OrgError::RootLookup {
            target: target.to_string(),
            found: matches.len(),
        }),
    }
}

fn collect_matches<'a>(node: &'a OrgNode, target: &str, out: &mut Vec<&'a OrgNode>) {
    if node.employee.matches(target) {
        out.push(node);
    }
    for child in &node.reports {
        collect_matches(child, target, out);
    }
}
