use super::{node_label, Output, Renderer};
use crate::error::Result;
use crate::model::{OrgNode, OrgTree};

/// Box-drawing tree, one line per person. Each root of a forest starts a new tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    pub fn to_text(&self, tree: &OrgTree) -> String {
        let mut out = String::new();
        for root in &tree.roots {
            out.push_str(&node_label(&root.employee));
            out.push('\n');
            write_children(root, "", &mut out);
        }
        out
    }
}

fn write_children(node: &OrgNode, prefix: &str, out: &mut String) {
    let last = node.reports.len().saturating_sub(1);
    for (i, child) in node.reports.iter().enumerate() {
        let is_last = i == last;
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&node_label(&child.employee));
        out.push('\n');

        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };
        write_children(child, &child_prefix, out);
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, tree: &OrgTree) -> Result<Output> {
        Ok(Output::Stdout(self.to_text(tree)))
    }
}
