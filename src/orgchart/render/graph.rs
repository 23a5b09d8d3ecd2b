//! Image output through Graphviz.
//!
//! The chart is laid out left to right, one `rank=same` subgraph per sibling
//! group, with rounded filled boxes: one fill for people with reports, another
//! for people without. The chart is built as a `dot_structures` graph, printed
//! with graphviz-rust's DOT printer, and handed to its `exec` for image output.

use super::{Output, Renderer};
use crate::config::OrgChartConfig;
use crate::error::{OrgError, Result};
use crate::model::{OrgNode, OrgTree};
use dot_structures::{Attribute, Edge, EdgeTy, Graph, Id, Node, NodeId, Stmt, Subgraph, Vertex};
use graphviz_rust::cmd::Format;
use graphviz_rust::exec;
use graphviz_rust::printer::{DotPrinter, PrinterContext};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
    Pdf,
    /// Graphviz source; written without running Graphviz.
    Dot,
}

impl ImageFormat {
    /// Picks the format from the output extension. No extension means PNG.
    pub fn for_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());

        match ext.as_deref() {
            None | Some("png") => Ok(ImageFormat::Png),
            Some("svg") => Ok(ImageFormat::Svg),
            Some("pdf") => Ok(ImageFormat::Pdf),
            Some("dot") | Some("gv") => Ok(ImageFormat::Dot),
            Some(other) => Err(OrgError::Render(format!(
                "unsupported image format: .{}",
                other
            ))),
        }
    }

    fn graphviz_format(&self) -> Option<Format> {
        match self {
            ImageFormat::Png => Some(Format::Png),
            ImageFormat::Svg => Some(Format::Svg),
            ImageFormat::Pdf => Some(Format::Pdf),
            ImageFormat::Dot => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphRenderer {
    output: PathBuf,
    manager_color: String,
    leaf_color: String,
}

impl GraphRenderer {
    pub fn from_config(config: &OrgChartConfig) -> Self {
        Self {
            output: config.output.clone(),
            manager_color: config.manager_color.clone(),
            leaf_color: config.leaf_color.clone(),
        }
    }

    /// The chart as a Graphviz graph value.
    pub fn to_graph(&self, tree: &OrgTree) -> Graph {
        let mut stmts: Vec<Stmt> = [
            ("layout", "dot"),
            ("rankdir", "LR"),
            ("splines", "line"),
            ("overlap", "scale"),
            ("ranksep", "2"),
        ]
        .into_iter()
        .map(|(key, value)| Stmt::Attribute(plain_attr(key, value)))
        .collect();

        let mut edges = Vec::new();
        let mut groups = 0;
        self.add_group(&tree.roots, None, &mut stmts, &mut edges, &mut groups);
        stmts.extend(edges);

        Graph::DiGraph {
            id: Id::Plain("orgchart".to_string()),
            strict: true,
            stmts,
        }
    }

    /// The DOT document for `tree`.
    pub fn to_dot(&self, tree: &OrgTree) -> String {
        self.to_graph(tree).print(&mut PrinterContext::default())
    }

    fn add_group(
        &self,
        group: &[OrgNode],
        manager: Option<&str>,
        stmts: &mut Vec<Stmt>,
        edges: &mut Vec<Stmt>,
        groups: &mut usize,
    ) {
        if group.is_empty() {
            return;
        }

        let mut ranked = vec![Stmt::Attribute(plain_attr("rank", "same"))];
        for node in group {
            let fill = if node.is_leaf() {
                &self.leaf_color
            } else {
                &self.manager_color
            };
            ranked.push(Stmt::Node(Node {
                id: node_id(&node.employee.id),
                attributes: vec![
                    Attribute(Id::Plain("label".to_string()), Id::Html(html_label(node))),
                    plain_attr("shape", "box"),
                    Attribute(Id::Plain("style".to_string()), Id::Escaped(quote("filled, rounded"))),
                    Attribute(Id::Plain("fillcolor".to_string()), Id::Escaped(quote(fill))),
                ],
            }));
            if let Some(manager) = manager {
                edges.push(Stmt::Edge(Edge {
                    ty: EdgeTy::Pair(
                        Vertex::N(node_id(manager)),
                        Vertex::N(node_id(&node.employee.id)),
                    ),
                    attributes: Vec::new(),
                }));
            }
        }

        stmts.push(Stmt::Subgraph(Subgraph {
            id: Id::Plain(format!("rank_{}", groups)),
            stmts: ranked,
        }));
        *groups += 1;

        for node in group {
            self.add_group(
                &node.reports,
                Some(node.employee.id.as_str()),
                stmts,
                edges,
                groups,
            );
        }
    }
}

impl Renderer for GraphRenderer {
    fn render(&self, tree: &OrgTree) -> Result<Output> {
        let format = ImageFormat::for_path(&self.output)?;
        let graph = self.to_graph(tree);
        let mut ctx = PrinterContext::default();

        let bytes = match format.graphviz_format() {
            None => graph.print(&mut ctx).into_bytes(),
            Some(graphviz_format) => {
                tracing::debug!(?format, "running graphviz");
                exec(graph, &mut ctx, vec![graphviz_format.into()]).map_err(graphviz_error)?
            }
        };

        Ok(Output::File {
            path: self.output.clone(),
            bytes,
        })
    }
}

fn graphviz_error(e: io::Error) -> OrgError {
    match e.kind() {
        ErrorKind::NotFound => OrgError::RendererUnavailable(
            "Graphviz `dot` not found on PATH. Install Graphviz or write a .dot file instead."
                .to_string(),
        ),
        _ => OrgError::Render(format!("Graphviz failed: {}", e.to_string().trim())),
    }
}

fn plain_attr(key: &str, value: &str) -> Attribute {
    Attribute(Id::Plain(key.to_string()), Id::Plain(value.to_string()))
}

fn node_id(id: &str) -> NodeId {
    NodeId(Id::Escaped(quote(id)), None)
}

/// `<<B>name</B><BR/>title<BR/>(n)>`, the count line only for people with reports.
fn html_label(node: &OrgNode) -> String {
    let employee = &node.employee;
    let count = if employee.is_manager() {
        format!("<BR/>({})", employee.reports())
    } else {
        String::new()
    };
    format!(
        "<<B>{}</B><BR/>{}{}>",
        escape_html(&employee.name),
        escape_html(&employee.title),
        count
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
