//! # Renderers
//!
//! A renderer turns an [`OrgTree`] into bytes and says where they go. It never
//! writes them itself: the CLI performs the single write, and only after the
//! renderer has succeeded, so a failed run leaves no partial output behind.
//!
//! | mode              | renderer                     | destination        |
//! |-------------------|------------------------------|--------------------|
//! | [`RenderMode::Image`]   | [`graph::GraphRenderer`]     | file (`out.png`)   |
//! | [`RenderMode::Ascii`]   | [`ascii::AsciiRenderer`]     | stdout             |
//! | [`RenderMode::OrgSize`] | [`orgsize::OrgSizeRenderer`] | stdout             |
//! | [`RenderMode::Json`]    | [`json::JsonRenderer`]       | stdout             |

use crate::config::OrgChartConfig;
use crate::error::Result;
use crate::model::OrgTree;
use std::path::PathBuf;

pub mod ascii;
pub mod graph;
pub mod json;
pub mod orgsize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Image,
    Ascii,
    OrgSize,
    Json,
}

/// Rendered chart plus its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout(String),
    File { path: PathBuf, bytes: Vec<u8> },
}

pub trait Renderer {
    fn render(&self, tree: &OrgTree) -> Result<Output>;
}

pub fn renderer_for(mode: RenderMode, config: &OrgChartConfig) -> Box<dyn Renderer> {
    match mode {
        RenderMode::Image => Box::new(graph::GraphRenderer::from_config(config)),
        RenderMode::Ascii => Box::new(ascii::AsciiRenderer),
        RenderMode::OrgSize => Box::new(orgsize::OrgSizeRenderer),
        RenderMode::Json => Box::new(json::JsonRenderer),
    }
}

/// Display text shared by the text renderers: `"{name} ({title})"`, plus
/// `" -- {count}"` for people with reports.
pub fn node_label(employee: &crate::model::Employee) -> String {
    if employee.is_manager() {
        format!(
            "{} ({}) -- {}",
            employee.name,
            employee.title,
            employee.reports()
        )
    } else {
        format!("{} ({})", employee.name, employee.title)
    }
}
