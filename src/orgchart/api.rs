//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the input
//! sources. It is the single entry point for building a chart, whatever the UI.
//!
//! The facade:
//! - **Reads** the input file through [`crate::source`]
//! - **Dispatches** to the pipeline stages in `commands/*.rs`
//! - **Returns structured types** (`Result<OrgTree>`, `Result<Output>`)
//!
//! It never prints, never exits, and never writes the rendered chart.

use crate::commands;
use crate::config::OrgChartConfig;
use crate::error::Result;
use crate::model::{Employee, OrgTree, ReportsMap};
use crate::render::{self, Output, RenderMode};
use crate::source;
use std::path::Path;

/// Which part of the organization to chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartView {
    /// Id or name of the person to root the chart at.
    pub root: Option<String>,
    pub only_managers: bool,
}

impl ChartView {
    pub fn new(root: Option<String>, only_managers: bool) -> Self {
        Self {
            root,
            only_managers,
        }
    }
}

pub struct OrgChartApi {
    config: OrgChartConfig,
}

impl OrgChartApi {
    pub fn new(config: OrgChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrgChartConfig {
        &self.config
    }

    pub fn load_employees(&self, input: &Path) -> Result<Vec<Employee>> {
        source::open(input, &self.config)
    }

    pub fn reports(&self, employees: Vec<Employee>) -> Result<ReportsMap> {
        commands::reports::build(employees, self.config.orphans)
    }

    /// Full pipeline from already-parsed employees.
    pub fn chart_employees(&self, employees: Vec<Employee>, view: &ChartView) -> Result<OrgTree> {
        let reports = self.reports(employees)?;
        let mut tree = commands::extract::run(&reports)?;

        if let Some(root) = view.root.as_deref() {
            tree = commands::locate::run(&tree, root)?;
        }
        if view.only_managers {
            tree = commands::filter::only_managers(&tree);
            if let (Some(root), true) = (view.root.as_deref(), tree.is_empty()) {
                tracing::warn!(root, "{} has no reports, nothing left to chart", root);
            }
        }
        Ok(tree)
    }

    /// Full pipeline from an input file.
    pub fn chart(&self, input: &Path, view: &ChartView) -> Result<OrgTree> {
        let employees = self.load_employees(input)?;
        self.chart_employees(employees, view)
    }

    pub fn render(&self, tree: &OrgTree, mode: RenderMode) -> Result<Output> {
        render::renderer_for(mode, &self.config).render(tree)
    }
}
