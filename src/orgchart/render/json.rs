use super::{Output, Renderer};
use crate::error::Result;
use crate::model::OrgTree;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, tree: &OrgTree) -> Result<Output> {
        let mut text = serde_json::to_string_pretty(tree)?;
        text.push('\n');
        Ok(Output::Stdout(text))
    }
}
