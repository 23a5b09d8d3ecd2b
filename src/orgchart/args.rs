use clap::Parser;
use orgchart::render::RenderMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orgchart", version)]
#[command(about = "Derive an org tree from a CSV or spreadsheet file", long_about = None)]
pub struct Cli {
    /// Employee data file (.csv, .xlsx, .xls)
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Render only the subtree under this id or name
    #[arg(long, value_name = "ID_OR_NAME")]
    pub root: Option<String>,

    /// Render managers only
    #[arg(long)]
    pub only_managers: bool,

    /// Render an image through Graphviz (default)
    #[arg(long, overrides_with_all = ["ascii", "orgsize", "json"], help_heading = "Output")]
    pub pydot: bool,

    /// Render an ascii tree
    #[arg(long, overrides_with_all = ["pydot", "orgsize", "json"], help_heading = "Output")]
    pub ascii: bool,

    /// Print total org size and direct reports per manager
    #[arg(long, overrides_with_all = ["pydot", "ascii", "json"], help_heading = "Output")]
    pub orgsize: bool,

    /// Print the tree as JSON
    #[arg(long, overrides_with_all = ["pydot", "ascii", "orgsize"], help_heading = "Output")]
    pub json: bool,

    /// Image path; the extension picks the format (png, svg, pdf, dot)
    #[arg(short, long, value_name = "PATH", help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./orgchart.json when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The render flags override each other, so at most one is set.
    pub fn render_mode(&self) -> RenderMode {
        if self.ascii {
            RenderMode::Ascii
        } else if self.orgsize {
            RenderMode::OrgSize
        } else if self.json {
            RenderMode::Json
        } else {
            RenderMode::Image
        }
    }
}
