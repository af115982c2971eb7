//! Template rendering of inventory tables for the terminal, HTML and LaTeX.
//!
//! Every layout is a minijinja template over the same [`InventoryTable`]
//! context. The HTML template is named `.html` so its values are escaped by
//! the environment; the LaTeX template escapes through the `latex` filter.

use std::str::FromStr;

use console::Style;
use minijinja::Environment;
use spelunklib::{Inventory, InventoryTable};

/// Templates included at compile time
const PLAIN_TEMPLATE: &str = include_str!("../templates/table.txt");
const HTML_TEMPLATE: &str = include_str!("../templates/table.html");
const LATEX_TEMPLATE: &str = include_str!("../templates/table.tex");

/// Text layout of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Tab-separated columns
    #[default]
    Plain,
    /// An HTML `<table>`
    Html,
    /// A LaTeX `tabular` environment
    Latex,
}

impl Layout {
    fn template_name(&self) -> &'static str {
        match self {
            Layout::Plain => "table.txt",
            Layout::Html => "table.html",
            Layout::Latex => "table.tex",
        }
    }
}

/// What the CLI prints: a rendered table or the raw inventory as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table(Layout),
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table(Layout::default())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Table(Layout::Plain)),
            "html" => Ok(OutputFormat::Table(Layout::Html)),
            "latex" => Ok(OutputFormat::Table(Layout::Latex)),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Create the template environment with the layouts and their filters
fn create_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);

    let header = Style::new().bold();
    env.add_filter("bold", move |text: String| header.apply_to(text).to_string());
    env.add_filter("latex", escape_latex);

    env.add_template(Layout::Plain.template_name(), PLAIN_TEMPLATE)?;
    env.add_template(Layout::Html.template_name(), HTML_TEMPLATE)?;
    env.add_template(Layout::Latex.template_name(), LATEX_TEMPLATE)?;
    Ok(env)
}

/// Render a table in the given layout.
pub fn render_table(table: &InventoryTable, layout: Layout) -> Result<String, minijinja::Error> {
    let env = create_environment()?;
    env.get_template(layout.template_name())?.render(table)
}

/// Render the raw inventory as pretty-printed JSON.
pub fn render_json(inventory: &Inventory) -> Result<String, serde_json::Error> {
    Ok(format!("{}\n", serde_json::to_string_pretty(inventory)?))
}

fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '\\' => escaped.push_str("\\textbackslash{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}
