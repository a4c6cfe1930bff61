//! Read-only rendering of a pricing table
//!
//! Derives everything from the attribute record through the shared layout.
//! Membership cells show the configured yes/no text.

use crate::config::RenderConfig;
use crate::html::Markup;
use crate::layout::{derive_layout, GridLayout, Slot};
use pricegrid_model::AttributeState;

/// One rendered display cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCell {
    /// Class attribute, `None` for bare spacer cells
    pub class: Option<String>,
    /// Cell text, `None` for spacer cells
    pub text: Option<String>,
}

impl DisplayCell {
    fn spacer() -> Self {
        Self {
            class: None,
            text: None,
        }
    }

    fn centered(class: String, text: &str) -> Self {
        Self {
            class: Some(class),
            text: Some(text.to_string()),
        }
    }
}

/// Display grid in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    /// Heading text
    pub heading: String,
    /// Wrapper class
    pub wrapper_class: String,
    /// CSS grid column count
    pub columns: usize,
    /// Inline grid style
    pub grid_style: String,
    /// Cells, `columns` per row
    pub cells: Vec<DisplayCell>,
}

impl DisplayView {
    /// Serialize to HTML
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut m = Markup::new();
        m.open("div", &[("class", self.wrapper_class.as_str())]);
        m.element("h1", &[], &self.heading);
        m.open("div", &[("class", "grid-table"), ("style", self.grid_style.as_str())]);

        for cell in &self.cells {
            match (&cell.class, &cell.text) {
                (Some(class), Some(text)) => {
                    m.open("div", &[("class", class.as_str())])
                        .element("div", &[("class", "p-10")], text)
                        .close("div");
                }
                _ => {
                    m.open("div", &[]).close("div");
                }
            }
        }

        m.close("div").close("div");
        m.finish()
    }
}

/// Renders the read-only grid
#[derive(Debug, Clone, Default)]
pub struct DisplayRenderer {
    config: RenderConfig,
}

impl DisplayRenderer {
    /// Create renderer with the given labels
    #[inline]
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Build the display view for a record
    #[must_use]
    pub fn view(&self, state: &AttributeState) -> DisplayView {
        self.view_layout(&derive_layout(state))
    }

    /// Build the display view from an already derived layout
    #[must_use]
    pub fn view_layout(&self, layout: &GridLayout<'_>) -> DisplayView {
        let cells = layout
            .slots()
            .into_iter()
            .map(|slot| match slot {
                Slot::Corner | Slot::HeaderEnd | Slot::RowEnd(_) => DisplayCell::spacer(),
                Slot::PlanHeader(plan) => DisplayCell::centered("centered".to_string(), &plan.name),
                Slot::FeatureLabel(row) => {
                    DisplayCell::centered("centered".to_string(), &row.feature.name)
                }
                Slot::Membership(cell) => {
                    let text = if cell.included {
                        &self.config.yes_label
                    } else {
                        &self.config.no_label
                    };
                    DisplayCell::centered(cell.class_attr(), text)
                }
            })
            .collect();

        DisplayView {
            heading: self.config.heading.clone(),
            wrapper_class: self.config.wrapper_class.clone(),
            columns: layout.columns(),
            grid_style: layout.grid_style(),
            cells,
        }
    }

    /// Render a record to HTML
    #[must_use]
    pub fn render(&self, state: &AttributeState) -> String {
        let view = self.view(state);
        tracing::debug!(columns = view.columns, cells = view.cells.len(), "rendered display grid");
        view.to_html()
    }
}
