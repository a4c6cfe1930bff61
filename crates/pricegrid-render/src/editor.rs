//! Editable rendering of a pricing table
//!
//! Walks the same slots as the display renderer, swapping text for inputs,
//! checkboxes, and buttons. Every control carries the [`Command`] it
//! dispatches, and the HTML exposes it as a `data-command` (or, for text
//! inputs, `data-input`) attribute.

use crate::config::RenderConfig;
use crate::html::Markup;
use crate::layout::{cell_class, derive_layout, GridLayout, HighlightClass, Slot};
use pricegrid_editor::{Command, EditorError, InputTarget};
use pricegrid_model::{AttributeState, Plan};

/// Button style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Emphasized action
    Primary,
    /// Neutral action
    Secondary,
    /// Removes something
    Destructive,
}

impl ButtonVariant {
    /// Class name of the variant
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
        }
    }
}

/// Button wired to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Caption
    pub label: String,
    /// Style
    pub variant: ButtonVariant,
    /// Command dispatched on click
    pub command: Command,
}

/// Content of an editor cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorContent {
    /// Spacer
    Empty,
    /// Name input
    TextInput {
        /// Field the input edits
        target: InputTarget,
        /// Current name
        value: String,
    },
    /// Membership checkbox
    Checkbox {
        /// Plan includes the feature
        checked: bool,
        /// Toggle dispatched on change
        command: Command,
    },
    /// Single button placed directly in the cell
    Button(Button),
    /// Row of buttons in a padded wrapper
    Buttons(Vec<Button>),
}

/// One rendered editor cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCell {
    /// Class attribute, `None` for spacers
    pub class: Option<String>,
    /// Control in the cell
    pub content: EditorContent,
}

impl EditorCell {
    fn empty() -> Self {
        Self {
            class: None,
            content: EditorContent::Empty,
        }
    }

    fn centered(content: EditorContent) -> Self {
        Self {
            class: Some(cell_class(HighlightClass::None)),
            content,
        }
    }

    fn buttons(buttons: Vec<Button>) -> Self {
        Self::centered(EditorContent::Buttons(buttons))
    }

    /// Commands reachable by clicking in this cell
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        let none: &[Button] = &[];
        let (single, many) = match &self.content {
            EditorContent::Checkbox { command, .. } => (Some(command), none),
            EditorContent::Button(button) => (Some(&button.command), none),
            EditorContent::Buttons(buttons) => (None, buttons.as_slice()),
            EditorContent::Empty | EditorContent::TextInput { .. } => (None, none),
        };
        single.into_iter().chain(many.iter().map(|b| &b.command))
    }
}

/// Editor grid in row-major order
///
/// `cells` holds the shared grid (same slots as the display view) followed
/// by the footer row of add-feature and per-plan controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    /// Heading text
    pub heading: String,
    /// Wrapper class
    pub wrapper_class: String,
    /// CSS grid column count
    pub columns: usize,
    /// Inline grid style
    pub grid_style: String,
    /// Cells shared with the display view
    pub grid_cells: usize,
    /// All cells
    pub cells: Vec<EditorCell>,
}

impl EditorView {
    /// Cells shared with the display view
    #[must_use]
    pub fn grid(&self) -> &[EditorCell] {
        &self.cells[..self.grid_cells]
    }

    /// Footer row cells
    #[must_use]
    pub fn footer(&self) -> &[EditorCell] {
        &self.cells[self.grid_cells..]
    }

    /// Every clickable command, in cell order
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.cells.iter().flat_map(|cell| cell.commands())
    }

    /// Serialize to HTML
    ///
    /// # Errors
    /// Returns [`EditorError::Encode`] if a control payload cannot be encoded
    pub fn to_html(&self) -> Result<String, EditorError> {
        let mut m = Markup::new();
        m.open("div", &[("class", self.wrapper_class.as_str())]);
        m.element("h1", &[], &self.heading);
        m.open("div", &[("class", "grid-table"), ("style", self.grid_style.as_str())]);

        for cell in &self.cells {
            match &cell.class {
                Some(class) => m.open("div", &[("class", class.as_str())]),
                None => m.open("div", &[]),
            };
            write_content(&mut m, &cell.content)?;
            m.close("div");
        }

        m.close("div").close("div");
        Ok(m.finish())
    }
}

fn write_content(m: &mut Markup, content: &EditorContent) -> Result<(), EditorError> {
    match content {
        EditorContent::Empty => {}
        EditorContent::TextInput { target, value } => {
            let target = target.to_json()?;
            m.open("div", &[("class", "p-10")]);
            m.void(
                "input",
                &[
                    ("type", "text"),
                    ("value", value.as_str()),
                    ("data-input", target.as_str()),
                ],
            );
            m.close("div");
        }
        EditorContent::Checkbox { checked, command } => {
            let command = command.to_json()?;
            let mut attrs = vec![("type", "checkbox"), ("data-command", command.as_str())];
            if *checked {
                attrs.push(("checked", "checked"));
            }
            m.void("input", &attrs);
        }
        EditorContent::Button(button) => write_button(m, button)?,
        EditorContent::Buttons(buttons) => {
            m.open("div", &[("class", "p-10")]);
            for button in buttons {
                write_button(m, button)?;
            }
            m.close("div");
        }
    }
    Ok(())
}

fn write_button(m: &mut Markup, button: &Button) -> Result<(), EditorError> {
    let command = button.command.to_json()?;
    m.element(
        "button",
        &[
            ("type", "button"),
            ("class", button.variant.as_str()),
            ("data-command", command.as_str()),
        ],
        &button.label,
    );
    Ok(())
}

/// Renders the editable grid
#[derive(Debug, Clone, Default)]
pub struct EditorRenderer {
    config: RenderConfig,
}

impl EditorRenderer {
    /// Create renderer with the given labels
    #[inline]
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Build the editor view for a record
    #[must_use]
    pub fn view(&self, state: &AttributeState) -> EditorView {
        self.view_layout(&derive_layout(state))
    }

    /// Build the editor view from an already derived layout
    #[must_use]
    pub fn view_layout(&self, layout: &GridLayout<'_>) -> EditorView {
        let mut cells: Vec<EditorCell> = layout
            .slots()
            .into_iter()
            .map(|slot| self.grid_cell(slot))
            .collect();
        let grid_cells = cells.len();

        cells.push(self.button(
            &self.config.add_feature_label,
            ButtonVariant::Primary,
            Command::AddFeature,
        ));
        cells.extend(layout.plans.iter().map(|plan| self.plan_controls(plan)));

        EditorView {
            heading: self.config.heading.clone(),
            wrapper_class: self.config.wrapper_class.clone(),
            columns: layout.columns(),
            grid_style: layout.grid_style(),
            grid_cells,
            cells,
        }
    }

    /// Render a record to HTML
    ///
    /// # Errors
    /// Returns [`EditorError::Encode`] if a control payload cannot be encoded
    pub fn render(&self, state: &AttributeState) -> Result<String, EditorError> {
        let view = self.view(state);
        tracing::debug!(columns = view.columns, cells = view.cells.len(), "rendered editor grid");
        view.to_html()
    }

    fn grid_cell(&self, slot: Slot<'_>) -> EditorCell {
        match slot {
            Slot::Corner => EditorCell::empty(),
            Slot::PlanHeader(plan) => EditorCell::centered(EditorContent::TextInput {
                target: InputTarget::PlanName(plan.id.clone()),
                value: plan.name.clone(),
            }),
            Slot::HeaderEnd => {
                self.button(&self.config.add_plan_label, ButtonVariant::Primary, Command::AddPlan)
            }
            Slot::FeatureLabel(row) => EditorCell::centered(EditorContent::TextInput {
                target: InputTarget::FeatureName(row.feature.id.clone()),
                value: row.feature.name.clone(),
            }),
            Slot::Membership(cell) => EditorCell {
                class: Some(cell.class_attr()),
                content: EditorContent::Checkbox {
                    checked: cell.included,
                    command: Command::ToggleFeatureOnPlan {
                        plan: cell.plan.id.clone(),
                        feature: cell.feature.id.clone(),
                    },
                },
            },
            Slot::RowEnd(row) => EditorCell::centered(EditorContent::Button(Button {
                label: self.config.delete_feature_label.clone(),
                variant: ButtonVariant::Destructive,
                command: Command::DeleteFeature {
                    feature: row.feature.id.clone(),
                },
            })),
        }
    }

    fn plan_controls(&self, plan: &Plan) -> EditorCell {
        let highlight_variant = if plan.highlight {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Secondary
        };
        EditorCell::buttons(vec![
            Button {
                label: self.config.delete_plan_label.clone(),
                variant: ButtonVariant::Destructive,
                command: Command::DeletePlan {
                    plan: plan.id.clone(),
                },
            },
            Button {
                label: self.config.highlight_plan_label.clone(),
                variant: highlight_variant,
                command: Command::ToggleHighlight {
                    plan: plan.id.clone(),
                },
            },
        ])
    }

    fn button(&self, label: &str, variant: ButtonVariant, command: Command) -> EditorCell {
        EditorCell::buttons(vec![Button {
            label: label.to_string(),
            variant,
            command,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricegrid_test_utils::{feature, plan, sample_state};

    #[test]
    fn header_has_inputs_and_add_plan() {
        let view = EditorRenderer::default().view(&sample_state());
        assert_eq!(view.cells[0].content, EditorContent::Empty);
        assert!(matches!(
            &view.cells[1].content,
            EditorContent::TextInput { target: InputTarget::PlanName(id), value }
                if id.as_str() == "basic" && value == "Basic"
        ));
        assert_eq!(view.cells[4].commands().next(), Some(&Command::AddPlan));
    }

    #[test]
    fn checkboxes_toggle_their_cell() {
        let view = EditorRenderer::default().view(&sample_state());
        // Row "support", plan "pro".
        assert_eq!(
            view.cells[12].content,
            EditorContent::Checkbox {
                checked: true,
                command: Command::ToggleFeatureOnPlan {
                    plan: "pro".into(),
                    feature: "support".into(),
                },
            }
        );
        assert_eq!(view.cells[12].class.as_deref(), Some("centered box-grid"));
    }

    #[test]
    fn footer_has_add_feature_then_plan_controls() {
        let view = EditorRenderer::default().view(&sample_state());
        let footer = view.footer();
        assert_eq!(footer.len(), 4);
        assert_eq!(footer[0].commands().next(), Some(&Command::AddFeature));

        let EditorContent::Buttons(buttons) = &footer[2].content else {
            panic!("expected plan controls");
        };
        assert_eq!(buttons[0].command, Command::DeletePlan { plan: "pro".into() });
        assert_eq!(buttons[1].variant, ButtonVariant::Primary);
        assert_eq!(
            buttons[1].command,
            Command::ToggleHighlight { plan: "pro".into() }
        );
    }

    #[test]
    fn highlight_button_secondary_when_off() {
        let state = AttributeState::from_parts(vec![plan("a", "A", &[])], Vec::new());
        let view = EditorRenderer::default().view(&state);
        let EditorContent::Buttons(buttons) = &view.footer()[1].content else {
            panic!("expected plan controls");
        };
        assert_eq!(buttons[1].variant, ButtonVariant::Secondary);
    }

    #[test]
    fn row_end_deletes_feature() {
        let state = AttributeState::from_parts(Vec::new(), vec![feature("f", "F")]);
        let view = EditorRenderer::default().view(&state);
        assert_eq!(
            view.grid()[3].commands().next(),
            Some(&Command::DeleteFeature { feature: "f".into() })
        );
    }

    #[test]
    fn html_carries_command_payloads() {
        let state = AttributeState::from_parts(
            vec![plan("a", "A", &["f"])],
            vec![feature("f", "F")],
        );
        let html = EditorRenderer::default().render(&state).unwrap();

        assert!(html.contains(
            r#"data-command="{&quot;command&quot;:&quot;toggle_feature_on_plan&quot;,&quot;plan&quot;:&quot;a&quot;,&quot;feature&quot;:&quot;f&quot;}" checked="checked""#
        ));
        assert!(html.contains(
            r#"data-input="{&quot;target&quot;:&quot;plan_name&quot;,&quot;id&quot;:&quot;a&quot;}""#
        ));
        assert!(html.contains(">Add Plan</button>"));
        assert!(html.contains(">Delete Feature</button>"));
    }

    #[test]
    fn row_end_button_sits_directly_in_cell() {
        let state = AttributeState::from_parts(Vec::new(), vec![feature("f", "F")]);
        let html = EditorRenderer::default().render(&state).unwrap();

        assert!(html.contains(r#"<div class="centered"><button type="button" class="destructive""#));
        assert!(html.contains(
            r#"<div class="centered"><div class="p-10"><button type="button" class="primary""#
        ));
    }

    #[test]
    fn every_command_listed_once_per_control() {
        let view = EditorRenderer::default().view(&sample_state());
        // add plan + 9 toggles + 3 delete feature + add feature + 3 x (delete, highlight)
        assert_eq!(view.commands().count(), 1 + 9 + 3 + 1 + 6);
    }
}
