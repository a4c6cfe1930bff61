//! Grid layout shared by both renderers
//!
//! [`derive_layout`] is the only place grid structure is computed. The editor
//! and display renderers walk the same [`GridLayout::slots`] sequence, so row
//! count, column count, iteration order, and highlight classes cannot drift
//! between them.

use pricegrid_model::{plan_has_feature, AttributeState, Feature, Plan};

/// Columns reserved for row labels and row controls
pub const CONTROL_COLUMNS: usize = 2;

/// Where a feature row sits among all feature rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPosition {
    /// Zero-based row index
    pub index: usize,
    /// First feature row
    pub is_first: bool,
    /// Last feature row
    pub is_last: bool,
}

impl RowPosition {
    /// Position of row `index` among `total` rows
    #[inline]
    #[must_use]
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            index,
            is_first: index == 0,
            is_last: index + 1 == total,
        }
    }
}

/// Highlight boundary class of a membership cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightClass {
    /// Plan not highlighted
    #[default]
    None,
    /// Highlighted plan, first feature row
    Top,
    /// Highlighted plan, middle rows
    Body,
    /// Highlighted plan, last feature row
    Bottom,
}

impl HighlightClass {
    /// Class for a cell of a plan in a given row
    ///
    /// First row wins over last row, so a single-row table gets `Top`.
    #[must_use]
    pub fn classify(highlight: bool, position: RowPosition) -> Self {
        if !highlight {
            Self::None
        } else if position.is_first {
            Self::Top
        } else if position.is_last {
            Self::Bottom
        } else {
            Self::Body
        }
    }

    /// CSS classes for this boundary
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Top => "box-grid box-grid-top",
            Self::Body => "box-grid",
            Self::Bottom => "box-grid box-grid-bottom",
        }
    }
}

/// One plan's cell in a feature row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipCell<'a> {
    /// Column's plan
    pub plan: &'a Plan,
    /// Row's feature
    pub feature: &'a Feature,
    /// Plan includes the feature
    pub included: bool,
    /// Highlight boundary
    pub highlight: HighlightClass,
}

impl MembershipCell<'_> {
    /// Full class attribute value for the cell
    #[must_use]
    pub fn class_attr(&self) -> String {
        cell_class(self.highlight)
    }
}

/// One feature row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow<'a> {
    /// Row's feature
    pub feature: &'a Feature,
    /// Row position
    pub position: RowPosition,
    /// One cell per plan, in plan order
    pub cells: Vec<MembershipCell<'a>>,
}

/// Cell slot in row-major order
///
/// Header row: `Corner`, one `PlanHeader` per plan, `HeaderEnd`.
/// Each feature row: `FeatureLabel`, one `Membership` per plan, `RowEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'s> {
    /// Top-left, above the feature labels
    Corner,
    /// Plan column header
    PlanHeader(&'s Plan),
    /// Top-right, above the row controls
    HeaderEnd,
    /// Feature row label
    FeatureLabel(&'s FeatureRow<'s>),
    /// Plan-by-feature cell
    Membership(&'s MembershipCell<'s>),
    /// Trailing cell of a feature row
    RowEnd(&'s FeatureRow<'s>),
}

/// Derived grid for one attribute record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout<'a> {
    /// Plans in stored order
    pub plans: &'a [Plan],
    /// Feature rows in stored order
    pub rows: Vec<FeatureRow<'a>>,
}

impl<'a> GridLayout<'a> {
    /// CSS grid column count: plan columns plus the two control columns
    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.plans.len() + CONTROL_COLUMNS
    }

    /// Header row plus feature rows
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Inline style for the grid container
    #[must_use]
    pub fn grid_style(&self) -> String {
        format!("grid-template-columns: repeat({}, 1fr)", self.columns())
    }

    /// Every shared cell in row-major order
    #[must_use]
    pub fn slots(&self) -> Vec<Slot<'_>> {
        let mut slots = Vec::with_capacity(self.row_count() * self.columns());

        slots.push(Slot::Corner);
        slots.extend(self.plans.iter().map(Slot::PlanHeader));
        slots.push(Slot::HeaderEnd);

        for row in &self.rows {
            slots.push(Slot::FeatureLabel(row));
            slots.extend(row.cells.iter().map(Slot::Membership));
            slots.push(Slot::RowEnd(row));
        }
        slots
    }
}

/// Class attribute of a membership cell
#[must_use]
pub fn cell_class(highlight: HighlightClass) -> String {
    match highlight.css_class() {
        "" => "centered".to_string(),
        extra => format!("centered {extra}"),
    }
}

/// Derive the grid for `state`
///
/// Never fails: no plans yields header and control columns only, no features
/// yields the header row only.
#[must_use]
pub fn derive_layout(state: &AttributeState) -> GridLayout<'_> {
    let total = state.features.len();
    let rows = state
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            let position = RowPosition::new(index, total);
            let cells = state
                .plans
                .iter()
                .map(|plan| MembershipCell {
                    plan,
                    feature,
                    included: plan_has_feature(plan, feature),
                    highlight: HighlightClass::classify(plan.highlight, position),
                })
                .collect();
            FeatureRow {
                feature,
                position,
                cells,
            }
        })
        .collect();

    GridLayout {
        plans: &state.plans,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricegrid_test_utils::{feature, features_only, highlighted_plan, plan, sample_state};

    fn classes_for(layout: &GridLayout<'_>, plan_index: usize) -> Vec<HighlightClass> {
        layout
            .rows
            .iter()
            .map(|row| row.cells[plan_index].highlight)
            .collect()
    }

    #[test]
    fn columns_are_plans_plus_two() {
        let state = sample_state();
        let layout = derive_layout(&state);
        assert_eq!(layout.columns(), 5);
        assert_eq!(layout.grid_style(), "grid-template-columns: repeat(5, 1fr)");
    }

    #[test]
    fn highlighted_plan_gets_top_body_bottom() {
        let state = sample_state();
        let layout = derive_layout(&state);

        assert_eq!(
            classes_for(&layout, 1),
            vec![HighlightClass::Top, HighlightClass::Body, HighlightClass::Bottom]
        );
        assert_eq!(classes_for(&layout, 0), vec![HighlightClass::None; 3]);
        assert_eq!(classes_for(&layout, 2), vec![HighlightClass::None; 3]);
    }

    #[test]
    fn every_highlighted_plan_classified_independently() {
        let state = AttributeState::from_parts(
            vec![
                highlighted_plan("a", "A", &[]),
                highlighted_plan("b", "B", &[]),
            ],
            vec![feature("f1", "One"), feature("f2", "Two")],
        );
        let layout = derive_layout(&state);
        for index in 0..2 {
            assert_eq!(
                classes_for(&layout, index),
                vec![HighlightClass::Top, HighlightClass::Bottom]
            );
        }
    }

    #[test]
    fn single_row_is_top() {
        let state = AttributeState::from_parts(
            vec![highlighted_plan("a", "A", &[])],
            vec![feature("f", "Only")],
        );
        let layout = derive_layout(&state);
        assert_eq!(classes_for(&layout, 0), vec![HighlightClass::Top]);
    }

    #[test]
    fn no_features_no_rows() {
        let state = AttributeState::from_parts(vec![highlighted_plan("a", "A", &[])], Vec::new());
        let layout = derive_layout(&state);
        assert!(layout.rows.is_empty());
        assert_eq!(layout.slots().len(), 3);
    }

    #[test]
    fn no_plans_still_has_control_columns() {
        let state = features_only(2);
        let layout = derive_layout(&state);
        assert_eq!(layout.columns(), 2);
        assert!(layout.rows.iter().all(|row| row.cells.is_empty()));
        assert_eq!(layout.slots().len(), 2 * 3);
    }

    #[test]
    fn slots_are_row_major() {
        let state = sample_state();
        let layout = derive_layout(&state);
        let slots = layout.slots();

        assert_eq!(slots.len(), layout.row_count() * layout.columns());
        assert!(matches!(slots[0], Slot::Corner));
        assert!(matches!(slots[4], Slot::HeaderEnd));
        assert!(matches!(slots[5], Slot::FeatureLabel(row) if row.position.index == 0));
        assert!(matches!(slots[7], Slot::Membership(cell) if cell.plan.id.as_str() == "pro"));
        assert!(matches!(slots[9], Slot::RowEnd(_)));
    }

    #[test]
    fn membership_follows_plan_lists() {
        let state = AttributeState::from_parts(
            vec![plan("a", "A", &["f2", "stale"])],
            vec![feature("f1", "One"), feature("f2", "Two")],
        );
        let layout = derive_layout(&state);
        let included: Vec<_> = layout.rows.iter().map(|r| r.cells[0].included).collect();
        assert_eq!(included, vec![false, true]);
    }

    #[test]
    fn cell_class_values() {
        assert_eq!(cell_class(HighlightClass::None), "centered");
        assert_eq!(cell_class(HighlightClass::Top), "centered box-grid box-grid-top");
        assert_eq!(cell_class(HighlightClass::Body), "centered box-grid");
        assert_eq!(
            cell_class(HighlightClass::Bottom),
            "centered box-grid box-grid-bottom"
        );
    }
}
