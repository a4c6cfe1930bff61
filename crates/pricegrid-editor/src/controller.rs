//! Single writer of the persisted attribute record
//!
//! Each command computes one new collection, sanitizes it, and writes the
//! full record back with only that slice replaced.

use crate::command::{Command, Slice};
use crate::event::EditorEvent;
use crate::store::AttributeStore;
use pricegrid_model::{
    sanitize_features, sanitize_plans, switch_feature_in_plan, without_dangling_features,
    AttributeState, EntityFactory, Feature, FeatureId, IdGenerator, Plan, PlanId,
};

/// Outcome of one committed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    /// Command name
    pub command: &'static str,
    /// Slice that was written
    pub slice: Slice,
    /// Length of the written collection
    pub len: usize,
    /// Records the sanitizer dropped from it
    pub dropped: usize,
}

/// Owns the attribute store and applies commands to it
#[derive(Debug)]
pub struct StateController<S, G> {
    store: S,
    factory: EntityFactory<G>,
}

impl<S: AttributeStore, G: IdGenerator> StateController<S, G> {
    /// Create controller over a store and an id generator
    #[inline]
    #[must_use]
    pub fn new(store: S, ids: G) -> Self {
        Self {
            store,
            factory: EntityFactory::new(ids),
        }
    }

    /// Current record
    #[inline]
    #[must_use]
    pub fn state(&self) -> &AttributeState {
        self.store.attributes()
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store
    #[inline]
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply a command
    pub fn dispatch(&mut self, command: Command) -> Commit {
        match command {
            Command::AddPlan => self.add_plan().1,
            Command::DeletePlan { plan } => self.delete_plan(&plan),
            Command::RenamePlan { plan, name } => self.rename_plan(&plan, name),
            Command::ToggleHighlight { plan } => self.toggle_highlight(&plan),
            Command::ToggleFeatureOnPlan { plan, feature } => {
                self.toggle_feature_on_plan(&plan, &feature)
            }
            Command::AddFeature => self.add_feature().1,
            Command::RenameFeature { feature, name } => self.rename_feature(&feature, name),
            Command::DeleteFeature { feature } => self.delete_feature(&feature),
            Command::PruneDanglingFeatures => self.prune_dangling_features(),
        }
    }

    /// Apply the command an editor event resolves to
    pub fn handle(&mut self, event: EditorEvent) -> Commit {
        self.dispatch(event.into_command())
    }

    // Plans

    /// Append a default plan, returning its id
    pub fn add_plan(&mut self) -> (PlanId, Commit) {
        let plan = self.factory.create_plan();
        let id = plan.id.clone();
        let mut plans = self.state().plans.clone();
        plans.push(plan);
        (id, self.update_plans("add_plan", plans))
    }

    /// Remove the plan with `id`
    pub fn delete_plan(&mut self, id: &PlanId) -> Commit {
        self.trace_unknown_plan("delete_plan", id);
        let plans = self
            .state()
            .plans
            .iter()
            .filter(|p| &p.id != id)
            .cloned()
            .collect();
        self.update_plans("delete_plan", plans)
    }

    /// Replace the name of the plan with `id`
    ///
    /// An empty name makes the plan malformed, so the commit drops it.
    pub fn rename_plan(&mut self, id: &PlanId, name: impl Into<String>) -> Commit {
        let name = name.into();
        let plans = self.map_plan("rename_plan", id, |p| p.renamed(name.clone()));
        self.update_plans("rename_plan", plans)
    }

    /// Flip the highlight flag of the plan with `id`
    pub fn toggle_highlight(&mut self, id: &PlanId) -> Commit {
        let plans = self.map_plan("toggle_highlight", id, Plan::highlight_toggled);
        self.update_plans("toggle_highlight", plans)
    }

    /// Toggle `feature` in the membership list of the plan with `plan`
    pub fn toggle_feature_on_plan(&mut self, plan: &PlanId, feature: &FeatureId) -> Commit {
        let plans = self.map_plan("toggle_feature_on_plan", plan, |p| {
            switch_feature_in_plan(p, feature)
        });
        self.update_plans("toggle_feature_on_plan", plans)
    }

    /// Remove membership ids that name no current feature, from every plan
    pub fn prune_dangling_features(&mut self) -> Commit {
        let features = &self.state().features;
        let plans = self
            .state()
            .plans
            .iter()
            .map(|p| without_dangling_features(p, features))
            .collect();
        self.update_plans("prune_dangling_features", plans)
    }

    // Features

    /// Append a default feature, returning its id
    pub fn add_feature(&mut self) -> (FeatureId, Commit) {
        let feature = self.factory.create_feature();
        let id = feature.id.clone();
        let mut features = self.state().features.clone();
        features.push(feature);
        (id, self.update_features("add_feature", features))
    }

    /// Replace the name of the feature with `id`
    ///
    /// An empty name makes the feature malformed, so the commit drops it.
    pub fn rename_feature(&mut self, id: &FeatureId, name: impl Into<String>) -> Commit {
        let name = name.into();
        if self.state().feature(id).is_none() {
            tracing::debug!(command = "rename_feature", feature = %id, "unknown feature");
        }
        let features = self
            .state()
            .features
            .iter()
            .map(|f| if &f.id == id { f.renamed(name.clone()) } else { f.clone() })
            .collect();
        self.update_features("rename_feature", features)
    }

    /// Remove the feature with `id`
    ///
    /// Plans that include it keep the id in their membership lists.
    pub fn delete_feature(&mut self, id: &FeatureId) -> Commit {
        if self.state().feature(id).is_none() {
            tracing::debug!(command = "delete_feature", feature = %id, "unknown feature");
        }
        let features = self
            .state()
            .features
            .iter()
            .filter(|f| &f.id != id)
            .cloned()
            .collect();
        self.update_features("delete_feature", features)
    }

    fn map_plan(
        &self,
        command: &'static str,
        id: &PlanId,
        update: impl Fn(&Plan) -> Plan,
    ) -> Vec<Plan> {
        self.trace_unknown_plan(command, id);
        self.state()
            .plans
            .iter()
            .map(|p| if &p.id == id { update(p) } else { p.clone() })
            .collect()
    }

    fn trace_unknown_plan(&self, command: &'static str, id: &PlanId) {
        if self.state().plan(id).is_none() {
            tracing::debug!(command, plan = %id, "unknown plan");
        }
    }

    fn update_plans(&mut self, command: &'static str, plans: Vec<Plan>) -> Commit {
        let before = plans.len();
        let plans = sanitize_plans(plans);
        let next = self.state().with_plans(plans);
        self.commit(command, Slice::Plans, before, next)
    }

    fn update_features(&mut self, command: &'static str, features: Vec<Feature>) -> Commit {
        let before = features.len();
        let features = sanitize_features(features);
        let next = self.state().with_features(features);
        self.commit(command, Slice::Features, before, next)
    }

    fn commit(
        &mut self,
        command: &'static str,
        slice: Slice,
        before: usize,
        next: AttributeState,
    ) -> Commit {
        let len = match slice {
            Slice::Plans => next.plans.len(),
            Slice::Features => next.features.len(),
        };
        let dropped = before - len;
        if dropped > 0 {
            tracing::warn!(command, %slice, dropped, "sanitizer dropped malformed records");
        }
        tracing::debug!(command, %slice, len, "committed");

        self.store.set_attributes(next);
        Commit {
            command,
            slice,
            len,
            dropped,
        }
    }
}
