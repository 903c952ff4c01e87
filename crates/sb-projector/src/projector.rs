//! `Projector<E>` — one agent's live steering graph and its document sync.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use sb_core::schema::attr;
use sb_core::{BehaviorId, GoalId, Path, PathKind};
use sb_document::{ChangeEvent, Document};
use sb_editor::{BehaviorEditor, DocumentEditor, GoalEditor};
use sb_engine::{Behavior, CompositeBehavior, Goal, SteeringEngine};
use tracing::{debug, trace, warn};

use crate::{ProjectionStats, goal_spec};

/// Length of a goal attribute path.
const GOAL_ATTRIBUTE_LEN: usize = 7;

/// Live graph of one agent, built from and kept in sync with the document.
///
/// Live objects are found again by the document name of the node they were
/// built from: `behaviors` maps a behavior name to its live id, `goals` maps a
/// goal name to its live id and the id of the live behavior holding it.
///
/// Construct with [`Projector::new`], then either feed it events by hand via
/// [`handle`][Self::handle] or hand it to [`Projector::attach`].
pub struct Projector<E: SteeringEngine> {
    doc:       Rc<Document>,
    agent:     String,
    engine:    E,
    composite: CompositeBehavior,
    behaviors: FxHashMap<String, BehaviorId>,
    goals:     FxHashMap<String, (BehaviorId, GoalId)>,
    stats:     ProjectionStats,
}

impl<E: SteeringEngine> Projector<E> {
    /// Build the live graph for `agent` from the current document.
    ///
    /// Behaviors and goals are walked in creation order.  If the agent does
    /// not exist (yet) the graph starts empty.
    pub fn new(doc: Rc<Document>, agent: &str, mut engine: E) -> Self {
        let composite = engine.make_composite();
        let mut projector = Self {
            doc,
            agent: agent.to_owned(),
            engine,
            composite,
            behaviors: FxHashMap::default(),
            goals: FxHashMap::default(),
            stats: ProjectionStats::default(),
        };
        projector.charge();
        projector
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agent_name(&self) -> &str {
        &self.agent
    }

    pub fn document(&self) -> &Rc<Document> {
        &self.doc
    }

    pub fn composite(&self) -> &CompositeBehavior {
        &self.composite
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn stats(&self) -> ProjectionStats {
        self.stats
    }

    /// The live behavior built from the behavior node named `name`, with its
    /// edge weight in the composite.
    pub fn live_behavior(&self, name: &str) -> Option<(&Behavior, f64)> {
        let id = *self.behaviors.get(name)?;
        Some((self.composite.behavior(id)?, self.composite.weight(id)?))
    }

    /// The live goal built from the goal node named `name`, with its edge
    /// weight in its live behavior.
    pub fn live_goal(&self, name: &str) -> Option<(&Goal, f64)> {
        let (behavior, goal) = *self.goals.get(name)?;
        let behavior = self.composite.behavior(behavior)?;
        Some((behavior.goal(goal)?, behavior.weight(goal)?))
    }

    // ── Event handling ────────────────────────────────────────────────────

    /// Bring the live graph up to date with one document change.
    pub fn handle(&mut self, event: &ChangeEvent) {
        let path = event.path();
        if !path.contains_name(&self.agent) {
            return;
        }
        trace!(agent = %self.agent, %event, "projector event");

        if let ChangeEvent::Deleted(_) = event {
            self.rebuild();
            return;
        }

        // A write below a goal attribute (one element of `agents`, say)
        // changes that attribute.
        let scoped;
        let path = if path.len() > GOAL_ATTRIBUTE_LEN {
            scoped = path.prefix(GOAL_ATTRIBUTE_LEN);
            &scoped
        } else {
            path
        };

        match path.kind() {
            PathKind::Behavior { behavior, .. } | PathKind::BehaviorAttribute { behavior, .. } => {
                self.on_behavior(behavior);
            }
            PathKind::GoalAttribute { behavior, goal, attribute, .. } if attribute == attr::WEIGHT => {
                self.on_goal_weight(behavior, goal);
            }
            PathKind::Goal { behavior, goal, .. } => {
                self.on_goal(behavior, goal, true);
            }
            PathKind::GoalAttribute { behavior, goal, .. } => {
                self.on_goal(behavior, goal, false);
            }
            _ => self.stats.ignored += 1,
        }
    }

    /// Discard the whole live graph and build it again from the document.
    pub fn rebuild(&mut self) {
        self.stats.full_rebuilds += 1;
        self.charge();
        debug!(agent = %self.agent, behaviors = self.composite.len(), "live graph rebuilt");
    }

    fn on_behavior(&mut self, behavior: &str) {
        let doc = Rc::clone(&self.doc);
        let editor = BehaviorEditor::new(&doc, Path::behavior(&self.agent, behavior));
        if !editor.exists() {
            warn!(agent = %self.agent, behavior, "event for missing behavior node; rebuilding");
            self.rebuild();
            return;
        }
        self.sync_behavior(&editor);
        self.stats.behavior_syncs += 1;
    }

    fn on_goal_weight(&mut self, behavior: &str, goal: &str) {
        let doc = Rc::clone(&self.doc);
        let editor = GoalEditor::new(&doc, Path::goal(&self.agent, behavior, goal));
        let weight = editor.weight().unwrap_or(doc.config().default_weight);

        let patched = self.goals.get(goal).is_some_and(|&(b, g)| {
            self.composite
                .behavior_mut(b)
                .is_some_and(|live| live.set_weight(g, weight))
        });
        if patched {
            self.stats.weight_patches += 1;
            debug!(agent = %self.agent, goal, weight, "goal weight patched");
        } else if editor.exists() && editor.goal_type().is_none() {
            self.stats.ignored += 1;
        } else {
            warn!(agent = %self.agent, goal, "weight change for unknown live goal; rebuilding");
            self.rebuild();
        }
    }

    /// Rebuild the live goal for `goal`.
    ///
    /// A parameter change keeps the live edge weight.  A `replaced` goal node
    /// takes its weight from the document.
    fn on_goal(&mut self, behavior: &str, goal: &str, replaced: bool) {
        let Some(&behavior_id) = self.behaviors.get(behavior) else {
            warn!(agent = %self.agent, behavior, goal, "goal event under unknown live behavior; rebuilding");
            self.rebuild();
            return;
        };
        let doc = Rc::clone(&self.doc);
        let editor = GoalEditor::new(&doc, Path::goal(&self.agent, behavior, goal));
        if !editor.exists() {
            warn!(agent = %self.agent, goal, "event for missing goal node; rebuilding");
            self.rebuild();
            return;
        }

        let previous = self.goals.remove(goal).and_then(|(b, g)| {
            self.composite.behavior_mut(b).and_then(|live| live.remove_goal(g))
        });
        let weight = match previous {
            Some((_, weight)) if !replaced => weight,
            _ => editor.weight().unwrap_or(doc.config().default_weight),
        };
        self.build_goal(&editor, behavior_id, weight);
        self.stats.goal_rebuilds += 1;
        debug!(agent = %self.agent, goal, weight, "live goal rebuilt");
    }

    // ── Construction ──────────────────────────────────────────────────────

    fn charge(&mut self) {
        self.composite = self.engine.make_composite();
        self.behaviors.clear();
        self.goals.clear();

        let doc = Rc::clone(&self.doc);
        let Some(composite) = DocumentEditor::new(&doc)
            .agent(&self.agent)
            .and_then(|agent| agent.composite())
        else {
            return;
        };
        for behavior in composite.behaviors() {
            self.sync_behavior(&behavior);
        }
    }

    /// Create or update the live counterpart of `editor`.
    ///
    /// A newly created live behavior is filled with every goal already
    /// present under the behavior node.
    fn sync_behavior(&mut self, editor: &BehaviorEditor<'_>) {
        let default_weight = self.doc.config().default_weight;
        let weight = editor.weight().unwrap_or(default_weight);
        let enabled = editor.is_enabled().unwrap_or(true);

        if let Some(&id) = self.behaviors.get(editor.name()) {
            if let Some(live) = self.composite.behavior_mut(id) {
                live.set_enabled(enabled);
                self.composite.set_weight(id, weight);
                return;
            }
        }

        let mut live = self.engine.make_behavior();
        live.set_enabled(enabled);
        let id = live.id();
        self.composite.add(live, weight);
        self.behaviors.insert(editor.name().to_owned(), id);

        for goal in editor.goals() {
            let weight = goal.weight().unwrap_or(default_weight);
            self.build_goal(&goal, id, weight);
        }
    }

    /// Build a live goal from `editor` and attach it to live behavior
    /// `behavior` with edge weight `weight`.  Goals without a type are skipped.
    fn build_goal(&mut self, editor: &GoalEditor<'_>, behavior: BehaviorId, weight: f64) {
        let Some(spec) = goal_spec(editor) else {
            debug!(agent = %self.agent, goal = editor.name(), "goal has no type; not projected");
            return;
        };
        let goal = self.engine.make_goal(&spec);
        let id = goal.id();
        if let Some(live) = self.composite.behavior_mut(behavior) {
            live.add_goal(goal, weight);
            self.goals.insert(editor.name().to_owned(), (behavior, id));
        }
    }
}
