//! Live steering objects: goals, behaviors, and the per-agent composite.

use sb_core::{BehaviorId, GoalId, GoalType};

use crate::GoalSpec;

// ── Edges ─────────────────────────────────────────────────────────────────────

/// Ordered child list with one edge weight per child, keyed by child id.
#[derive(Clone, Debug)]
struct Edges<I, T> {
    entries: Vec<(I, T, f64)>,
}

impl<I: Copy + PartialEq, T> Edges<I, T> {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert `child` with `weight`, replacing any child with the same id.
    fn insert(&mut self, id: I, child: T, weight: f64) {
        match self.entries.iter_mut().find(|(i, ..)| *i == id) {
            Some(slot) => *slot = (id, child, weight),
            None => self.entries.push((id, child, weight)),
        }
    }

    fn set_weight(&mut self, id: I, weight: f64) -> bool {
        match self.entries.iter_mut().find(|(i, ..)| *i == id) {
            Some((_, _, w)) => {
                *w = weight;
                true
            }
            None => false,
        }
    }

    fn weight(&self, id: I) -> Option<f64> {
        self.entries.iter().find(|(i, ..)| *i == id).map(|(_, _, w)| *w)
    }

    fn get(&self, id: I) -> Option<&T> {
        self.entries.iter().find(|(i, ..)| *i == id).map(|(_, c, _)| c)
    }

    fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.entries.iter_mut().find(|(i, ..)| *i == id).map(|(_, c, _)| c)
    }

    fn remove(&mut self, id: I) -> Option<(T, f64)> {
        let pos = self.entries.iter().position(|(i, ..)| *i == id)?;
        let (_, child, weight) = self.entries.remove(pos);
        Some((child, weight))
    }

    fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.entries.iter().map(|(_, c, w)| (c, *w))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

// ── Goal ──────────────────────────────────────────────────────────────────────

/// One live goal.  Immutable once built: changing a parameter means building
/// a new goal.
#[derive(Clone, Debug)]
pub struct Goal {
    id:   GoalId,
    spec: GoalSpec,
}

impl Goal {
    pub fn new(id: GoalId, spec: GoalSpec) -> Self {
        Self { id, spec }
    }

    #[inline]
    pub fn id(&self) -> GoalId {
        self.id
    }

    pub fn spec(&self) -> &GoalSpec {
        &self.spec
    }

    pub fn goal_type(&self) -> GoalType {
        self.spec.goal_type
    }

    pub fn is_enabled(&self) -> bool {
        self.spec.enabled
    }

    pub fn speed(&self) -> Option<f64> {
        self.spec.speed
    }
}

// ── Behavior ──────────────────────────────────────────────────────────────────

/// A live behavior: a weighted set of goals.
#[derive(Clone, Debug)]
pub struct Behavior {
    id:      BehaviorId,
    enabled: bool,
    goals:   Edges<GoalId, Goal>,
}

impl Behavior {
    /// An empty, enabled behavior.
    pub fn new(id: BehaviorId) -> Self {
        Self { id, enabled: true, goals: Edges::new() }
    }

    #[inline]
    pub fn id(&self) -> BehaviorId {
        self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Attach `goal` with edge weight `weight`.
    pub fn add_goal(&mut self, goal: Goal, weight: f64) {
        self.goals.insert(goal.id(), goal, weight);
    }

    /// Re-weight the edge to `goal`.  Returns `false` if it is not attached.
    pub fn set_weight(&mut self, goal: GoalId, weight: f64) -> bool {
        self.goals.set_weight(goal, weight)
    }

    pub fn weight(&self, goal: GoalId) -> Option<f64> {
        self.goals.weight(goal)
    }

    pub fn goal(&self, goal: GoalId) -> Option<&Goal> {
        self.goals.get(goal)
    }

    /// Detach `goal`, returning it with its edge weight.
    pub fn remove_goal(&mut self, goal: GoalId) -> Option<(Goal, f64)> {
        self.goals.remove(goal)
    }

    /// Attached goals with their edge weights, in attachment order.
    pub fn goals(&self) -> impl Iterator<Item = (&Goal, f64)> {
        self.goals.iter()
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }
}

// ── CompositeBehavior ─────────────────────────────────────────────────────────

/// The top-level live object of one agent: a weighted set of behaviors.
#[derive(Clone, Debug)]
pub struct CompositeBehavior {
    behaviors: Edges<BehaviorId, Behavior>,
}

impl Default for CompositeBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeBehavior {
    pub fn new() -> Self {
        Self { behaviors: Edges::new() }
    }

    /// Attach `behavior` with edge weight `weight`.
    pub fn add(&mut self, behavior: Behavior, weight: f64) {
        self.behaviors.insert(behavior.id(), behavior, weight);
    }

    /// Re-weight the edge to `behavior`.  Returns `false` if it is not attached.
    pub fn set_weight(&mut self, behavior: BehaviorId, weight: f64) -> bool {
        self.behaviors.set_weight(behavior, weight)
    }

    pub fn weight(&self, behavior: BehaviorId) -> Option<f64> {
        self.behaviors.weight(behavior)
    }

    pub fn behavior(&self, behavior: BehaviorId) -> Option<&Behavior> {
        self.behaviors.get(behavior)
    }

    pub fn behavior_mut(&mut self, behavior: BehaviorId) -> Option<&mut Behavior> {
        self.behaviors.get_mut(behavior)
    }

    /// Detach `behavior`, returning it with its edge weight.
    pub fn remove(&mut self, behavior: BehaviorId) -> Option<(Behavior, f64)> {
        self.behaviors.remove(behavior)
    }

    /// Attached behaviors with their edge weights, in attachment order.
    pub fn behaviors(&self) -> impl Iterator<Item = (&Behavior, f64)> {
        self.behaviors.iter()
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.len() == 0
    }

    /// Detach every behavior.
    pub fn clear(&mut self) {
        self.behaviors.clear();
    }
}
