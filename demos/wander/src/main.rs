//! wander — scripted editing session against a live projection.
//!
//! Builds a small flock in the document, attaches one projector per agent,
//! edits goal weights and parameters, and prints the live graph after each
//! step so the difference between an in-place weight patch and a goal rebuild
//! is visible.  Finishes by dumping the document as JSON.
//!
//! `RUST_LOG=sb_projector=debug` shows every patch and rebuild.

use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sb_core::{EditorConfig, GoalType};
use sb_document::{Document, SelectionEvent};
use sb_editor::DocumentEditor;
use sb_engine::SerialEngine;
use sb_projector::{Attached, Projector};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOCK_SIZE:    usize = 3;
const NAME_SEED:     u64   = 42;
const WANDER_SPEED:  f64   = 200.0;
const FLOCK_RADIUS:  f64   = 80.0;

// ── Output ────────────────────────────────────────────────────────────────────

fn print_graph(label: &str, projector: &Projector<SerialEngine>) -> Result<()> {
    let doc = projector.document();
    let agent = DocumentEditor::new(doc)
        .agent(projector.agent_name())
        .context("projected agent missing from document")?;
    let composite = agent.composite().context("agent has no composite")?;

    println!("── {label} ── agent {}", projector.agent_name());
    for behavior in composite.behaviors() {
        let Some((live, weight)) = projector.live_behavior(behavior.name()) else {
            println!("  behavior {} (not projected)", behavior.name());
            continue;
        };
        println!("  behavior {:<10} {}  weight {weight:>6.1}", behavior.name(), live.id());
        for goal in behavior.goals() {
            match projector.live_goal(goal.name()) {
                Some((live, weight)) => println!(
                    "    goal {:<10} {:<14} {}  weight {weight:>6.1}  speed {:?}",
                    goal.name(),
                    live.goal_type().as_str(),
                    live.id(),
                    live.speed(),
                ),
                None => println!("    goal {} (not projected)", goal.name()),
            }
        }
    }
    let stats = projector.stats();
    println!(
        "  stats: {} weight patches, {} behavior syncs, {} goal rebuilds, {} full rebuilds",
        stats.weight_patches, stats.behavior_syncs, stats.goal_rebuilds, stats.full_rebuilds
    );
    println!();
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wander=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = EditorConfig { name_seed: NAME_SEED, ..EditorConfig::default() };
    config.validate()?;
    let doc = Rc::new(Document::new(config));
    let editor = DocumentEditor::new(&doc);

    let selection = doc.bus().subscribe_selection(Rc::new(|event: &SelectionEvent| {
        info!(agent = event.agent(), ?event, "selection changed");
    }));

    // 1. Agents, each with an empty composite.
    let agents: Vec<_> = (0..FLOCK_SIZE).map(|_| editor.create_agent()).collect();
    let names: Vec<String> = agents.iter().map(|a| a.name().to_owned()).collect();
    info!(agents = ?names, "flock created");

    // 2. One projector per agent, attached before any motivators exist.
    let projectors: Vec<Attached<SerialEngine>> = names
        .iter()
        .map(|name| Projector::attach(Projector::new(Rc::clone(&doc), name, SerialEngine::new())))
        .collect();

    // 3. A wander behavior and a flocking behavior on every agent.
    for (agent, name) in agents.iter().zip(&names) {
        let composite = agent.create_composite();

        let roam = composite.create_behavior();
        let wander = roam.create_goal(GoalType::Wander);
        wander.set_speed(WANDER_SPEED);

        let flock = composite.create_behavior();
        composite.set_weight(flock.name(), 50.0)?;
        let others: Vec<String> = names.iter().filter(|n| *n != name).cloned().collect();
        for goal_type in [GoalType::Cohere, GoalType::Separate] {
            let goal = flock.create_goal(goal_type);
            goal.set_agents(&others);
            goal.set_distance(FLOCK_RADIUS);
        }
    }

    let first = &agents[0];
    doc.bus().publish_selection(&SelectionEvent::Selected {
        agent:   names[0].clone(),
        primary: true,
    });
    print_graph("built", &projectors[0].projector())?;

    // 4. Weight-only edit: patched in place, goal identity unchanged.
    let composite = first.composite().context("first agent lost its composite")?;
    let roam = composite.behaviors().into_iter().next().context("no behaviors")?;
    let wander = roam.goals().into_iter().next().context("no goals")?;
    roam.set_weight(wander.name(), 25.0)?;
    print_graph("wander weight 25", &projectors[0].projector())?;

    // 5. Parameter edit: the live goal is rebuilt, weight carried over.
    wander.set_speed(WANDER_SPEED * 1.5);
    print_graph("wander speed 300", &projectors[0].projector())?;

    // 6. Structural delete: full rebuild.
    let flock = composite.behaviors().into_iter().nth(1).context("no flock behavior")?;
    composite.delete_behavior(flock.name())?;
    print_graph("flock behavior deleted", &projectors[0].projector())?;

    doc.bus().publish_selection(&SelectionEvent::Deselected {
        agent:   names[0].clone(),
        primary: true,
    });

    for attached in projectors {
        attached.detach();
    }
    doc.bus().unsubscribe(selection);
    info!(subscribers = doc.bus().subscriber_count(), "editing session torn down");

    println!("{}", serde_json::to_string_pretty(&*doc.tree())?);
    Ok(())
}
