//! Unit tests for sb-document.

use std::cell::RefCell;
use std::rc::Rc;

use sb_core::{EditorConfig, Path};

use crate::{ChangeEvent, ChangeKind, Document};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn doc() -> Document {
    Document::new(EditorConfig::default())
}

/// Subscribe a recorder for every change kind and return its log.
fn record(doc: &Document) -> Rc<RefCell<Vec<ChangeEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    doc.bus().subscribe_changes(
        &ChangeKind::ALL,
        Rc::new(move |e: &ChangeEvent| sink.borrow_mut().push(e.clone())),
    );
    log
}

fn p(keys: &[&str]) -> Path {
    keys.iter().map(|k| (*k).into()).collect()
}

// ── Tree ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tree_tests {
    use sb_core::{Key, Path};

    use super::p;
    use crate::{Node, Tree, Value};

    #[test]
    fn set_materializes_intermediate_objects() {
        let mut tree = Tree::new();
        assert_eq!(tree.set(&p(&["a", "b", "c"]), Node::from(1.5)), None);
        assert!(tree.get(&p(&["a"])).unwrap().as_object().is_some());
        assert!(tree.get(&p(&["a", "b"])).unwrap().as_object().is_some());
        assert_eq!(tree.get(&p(&["a", "b", "c"])).unwrap().as_f64(), Some(1.5));
    }

    #[test]
    fn set_materializes_arrays_for_index_keys() {
        let mut tree = Tree::new();
        let path = Path::new(vec![Key::from("list"), Key::Index(2)]);
        tree.set(&path, Node::from("x"));
        let items = tree.get(&p(&["list"])).unwrap().as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_null());
        assert_eq!(items[2].as_str(), Some("x"));
    }

    #[test]
    fn set_returns_replaced_node() {
        let mut tree = Tree::new();
        tree.set(&p(&["k"]), Node::from(true));
        assert_eq!(tree.set(&p(&["k"]), Node::from(false)), Some(Node::from(true)));
    }

    #[test]
    fn scalar_mid_path_becomes_container() {
        let mut tree = Tree::new();
        tree.set(&p(&["a"]), Node::from(3_i64));
        tree.set(&p(&["a", "b"]), Node::from(4_i64));
        assert_eq!(tree.get(&p(&["a", "b"])).unwrap().as_i64(), Some(4));
    }

    #[test]
    fn deepest_existing_stops_at_first_gap() {
        let mut tree = Tree::new();
        tree.set(&p(&["a", "b"]), Node::object());
        assert_eq!(tree.deepest_existing(&p(&["a", "b", "c", "d"])), p(&["a", "b"]));
        assert_eq!(tree.deepest_existing(&p(&["z"])), Path::root());
    }

    #[test]
    fn remove_detaches_subtree() {
        let mut tree = Tree::new();
        tree.set(&p(&["a", "b", "c"]), Node::from(Value::Int(1)));
        let removed = tree.remove(&p(&["a", "b"])).unwrap();
        assert!(removed.as_object().unwrap().contains_key("c"));
        assert!(!tree.contains(&p(&["a", "b"])));
        assert!(tree.contains(&p(&["a"])));
        assert_eq!(tree.remove(&p(&["missing"])), None);
        assert_eq!(tree.remove(&Path::root()), None);
    }

    #[test]
    fn children_lists_object_entries() {
        let mut tree = Tree::new();
        tree.set(&p(&["o", "x"]), Node::from(1_i64));
        tree.set(&p(&["o", "y"]), Node::from(2_i64));
        let mut keys: Vec<&str> = tree.children(&p(&["o"])).map(|(k, _)| k).collect();
        keys.sort();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(tree.children(&p(&["nope"])).count(), 0);
    }

    #[test]
    fn string_list_requires_homogeneous_text() {
        let list = Node::from(vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(list.as_string_list(), Some(vec!["a".to_owned(), "b".to_owned()]));
        let mixed = Node::Array(vec![Node::from("a"), Node::from(1_i64)]);
        assert_eq!(mixed.as_string_list(), None);
    }
}

// ── WriteGateway ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod gateway_tests {
    use sb_core::Path;
    use sb_core::schema::attr;

    use super::*;

    #[test]
    fn fresh_path_announces_every_ancestor_in_order() {
        let doc = doc();
        let log = record(&doc);
        let goal = Path::goal("A", "B", "G");
        doc.write(&goal, attr::SPEED, 200.0);

        let expected: Vec<ChangeEvent> = (1..=6)
            .map(|len| ChangeEvent::Added(goal.prefix(len)))
            .chain(std::iter::once(ChangeEvent::Added(goal.child(attr::SPEED))))
            .collect();
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn existing_parent_announces_only_target() {
        let doc = doc();
        doc.write(&Path::root(), "a", crate::Node::object());
        let log = record(&doc);
        doc.write(&p(&["a"]), "k", 1_i64);
        assert_eq!(*log.borrow(), vec![ChangeEvent::Added(p(&["a", "k"]))]);
    }

    #[test]
    fn repeated_write_is_added_then_updated() {
        let doc = doc();
        let log = record(&doc);
        doc.write(&p(&["a"]), "k", 1_i64);
        doc.write(&p(&["a"]), "k", 1_i64);
        doc.write(&p(&["a"]), "k", 1_i64);
        assert_eq!(
            *log.borrow(),
            vec![
                ChangeEvent::Added(p(&["a"])),
                ChangeEvent::Added(p(&["a", "k"])),
                ChangeEvent::Updated(p(&["a", "k"])),
                ChangeEvent::Updated(p(&["a", "k"])),
            ]
        );
    }

    #[test]
    fn suppressed_gateway_is_silent_but_writes() {
        let doc = doc();
        let log = record(&doc);
        doc.write_quiet(&p(&["a", "b"]), "k", "v");
        assert!(log.borrow().is_empty());
        assert_eq!(
            doc.read(&p(&["a", "b", "k"]), |n| n.as_str().map(str::to_owned)),
            Some(Some("v".to_owned()))
        );
    }

    #[test]
    fn quiet_gateway_reports_suppression() {
        let doc = doc();
        let log = record(&doc);
        let mut gw = doc.quiet_gateway(&p(&["a"]), "k");
        assert!(gw.is_suppressed());
        gw.write(1_i64);
        assert!(gw.pending_events().is_empty());
        gw.finish();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn outer_gateway_announces_after_quiet_inner_writes() {
        let doc = doc();
        let log = record(&doc);
        let parent = p(&["list"]);

        let mut outer = doc.gateway(&parent, "item");
        outer.write(crate::Node::object());
        doc.write_quiet(outer.target(), "name", "item");
        doc.write_quiet(outer.target(), "size", 3_i64);
        assert!(log.borrow().is_empty());
        outer.finish();

        assert_eq!(
            *log.borrow(),
            vec![ChangeEvent::Added(parent.clone()), ChangeEvent::Added(parent.child("item"))]
        );
        assert_eq!(doc.read(&parent.child("item").child("size"), |n| n.as_i64()), Some(Some(3)));
    }

    #[test]
    fn pending_events_reflect_state_at_open() {
        let doc = doc();
        let mut gw = doc.gateway(&p(&["a", "b"]), "k");
        assert_eq!(gw.tracking(), &Path::root());
        assert!(!gw.existed());
        assert!(!gw.is_suppressed());
        assert!(gw.pending_events().is_empty());
        gw.write(1_i64);
        assert_eq!(gw.pending_events().len(), 3);
        gw.finish();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "second write")]
    fn second_write_is_fatal() {
        let doc = doc();
        let mut gw = doc.gateway(&Path::root(), "k");
        gw.write(1_i64);
        gw.write(2_i64);
        gw.finish();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "nothing written")]
    fn finishing_without_write_is_fatal() {
        let doc = doc();
        doc.gateway(&Path::root(), "k").finish();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "nothing written")]
    fn suppressed_without_write_is_fatal() {
        let doc = doc();
        doc.quiet_gateway(&Path::root(), "k").finish();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "dropped without finish")]
    fn dropping_unfinished_is_fatal() {
        let doc = doc();
        let mut gw = doc.gateway(&Path::root(), "k");
        gw.write(1_i64);
        drop(gw);
    }
}

// ── NotificationBus ───────────────────────────────────────────────────────────

#[cfg(test)]
mod bus_tests {
    use std::cell::Cell;

    use super::*;
    use crate::{NotificationBus, SelectionEvent};

    #[test]
    fn kind_filter_is_respected() {
        let bus = NotificationBus::new();
        let deletes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&deletes);
        bus.subscribe_changes(
            &[ChangeKind::Deleted],
            Rc::new(move |_: &ChangeEvent| counter.set(counter.get() + 1)),
        );
        bus.publish_change(&ChangeEvent::Added(p(&["a"])));
        bus.publish_change(&ChangeEvent::Updated(p(&["a"])));
        bus.publish_change(&ChangeEvent::Deleted(p(&["a"])));
        assert_eq!(deletes.get(), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = NotificationBus::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = bus.subscribe_changes(
            &ChangeKind::ALL,
            Rc::new(move |_: &ChangeEvent| counter.set(counter.get() + 1)),
        );
        bus.publish_change(&ChangeEvent::Added(p(&["a"])));
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish_change(&ChangeEvent::Added(p(&["a"])));
        assert_eq!(hits.get(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribed_mid_delivery_gets_nothing_more() {
        let bus = Rc::new(NotificationBus::new());
        let late_hits = Rc::new(Cell::new(0));

        // The second subscriber's id is only known after subscribing, so the
        // first one reads it from a shared cell.
        let victim = Rc::new(Cell::new(None));
        let (b, v) = (Rc::downgrade(&bus), Rc::clone(&victim));
        bus.subscribe_changes(
            &ChangeKind::ALL,
            Rc::new(move |_: &ChangeEvent| {
                if let (Some(bus), Some(id)) = (b.upgrade(), v.get()) {
                    bus.unsubscribe(id);
                }
            }),
        );
        let counter = Rc::clone(&late_hits);
        let id = bus.subscribe_changes(
            &ChangeKind::ALL,
            Rc::new(move |_: &ChangeEvent| counter.set(counter.get() + 1)),
        );
        victim.set(Some(id));

        bus.publish_change(&ChangeEvent::Added(p(&["a"])));
        assert_eq!(late_hits.get(), 0);
    }

    #[test]
    fn nested_write_is_delivered_before_outer_remainder() {
        let doc = Rc::new(doc());
        let log = record(&doc);

        let weak = Rc::downgrade(&doc);
        doc.bus().subscribe_changes(
            &[ChangeKind::Added],
            Rc::new(move |e: &ChangeEvent| {
                if *e == ChangeEvent::Added(p(&["x"])) {
                    if let Some(doc) = weak.upgrade() {
                        doc.write(&Path::root(), "echo", true);
                    }
                }
            }),
        );

        doc.write(&p(&["x"]), "trigger", 1_i64);
        assert_eq!(
            *log.borrow(),
            vec![
                ChangeEvent::Added(p(&["x"])),
                ChangeEvent::Added(p(&["echo"])),
                ChangeEvent::Added(p(&["x", "trigger"])),
            ]
        );
        assert!(doc.contains(&p(&["echo"])));
    }

    #[test]
    fn subscriber_can_read_document_during_delivery() {
        let doc = Rc::new(doc());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (weak, sink) = (Rc::downgrade(&doc), Rc::clone(&seen));
        doc.bus().subscribe_changes(
            &[ChangeKind::Added, ChangeKind::Updated],
            Rc::new(move |e: &ChangeEvent| {
                let doc = weak.upgrade().unwrap();
                let v = doc.read(e.path(), |n| n.as_i64()).flatten();
                sink.borrow_mut().push(v);
            }),
        );
        doc.write(&Path::root(), "n", 5_i64);
        doc.write(&Path::root(), "n", 6_i64);
        assert_eq!(*seen.borrow(), vec![Some(5), Some(6)]);
    }

    #[test]
    fn selection_channel_is_separate() {
        let doc = doc();
        let changes = record(&doc);
        let selections = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selections);
        doc.bus().subscribe_selection(Rc::new(move |e: &SelectionEvent| {
            sink.borrow_mut().push(e.clone())
        }));

        let event = SelectionEvent::Selected { agent: "a1".into(), primary: true };
        doc.bus().publish_selection(&event);
        doc.bus().publish_selection(&SelectionEvent::Deselected { agent: "a1".into(), primary: true });

        assert!(changes.borrow().is_empty());
        assert_eq!(selections.borrow().len(), 2);
        assert_eq!(selections.borrow()[0], event);
        assert_eq!(selections.borrow()[1].agent(), "a1");
    }

    #[test]
    fn unsubscribed_selection_listener_is_removed() {
        let doc = doc();
        let seen = Rc::new(RefCell::new(0_usize));
        let sink = Rc::clone(&seen);
        let id = doc.bus().subscribe_selection(Rc::new(move |_: &SelectionEvent| {
            *sink.borrow_mut() += 1
        }));
        assert_eq!(doc.bus().subscriber_count(), 1);

        assert!(doc.bus().unsubscribe(id));
        doc.bus().publish_selection(&SelectionEvent::Selected { agent: "a1".into(), primary: false });
        assert_eq!(*seen.borrow(), 0);
        assert_eq!(doc.bus().subscriber_count(), 0);
        assert!(!doc.bus().unsubscribe(id));
    }
}

// ── Document ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod document_tests {
    use sb_core::schema::attr;

    use super::*;
    use crate::{Node, Tree};

    #[test]
    fn serial_numbers_increase() {
        let doc = doc();
        let a = doc.next_serial_number();
        let b = doc.next_serial_number();
        assert!(b > a);
    }

    #[test]
    fn generated_names_are_unique() {
        let doc = doc();
        let a = doc.generate_name();
        let b = doc.generate_name();
        assert_ne!(a, b);
    }

    #[test]
    fn delete_announces_once() {
        let doc = doc();
        doc.write(&p(&["a"]), "k", 1_i64);
        let log = record(&doc);
        assert!(doc.delete(&p(&["a"])).is_some());
        assert!(doc.delete(&p(&["a"])).is_none());
        assert_eq!(*log.borrow(), vec![ChangeEvent::Deleted(p(&["a"]))]);
    }

    #[test]
    fn adopted_tree_reserves_names_and_serials() {
        let config = EditorConfig::default();
        let first_name = Document::new(config.clone()).generate_name();

        let mut tree = Tree::new();
        let agent = Path::agent(&first_name);
        tree.set(&agent.child(attr::NAME), Node::from(first_name.as_str()));
        tree.set(&agent.child(attr::SERIAL_NUMBER), Node::from(41_u64));

        let doc = Document::with_tree(config, tree);
        assert_ne!(doc.generate_name(), first_name);
        assert_eq!(doc.next_serial_number(), 42);
        assert!(doc.contains(&agent));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn tree_serializes_as_plain_json() {
        let doc = doc();
        doc.write(&p(&["a"]), "speed", 200.0);
        doc.write(&p(&["a"]), "name", "x");
        doc.write(&p(&["a"]), "on", true);
        let json = serde_json::to_value(doc.snapshot()).unwrap();
        assert_eq!(json, serde_json::json!({ "a": { "speed": 200.0, "name": "x", "on": true } }));
        let back: Tree = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc.snapshot());
    }
}
