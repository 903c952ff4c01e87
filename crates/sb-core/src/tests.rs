//! Unit tests for sb-core primitives.

#[cfg(test)]
mod paths {
    use crate::{Key, Path};

    #[test]
    fn schema_constructors_have_fixed_lengths() {
        assert_eq!(Path::root().len(), 0);
        assert_eq!(Path::agents().len(), 1);
        assert_eq!(Path::agent("a").len(), 2);
        assert_eq!(Path::composite("a").len(), 3);
        assert_eq!(Path::behavior("a", "b").len(), 4);
        assert_eq!(Path::goals("a", "b").len(), 5);
        assert_eq!(Path::goal("a", "b", "g").len(), 6);
    }

    #[test]
    fn parent_and_prefix() {
        let p = Path::goal("a", "b", "g");
        assert_eq!(p.parent(), Some(Path::goals("a", "b")));
        assert_eq!(p.prefix(2), Path::agent("a"));
        assert!(p.starts_with(&Path::behavior("a", "b")));
        assert_eq!(Path::root().parent(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Path::root().to_string(), "/");
        assert_eq!(Path::behavior("a", "b").to_string(), "/agents/a/behaviors/b");
        assert_eq!(Path::agents().child(3usize).to_string(), "/agents/3");
    }

    #[test]
    fn contains_name_is_whole_segment() {
        let p = Path::goal("abc123", "b", "g");
        assert!(p.contains_name("abc123"));
        assert!(!p.contains_name("abc12"));
        assert!(!p.contains_name("abc1234"));
        assert!(!Path::agents().child(7usize).contains_name("7"));
    }

    #[test]
    fn key_equality_with_str() {
        assert_eq!(Key::from("x"), "x");
        assert!(Key::Index(0) != "0");
    }
}

#[cfg(test)]
mod classification {
    use crate::schema::attr;
    use crate::{Path, PathKind};

    fn schema_paths() -> Vec<Path> {
        vec![
            Path::root(),
            Path::agents(),
            Path::agent("a"),
            Path::composite("a"),
            Path::behavior("a", "b"),
            Path::goals("a", "b"),
            Path::goal("a", "b", "g"),
        ]
    }

    #[test]
    fn every_schema_depth_classifies_exactly_once() {
        for path in schema_paths() {
            let kind = path.kind();
            let hits = [
                kind == PathKind::Root,
                kind == PathKind::AgentList,
                kind.is_agent(),
                kind.is_composite(),
                kind.is_behavior(),
                kind.is_goal_list(),
                kind.is_goal(),
            ];
            assert_eq!(
                hits.iter().filter(|&&h| h).count(),
                1,
                "{path} classified as {kind:?}"
            );
            assert_eq!(hits.iter().position(|&h| h), Some(path.len()));
        }
    }

    #[test]
    fn attribute_paths_do_not_collide_with_containers() {
        assert_eq!(
            Path::agent("a").child(attr::MASS).kind(),
            PathKind::AgentAttribute { agent: "a", attribute: "mass" }
        );
        assert_eq!(
            Path::behavior("a", "b").child(attr::WEIGHT).kind(),
            PathKind::BehaviorAttribute { agent: "a", behavior: "b", attribute: "weight" }
        );
        assert_eq!(
            Path::goal("a", "b", "g").child(attr::SPEED).kind(),
            PathKind::GoalAttribute { agent: "a", behavior: "b", goal: "g", attribute: "speed" }
        );
    }

    #[test]
    fn unexpected_shapes_are_unrecognized() {
        assert_eq!(Path::agent("a").child(0usize).kind(), PathKind::Unrecognized);
        assert_eq!(Path::new(vec!["other".into()]).kind(), PathKind::Unrecognized);
        assert_eq!(Path::new(vec!["other".into(), "a".into()]).kind(), PathKind::Unrecognized);
        let deep = Path::goal("a", "b", "g").child(attr::AGENTS).child(0usize);
        assert_eq!(deep.kind(), PathKind::Unrecognized);
        // wrong container key at position 4
        let wrong = Path::behavior("a", "b").child("notgoals").child("g");
        assert_eq!(wrong.kind(), PathKind::Unrecognized);
    }

    #[test]
    fn agent_extraction() {
        assert_eq!(Path::goal("a", "b", "g").kind().agent(), Some("a"));
        assert_eq!(Path::agents().kind().agent(), None);
    }
}

#[cfg(test)]
mod goal_types {
    use crate::{CoreError, GoalParam, GoalType};

    #[test]
    fn parse_roundtrip_all() {
        for t in GoalType::ALL {
            assert_eq!(t.as_str().parse::<GoalType>(), Ok(t));
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "teleport".parse::<GoalType>(),
            Err(CoreError::UnknownGoalType("teleport".into()))
        );
    }

    #[test]
    fn wander_takes_speed_only() {
        assert!(GoalType::Wander.uses(GoalParam::Speed));
        assert!(!GoalType::Wander.uses(GoalParam::Agent));
        assert_eq!(GoalType::FollowPath.params().len(), 3);
    }
}

#[cfg(test)]
mod names {
    use crate::NameGenerator;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = NameGenerator::new(7, 8);
        let mut b = NameGenerator::new(7, 8);
        for _ in 0..20 {
            assert_eq!(a.next_name(), b.next_name());
        }
    }

    #[test]
    fn names_are_unique_and_sized() {
        let mut g = NameGenerator::new(1, 4);
        let names: Vec<String> = (0..500).map(|_| g.next_name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
        assert!(names.iter().all(|n| n.len() == 4));
        assert_eq!(g.len(), 500);
    }

    #[test]
    fn reserved_names_are_skipped() {
        let mut probe = NameGenerator::new(3, 8);
        let first = probe.next_name();

        let mut g = NameGenerator::new(3, 8);
        assert!(!g.is_taken(&first));
        assert!(g.reserve(&first));
        assert!(g.is_taken(&first));
        assert!(!g.reserve(&first));
        assert_ne!(g.next_name(), first);
    }
}

#[cfg(test)]
mod config {
    use crate::EditorConfig;

    #[test]
    fn default_is_valid() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let mut c = EditorConfig::default();
        c.name_length = 2;
        assert!(c.validate().is_err());

        let mut c = EditorConfig::default();
        c.agent.mass = 0.0;
        assert!(c.validate().is_err());

        let mut c = EditorConfig::default();
        c.default_weight = f64::NAN;
        assert!(c.validate().is_err());
    }
}
