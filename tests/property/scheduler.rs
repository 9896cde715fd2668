use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;
use proptest::sample::Index;

use courseorder::dag::find_course_order;
use courseorder::errors::CourseOrderError;
use courseorder::types::Course;
use courseorder_test_utils::builders::ProblemBuilder;

type Pairs = Vec<(Course, Course)>;

// Random pairs over 1..=n, with no particular structure.
fn random_pairs(max_courses: u32) -> impl Strategy<Value = (u32, Pairs)> {
    (1..=max_courses).prop_flat_map(|n| {
        let pairs = proptest::collection::vec((1..=n, 1..=n), 0..(n as usize * 2));
        (Just(n), pairs)
    })
}

// Acyclic requirements: every pair is oriented along a random ranking of the
// courses, so no cycle can form. Self pairs are dropped.
fn acyclic_pairs(max_courses: u32) -> impl Strategy<Value = (u32, Pairs)> {
    (1..=max_courses)
        .prop_flat_map(|n| {
            let pairs = proptest::collection::vec((1..=n, 1..=n), 0..(n as usize * 2));
            let ranking = Just((1..=n).collect::<Vec<Course>>()).prop_shuffle();
            (Just(n), pairs, ranking)
        })
        .prop_map(|(n, pairs, ranking)| {
            let rank: HashMap<Course, usize> =
                ranking.iter().enumerate().map(|(i, &c)| (c, i)).collect();
            let oriented = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| if rank[&a] < rank[&b] { (a, b) } else { (b, a) })
                .collect();
            (n, oriented)
        })
}

fn assert_valid_order(n: u32, pairs: &[(Course, Course)], order: &[Course]) -> Result<(), TestCaseError> {
    prop_assert_eq!(order.len(), n as usize);

    let position: HashMap<Course, usize> =
        order.iter().enumerate().map(|(i, &c)| (c, i)).collect();
    prop_assert_eq!(position.len(), n as usize, "order has repeated courses");
    for c in 1..=n {
        prop_assert!(position.contains_key(&c), "course {} missing from order", c);
    }
    for &(a, b) in pairs {
        prop_assert!(position[&a] < position[&b], "{} must come before {}", a, b);
    }
    Ok(())
}

proptest! {
    #[test]
    fn acyclic_requirements_always_have_a_valid_order((n, pairs) in acyclic_pairs(30)) {
        let problem = ProblemBuilder::new(n).requirements(&pairs).build();

        let order = find_course_order(&problem);
        prop_assert!(order.is_ok(), "acyclic input rejected: {:?}", order);
        let order = order.unwrap();
        assert_valid_order(n, &pairs, &order)?;
    }

    #[test]
    fn reversing_any_requirement_creates_a_cycle(
        (n, pairs) in acyclic_pairs(30),
        pick in any::<Index>(),
    ) {
        let mut pairs = pairs;
        let extra = if pairs.is_empty() {
            (1, 1)
        } else {
            let (a, b) = pairs[pick.index(pairs.len())];
            (b, a)
        };
        pairs.push(extra);

        let problem = ProblemBuilder::new(n).requirements(&pairs).build();

        prop_assert!(matches!(
            find_course_order(&problem),
            Err(CourseOrderError::CycleDetected)
        ));
    }

    #[test]
    fn self_requirement_is_always_impossible(
        (n, pairs) in random_pairs(20),
        pick in any::<Index>(),
    ) {
        let course = pick.index(n as usize) as Course + 1;
        let mut pairs = pairs;
        pairs.push((course, course));

        let problem = ProblemBuilder::new(n).requirements(&pairs).build();

        prop_assert!(matches!(
            find_course_order(&problem),
            Err(CourseOrderError::CycleDetected)
        ));
    }

    #[test]
    fn duplicating_requirements_changes_nothing((n, pairs) in random_pairs(20)) {
        let doubled: Pairs = pairs.iter().chain(pairs.iter()).copied().collect();

        let once = find_course_order(&ProblemBuilder::new(n).requirements(&pairs).build()).ok();
        let twice = find_course_order(&ProblemBuilder::new(n).requirements(&doubled).build()).ok();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn agrees_with_petgraph_on_existence((n, pairs) in random_pairs(20)) {
        // Self pairs are covered above; keep the reference graph loop-free.
        let pairs: Pairs = pairs.into_iter().filter(|(a, b)| a != b).collect();

        let mut graph: DiGraphMap<Course, ()> = DiGraphMap::new();
        for c in 1..=n {
            graph.add_node(c);
        }
        for &(a, b) in &pairs {
            graph.add_edge(a, b, ());
        }

        let problem = ProblemBuilder::new(n).requirements(&pairs).build();
        let ours = find_course_order(&problem);

        prop_assert_eq!(ours.is_ok(), toposort(&graph, None).is_ok());
        if let Ok(order) = ours {
            assert_valid_order(n, &pairs, &order)?;
        }
    }
}
