//! Worked walk-throughs: exact steps and final highlights

use binsearch_viz::*;
use test_case::test_case;
use test_helpers::*;

#[test_case(7, 10, &[(0, 6, 3, None), (4, 6, 5, None), (4, 4, 4, Some(true))] ; "hit after two probes")]
#[test_case(4, 5, &[(0, 3, 1, None), (2, 3, 2, None), (2, 1, -1, Some(false))] ; "miss between elements")]
#[test_case(1, 2, &[(0, 0, 0, Some(true))] ; "single element hit")]
#[test_case(1, 3, &[(0, 0, 0, None), (1, 0, -1, Some(false))] ; "single element miss")]
#[test_case(5, 0, &[(0, 4, 2, None), (0, 1, 0, None), (0, -1, -1, Some(false))] ; "miss below range")]
#[test_case(6, 2, &[(0, 5, 2, None), (0, 1, 0, Some(true))] ; "hit first element")]
fn test_plan_steps(n: i64, target: Value, expected: &[(isize, isize, isize, Option<bool>)]) {
    let session = session(n, target);
    assert_eq!(step_tuples(&session), expected);
}

#[test_case(7, 10, Outcome::Found { value: 10, index: 4 } ; "scenario a")]
#[test_case(4, 5, Outcome::NotFound { target: 5 } ; "scenario b")]
#[test_case(1, 2, Outcome::Found { value: 2, index: 0 } ; "scenario c")]
#[test_case(31, 62, Outcome::Found { value: 62, index: 30 } ; "last of thirty one")]
#[test_case(31, 63, Outcome::NotFound { target: 63 } ; "just past the end")]
fn test_final_outcome(n: i64, target: Value, expected: Outcome) {
    let mut session = session(n, target);
    session.fast_forward();
    assert_eq!(session.current_highlight().outcome, expected);
}

#[test]
fn test_scenario_a_highlights() {
    let mut session = session(7, 10);
    assert_eq!(session.array().as_slice(), &[2, 4, 6, 8, 10, 12, 14]);

    let first = session.current_highlight();
    assert_eq!(first.probed_index, Some(3));
    assert_eq!(first.outcome.to_string(), "Step 1: Searching index 3, Value 8");

    assert!(session.advance());
    let second = session.current_highlight();
    assert_eq!(second.probed_index, Some(5));
    assert_eq!(second.excluded_indices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(second.outcome.to_string(), "Step 2: Searching index 5, Value 12");

    assert!(session.advance());
    let last = session.current_highlight();
    assert_eq!(last.outcome.to_string(), "Target 10 found at index 4.");
    assert!(!session.advance());
}

#[test]
fn test_scenario_b_final_text() {
    let mut session = session(4, 5);
    session.fast_forward();
    let last = session.current_highlight();
    assert_eq!(last.probed_index, None);
    assert_eq!(last.outcome.to_string(), "Target 5 not found in the array.");
}

#[test]
fn test_scenario_c_single_step() {
    let mut session = session(1, 2);
    assert_eq!(session.steps().len(), 1);
    assert!(!session.advance());
    assert!(!session.retreat());
    assert_eq!(session.current_step(), 0);
}

#[test]
fn test_verbatim_mode_repeats_matching_probe() {
    let session = verbatim_session(7, 10);
    assert_eq!(
        step_tuples(&session),
        vec![
            (0, 6, 3, None),
            (4, 6, 5, None),
            (4, 4, 4, None),
            (4, 4, 4, Some(true)),
        ]
    );

    // The repeated probe reads as searching, the last as found
    let highlights: Vec<Highlight> = session.highlights().collect();
    assert_eq!(
        highlights[2].outcome,
        Outcome::Searching { step: 2, index: 4, value: 10 }
    );
    assert_eq!(highlights[3].outcome, Outcome::Found { value: 10, index: 4 });

    // Misses are recorded identically in both modes
    assert_eq!(step_tuples(&verbatim_session(4, 5)), step_tuples(&test_helpers::session(4, 5)));
}

#[test]
fn test_active_node_is_probed_node() {
    let session = session(15, 22);
    for highlight in session.highlights() {
        match highlight.probed_index {
            Some(index) => {
                let path = highlight.active_node.as_ref().expect("probe has a node");
                let node = path.resolve(session.tree().root().unwrap()).unwrap();
                assert_eq!(node.index, index);
                assert_eq!(path.depth(), highlight.step);
            }
            None => assert!(highlight.active_node.is_none()),
        }
    }
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(build_session(0, 4), Err(SessionError::InvalidLength(_))));
    assert!(matches!(build_session(-1, 4), Err(SessionError::InvalidLength(_))));
    assert!(matches!(
        SessionConfig::parse("abc", "4"),
        Err(SessionError::InvalidLength(_))
    ));
    assert!(matches!(
        SessionConfig::parse("4", "4.5"),
        Err(SessionError::InvalidTarget(_))
    ));
}
