// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::*;
use pretty_assertions::assert_eq;
use std::{
    collections::BTreeSet,
    sync::{Arc, Barrier},
    thread,
};
use testcase_tracker::{
    config::TrackerConfig,
    description::TestId,
    model::{TestFailure, TestResultStatus},
    node::PropertyExporter,
    state::TestCaseState,
};

const THREADS: usize = 8;
const ROUNDS: usize = 50;

/// Runs `f` on `THREADS` threads released at the same time, returning their results in thread
/// order.
fn race<T: Send>(f: impl Fn(usize) -> T + Sync) -> Vec<T> {
    let barrier = Barrier::new(THREADS);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|index| {
                let barrier = &barrier;
                let f = &f;
                scope.spawn(move || {
                    barrier.wait();
                    f(index)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("racing thread panicked"))
            .collect()
    })
}

#[test]
fn racing_starts_have_one_winner() {
    init_tracing();
    for _ in 0..ROUNDS {
        let (_, tracker) = leaf_tracker("adds");
        let won = race(|index| tracker.started(1_000 + index as u64));
        assert_eq!(won.iter().filter(|won| **won).count(), 1);
        assert_eq!(tracker.state(), TestCaseState::Started);

        let winner = won.iter().position(|won| *won).unwrap();
        let interval = tracker.runtime().expect("interval opened");
        assert_eq!(interval.start_millis(), 1_000 + winner as u64);
        assert_eq!(interval.end_millis(), interval.start_millis());
    }
}

#[test]
fn interrupt_races_finish() {
    init_tracing();
    for _ in 0..ROUNDS {
        let (_, tracker) = leaf_tracker("adds");
        assert!(tracker.started(1_000));

        let won = race(|index| {
            if index % 2 == 0 {
                tracker.finished(2_000)
            } else {
                tracker.interrupted(2_000)
            }
        });
        let winners: Vec<_> = won
            .iter()
            .enumerate()
            .filter_map(|(index, won)| won.then_some(index))
            .collect();
        assert_eq!(winners.len(), 1, "exactly one of finish or interrupt wins");

        let expected = if winners[0] % 2 == 0 {
            TestCaseState::Finished
        } else {
            TestCaseState::Interrupted
        };
        assert_eq!(tracker.state(), expected);
        assert_eq!(tracker.runtime().unwrap().end_millis(), 2_000);
    }
}

#[test]
fn concurrent_failures_are_all_recorded() {
    init_tracing();
    let (_, tracker) = parameterized_tracker("params", THREADS, &TrackerConfig::default());

    let won = race(|index| {
        let test = TestId::new(format!("params[{index}]"));
        let mut won = false;
        for attempt in 0..10 {
            won |= tracker.dynamic_failure(
                &test,
                TestFailure::new(format!("attempt {attempt}")),
                5_000 + attempt,
            );
        }
        won
    });
    assert_eq!(won.iter().filter(|won| **won).count(), 1);

    let result = tracker.build_result();
    assert_eq!(result.status(), TestResultStatus::Completed);
    assert_eq!(result.num_tests(), THREADS);
    assert_eq!(result.num_failures(), THREADS);
    for child in result.child_results() {
        let messages: Vec<_> = child
            .failures()
            .iter()
            .map(|failure| failure.message.clone().unwrap())
            .collect();
        let expected: Vec<_> = (0..10).map(|attempt| format!("attempt {attempt}")).collect();
        assert_eq!(messages, expected, "failures for one test keep their order");
    }
}

#[test]
fn concurrent_repeated_properties_get_unique_names() {
    init_tracing();
    let (_, tracker) = parameterized_tracker(
        "metrics",
        0,
        &TrackerConfig {
            repeated_property_initial_index: 1,
        },
    );

    let names = race(|index| {
        (0..ROUNDS)
            .map(|round| tracker.export_repeated_property("metric", &format!("{index}:{round}")))
            .collect::<Vec<_>>()
    });

    let unique: BTreeSet<_> = names.iter().flatten().cloned().collect();
    let expected: BTreeSet<_> = (1..=THREADS * ROUNDS)
        .map(|index| format!("metric{index}"))
        .collect();
    assert_eq!(unique, expected);

    let result = tracker.build_result();
    assert_eq!(result.properties().len(), THREADS * ROUNDS);
}

#[test]
fn building_results_while_running() {
    init_tracing();
    let (description, tracker) = parameterized_tracker("params", 0, &TrackerConfig::default());
    assert!(tracker.started(0));

    let tracker_ref = Arc::clone(&tracker);
    thread::scope(|scope| {
        scope.spawn(|| {
            for index in 0..ROUNDS {
                description.add_dynamic_child(testcase_tracker::description::DynamicTest::new(
                    format!("params[{index}]"),
                ));
                tracker_ref.export_property("progress", &index.to_string());
            }
        });
        scope.spawn(|| {
            for _ in 0..ROUNDS {
                let result = tracker.build_result();
                assert_eq!(result.status(), TestResultStatus::Interrupted);
                assert_eq!(result.num_failures(), 0);
            }
        });
    });

    assert!(tracker.finished(10));
    let result = tracker.build_result();
    assert_eq!(result.status(), TestResultStatus::Completed);
    assert_eq!(result.child_results().len(), ROUNDS);
    assert_eq!(
        result.properties().get("progress").map(String::as_str),
        Some((ROUNDS - 1).to_string().as_str())
    );
}
