//! Property-based tests for the paced tasks.
//!
//! Tasks run unpaced here; pacing only affects timing.

use proptest::prelude::*;

use threadcalc_core::observers::NoOpObserver;
use threadcalc_core::pacing::{Pacer, Pacing};
use threadcalc_core::request::CalculationRequest;
use threadcalc_core::task::{Task, TaskContext, TaskKind};
use threadcalc_core::{fibonacci, sum_of_squares, FibonacciTask, SumOfSquaresTask};

fn compute(task: &dyn Task, n: u32) -> u64 {
    let pacer = Pacer::uninterruptible(Pacing::unpaced());
    let observer = NoOpObserver::new();
    let ctx = TaskContext::new("proptest", &pacer, &observer);
    task.compute(n, &ctx).value
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// F(n) + F(n+1) == F(n+2).
    #[test]
    fn fibonacci_addition_property(n in 0u32..=18) {
        let task = FibonacciTask::new();
        prop_assert_eq!(compute(&task, n) + compute(&task, n + 1), compute(&task, n + 2));
    }

    /// Sum of squares matches n(n+1)(2n+1)/6.
    #[test]
    fn sum_of_squares_closed_form(n in 1u32..=20) {
        let m = u64::from(n);
        prop_assert_eq!(
            compute(&SumOfSquaresTask::new(), n),
            m * (m + 1) * (2 * m + 1) / 6
        );
    }

    /// Paced tasks agree with the unpaced reference functions.
    #[test]
    fn tasks_match_reference(n in 0u32..=90) {
        prop_assert_eq!(compute(&FibonacciTask::new(), n), fibonacci(n));
        prop_assert_eq!(compute(&SumOfSquaresTask::new(), n), sum_of_squares(n));
    }

    /// Running a task twice gives the same value.
    #[test]
    fn tasks_are_idempotent(n in 1u32..=20) {
        for task in [&FibonacciTask::new() as &dyn Task, &SumOfSquaresTask::new()] {
            prop_assert_eq!(compute(task, n), compute(task, n));
        }
    }

    /// Every value outside 1..=20 is rejected.
    #[test]
    fn out_of_range_requests_rejected(n in prop_oneof![i64::MIN..1i64, 21i64..i64::MAX]) {
        prop_assert!(CalculationRequest::new(n, TaskKind::Fibonacci).is_err());
    }

    /// Every value inside 1..=20 is accepted unchanged.
    #[test]
    fn in_range_requests_accepted(n in 1i64..=20) {
        let req = CalculationRequest::new(n, TaskKind::SumOfSquares).unwrap();
        prop_assert_eq!(i64::from(req.n()), n);
    }
}
