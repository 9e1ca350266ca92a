use barchart_rs::anim::{AnimatedSeries, AnimationPhase, AnimationSpec, Easing};
use barchart_rs::core::Dataset;
use barchart_rs::error::ChartError;
use proptest::prelude::*;

fn reference_dataset() -> Dataset {
    Dataset::from_pairs([
        (100.0, "A"),
        (200.0, "B"),
        (150.0, "C"),
        (300.0, "D"),
        (250.0, "E"),
    ])
    .expect("reference dataset")
}

#[test]
fn start_schedules_one_bar_per_entry_with_index_stagger() {
    let series =
        AnimatedSeries::start(&reference_dataset(), AnimationSpec::default()).expect("series");

    assert_eq!(series.len(), 5);
    for (index, bar) in series.bars().iter().enumerate() {
        assert_eq!(bar.delay_ms(), index as u64 * 100);
    }
    assert_eq!(series.settle_deadline_ms(), 400 + 1000);
}

#[test]
fn values_are_zero_before_the_stagger_delay() {
    let series =
        AnimatedSeries::start(&reference_dataset(), AnimationSpec::default()).expect("series");

    for index in 1..5 {
        let delay = index as u64 * 100;
        assert_eq!(series.value_at(index, delay - 1).expect("value"), 0.0);
        assert_eq!(series.value_at(index, 0).expect("value"), 0.0);
    }
}

#[test]
fn values_settle_exactly_on_target_at_delay_plus_duration() {
    let dataset = reference_dataset();
    let series = AnimatedSeries::start(&dataset, AnimationSpec::default()).expect("series");

    for index in 0..5 {
        let settle = index as u64 * 100 + 1000;
        let target = dataset.value(index).expect("target");
        assert_eq!(series.value_at(index, settle).expect("value"), target);
        assert_eq!(series.value_at(index, settle + 10_000).expect("value"), target);
    }
}

#[test]
fn reference_scenario_timeline() {
    let mut series =
        AnimatedSeries::start(&reference_dataset(), AnimationSpec::default()).expect("series");

    // At 50 ms only bar A has begun animating.
    series.advance(50);
    assert!(series.current_value(0).expect("bar A") > 0.0);
    assert_eq!(series.phase(0).expect("bar A"), AnimationPhase::Animating);
    for index in 1..5 {
        assert_eq!(series.current_value(index).expect("value"), 0.0);
        assert_eq!(series.phase(index).expect("phase"), AnimationPhase::Unstarted);
    }

    // At 1300 ms bar D (delay 300) is settled on 300 while bar E is not.
    series.advance(1250);
    assert_eq!(series.elapsed_ms(), 1300);
    assert_eq!(series.current_value(3).expect("bar D"), 300.0);
    assert_eq!(series.phase(3).expect("bar D"), AnimationPhase::Settled);
    assert_eq!(series.phase(4).expect("bar E"), AnimationPhase::Animating);
    assert!(series.current_value(4).expect("bar E") < 250.0);
    assert!(!series.is_settled());

    // Bar E finishes at 1400 ms and the series reports settled.
    assert!(!series.advance(100));
    assert_eq!(series.current_value(4).expect("bar E"), 250.0);
    assert!(series.is_settled());
}

#[test]
fn advance_reports_whether_another_frame_is_needed() {
    let mut series =
        AnimatedSeries::start(&reference_dataset(), AnimationSpec::default()).expect("series");

    assert!(series.advance(16));
    assert!(series.advance(1000));
    assert!(!series.advance(5000));
    assert!(!series.advance(16));
}

#[test]
fn empty_dataset_schedules_no_animations() {
    let empty = Dataset::new(Vec::new(), Vec::new()).expect("empty dataset");
    let mut series = AnimatedSeries::start(&empty, AnimationSpec::default()).expect("series");

    assert!(series.is_empty());
    assert!(series.is_settled());
    assert_eq!(series.settle_deadline_ms(), 0);
    assert!(!series.advance(16));
}

#[test]
fn out_of_bounds_index_is_rejected() {
    let series =
        AnimatedSeries::start(&reference_dataset(), AnimationSpec::default()).expect("series");

    let err = series.current_value(5).expect_err("index 5 out of bounds");
    match err {
        ChartError::BarIndexOutOfBounds { index, len } => {
            assert_eq!(index, 5);
            assert_eq!(len, 5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_duration_is_rejected() {
    let spec = AnimationSpec {
        duration_ms: 0,
        ..AnimationSpec::default()
    };
    AnimatedSeries::start(&reference_dataset(), spec).expect_err("must reject zero duration");
}

#[test]
fn zero_stagger_starts_every_bar_together() {
    let spec = AnimationSpec {
        stagger_ms: 0,
        ..AnimationSpec::default()
    };
    let series = AnimatedSeries::start(&reference_dataset(), spec).expect("series");

    for bar in series.bars() {
        assert_eq!(bar.delay_ms(), 0);
    }
    assert_eq!(series.settle_deadline_ms(), 1000);
}

proptest! {
    #[test]
    fn bar_values_are_monotonically_non_decreasing(
        target in 0.0f64..10_000.0,
        earlier in 0u64..3_000,
        later in 0u64..3_000,
        easing_pick in 0usize..3
    ) {
        let easing = [Easing::Linear, Easing::EaseInOutCubic, Easing::SmoothStep][easing_pick];
        let dataset = Dataset::from_pairs([(target, "X")]).expect("dataset");
        let spec = AnimationSpec { stagger_ms: 100, duration_ms: 1000, easing };
        let series = AnimatedSeries::start(&dataset, spec).expect("series");

        let (lo, hi) = if earlier <= later { (earlier, later) } else { (later, earlier) };
        let v_lo = series.value_at(0, lo).expect("value");
        let v_hi = series.value_at(0, hi).expect("value");
        prop_assert!(v_lo <= v_hi + 1e-9 * target.max(1.0));
    }

    #[test]
    fn bar_values_never_exceed_the_target(
        target in 0.0f64..10_000.0,
        at_ms in 0u64..10_000
    ) {
        let dataset = Dataset::from_pairs([(target, "X")]).expect("dataset");
        let series = AnimatedSeries::start(&dataset, AnimationSpec::default()).expect("series");

        let value = series.value_at(0, at_ms).expect("value");
        prop_assert!((0.0..=target).contains(&value));
    }
}
