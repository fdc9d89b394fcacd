//! End-to-end behaviour of the monthly-mean rescaler.

use boreas_grid::{Dim, DimArray, Grid, InitDates, SpatialCoords, TimeAxis, TimeBounds, Variable};
use boreas_rescale::rescale_monthly_means;
use chrono::NaiveDate;
use ndarray::{ArrayD, IxDyn};

fn bounds(year: i32, month: u32) -> TimeBounds {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    TimeBounds::new(start, start).unwrap()
}

fn values(grid: &Grid) -> Vec<f64> {
    grid.data().data().iter().copied().collect()
}

/// `[time=4, lon=2]`: two Januaries and two Februaries, per-cell values.
fn seasonal_grid(values: Vec<f64>) -> Grid {
    let array = DimArray::new(
        ArrayD::from_shape_vec(IxDyn(&[4, 2]), values).unwrap(),
        vec![Dim::Time, Dim::Lon],
    )
    .unwrap();
    Grid::new(
        array,
        vec![Variable::new("tas", None)],
        SpatialCoords::new(vec![0.0, 1.0], Vec::new()).unwrap(),
        TimeAxis::Shared(vec![
            bounds(2000, 1),
            bounds(2000, 2),
            bounds(2001, 1),
            bounds(2001, 2),
        ]),
        None,
        None,
    )
    .unwrap()
}

/// `[member=2, time=2]` with labeled members over January and February.
fn ensemble_grid(values: Vec<f64>) -> Grid {
    let array = DimArray::new(
        ArrayD::from_shape_vec(IxDyn(&[2, 2]), values).unwrap(),
        vec![Dim::Member, Dim::Time],
    )
    .unwrap();
    Grid::new(
        array,
        vec![Variable::new("tas", None)],
        SpatialCoords::none(),
        TimeAxis::Shared(vec![bounds(2000, 1), bounds(2000, 2)]),
        Some(vec!["m1".into(), "m2".into()]),
        Some(InitDates::PerMember(vec![
            bounds(1999, 12).start(),
            bounds(1999, 12).start(),
        ])),
    )
    .unwrap()
}

/// `[time=2]`, single variable named `tas`.
fn plain_grid(values: Vec<f64>) -> Grid {
    let array = DimArray::new(
        ArrayD::from_shape_vec(IxDyn(&[2]), values).unwrap(),
        vec![Dim::Time],
    )
    .unwrap();
    Grid::new(
        array,
        vec![Variable::new("tas", None)],
        SpatialCoords::none(),
        TimeAxis::Shared(vec![bounds(2000, 1), bounds(2000, 2)]),
        None,
        None,
    )
    .unwrap()
}

/// `[var=2, time=2]` with the given variable order and per-variable values.
fn multigrid(names: [&str; 2], values: Vec<f64>) -> Grid {
    let array = DimArray::new(
        ArrayD::from_shape_vec(IxDyn(&[2, 2]), values).unwrap(),
        vec![Dim::Variable, Dim::Time],
    )
    .unwrap();
    let series = vec![bounds(2000, 1), bounds(2000, 2)];
    Grid::new(
        array,
        names.iter().map(|&n| Variable::new(n, None)).collect(),
        SpatialCoords::none(),
        TimeAxis::PerVariable(vec![series.clone(), series]),
        None,
        None,
    )
    .unwrap()
}

#[test]
fn constant_offsets_shift_each_month() {
    // January cells are 10, February cells are 20, in both years.
    let simulation = seasonal_grid(vec![10.0, 10.0, 20.0, 20.0, 10.0, 10.0, 20.0, 20.0]);
    let reference = seasonal_grid(vec![15.0, 15.0, 25.0, 25.0, 15.0, 15.0, 25.0, 25.0]);

    let result = rescale_monthly_means(&simulation, &simulation, Some(&reference), true).unwrap();

    // 10 - 15 + 10 = 5 in January, 20 - 25 + 20 = 15 in February.
    assert_eq!(
        values(result.grid()),
        vec![5.0, 5.0, 15.0, 15.0, 5.0, 5.0, 15.0, 15.0]
    );
    assert_eq!(result.grid().time_axis(), simulation.time_axis());
    assert_eq!(result.grid().coords(), simulation.coords());
}

#[test]
fn interleaved_months_keep_their_time_order() {
    // The axis alternates January and February instead of grouping them.
    let simulation = seasonal_grid(vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0]);
    let reference = seasonal_grid(vec![12.0, 12.0, -97.0, -97.0, 12.0, 12.0, -97.0, -97.0]);

    let result = rescale_monthly_means(&simulation, &simulation, Some(&reference), true).unwrap();

    // January climatology is 2, so its offset is 2 - 12 = -10; February's
    // is 3 - (-97) = +100. Each lands on its own steps.
    assert_eq!(
        values(result.grid()),
        vec![-9.0, -9.0, 102.0, 102.0, -7.0, -7.0, 104.0, 104.0]
    );
    assert_eq!(result.grid().time_axis(), simulation.time_axis());
}

#[test]
fn member_wise_reference_keeps_members_independent() {
    // m1 = [0, 0], m2 = [10, 10].
    let simulation = ensemble_grid(vec![0.0, 0.0, 10.0, 10.0]);
    let predictor = ensemble_grid(vec![100.0, 200.0, 100.0, 200.0]);
    let reference = ensemble_grid(vec![1.0, 2.0, 5.0, 6.0]);

    let result =
        rescale_monthly_means(&predictor, &simulation, Some(&reference), false).unwrap();

    // m1: -1 + 100 and -2 + 200; m2: -5 + 100 and -6 + 200.
    assert_eq!(values(result.grid()), vec![99.0, 198.0, 105.0, 204.0]);
}

#[test]
fn swapping_reference_members_swaps_the_corrections() {
    let simulation = ensemble_grid(vec![0.0, 0.0, 10.0, 10.0]);
    let predictor = ensemble_grid(vec![100.0, 200.0, 100.0, 200.0]);
    let swapped = ensemble_grid(vec![5.0, 6.0, 1.0, 2.0]);

    let result = rescale_monthly_means(&predictor, &simulation, Some(&swapped), false).unwrap();

    // m1 now receives m2's old correction and vice versa.
    assert_eq!(values(result.grid()), vec![95.0, 194.0, 109.0, 208.0]);
}

#[test]
fn ensemble_mean_reference_corrects_all_members_alike() {
    let simulation = ensemble_grid(vec![0.0, 0.0, 10.0, 10.0]);
    let predictor = ensemble_grid(vec![100.0, 200.0, 100.0, 200.0]);
    let reference = ensemble_grid(vec![1.0, 2.0, 5.0, 6.0]);

    let result = rescale_monthly_means(&predictor, &simulation, Some(&reference), true).unwrap();

    // Pooled reference climatology: January 3, February 4.
    assert_eq!(values(result.grid()), vec![97.0, 196.0, 107.0, 206.0]);
}

#[test]
fn omitted_reference_is_the_identity() {
    let simulation = ensemble_grid(vec![0.0, 0.0, 10.0, 10.0]);
    let predictor = ensemble_grid(vec![100.0, 200.0, 100.0, 200.0]);

    // Even per-member: the predictor's own climatology cancels itself.
    let result = rescale_monthly_means(&predictor, &simulation, None, false).unwrap();

    assert_eq!(values(result.grid()), values(&simulation));
    assert!(
        result
            .offsets()
            .iter()
            .all(|offset| offset.field().iter().all(|&v| v == 0.0)),
        "every recorded offset should be zero"
    );
}

#[test]
fn climatologies_pair_variables_by_name() {
    // The predictor lists the same variables in the opposite order.
    let simulation = multigrid(["tas", "pr"], vec![1.0, 2.0, 10.0, 20.0]);
    let predictor = multigrid(["pr", "tas"], vec![100.0, 200.0, 1000.0, 2000.0]);
    let reference = multigrid(["tas", "pr"], vec![0.0, 0.0, 0.0, 0.0]);

    let result = rescale_monthly_means(&predictor, &simulation, Some(&reference), true).unwrap();

    // tas gains its own climatology [1000, 2000], pr gains [100, 200].
    assert_eq!(
        values(result.grid()),
        vec![1001.0, 2002.0, 110.0, 220.0]
    );
}

#[test]
fn applied_offsets_are_recorded_per_member_and_month() {
    let simulation = ensemble_grid(vec![0.0, 0.0, 10.0, 10.0]);
    let predictor = ensemble_grid(vec![100.0, 200.0, 100.0, 200.0]);
    let reference = ensemble_grid(vec![1.0, 2.0, 5.0, 6.0]);

    let result =
        rescale_monthly_means(&predictor, &simulation, Some(&reference), false).unwrap();

    let offsets = result.offsets();
    assert_eq!(offsets.len(), 4, "2 members x 2 months");

    let summary: Vec<(&str, Option<&str>, u8, f64)> = offsets
        .iter()
        .map(|o| {
            let value = *o.field().iter().next().unwrap();
            (o.variable(), o.member(), o.month(), value)
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("tas", Some("m1"), 1, 99.0),
            ("tas", Some("m1"), 2, 198.0),
            ("tas", Some("m2"), 1, 95.0),
            ("tas", Some("m2"), 2, 194.0),
        ]
    );
    for offset in offsets {
        assert_eq!(offset.field().shape(), &[] as &[usize]);
    }
}
