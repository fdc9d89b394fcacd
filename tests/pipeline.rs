//! Full pipeline over a multigrid ensemble: build, narrow, recenter.

use boreas::{
    Dim, DimArray, Grid, InitDates, SpatialCoords, SubsetOp, SubsetQuery, TimeAxis, TimeBounds,
    Variable, rescale_monthly_means, subset,
};
use chrono::{NaiveDate, NaiveDateTime};
use ndarray::{ArrayD, IxDyn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("boreas_subset=warn,boreas_rescale=warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn date(year: i32, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn step(year: i32, month: u32) -> TimeBounds {
    TimeBounds::new(date(year, month), date(year, month)).unwrap()
}

/// `[var=2, member=2, time=6, lat=2, lon=2]`: two DJF winters of a
/// two-member forecast, with lagged initialization dates per winter.
fn forecast() -> Grid {
    let array = DimArray::new(
        ArrayD::from_shape_vec(IxDyn(&[2, 2, 6, 2, 2]), (0..96).map(f64::from).collect()).unwrap(),
        vec![Dim::Variable, Dim::Member, Dim::Time, Dim::Lat, Dim::Lon],
    )
    .unwrap();
    let series = vec![
        step(1999, 12),
        step(2000, 1),
        step(2000, 2),
        step(2000, 12),
        step(2001, 1),
        step(2001, 2),
    ];
    let lags = vec![date(1999, 11), date(2000, 11)];
    Grid::new(
        array,
        vec![Variable::new("tas", None), Variable::new("pr", None)],
        SpatialCoords::new(vec![0.0, 5.0], vec![40.0, 45.0]).unwrap(),
        TimeAxis::PerVariable(vec![series.clone(), series]),
        Some(vec!["m1".into(), "m2".into()]),
        Some(InitDates::Lagged(vec![lags.clone(), lags])),
    )
    .unwrap()
}

#[test]
fn full_query_collapses_to_a_time_series() {
    init_tracing();
    let forecast = forecast();
    let query = SubsetQuery::new()
        .with_variables(["tas"])
        .with_members([1])
        .with_season([12, 1, 2])
        .with_lon([2.5])
        .with_lat([45.0]);
    let narrowed = subset(&forecast, &query).unwrap();

    assert_eq!(narrowed.dims(), &[Dim::Time]);
    assert_eq!(narrowed.members(), None);
    assert!(narrowed.init_dates().is_none());
    assert!(matches!(narrowed.time_axis(), TimeAxis::Shared(_)));
    assert_eq!(narrowed.coords().x(), &[0.0], "2.5 ties to the lower column");
    assert_eq!(narrowed.coords().y(), &[45.0]);

    // tas, first member, lat=45, lon=0: every third index step of 4.
    let got: Vec<f64> = narrowed.data().data().iter().copied().collect();
    assert_eq!(got, vec![2.0, 6.0, 10.0, 14.0, 18.0, 22.0]);

    assert_eq!(narrowed.provenance().variable(), Some(SubsetOp::Variable));
    assert_eq!(narrowed.provenance().members(), Some(SubsetOp::Member));
    assert_eq!(narrowed.provenance().dates(), Some(SubsetOp::Season));
    assert_eq!(narrowed.provenance().coords(), Some(SubsetOp::Spatial));
}

#[test]
fn year_selection_tracks_lagged_initializations() {
    init_tracing();
    let forecast = forecast();
    let second_winter = subset(&forecast, &SubsetQuery::new().with_years([2001])).unwrap();

    assert_eq!(second_winter.len_of(Dim::Time), Some(3));
    assert_eq!(second_winter.months(), vec![12, 1, 2]);
    assert_eq!(second_winter.years(), vec![2000, 2001, 2001]);

    // Only the 2001 winter's initialization survives, for both members.
    match second_winter.init_dates() {
        Some(InitDates::Lagged(lists)) => {
            assert_eq!(lists.len(), 2);
            for list in lists {
                assert_eq!(list, &vec![date(2000, 11)]);
            }
        }
        other => panic!("expected lagged init dates, got {other:?}"),
    }
}

#[test]
fn narrowed_forecast_recenters_against_a_reference() {
    init_tracing();
    let forecast = forecast();
    let narrowed = subset(
        &forecast,
        &SubsetQuery::new()
            .with_variables(["pr"])
            .with_season([12])
            .with_lat([45.0]),
    )
    .unwrap();

    assert_eq!(narrowed.dims(), &[Dim::Member, Dim::Time, Dim::Lon]);
    let before: Vec<f64> = narrowed.data().data().iter().copied().collect();
    assert_eq!(before, vec![50.0, 51.0, 62.0, 63.0, 74.0, 75.0, 86.0, 87.0]);

    // A reference running 7 units warmer shifts the forecast down by 7.
    let reference = Grid::new(
        DimArray::new(narrowed.data().data() + 7.0, narrowed.dims().to_vec()).unwrap(),
        narrowed.variables().to_vec(),
        narrowed.coords().clone(),
        narrowed.time_axis().clone(),
        narrowed.members().map(<[String]>::to_vec),
        narrowed.init_dates().cloned(),
    )
    .unwrap();

    let result = rescale_monthly_means(&narrowed, &narrowed, Some(&reference), true).unwrap();

    let after: Vec<f64> = result.grid().data().data().iter().copied().collect();
    let expected: Vec<f64> = before.iter().map(|v| v - 7.0).collect();
    assert_eq!(after, expected);
    assert_eq!(result.grid().time_axis(), narrowed.time_axis());
    assert_eq!(result.grid().members(), narrowed.members());

    let offsets = result.offsets();
    assert_eq!(offsets.len(), 1, "one variable, one month, shared members");
    assert_eq!(offsets[0].variable(), "pr");
    assert_eq!(offsets[0].member(), None);
    assert_eq!(offsets[0].month(), 12);
    assert_eq!(
        offsets[0].field().iter().copied().collect::<Vec<f64>>(),
        vec![-7.0, -7.0]
    );
}
