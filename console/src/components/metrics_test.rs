use super::*;

#[test]
fn sparkline_spans_the_box() {
    let points = sparkline_points(&[0.0, 5.0, 10.0], 100.0, 50.0);
    assert_eq!(points, "0.0,50.0 50.0,25.0 100.0,0.0");
}

#[test]
fn sparkline_flat_series_sits_on_midline() {
    assert_eq!(sparkline_points(&[3.0, 3.0], 10.0, 20.0), "0.0,10.0 10.0,10.0");
}

#[test]
fn sparkline_single_point_and_empty() {
    assert_eq!(sparkline_points(&[7.0], 10.0, 20.0), "0.0,10.0");
    assert!(sparkline_points(&[], 10.0, 20.0).is_empty());
}

#[test]
fn users_series_peak_is_at_the_top() {
    let points = sparkline_points(&USERS_SERIES, 240.0, 60.0);
    let peak = points.split(' ').nth(5).unwrap();
    assert_eq!(peak, "200.0,0.0");
}

#[test]
fn ranking_splits_into_up_and_down() {
    let tones: Vec<_> = (0..SHIPPED_RANKING.len()).map(|i| ranking_tone(i, SHIPPED_RANKING.len())).collect();
    assert_eq!(
        tones,
        ["ranking__row--up", "ranking__row--up", "ranking__row--down", "ranking__row--down", "ranking__row--down"]
    );
}
