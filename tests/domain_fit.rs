use aqi_dash::domain::{self, Domain, DOMAIN_STEP};
use aqi_dash::BandScale;

#[test]
fn snaps_outward_to_step_boundaries() {
    let d = domain::fit([10.0, 42.0, 260.0], BandScale::Standard).unwrap();
    assert_eq!(d, Domain::new(0.0, 300.0));

    let d = domain::fit([120.0, 130.0, 140.0], BandScale::Standard).unwrap();
    assert_eq!(d, Domain::new(100.0, 150.0));
}

#[test]
fn fit_is_idempotent() {
    let first = domain::fit([37.0, 188.0], BandScale::Standard).unwrap();
    let second = domain::fit([first.min, first.max], BandScale::Standard).unwrap();
    assert_eq!(first, second);
}

#[test]
fn result_stays_within_scale_bounds() {
    for values in [
        vec![-40.0, 10.0],
        vec![280.0, 470.0],
        vec![0.0],
        vec![1000.0],
    ] {
        let d = domain::fit(values.iter().copied(), BandScale::Standard).unwrap();
        assert!(d.min >= 0.0);
        assert!(d.max <= BandScale::Standard.cap());
        assert!(d.span() >= DOMAIN_STEP - 1e-9);
    }
}

#[test]
fn extended_scale_raises_the_cap() {
    let d = domain::fit([310.0, 470.0], BandScale::Extended).unwrap();
    assert_eq!(d, Domain::new(300.0, 500.0));
    let d = domain::fit([310.0, 470.0], BandScale::Standard).unwrap();
    assert_eq!(d.max, 300.0);
}

#[test]
fn narrow_range_widens_to_one_step() {
    let d = domain::fit([72.0, 74.0], BandScale::Standard).unwrap();
    assert_eq!(d, Domain::new(50.0, 100.0));
    // Flat data exactly on a boundary still spans a full step.
    let d = domain::fit([100.0, 100.0], BandScale::Standard).unwrap();
    assert_eq!(d, Domain::new(100.0, 150.0));
}

#[test]
fn empty_and_non_finite_inputs_yield_none() {
    assert_eq!(domain::fit([], BandScale::Standard), None);
    assert_eq!(
        domain::fit([f64::NAN, f64::INFINITY], BandScale::Standard),
        None
    );
    // Finite values still fit when mixed with garbage.
    let d = domain::fit([f64::NAN, 60.0], BandScale::Standard).unwrap();
    assert_eq!(d, Domain::new(50.0, 100.0));
}
