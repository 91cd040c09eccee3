use approx::assert_relative_eq;
use bacsim::prelude::*;
use bacsim::{reference_crossings, zone_spans};

fn reference_input() -> SimulationInput {
    SimulationInput::new(70.0, 0.7, 2.0, 3, 4.0, 1.0, 0.15)
}

#[test]
fn reference_scenario_spans_ten_hours() {
    let series = simulate(&reference_input()).expect("valid input");

    assert_eq!(series.len(), 101);
    assert_eq!(series.first().unwrap().t, 0.0);
    assert_eq!(series.last().unwrap().t, 10.0);
    assert_eq!(series.last().unwrap().bac, 0.0);
    assert!(series.iter().all(|s| s.bac >= 0.0));
}

#[test]
fn reference_scenario_stays_low() {
    let series = simulate(&reference_input()).unwrap();

    // Peak of about 0.2 g/L never reaches the first reference line
    let spans = zone_spans(&series);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].zone, Zone::Low);
    assert!(reference_crossings(&series)
        .iter()
        .all(|(_, t)| t.is_none()));
    assert_eq!(series.time_above(0.5), 0.0);
}

#[test]
fn heavy_session_crosses_every_reference_line() {
    let input = SimulationInput::new(55.0, 0.55, 4.0, 5, 15.0, 1.5, 0.1);
    let series = simulate(&input).unwrap();

    let crossings = reference_crossings(&series);
    let times: Vec<f64> = crossings
        .iter()
        .map(|(level, t)| t.unwrap_or_else(|| panic!("never reached {} g/L", level)))
        .collect();
    assert!(times.windows(2).all(|w| w[0] < w[1]));

    let peak = series.peak().unwrap();
    assert_eq!(Zone::classify(peak.bac), Zone::Critical);
    assert!(series.time_above(1.2) > 0.0);
    // Still well above zero when the tail ends
    assert!(series.sober_at().is_none());
}

#[test]
fn exposure_grows_with_dose() {
    let one = simulate(&SimulationInput {
        drink_count: 1,
        ..reference_input()
    })
    .unwrap();
    let three = simulate(&reference_input()).unwrap();
    assert!(three.auc() > one.auc());
    assert!(three.peak().unwrap().bac > one.peak().unwrap().bac);
}

#[test]
fn concurrent_calls_are_independent() {
    let input = reference_input();
    let expected = simulate(&input).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || simulate(&input).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn batch_matrix_rows_match_single_runs() {
    let inputs = vec![
        reference_input(),
        SimulationInput {
            drink_count: 0,
            ..reference_input()
        },
    ];
    let options = SimulationOptions::default();
    let matrix = bacsim::concentration_matrix(&inputs, &options).unwrap();
    assert_eq!(matrix.nrows(), 2);

    let single = simulate(&inputs[0]).unwrap();
    for (j, sample) in single.iter().enumerate() {
        assert_relative_eq!(matrix[[0, j]], sample.bac);
    }
    assert!(matrix.row(1).iter().all(|&c| c == 0.0));
}
