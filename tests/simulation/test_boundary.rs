use bacsim::prelude::*;

#[test]
fn form_fields_flow_through_to_csv() {
    let raw = RawInput {
        weight: 70.0,
        distribution_factor: 0.7,
        duration_hours: 2.0,
        drink_count: 3.0,
        volume_per_drink_cl: 4.0,
        absorption_rate: 1.0,
        elimination_rate: 0.15,
    };
    let input = SimulationInput::try_from(raw).expect("valid form");
    let csv = simulate(&input).unwrap().to_csv().unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 102);
    assert_eq!(lines[0], "time_h,bac_g_per_l");
    assert_eq!(lines[1], "0,0");
    assert_eq!(lines[101], "10,0");
}

#[test]
fn non_numeric_form_field_is_rejected() {
    // "abc" parsed as a float by the form layer becomes NaN
    let raw = RawInput {
        weight: f64::NAN,
        distribution_factor: 0.7,
        duration_hours: 2.0,
        drink_count: 3.0,
        volume_per_drink_cl: 4.0,
        absorption_rate: 1.0,
        elimination_rate: 0.15,
    };
    match SimulationInput::try_from(raw) {
        Err(BacError::InvalidInput { param, .. }) => assert_eq!(param, "weight"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn scenario_file_round_trip() {
    let json = r#"{
        "weight": 62.5,
        "distribution_factor": 0.55,
        "duration_hours": 3.0,
        "drink_count": 2,
        "volume_per_drink_cl": 15.0,
        "absorption_rate": 1.2,
        "elimination_rate": 0.12,
        "beverage": { "abv": 0.13, "density": 0.789 }
    }"#;
    let input = SimulationInput::from_json(json).unwrap();
    assert_eq!(input.beverage, Beverage::with_abv(0.13));

    let series = simulate(&input).unwrap();
    let exported = series.to_json().unwrap();
    let parsed: Series = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed, series);
}

#[test]
fn invalid_weight_produces_no_series() {
    let input = SimulationInput::new(0.0, 0.7, 2.0, 3, 4.0, 1.0, 0.15);
    assert!(matches!(
        simulate(&input),
        Err(BacError::InvalidInput { .. })
    ));
}
