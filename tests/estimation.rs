//! 물성 근사식과 범위 검사 회귀 테스트. 기대값은 근사식을 그대로 계산한 고정 소수점 문자열이다.
use steam_property_estimator::quantity::QuantityKind;
use steam_property_estimator::steam::{
    saturation_at_kelvin, saturation_by_pressure, saturation_by_temperature, superheated_at,
    superheated_state, to_fixed, Bound,
};

#[test]
fn saturation_by_temperature_at_300_k() {
    let state = saturation_at_kelvin(300.0).expect("in range");
    assert_eq!(state.vapor_pressure, "0.2958");
    assert_eq!(state.latent_heat, "2243.57");
    assert_eq!(state.enthalpy_vapor, "2768.50");
    assert_eq!(state.enthalpy_water, "554.25");
    assert_eq!(state.volume_vapor, "0.003685");
    assert_eq!(state.volume_water, "0.000036");

    let result = state.to_result();
    assert_eq!(result.get("temp"), Some("300.00"));
    assert_eq!(result.get("pressure"), Some("0.2958"));
    assert_eq!(result.iter().count(), 7);
}

#[test]
fn saturation_by_temperature_accepts_any_temperature_unit() {
    let from_c = saturation_by_temperature(26.85, "C").expect("celsius");
    let from_k = saturation_by_temperature(300.0, "K").expect("kelvin");
    assert_eq!(from_c.vapor_pressure, from_k.vapor_pressure);
    assert_eq!(from_c.latent_heat, from_k.latent_heat);

    let from_f = saturation_by_temperature(212.0, "F").expect("fahrenheit");
    assert_eq!(from_f.to_result().get("temp"), Some("373.15"));
    assert_eq!(from_f.enthalpy_vapor, "3500.00");
}

#[test]
fn below_lower_bound_fails_for_every_form() {
    let err = saturation_by_temperature(200.0, "K").unwrap_err();
    assert_eq!(err.bound, Bound::Lower);
    assert_eq!(err.value, Some(200.0));

    let err = superheated_state(200.0, "K", 100.0, "kPa").unwrap_err();
    assert_eq!(err.bound, Bound::Lower);
    assert_eq!(err.quantity(), QuantityKind::Temperature);

    // 압력 폼은 200 K에 대응하는 입력으로 200 Pa(삼중점 아래)를 쓴다
    let err = saturation_by_pressure(200.0, "Pa").unwrap_err();
    assert_eq!(err.bound, Bound::Lower);
}

#[test]
fn above_upper_bound_fails() {
    let err = saturation_at_kelvin(700.0).unwrap_err();
    assert_eq!(err.bound, Bound::Upper);
    let err = saturation_by_pressure(30.0, "MPa").unwrap_err();
    assert_eq!(err.bound, Bound::Upper);
    let err = superheated_at(650.0, 100.0).unwrap_err();
    assert_eq!(err.bound, Bound::Upper);
}

#[test]
fn lower_temperature_bounds_differ_between_forms() {
    // 273.10 K: 포화 폼(273.06 K 하한)은 통과, 과열 폼(273.15 K 하한)은 실패
    assert!(saturation_at_kelvin(273.10).is_ok());
    assert!(superheated_at(273.10, 100.0).is_err());
    assert!(saturation_at_kelvin(273.06).is_ok());
    assert!(saturation_at_kelvin(647.096).is_ok());
}

#[test]
fn range_error_message_names_bound_and_range() {
    let err = saturation_at_kelvin(200.0).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Temperature must be between 273.06 K and 647.096 K."), "{msg}");
    assert!(msg.contains("below the lower bound 273.06 K"), "{msg}");
    assert!(msg.contains("200"), "{msg}");

    let err = saturation_by_pressure(30.0, "MPa").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Pressure must be between 611.657 Pa and 22.064 MPa."), "{msg}");
    assert!(msg.contains("above the upper bound"), "{msg}");
}

#[test]
fn saturation_by_pressure_at_one_atmosphere() {
    let state = saturation_by_pressure(1.0, "atm")
        .expect("in range")
        .expect("atm is in the Pa table");
    assert!((state.pressure_pa - 101_325.0).abs() < 1e-9);
    assert_eq!(state.latent_heat, "2206.34");
    assert_eq!(state.enthalpy_vapor, "2510.13");
    assert_eq!(state.enthalpy_water, "425.07");
    assert_eq!(state.volume_vapor, "0.001101");
    assert_eq!(state.volume_water, "0.000099");
}

#[test]
fn saturation_by_pressure_rejects_tiny_pressure() {
    let err = saturation_by_pressure(0.001, "atm").unwrap_err();
    assert_eq!(err.bound, Bound::Lower);
    assert_eq!(err.quantity(), QuantityKind::Pressure);
}

#[test]
fn saturation_by_pressure_without_pa_factor_has_no_result() {
    assert_eq!(saturation_by_pressure(14.7, "psi"), Ok(None));
    assert_eq!(saturation_by_pressure(1.0, "bogus"), Ok(None));
}

#[test]
fn superheated_state_at_100_c_and_atmospheric_pressure() {
    let state = superheated_state(100.0, "C", 101.325, "kPa").expect("in range");
    assert_eq!(state.specific_volume, "0.0987");
    assert_eq!(state.enthalpy, "3500.00");
    assert_eq!(state.specific_heat, "4.18");
    assert_eq!(state.viscosity, "0.0030");

    let result = state.to_result("C");
    assert_eq!(result.get("temp_result"), Some("100.00"));
    assert_eq!(result.get("temp_unit_result"), Some("C"));
    assert_eq!(result.get("enthalpy"), Some("3500.00 kJ/kg"));
    assert_eq!(result.get("specific_heat"), Some("4.18 kJ/kg·K"));
    assert_eq!(result.get("viscosity"), Some("0.0030 mPa·s"));

    let in_f = state.to_result("F");
    assert_eq!(in_f.get("temp_result"), Some("212.00"));
}

#[test]
fn superheated_unconvertible_units_surface_as_range_errors() {
    // atm은 kPa 표에 없으므로 압력 검사에서 실패한다
    let err = superheated_state(100.0, "C", 1.0, "atm").unwrap_err();
    assert_eq!(err.quantity(), QuantityKind::Pressure);
    assert_eq!(err.value, None);
    assert!(err.to_string().starts_with("Pressure must be positive."));

    let err = superheated_state(100.0, "X", 100.0, "kPa").unwrap_err();
    assert_eq!(err.quantity(), QuantityKind::Temperature);
    assert_eq!(err.value, None);

    // 온도를 먼저 검사한다
    let err = superheated_state(100.0, "X", 1.0, "atm").unwrap_err();
    assert_eq!(err.quantity(), QuantityKind::Temperature);
}

#[test]
fn superheated_pressure_must_be_positive() {
    let err = superheated_at(373.15, 0.0).unwrap_err();
    assert_eq!(err.bound, Bound::Lower);
    assert!(superheated_at(373.15, -5.0).is_err());
    assert!(superheated_at(373.15, 0.001).is_ok());
}

#[test]
fn unknown_temperature_unit_is_a_range_error_on_the_temperature_form() {
    let err = saturation_by_temperature(300.0, "R").unwrap_err();
    assert_eq!(err.value, None);
    assert_eq!(err.bound, Bound::Lower);
}

#[test]
fn fixed_formatting_follows_display_conventions() {
    assert_eq!(to_fixed(-0.0, 2), "0.00");
    assert_eq!(to_fixed(f64::NAN, 4), "NaN");
    assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
    assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    assert_eq!(to_fixed(4.18, 2), "4.18");
    assert_eq!(to_fixed(1.5, 0), "2");
    assert_eq!(to_fixed(-0.001, 2), "-0.00");
}

#[test]
fn exact_halves_round_away_from_zero() {
    assert_eq!(to_fixed(0.125, 2), "0.13");
    assert_eq!(to_fixed(300.125, 2), "300.13");
    assert_eq!(to_fixed(-0.125, 2), "-0.13");
    assert_eq!(to_fixed(2.5, 0), "3");
    assert_eq!(to_fixed(9.995, 2), "9.99");
    assert_eq!(to_fixed(99.5, 0), "100");
    assert_eq!(to_fixed(0.0625, 3), "0.063");

    let state = saturation_at_kelvin(300.125).expect("in range");
    assert_eq!(state.to_result().get("temp"), Some("300.13"));
    let state = superheated_state(300.125, "K", 100.0, "kPa").expect("in range");
    assert_eq!(state.to_result("K").get("temp_result"), Some("300.13"));
}

#[test]
fn huge_values_switch_to_exponent_notation() {
    assert_eq!(to_fixed(1.0 / (1e-22 * 0.1), 4), "1e+23");
    assert_eq!(to_fixed(-1.5e21, 2), "-1.5e+21");
    assert_eq!(to_fixed(1e20, 0), "100000000000000000000");

    let state = superheated_at(373.15, 1e-22).expect("positive pressure");
    assert_eq!(state.specific_volume, "1e+23");
}
