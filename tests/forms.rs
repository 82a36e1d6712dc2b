use steam_property_estimator::form::{
    FormController, FormError, FormFields, FormKind, OutputPanel, PressureForm, Presenter,
    SubmitOutcome, SuperheatedForm, TemperatureForm,
};
use steam_property_estimator::steam::PropertyResult;

/// 호출 순서를 기록하는 표시 계층.
#[derive(Default)]
struct RecordingPresenter {
    rendered: Vec<PropertyResult>,
    errors: Vec<String>,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, result: &PropertyResult) {
        self.rendered.push(result.clone());
    }

    fn render_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

fn temperature_fields(value: &str, unit: &str) -> FormFields {
    FormFields::new()
        .with("temperature", value)
        .with("temp_unit", unit)
}

fn pressure_fields(value: &str, unit: &str) -> FormFields {
    FormFields::new()
        .with("pressure", value)
        .with("pressure_unit", unit)
}

fn superheated_fields(t: &str, t_unit: &str, p: &str, p_unit: &str) -> FormFields {
    FormFields::new()
        .with("temperature", t)
        .with("temp_unit", t_unit)
        .with("pressure", p)
        .with("pressure_unit", p_unit)
}

#[test]
fn temperature_form_displays_results() {
    let form = TemperatureForm;
    let mut panel = OutputPanel::for_form(&form);
    let outcome = form.submit(&temperature_fields(" 300 ", "K"), &mut panel);
    assert_eq!(outcome, SubmitOutcome::Displayed);
    assert_eq!(panel.text("temp"), Some("300.00"));
    assert_eq!(panel.text("pressure"), Some("0.2958"));
    assert_eq!(panel.text("volume_water"), Some("0.000036"));
    assert!(!panel.is_error_visible());
    assert_eq!(panel.error(), None);
}

#[test]
fn invalid_input_messages_per_form() {
    let cases: [(&dyn FormController, FormFields, &str); 5] = [
        (
            &TemperatureForm,
            temperature_fields("", "K"),
            "Please enter a valid temperature and select a unit.",
        ),
        (
            &TemperatureForm,
            temperature_fields("300", ""),
            "Please enter a valid temperature and select a unit.",
        ),
        (
            &PressureForm,
            pressure_fields("abc", "Pa"),
            "Please enter a valid pressure and select a unit.",
        ),
        (
            &SuperheatedForm,
            superheated_fields("100", "C", "", "kPa"),
            "Please enter valid temperature, pressure, and units.",
        ),
        (
            &SuperheatedForm,
            superheated_fields("inf", "C", "100", "kPa"),
            "Please enter valid temperature, pressure, and units.",
        ),
    ];
    for (form, fields, message) in cases {
        let mut panel = OutputPanel::for_form(form);
        let outcome = form.submit(&fields, &mut panel);
        assert_eq!(outcome, SubmitOutcome::Rejected(FormError::InvalidInput(message)));
        assert_eq!(panel.error(), Some(message));
    }
}

#[test]
fn range_error_keeps_previous_outputs() {
    let form = TemperatureForm;
    let mut panel = OutputPanel::for_form(&form);
    form.submit(&temperature_fields("300", "K"), &mut panel);

    let outcome = form.submit(&temperature_fields("200", "K"), &mut panel);
    assert!(matches!(outcome, SubmitOutcome::Rejected(FormError::DomainRange(_))));
    let message = panel.error().expect("error visible");
    assert!(message.starts_with("Temperature must be between 273.06 K and 647.096 K."));
    assert_eq!(panel.text("pressure"), Some("0.2958"));

    // 다음 정상 제출은 오류를 숨긴다
    form.submit(&temperature_fields("26.85", "C"), &mut panel);
    assert!(!panel.is_error_visible());
}

#[test]
fn every_form_rejects_temperatures_below_freezing_range() {
    let mut panel = OutputPanel::default();
    let outcome = TemperatureForm.submit(&temperature_fields("200", "K"), &mut panel);
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    let outcome = SuperheatedForm.submit(&superheated_fields("200", "K", "100", "kPa"), &mut panel);
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    let outcome = PressureForm.submit(&pressure_fields("0.001", "atm"), &mut panel);
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
}

#[test]
fn pressure_form_without_pa_factor_leaves_panel_untouched() {
    let form = PressureForm;
    let mut recorder = RecordingPresenter::default();
    let outcome = form.submit(&pressure_fields("14.7", "psi"), &mut recorder);
    assert_eq!(outcome, SubmitOutcome::NoResult);
    assert!(recorder.rendered.is_empty());
    assert!(recorder.errors.is_empty());

    let mut panel = OutputPanel::for_form(&form);
    form.submit(&pressure_fields("1", "atm"), &mut panel);
    let before = panel.clone();
    form.submit(&pressure_fields("14.7", "psi"), &mut panel);
    assert_eq!(panel, before);
    assert_eq!(panel.text("latent_heat"), Some("2206.34"));
}

#[test]
fn superheated_form_displays_suffixed_results() {
    let form = SuperheatedForm;
    let mut panel = OutputPanel::for_form(&form);
    let outcome = form.submit(&superheated_fields("100", "C", "101.325", "kPa"), &mut panel);
    assert_eq!(outcome, SubmitOutcome::Displayed);
    assert_eq!(panel.text("temp_result"), Some("100.00"));
    assert_eq!(panel.text("temp_unit_result"), Some("C"));
    assert_eq!(panel.text("volume"), Some("0.0987"));
    assert_eq!(panel.text("enthalpy"), Some("3500.00 kJ/kg"));
    assert_eq!(panel.text("specific_heat"), Some("4.18 kJ/kg·K"));
    assert_eq!(panel.text("viscosity"), Some("0.0030 mPa·s"));

    form.submit(&superheated_fields("100", "C", "1", "bar"), &mut panel);
    assert_eq!(panel.text("volume"), Some("0.1000"));
}

#[test]
fn clear_resets_inputs_outputs_and_error() {
    for kind in FormKind::ALL {
        let form = kind.controller();
        let mut fields = FormFields::new();
        for field in form.input_fields() {
            fields.set(*field, "garbage");
        }
        let mut panel = OutputPanel::for_form(form);
        form.submit(&fields, &mut panel);
        assert!(panel.is_error_visible(), "{kind:?}");

        form.clear(&mut fields, &mut panel);
        for field in form.input_fields() {
            assert_eq!(fields.get(field), "", "{kind:?} {field}");
        }
        for field in form.output_fields() {
            assert_eq!(panel.text(field), Some(form.placeholder(field)), "{kind:?} {field}");
        }
        assert!(!panel.is_error_visible());
    }
}

#[test]
fn placeholders_differ_per_form() {
    assert_eq!(TemperatureForm.placeholder("pressure"), "-");
    assert_eq!(PressureForm.placeholder("temperature"), "");
    assert_eq!(SuperheatedForm.placeholder("volume"), "-");
    assert_eq!(SuperheatedForm.placeholder("temp_unit_result"), "");

    let mut panel = OutputPanel::for_form(&SuperheatedForm);
    let mut fields = superheated_fields("100", "C", "100", "kPa");
    SuperheatedForm.submit(&fields, &mut panel);
    SuperheatedForm.clear(&mut fields, &mut panel);
    assert_eq!(panel.text("enthalpy"), Some("-"));
    assert_eq!(panel.text("temp_unit_result"), Some(""));
}

#[test]
fn unit_choices_follow_each_conversion_table() {
    let pressure = PressureForm.unit_choices("pressure_unit");
    assert!(pressure.contains(&"atm"));
    assert!(pressure.contains(&"Pa"));
    assert!(!pressure.contains(&"psi"));

    let superheated = SuperheatedForm.unit_choices("pressure_unit");
    assert!(superheated.contains(&"psi"));
    assert!(superheated.contains(&"kg/cm²"));
    assert!(!superheated.contains(&"atm"));
    assert!(!superheated.contains(&"Pa"));

    assert_eq!(TemperatureForm.unit_choices("temp_unit"), vec!["C", "F", "K"]);
    assert!(TemperatureForm.unit_choices("temperature").is_empty());
}

#[test]
fn form_kinds_map_to_their_controllers() {
    for kind in FormKind::ALL {
        assert_eq!(kind.controller().kind(), kind);
    }
    assert_eq!(FormKind::Superheated.controller().input_fields().len(), 4);
    assert_eq!(FormKind::SaturationByPressure.controller().output_fields().len(), 6);
}

#[test]
fn clear_after_successful_calculation_restores_placeholders() {
    let valid: [(FormKind, &[&str]); 3] = [
        (FormKind::SaturationByTemperature, &["300", "K"]),
        (FormKind::SaturationByPressure, &["1", "atm"]),
        (FormKind::Superheated, &["100", "C", "101.325", "kPa"]),
    ];
    for (kind, values) in valid {
        let form = kind.controller();
        let mut fields = FormFields::new();
        for (field, value) in form.input_fields().iter().zip(values) {
            fields.set(*field, *value);
        }
        let mut panel = OutputPanel::for_form(form);
        assert_eq!(form.submit(&fields, &mut panel), SubmitOutcome::Displayed, "{kind:?}");
        for field in form.output_fields() {
            assert_ne!(panel.text(field), Some(form.placeholder(field)), "{kind:?} {field}");
        }

        form.clear(&mut fields, &mut panel);
        for field in form.input_fields() {
            assert_eq!(fields.get(field), "", "{kind:?} {field}");
        }
        for field in form.output_fields() {
            assert_eq!(panel.text(field), Some(form.placeholder(field)), "{kind:?} {field}");
        }
        assert!(!panel.is_error_visible(), "{kind:?}");
        assert_eq!(panel.error(), None);
    }
}

#[test]
fn numeric_prefix_with_trailing_text_is_rejected() {
    let mut panel = OutputPanel::for_form(&TemperatureForm);
    let outcome = TemperatureForm.submit(&temperature_fields("300K", "K"), &mut panel);
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(FormError::InvalidInput(
            "Please enter a valid temperature and select a unit."
        ))
    );
    let outcome = PressureForm.submit(&pressure_fields(" 12abc", "kPa"), &mut panel);
    assert!(matches!(outcome, SubmitOutcome::Rejected(FormError::InvalidInput(_))));
    assert_eq!(panel.text("temp"), Some("-"));
}
