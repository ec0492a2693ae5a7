use approx::assert_relative_eq;
use numerical_target::NumericalTarget;
use numerical_target_test_util::{TARGET_CASES, target_case};

#[test]
fn fixtures_are_loaded() {
    assert!(TARGET_CASES.len() >= 10);
}

#[test]
fn fixtures_evaluate_to_expected_values() {
    for case in TARGET_CASES.iter() {
        for &(x, expected) in &case.samples {
            let actual = case.target.evaluate(x);
            match expected {
                Some(expected) => assert_relative_eq!(
                    actual.unwrap_or_else(|error| panic!("{}: f({x}) failed: {error}", case.name)),
                    expected,
                    epsilon = 1e-12,
                    max_relative = 1e-12
                ),
                None => assert!(actual.is_err(), "{}: f({x}) = {actual:?}", case.name),
            }
        }
    }
}

#[test]
fn fixtures_survive_round_trip() {
    for case in TARGET_CASES.iter() {
        let json = serde_json::to_string(&case.target).unwrap();
        let restored: NumericalTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(case.target, restored, "{}", case.name);
        assert_eq!(case.target.domain(), restored.domain(), "{}", case.name);
    }
}

#[test]
fn legacy_fixtures_match_modern_constructors() {
    let max = target_case("legacy_max_bounded.json").target;
    let ramp = NumericalTarget::normalized_ramp(
        "Yield",
        numerical_target::Interval::new(0.0, 100.0).unwrap(),
        false,
    )
    .unwrap();
    assert_eq!(max, ramp);

    let min = target_case("legacy_min_unbounded.json").target;
    assert_eq!(min, NumericalTarget::minimize("Cost").unwrap());

    let bell = target_case("legacy_match_bell.json").target;
    assert_eq!(bell, NumericalTarget::match_bell("pH", 7.0, 1.0).unwrap());

    let absolute = target_case("modern_match_absolute.json").target;
    assert_eq!(absolute, NumericalTarget::match_absolute("pH", 7.0).unwrap());
}

#[test]
fn bounded_fixture_normalizes() {
    let target = target_case("modern_power_clamp.json").target.normalize().unwrap();
    assert!(target.is_normalized());
    assert_eq!(target.evaluate(5.0).unwrap(), 0.25);
    assert_eq!(target.evaluate(0.0).unwrap(), 0.0);
}

#[test]
fn two_sided_fixture_image() {
    let target = target_case("modern_two_sided_affine.json").target;
    let image = target.image().unwrap();
    assert_eq!(image.lower(), -8.0);
    assert_eq!(image.upper(), 0.0);
    let normalized = target.normalize().unwrap();
    assert_eq!(normalized.evaluate(3.0).unwrap(), 1.0);
    assert_eq!(normalized.evaluate(-1.0).unwrap(), 0.0);
}
