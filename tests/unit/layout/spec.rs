use super::*;

#[test]
fn resolve_size_follows_mode() {
    assert_eq!(resolve_size(80, MeasureSpec::exactly(120)), 120);
    assert_eq!(resolve_size(200, MeasureSpec::exactly(120)), 120);
    assert_eq!(resolve_size(80, MeasureSpec::at_most(120)), 80);
    assert_eq!(resolve_size(200, MeasureSpec::at_most(120)), 120);
    assert_eq!(resolve_size(200, MeasureSpec::unspecified()), 200);
}

#[test]
fn content_space_subtracts_padding_on_bounded_axes() {
    assert_eq!(
        MeasureSpec::exactly(100).content_space(20),
        AvailableSpace::Definite(80)
    );
    assert_eq!(
        MeasureSpec::at_most(10).content_space(20),
        AvailableSpace::Definite(0)
    );
    assert_eq!(
        MeasureSpec::unspecified().content_space(20),
        AvailableSpace::Unbounded
    );
}

#[test]
fn fit_is_inclusive_and_overflow_is_strict() {
    let space = AvailableSpace::Definite(120);
    assert!(space.fits(120));
    assert!(!space.overflows(120));
    assert!(space.overflows(121));
    assert!(AvailableSpace::Unbounded.fits(i32::MAX));
}

#[test]
fn leftover_is_signed_and_zero_when_unbounded() {
    assert_eq!(AvailableSpace::Definite(100).leftover(200), -100);
    assert_eq!(AvailableSpace::Definite(120).leftover(110), 10);
    assert_eq!(AvailableSpace::Unbounded.leftover(500), 0);
}

#[test]
fn child_specs_loosen_parent_bounds() {
    assert_eq!(
        child_measure_spec(MeasureSpec::exactly(100), 10),
        MeasureSpec::at_most(90)
    );
    assert_eq!(
        child_measure_spec(MeasureSpec::at_most(100), 10),
        MeasureSpec::at_most(90)
    );
    let child = child_measure_spec(MeasureSpec::unspecified(), 10);
    assert!(!child.is_fixed());
}

#[test]
fn spec_json_uses_snake_case_modes() {
    let spec: MeasureSpec = serde_json::from_str(r#"{"mode":"at_most","size":64}"#).unwrap();
    assert_eq!(spec, MeasureSpec::at_most(64));
    let spec: MeasureSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(spec, MeasureSpec::unspecified());
}
