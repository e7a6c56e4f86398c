//! Integration-level tests for the `dimal` facade crate.

use dimal::catalog::{Area, Energy, Force, Length, Mass, Scalar, Temperature, Time, Velocity, Volume};
use dimal::typenum::{N1, P1, P2, P3, P4, P6, Z0};
use dimal::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn ten_feet_is_about_three_meters() {
    let feet = LinearUnit::<Length>::from_factor(1.0 / 3.28084);
    let d = feet.apply(10.0);
    assert_abs_diff_eq!(d.get(METERS), 3.048, epsilon = 1e-5);
    assert_relative_eq!(FEET.apply(10.0).get(METERS), 3.048, max_relative = 1e-12);
}

#[test]
fn velocity_from_composed_unit() {
    let mps = METERS / SECONDS;
    let v = mps.apply(5.0);
    let typed: Quantity<Quotient<Length, Time>> = v;
    assert_eq!(typed.standard(), 5.0);
    assert_eq!(
        Signature::of::<Quotient<Length, Time>>(),
        Signature::of::<Length>()
            .quotient(&Signature::of::<Time>())
            .unwrap()
    );
}

#[test]
fn temperature_scenario() {
    let a = KELVIN.absolute(273.15);
    let b = a + KELVIN.apply(10.0);
    assert_relative_eq!(b.standard(), 283.15, max_relative = 1e-12);
    let diff: Quantity<Temperature> = b - a;
    assert_relative_eq!(diff.standard(), 10.0, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Mismatched base orderings
// ─────────────────────────────────────────────────────────────────────────────

pub enum First {}
impl BaseDimension for First {
    const NAME: &'static str = "first";
    const SYMBOL: &'static str = "F";
}

pub enum Second {}
impl BaseDimension for Second {
    const NAME: &'static str = "second";
    const SYMBOL: &'static str = "S";
}

type FirstThenSecond<A, B> = Factor<First, A, Factor<Second, B, Unity>>;
type SecondThenFirst<B, A> = Factor<Second, B, Factor<First, A, Unity>>;

#[test]
fn mismatched_orderings_are_rejected_at_runtime() {
    let ab = FirstThenSecond::<P1, Z0>::signature();
    let ba = SecondThenFirst::<P1, Z0>::signature();
    assert!(matches!(ab.product(&ba), Err(Error::DimensionMismatch { .. })));
    assert!(matches!(ab.quotient(&ba), Err(Error::DimensionMismatch { .. })));
    assert!(ab.product(&FirstThenSecond::<Z0, P1>::signature()).is_ok());
}

// ─────────────────────────────────────────────────────────────────────────────
// Algebra laws on the type level
// ─────────────────────────────────────────────────────────────────────────────

fn same<A: 'static, B: 'static>() -> bool {
    core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
}

#[test]
fn product_commutes() {
    assert!(same::<Product<Velocity, Mass>, Product<Mass, Velocity>>());
    assert!(same::<Product<Area, Time>, Product<Time, Area>>());
}

#[test]
fn product_with_inverse_is_scalar() {
    assert!(same::<Product<Energy, Inverse<Energy>>, Scalar>());
    assert!(same::<Quotient<Force, Force>, Scalar>());
}

#[test]
fn exponents_compose() {
    assert!(same::<Power<Power<Volume, P2, P3>, P1, P2>, Power<Volume, P2, P6>>());
    assert!(same::<Power<Power<Area, P2>, P1, P4>, Length>());
    assert!(same::<Power<Velocity, N1>, Inverse<Velocity>>());
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantities
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn derived_quantities() {
    let m = KILOGRAMS.apply(2.0);
    let v = METERS.apply(3.0) / SECONDS.apply(1.0);
    let e: Quantity<Energy> = m * v * v / 2.0;
    assert_relative_eq!(e.get(JOULES), 9.0, max_relative = 1e-12);
}

#[test]
fn scalar_round_trip() {
    let ratio = KILOMETERS.apply(1.0) / METERS.apply(250.0);
    let raw: f64 = ratio.into();
    assert_relative_eq!(raw, 4.0, max_relative = 1e-12);
    assert!(METERS.apply(1.0).try_into_raw().is_err());
}

#[test]
fn division_by_zero_is_opt_in() {
    let d = METERS.apply(1.0);
    assert!((d / SECONDS.apply(0.0)).standard().is_infinite());
    assert!(matches!(
        d.checked_div(SECONDS.apply(0.0)),
        Err(Error::DivisionByZero { .. })
    ));
}

#[test]
fn prefixes_from_the_table() {
    for prefix in Prefix::ALL {
        let unit = METERS.prefixed(prefix);
        assert_relative_eq!(unit.factor(), prefix.factor(), max_relative = 1e-12);
    }
}

#[test]
fn integer_storage() {
    let a = Quantity::<Length, i32>::from_standard(10);
    let b = Quantity::<Length, i32>::from_standard(4);
    assert_eq!((a - b).standard(), 6);
    let p = Absolute::<Length, i32>::from_standard(3) + a;
    assert_eq!(p.standard(), 13);
}

#[test]
fn integer_powers_are_checked() {
    let side = Quantity::<Length, i32>::from_standard(4);
    let area: Quantity<Area, i32> = side.checked_powi::<P2>().unwrap();
    assert_eq!(area.standard(), 16);
    assert!(matches!(side.checked_powi::<N1>(), Err(Error::InvalidExponent { .. })));
    let unit = LinearUnit::<Length, i32>::from_factor(3);
    assert!(unit.checked_powi::<N1>().is_err());
    assert_eq!(unit.checked_powi::<P3>().unwrap().factor(), 27);
}

#[test]
fn display() {
    let v: Quantity<Velocity> = METERS.apply(2.0) / SECONDS.apply(4.0);
    assert_eq!(v.to_string(), "0.5 L·T^-1");
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

fn factor() -> impl Strategy<Value = f64> {
    prop_oneof![1e-6f64..1e6, -1e6f64..-1e-6]
}

proptest! {
    #[test]
    fn unit_round_trip(v in -1e9f64..1e9, f in factor()) {
        let unit = LinearUnit::<Length>::from_factor(f);
        let back = unit.from_standard(unit.to_standard(v));
        prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
    }

    #[test]
    fn extract_then_apply(s in -1e9f64..1e9, f in factor()) {
        let unit = LinearUnit::<Time>::from_factor(f);
        let q = Quantity::<Time>::from_standard(s);
        let again = unit.apply(unit.extract(q));
        prop_assert!((again.standard() - s).abs() <= 1e-9 * s.abs().max(1.0));
    }

    #[test]
    fn composed_unit_factor(v in -1e6f64..1e6, f1 in factor(), f2 in factor()) {
        let u1 = LinearUnit::<Length>::from_factor(f1);
        let u2 = LinearUnit::<Time>::from_factor(f2);
        let composed = (u1 * u2).to_standard(v);
        let chained = u1.to_standard(1.0) * u2.to_standard(1.0) * v;
        prop_assert!((composed - chained).abs() <= 1e-9 * chained.abs().max(1.0));
    }

    #[test]
    fn absolute_shift_round_trip(a in -1e6f64..1e6, q in -1e6f64..1e6) {
        let p = KELVIN.absolute(a);
        let d = KELVIN.apply(q);
        prop_assert!(((p + d - d).standard() - a).abs() <= 1e-6);
    }

    #[test]
    fn absolute_difference(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let pa = Absolute::<Temperature>::from_standard(a);
        let pb = Absolute::<Temperature>::from_standard(b);
        prop_assert_eq!((pa - pb).standard(), a - b);
        prop_assert!(((pa - (pa - pb)).standard() - b).abs() <= 1e-6);
    }

    #[test]
    fn signature_power_composition(l in -3i32..=3, t in -3i32..=3) {
        let base = Signature::from_axes(vec![Axis::new("x", "X", 6 * l), Axis::new("y", "Y", 6 * t)]);
        let stepwise = base.power(2, 3).and_then(|s| s.power(1, 2));
        let direct = base.power(2, 6);
        prop_assert_eq!(stepwise.unwrap(), direct.unwrap());
    }

    #[test]
    fn signature_rejects_fractional_results(e in 1i32..100) {
        let odd = 2 * e + 1;
        let base = Signature::from_axes(vec![Axis::new("x", "X", odd)]);
        let rejected = matches!(base.power(1, 2), Err(Error::InvalidExponent { .. }));
        prop_assert!(rejected);
    }
}
