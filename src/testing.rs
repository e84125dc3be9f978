//! Testing utilities for code that produces outcomes.
//!
//! Provides variant-assertion macros and, behind the `proptest` feature, an
//! [`Arbitrary`](proptest::arbitrary::Arbitrary) implementation for
//! [`Outcome`](crate::Outcome) so property tests can generate both variants.
//!
//! # Examples
//!
//! ```rust
//! use watershed::{assert_err, assert_ok, Outcome};
//!
//! let ok: Outcome<i32, String> = Outcome::ok(42);
//! assert_ok!(ok);
//!
//! let err: Outcome<i32, String> = Outcome::err("boom".to_string());
//! assert_err!(err);
//! ```

/// Assert that an outcome is `Ok`, panicking with the failure payload
/// otherwise. Evaluates to the success payload.
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(v) => v,
            $crate::Outcome::Err(e, _) => {
                panic!("Expected Ok, got Err: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is `Err`, panicking with the success payload
/// otherwise. Evaluates to the failure payload.
#[macro_export]
macro_rules! assert_err {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Err(e, _) => e,
            $crate::Outcome::Ok(v) => {
                panic!("Expected Err, got Ok: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::Outcome;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
    T::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::ok),
            any_with::<E>(e_params).prop_map(Outcome::err),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Outcome;

    #[test]
    fn assert_ok_macro_returns_payload() {
        let outcome: Outcome<i32, String> = Outcome::ok(42);
        let value = assert_ok!(outcome);
        assert_eq!(value, 42);
    }

    #[test]
    fn assert_err_macro_returns_payload() {
        let outcome: Outcome<i32, String> = Outcome::err("boom".to_string());
        let error = assert_err!(outcome);
        assert_eq!(error, "boom");
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Err")]
    fn assert_ok_panics_on_err() {
        let outcome: Outcome<i32, String> = Outcome::err("boom".to_string());
        assert_ok!(outcome);
    }

    #[test]
    #[should_panic(expected = "Expected Err, got Ok")]
    fn assert_err_panics_on_ok() {
        let outcome: Outcome<i32, String> = Outcome::ok(42);
        assert_err!(outcome);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::Outcome;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_generates_valid_variants(
                outcome in any::<Outcome<i32, String>>()
            ) {
                match &outcome {
                    Outcome::Ok(_) => prop_assert!(outcome.is_ok()),
                    Outcome::Err(..) => prop_assert!(outcome.is_err()),
                }
            }
        }
    }
}
