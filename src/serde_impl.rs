//! Serde support for outcomes (feature-gated).
//!
//! An [`Outcome`] serializes through its `Result` projection: externally
//! tagged as `Ok` / `Err`, exactly like std's `Result`. The diagnostic trace
//! is advisory and excluded from the wire form — it is not part of the value
//! contract, matching its exclusion from equality. Deserialized failures
//! therefore carry an empty trace.
//!
//! # Example
//!
//! ```rust,ignore
//! use watershed::Outcome;
//!
//! let ok: Outcome<i32, String> = Outcome::ok(42);
//! assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Ok":42}"#);
//!
//! let back: Outcome<i32, String> = serde_json::from_str(r#"{"Err":"boom"}"#).unwrap();
//! assert_eq!(back, Outcome::err("boom".to_string()));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Outcome;

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_result().serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let result = Result::<T, E>::deserialize(deserializer)?;
        Ok(Outcome::from_result(result))
    }
}
