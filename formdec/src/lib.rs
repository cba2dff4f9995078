//! Decode multi-valued form data into typed records.
//!
//! The input is a flat `key -> [values]` mapping, as an HTML form submission
//! looks once the HTTP layer has parsed it ([`FormData`]). A record type
//! registers its fields by implementing [`FormRecord`]; each [`Field`] entry
//! names the external key (through a compact tag string), provides access to
//! the field's storage, and may attach a validator and/or setter hook.
//!
//! ## Core pieces
//!
//! - [`Tag`] — the `"NAME,omitempty,prefix=PRE,suffix=SUF"` tag mini-language
//! - [`FormRecord`] / [`Field`] / [`Slot`] — per-record field registration
//! - [`Decoder`] / [`unmarshal`] — the decode engine
//! - [`DecodeError`] — fatal errors, with [`CompoundValidationError`] as the
//!   collected, non-fatal validation class
//! - [`unmarshal_map`] — the string-map destination variant
//!
//! ## Validators and setters
//!
//! A validator inspects the submitted values without touching the record; a
//! failure is collected and reported together with every other validation
//! failure once the whole input has been walked, and the field is left
//! unassigned. A setter fully owns assignment for its field, and a setter
//! failure aborts the decode immediately.
//!
//! ## Example
//!
//! ```
//! use formdec::{unmarshal, Field, FormData, FormRecord, Slot};
//!
//! #[derive(Default)]
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//!     age: i64,
//! }
//!
//! impl FormRecord for Person {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             Field::new("FirstName", "first_name", |p| Slot::Text(&mut p.first_name)),
//!             Field::new("LastName", "last_name", |p| Slot::Text(&mut p.last_name)),
//!             Field::new("Age", "age", |p| Slot::Int(&mut p.age)),
//!         ]
//!     }
//! }
//!
//! let mut data = FormData::new();
//! data.insert("first_name".into(), vec!["Batty".into()]);
//! data.insert("last_name".into(), vec!["Penderwick".into()]);
//! data.insert("age".into(), vec!["11".into()]);
//!
//! let mut person = Person::default();
//! unmarshal(&data, &mut person)?;
//! assert_eq!(person.first_name, "Batty");
//! assert_eq!(person.age, 11);
//! # Ok::<(), formdec::DecodeError>(())
//! ```

mod coerce;
mod decode;
mod error;
mod field;
mod tag;

pub use decode::{Decoder, MapValue, UnknownKeys, unmarshal, unmarshal_map};
pub use error::{CompoundValidationError, DecodeError, SetterError, ValidationError};
pub use field::{Accessor, Field, FormRecord, Setter, Slot, Validator, tags};
pub use tag::Tag;

/// Submitted form data: each key carries every value submitted under it.
///
/// Key iteration order is unspecified; the decode engine never depends on
/// it. A key present with zero values or one empty value counts as "empty"
/// for the numeric coercion fallback.
pub type FormData = std::collections::HashMap<String, Vec<String>>;
