//! Per-record field registration: the compile-time table that replaces
//! runtime field discovery.
//!
//! A record type implements [`FormRecord`] by listing one [`Field`] per
//! declared field, in declaration order. Each entry carries the field's
//! declared identifier, its raw tag string, an accessor to the field's
//! storage, and the optional validator/setter hooks for that field.

use core::fmt;

use crate::error::{SetterError, ValidationError};
use crate::tag::Tag;

/// A mutable view into one field's storage.
///
/// This enumerates exactly the storage kinds the coercion fallback
/// supports; anything else must go through a setter hook.
#[derive(Debug)]
pub enum Slot<'a> {
    /// Takes the first submitted value verbatim.
    Text(&'a mut String),
    /// Signed integer, parsed base-agnostically (`0x`, `0o`, `0b` prefixes).
    Int(&'a mut i64),
    /// Unsigned integer, parsed base-agnostically.
    Uint(&'a mut u64),
    /// 64-bit float.
    Float(&'a mut f64),
    /// Canonical boolean text (`true`/`false`, `t`/`f`, `1`/`0`, ...).
    Bool(&'a mut bool),
    /// Takes every submitted value, in order.
    TextList(&'a mut Vec<String>),
}

/// Produces the [`Slot`] for one field of `R`.
pub type Accessor<R> = for<'a> fn(&'a mut R) -> Slot<'a>;

/// Per-field validation hook. Read-only: a failure means the field is not
/// assigned, but decoding continues and every failure is reported together.
pub type Validator<R> = fn(&R, &[String]) -> Option<ValidationError>;

/// Per-field assignment hook. When present it fully owns assignment; the
/// engine performs no coercion for the field. A failure aborts the decode.
pub type Setter<R> = fn(&mut R, &[String]) -> Result<(), SetterError>;

/// One entry in a record's field table.
pub struct Field<R> {
    /// The field's declared identifier. Used as the external key when the
    /// tag supplies no name, and in error reports.
    pub name: &'static str,
    /// Raw tag string, parsed fresh on every decode (see [`Tag::parse`]).
    pub tag: &'static str,
    /// Accessor for the field's storage.
    pub slot: Accessor<R>,
    /// Optional validation hook.
    pub validator: Option<Validator<R>>,
    /// Optional assignment hook.
    pub setter: Option<Setter<R>>,
}

impl<R> Field<R> {
    /// Create a field entry with no hooks.
    pub fn new(name: &'static str, tag: &'static str, slot: Accessor<R>) -> Self {
        Self {
            name,
            tag,
            slot,
            validator: None,
            setter: None,
        }
    }

    /// Attach a validation hook.
    pub fn validator(mut self, validator: Validator<R>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Attach an assignment hook.
    pub fn setter(mut self, setter: Setter<R>) -> Self {
        self.setter = Some(setter);
        self
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("validator", &self.validator.is_some())
            .field("setter", &self.setter.is_some())
            .finish()
    }
}

/// A record type that can be populated from form data.
pub trait FormRecord: Sized {
    /// The field table, one entry per declared field, in declaration order.
    fn fields() -> Vec<Field<Self>>;
}

/// Parse every field's tag and default empty names to the declared
/// identifier. Ignored fields keep an empty name; they never match a key.
pub(crate) fn resolve<R: FormRecord>() -> Vec<(Tag, Field<R>)> {
    R::fields()
        .into_iter()
        .map(|field| {
            let mut tag = Tag::parse(field.tag);
            if !tag.ignore && tag.name.is_empty() {
                tag.name = field.name.to_string();
            }
            (tag, field)
        })
        .collect()
}

/// Linear scan in declaration order; first match wins, so a later field
/// resolving to the same key is unreachable.
pub(crate) fn find_by_key<R>(resolved: &[(Tag, Field<R>)], key: &str) -> Option<Field<R>> {
    resolved
        .iter()
        .find(|(tag, _)| !tag.ignore && tag.name == key)
        .map(|(_, field)| *field)
}

/// Resolved tag metadata for `R`, one entry per declared field in
/// declaration order, with name defaulting applied.
pub fn tags<R: FormRecord>() -> Vec<Tag> {
    resolve::<R>().into_iter().map(|(tag, _)| tag).collect()
}
