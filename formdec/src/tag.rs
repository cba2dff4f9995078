//! The form tag mini-language: `"NAME,omitempty,prefix=PRE,suffix=SUF"`.

use serde::Serialize;

/// Parsed per-field tag metadata.
///
/// The leading segment is the external key name, `-` (exclude the field
/// from key matching entirely), `+` (reserved group marker), or empty
/// (defer to the field's declared identifier). The remaining segments are
/// matched independently; when a segment repeats, the last one wins.
///
/// `group`, `prefix`, `suffix`, and `omit` are parsed and surfaced through
/// [`tags`](crate::tags) but have no effect on decoding. They are reserved
/// for nested-group decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// External key this field matches. Empty until resolution defaults it
    /// to the field's declared identifier (never defaulted for `ignore`).
    pub name: String,
    /// `prefix=` segment. Inert.
    pub prefix: String,
    /// `suffix=` segment. Inert.
    pub suffix: String,
    /// `omitempty` segment. Inert.
    pub omit: bool,
    /// `-` marker: the field can never be matched by an input key.
    pub ignore: bool,
    /// `+` marker: reserved for nested-group decoding. Inert.
    pub group: bool,
}

impl Tag {
    /// Parse a raw tag string.
    ///
    /// Never fails: unrecognized segments are skipped. An empty string
    /// yields the default descriptor.
    pub fn parse(raw: &str) -> Tag {
        let mut tag = Tag::default();
        let mut segments = raw.split(',');
        match segments.next() {
            Some("-") => tag.ignore = true,
            Some("+") => tag.group = true,
            Some("") | None => {}
            Some(name) => tag.name = name.to_string(),
        }
        for segment in segments {
            if segment == "omitempty" {
                tag.omit = true;
            } else if let Some(prefix) = segment.strip_prefix("prefix=") {
                tag.prefix = prefix.to_string();
            } else if let Some(suffix) = segment.strip_prefix("suffix=") {
                tag.suffix = suffix.to_string();
            } else {
                tracing::debug!("skipping unrecognized tag segment {segment:?}");
            }
        }
        tag
    }
}
