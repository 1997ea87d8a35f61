//! Form field identifiers and the field update table

use super::form_state::FormData;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while addressing form fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// The four editable fields of the support form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Tag,
    Description,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Tag,
        FieldName::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Tag => "tag",
            Self::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Tag => "Tag",
            Self::Description => "Description",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "name@example.com",
            Self::Tag => "",
            Self::Description => "Describe the issue or idea",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Description)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

type FieldUpdater = fn(&mut FormData, String);

/// Update function per field
static FIELD_UPDATERS: [(FieldName, FieldUpdater); 4] = [
    (FieldName::Name, set_name),
    (FieldName::Email, set_email),
    (FieldName::Tag, set_tag),
    (FieldName::Description, set_description),
];

fn set_name(data: &mut FormData, value: String) {
    data.name = value;
}

fn set_email(data: &mut FormData, value: String) {
    data.email = value;
}

fn set_tag(data: &mut FormData, value: String) {
    data.tag = value;
}

fn set_description(data: &mut FormData, value: String) {
    data.description = value;
}

/// Replace one field of the form data
pub(super) fn apply_update(data: &mut FormData, field: FieldName, value: String) {
    if let Some((_, update)) = FIELD_UPDATERS.iter().find(|(name, _)| *name == field) {
        update(data, value);
    }
}

/// Read one field of the form data
pub(super) fn field_value(data: &FormData, field: FieldName) -> &str {
    match field {
        FieldName::Name => &data.name,
        FieldName::Email => &data.email,
        FieldName::Tag => &data.tag,
        FieldName::Description => &data.description,
    }
}
