// src/shared/api/patch_field.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null
// - Value(v): field provided with a value
//
// Serde behavior (with #[serde(default)] on the field):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl PatchField<String> {
    /// Update policy for required text columns: only a non-blank value
    /// replaces the stored one. `Unset`, `Null` and `Value("")` are all
    /// no-ops.
    pub fn into_required_text(self) -> Option<String> {
        match self {
            PatchField::Value(v) => {
                let v = v.trim().to_string();
                if v.is_empty() {
                    None
                } else {
                    Some(v)
                }
            }
            _ => None,
        }
    }

    /// Update policy for optional text columns (URLs, end date): any
    /// provided value is written, and both `""` and `null` clear the column
    /// to empty string. Only `Unset` keeps the stored value.
    pub fn into_optional_text(self) -> Option<String> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(String::new()),
            PatchField::Value(v) => Some(v.trim().to_string()),
        }
    }
}

impl PatchField<Vec<String>> {
    /// Update policy for list columns: a provided array replaces the whole
    /// list, element-wise trimmed. No merge.
    pub fn into_trimmed_list(self) -> Option<Vec<String>> {
        match self {
            PatchField::Value(items) => {
                Some(items.iter().map(|s| s.trim().to_string()).collect())
            }
            _ => None,
        }
    }
}
