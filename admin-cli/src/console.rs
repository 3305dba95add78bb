//! Editor state for the admin console: the passphrase gate, the per-entity
//! form schemas, the in-memory lists, and the merge rules applied after the
//! server confirms a mutation. All pure logic; the I/O loop lives in main.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use crate::api::EntityKind;

/// Fixed console passphrase; override with ADMIN_PASSWORD.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub fn passphrase_matches(input: &str, expected: &str) -> bool {
    input.trim() == expected
}

//
// ──────────────────────────────────────────────────────────
// Entity form schemas
// ──────────────────────────────────────────────────────────
// One generic add/edit path is driven by these descriptors instead of three
// parallel per-entity branches.
//

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub is_list: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    pub kind: EntityKind,
    /// Field shown when rendering a one-line summary of a record.
    pub headline: &'static str,
    pub fields: &'static [FieldSpec],
}

const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "category", label: "Category", required: true, is_list: false },
    FieldSpec { key: "title", label: "Title", required: true, is_list: false },
    FieldSpec { key: "description", label: "Description", required: true, is_list: false },
    FieldSpec { key: "technologies", label: "Technologies (comma separated)", required: true, is_list: true },
    FieldSpec { key: "githubUrl", label: "GitHub URL", required: false, is_list: false },
    FieldSpec { key: "projectUrl", label: "Project URL", required: false, is_list: false },
];

const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "title", label: "Title", required: true, is_list: false },
    FieldSpec { key: "company", label: "Company", required: true, is_list: false },
    FieldSpec { key: "location", label: "Location", required: true, is_list: false },
    FieldSpec { key: "startDate", label: "Start date", required: true, is_list: false },
    FieldSpec { key: "endDate", label: "End date (empty = current)", required: false, is_list: false },
    FieldSpec { key: "description", label: "Description", required: true, is_list: false },
    FieldSpec { key: "technologies", label: "Technologies (comma separated)", required: false, is_list: true },
    FieldSpec { key: "achievements", label: "Achievements (comma separated)", required: false, is_list: true },
];

const CERTIFICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "name", label: "Name", required: true, is_list: false },
    FieldSpec { key: "organization", label: "Organization", required: true, is_list: false },
    FieldSpec { key: "verificationUrl", label: "Verification URL", required: false, is_list: false },
    FieldSpec { key: "description", label: "Description", required: true, is_list: false },
    FieldSpec { key: "skills", label: "Skills (comma separated)", required: false, is_list: true },
];

pub static DESCRIPTORS: [EntityDescriptor; 3] = [
    EntityDescriptor {
        kind: EntityKind::Projects,
        headline: "title",
        fields: PROJECT_FIELDS,
    },
    EntityDescriptor {
        kind: EntityKind::Experiences,
        headline: "title",
        fields: EXPERIENCE_FIELDS,
    },
    EntityDescriptor {
        kind: EntityKind::Certifications,
        headline: "name",
        fields: CERTIFICATION_FIELDS,
    },
];

pub fn descriptor(kind: EntityKind) -> &'static EntityDescriptor {
    DESCRIPTORS
        .iter()
        .find(|d| d.kind == kind)
        .expect("descriptor for every entity kind")
}

/// Builds the save payload from form answers. An empty answer keeps the
/// existing value when editing and omits the field when adding; list answers
/// are split on commas.
pub fn build_payload(
    descriptor: &EntityDescriptor,
    answers: &[String],
    existing: Option<&Value>,
) -> Value {
    let mut payload = Map::new();

    for (spec, answer) in descriptor.fields.iter().zip(answers) {
        let answer = answer.trim();

        if answer.is_empty() {
            if let Some(current) = existing.and_then(|e| e.get(spec.key)) {
                payload.insert(spec.key.to_string(), current.clone());
            }
            continue;
        }

        let value = if spec.is_list {
            json!(answer
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>())
        } else {
            json!(answer)
        };

        payload.insert(spec.key.to_string(), value);
    }

    Value::Object(payload)
}

//
// ──────────────────────────────────────────────────────────
// Session state
// ──────────────────────────────────────────────────────────
//

pub fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// Authenticated-side state: the active tab plus one locally held list per
/// entity. Lists only change after the server confirms a mutation.
pub struct AdminSession {
    pub active: EntityKind,
    lists: HashMap<EntityKind, Vec<Value>>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self {
            active: EntityKind::Projects,
            lists: EntityKind::ALL.into_iter().map(|k| (k, Vec::new())).collect(),
        }
    }

    pub fn set_list(&mut self, kind: EntityKind, items: Vec<Value>) {
        self.lists.insert(kind, items);
    }

    pub fn items(&self, kind: EntityKind) -> &[Value] {
        self.lists.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Create merge: append the server's document.
    pub fn append(&mut self, kind: EntityKind, record: Value) {
        self.lists.entry(kind).or_default().push(record);
    }

    /// Update merge: replace the record with the same id. Returns false when
    /// the record is not in local state (stale list).
    pub fn replace(&mut self, kind: EntityKind, record: Value) -> bool {
        let Some(id) = record_id(&record).map(str::to_string) else {
            return false;
        };

        let items = self.lists.entry(kind).or_default();
        for item in items.iter_mut() {
            if record_id(item) == Some(id.as_str()) {
                *item = record;
                return true;
            }
        }
        false
    }

    /// Delete merge: drop the record with the given id.
    pub fn remove(&mut self, kind: EntityKind, id: &str) -> bool {
        let items = self.lists.entry(kind).or_default();
        let before = items.len();
        items.retain(|item| record_id(item) != Some(id));
        items.len() != before
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new()
    }
}
