//! Requirement propagation.
//!
//! A message *requires redaction* when it declares a redacted field, or when
//! one of its message, repeated-message, map-value or oneof fields points at a
//! message that requires redaction. The set is the least fixpoint of that rule
//! over every message of the compilation unit, so recursive and mutually
//! recursive types terminate and files that are only imported still count.

use std::collections::BTreeSet;

use crate::schema::{CompilationUnit, MessageId};

/// Messages of a compilation unit that need a generated `Redact` impl.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequirementSet {
    required: BTreeSet<MessageId>,
}

impl RequirementSet {
    /// Computes the set by iterating until no message changes state.
    pub fn compute(unit: &CompilationUnit) -> Self {
        let mut required: BTreeSet<MessageId> = unit
            .messages()
            .filter(|message| message.fields.iter().any(|field| field.redact()))
            .map(|message| message.id.clone())
            .collect();

        let mut pass = 0_usize;
        loop {
            pass += 1;
            let mut changed = false;
            for message in unit.messages() {
                if required.contains(&message.id) {
                    continue;
                }
                let reaches = message
                    .fields
                    .iter()
                    .filter_map(|field| field.target())
                    .any(|target| required.contains(target));
                if reaches {
                    tracing::trace!(message = %message.id, pass, "requires redaction through a field");
                    required.insert(message.id.clone());
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        tracing::debug!(passes = pass, required = required.len(), "propagated redaction requirements");
        Self { required }
    }

    pub fn requires(&self, id: &MessageId) -> bool {
        self.required.contains(id)
    }

    /// Required messages in name order.
    pub fn iter(&self) -> impl Iterator<Item = &MessageId> {
        self.required.iter()
    }

    pub fn len(&self) -> usize {
        self.required.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }
}
