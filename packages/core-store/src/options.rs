//! Write policies and store configuration.

use serde::{Deserialize, Serialize};

/// Collision handling for the terminal segment of a `set`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Write unconditionally.
    #[default]
    Override,
    /// Leave the store untouched and report success.
    ProtectSilent,
    /// Fail with `Error::PropertyOverride`.
    ProtectException,
}

/// When the protecting policies fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectTrigger {
    /// Only when the terminal key already exists in its parent branch.
    #[default]
    WhenPresent,
    /// On every call, whether or not the key exists.
    Always,
}

/// What a `set` does when an intermediate segment holds a leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescentConflict {
    /// Replace the leaf with an empty branch and keep descending. The leaf value is lost.
    #[default]
    Replace,
    /// Fail with `Error::PathConflict` before anything is mutated.
    Fail,
}

/// Behaviour switches for a [`PathStore`](crate::PathStore).
///
/// Deserializable so an application can keep it inside its own config file:
///
/// ```rust
/// use dotstore_core::{DescentConflict, ProtectTrigger, StoreOptions};
///
/// let options: StoreOptions = serde_json::from_str(r#"{"descent_conflict": "fail"}"#).unwrap();
/// assert_eq!(options.descent_conflict, DescentConflict::Fail);
/// assert_eq!(options.protect_trigger, ProtectTrigger::WhenPresent);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub protect_trigger: ProtectTrigger,
    pub descent_conflict: DescentConflict,
}

impl StoreOptions {
    #[must_use]
    pub fn with_protect_trigger(mut self, trigger: ProtectTrigger) -> Self {
        self.protect_trigger = trigger;
        self
    }

    #[must_use]
    pub fn with_descent_conflict(mut self, conflict: DescentConflict) -> Self {
        self.descent_conflict = conflict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = StoreOptions::default();
        assert_eq!(options.protect_trigger, ProtectTrigger::WhenPresent);
        assert_eq!(options.descent_conflict, DescentConflict::Replace);
        assert_eq!(Policy::default(), Policy::Override);
    }

    #[test]
    fn builder_setters() {
        let options = StoreOptions::default()
            .with_protect_trigger(ProtectTrigger::Always)
            .with_descent_conflict(DescentConflict::Fail);
        assert_eq!(options.protect_trigger, ProtectTrigger::Always);
        assert_eq!(options.descent_conflict, DescentConflict::Fail);
    }

    #[test]
    fn deserialize_snake_case() {
        let options: StoreOptions =
            serde_json::from_str(r#"{"protect_trigger": "always", "descent_conflict": "replace"}"#)
                .unwrap();
        assert_eq!(options.protect_trigger, ProtectTrigger::Always);

        let policy: Policy = serde_json::from_str(r#""protect_exception""#).unwrap();
        assert_eq!(policy, Policy::ProtectException);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let options: StoreOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, StoreOptions::default());
    }
}
