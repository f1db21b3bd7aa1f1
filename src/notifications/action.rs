// SPDX-License-Identifier: MPL-2.0
//! Notification actions and the handler registry.
//!
//! An [`Action`] describes a button on a toast; pressing it dispatches the
//! action's handler name through the [`ActionRegistry`]. The registry is an
//! explicit map populated by callers, so a misspelled handler name is an
//! observable diagnostics warning instead of a silently dead button.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::error::Result;

/// Handler invoked when an action button is pressed.
///
/// Receives the JSON params attached to the [`Action`]. Errors are caught by
/// the manager, logged to diagnostics, and never propagated.
pub type ActionHandler = Box<dyn FnMut(&Value) -> Result<()>>;

/// A button rendered on a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    handler: String,
    label: String,
    icon: Option<String>,
    params: Value,
}

impl Action {
    /// Creates an action dispatching to `handler` with the given label.
    pub fn new(handler: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            label: label.into(),
            icon: None,
            params: Value::Null,
        }
    }

    /// Sets a text glyph shown before the label.
    #[must_use]
    pub fn with_icon(mut self, glyph: impl Into<String>) -> Self {
        self.icon = Some(glyph.into());
        self
    }

    /// Attaches JSON params passed to the handler on dispatch.
    #[must_use]
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn handler(&self) -> &str {
        &self.handler
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn params(&self) -> &Value {
        &self.params
    }
}

/// Outcome of dispatching an action through the registry.
#[derive(Debug)]
pub enum Dispatch {
    /// The handler ran and returned `Ok`.
    Completed,
    /// No handler is registered under the requested name.
    NotRegistered,
    /// The handler ran and returned an error.
    Failed(crate::error::Error),
}

/// Maps handler names to callbacks.
///
/// Callers register handlers once (typically at startup, before showing
/// notifications that reference them); the manager dispatches through the
/// registry when an action button is pressed.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, ActionHandler>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any previous entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut(&Value) -> Result<()> + 'static,
    ) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Removes the handler registered under `name`.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Invokes the handler registered under `name` with `params`.
    pub fn dispatch(&mut self, name: &str, params: &Value) -> Dispatch {
        match self.handlers.get_mut(name) {
            None => Dispatch::NotRegistered,
            Some(handler) => match handler(params) {
                Ok(()) => Dispatch::Completed,
                Err(err) => Dispatch::Failed(err),
            },
        }
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ActionRegistry")
            .field("handlers", &names)
            .finish()
    }
}
