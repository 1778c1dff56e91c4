//! # Keyboard Dispatcher
//!
//! Maps key presses onto keypad actions by checking each registered
//! [`KeyBinding`] in order and resolving the first relevant one.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::binding::{
    BackspaceBinding, ClearEntryBinding, DispatchContext, EqualsBinding, KeyBinding,
    LabelBinding, NegateBinding, RepeatGuardBinding,
};
use crate::calc::{
    events::KeyPress,
    models::{ButtonAction, Keypad},
};

type BindingArc = Arc<dyn KeyBinding>;

/// Default key text to label substitutions
pub fn default_aliases() -> BTreeMap<String, String> {
    [("*", "×"), ("/", "÷"), (",", ".")]
        .into_iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}

/// Ordered set of key bindings plus the alias table they consult
#[derive(Clone)]
pub struct KeyDispatcher {
    bindings: Vec<BindingArc>,
    aliases: BTreeMap<String, String>,
}

impl KeyDispatcher {
    /// Create a dispatcher with the default bindings.
    ///
    /// With `insert_negates` off the Insert key falls through to label matching.
    pub fn new(insert_negates: bool) -> Self {
        let mut dispatcher = Self {
            bindings: Vec::new(),
            aliases: default_aliases(),
        };
        dispatcher.register_default_bindings(insert_negates);
        dispatcher
    }

    fn register_default_bindings(&mut self, insert_negates: bool) {
        // Backspace precedes the repeat guard so it can be held down
        self.add_binding(Arc::new(BackspaceBinding));
        self.add_binding(Arc::new(RepeatGuardBinding));
        self.add_binding(Arc::new(EqualsBinding));
        if insert_negates {
            self.add_binding(Arc::new(NegateBinding));
        }
        self.add_binding(Arc::new(ClearEntryBinding));
        self.add_binding(Arc::new(LabelBinding));
    }

    pub fn add_binding(&mut self, binding: BindingArc) {
        self.bindings.push(binding);
    }

    /// Replace the alias table
    pub fn with_aliases(mut self, aliases: BTreeMap<String, String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    pub fn binding_names(&self) -> Vec<&'static str> {
        self.bindings.iter().map(|binding| binding.name()).collect()
    }

    /// Resolve a key press to the keypad action it triggers
    pub fn dispatch(&self, press: &KeyPress, keypad: &Keypad) -> Option<ButtonAction> {
        let context = DispatchContext {
            keypad,
            aliases: &self.aliases,
        };

        match self
            .bindings
            .iter()
            .find(|binding| binding.is_relevant(press, &context))
        {
            Some(binding) => {
                let action = binding.resolve(press, &context);
                tracing::debug!(
                    "Binding {} resolved key code {} ({:?}) to {:?}",
                    binding.name(),
                    press.code,
                    press.key,
                    action
                );
                action
            }
            None => {
                tracing::trace!("No binding for {:?}", press);
                None
            }
        }
    }
}

impl Default for KeyDispatcher {
    fn default() -> Self {
        Self::new(true)
    }
}

impl std::fmt::Debug for KeyDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDispatcher")
            .field("bindings", &self.binding_names())
            .field("aliases", &self.aliases)
            .finish()
    }
}
