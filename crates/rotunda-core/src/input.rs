//! Held-control tracking and key bindings.
//!
//! Platform code translates raw key codes into [`Control`]s through
//! [`KeyBindings`] and records press/release in [`InputState`]; simulation
//! code only ever reads the held set.

use crate::error::ConfigError;
use fnv::{FnvHashMap, FnvHashSet};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    TurnLeft,
    TurnRight,
    Forward,
    Backward,
    /// Hold-to-open interaction.
    Hold,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::TurnLeft,
        Control::TurnRight,
        Control::Forward,
        Control::Backward,
        Control::Hold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Control::TurnLeft => "turn-left",
            Control::TurnRight => "turn-right",
            Control::Forward => "forward",
            Control::Backward => "backward",
            Control::Hold => "hold",
        }
    }
}

impl FromStr for Control {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('_', "-");
        Control::ALL
            .into_iter()
            .find(|c| c.name() == norm)
            .ok_or_else(|| ConfigError::UnknownControl(s.trim().to_string()))
    }
}

/// Currently held controls.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    held: FnvHashSet<Control>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the control was not already held.
    pub fn press(&mut self, control: Control) -> bool {
        self.held.insert(control)
    }

    /// Returns true if the control was held.
    pub fn release(&mut self, control: Control) -> bool {
        self.held.remove(&control)
    }

    #[inline]
    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Drop every held control, e.g. when the page loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Maps physical key codes (`KeyboardEvent.code` strings) to controls.
///
/// A control has exactly one key; rebinding a control drops its previous key.
#[derive(Clone, Debug)]
pub struct KeyBindings {
    by_code: FnvHashMap<String, Control>,
}

impl Default for KeyBindings {
    /// Arrow keys turn and walk, `KeyE` holds a door open.
    fn default() -> Self {
        let mut b = Self {
            by_code: FnvHashMap::default(),
        };
        b.bind("ArrowLeft", Control::TurnLeft);
        b.bind("ArrowRight", Control::TurnRight);
        b.bind("ArrowUp", Control::Forward);
        b.bind("ArrowDown", Control::Backward);
        b.bind("KeyE", Control::Hold);
        b
    }
}

impl KeyBindings {
    pub fn bind(&mut self, code: &str, control: Control) {
        self.by_code.retain(|_, c| *c != control);
        self.by_code.insert(code.to_string(), control);
    }

    #[inline]
    pub fn control_for(&self, code: &str) -> Option<Control> {
        self.by_code.get(code).copied()
    }

    pub fn code_for(&self, control: Control) -> Option<&str> {
        self.by_code
            .iter()
            .find(|(_, c)| **c == control)
            .map(|(code, _)| code.as_str())
    }

    /// Apply overrides of the form `hold=KeyF,forward=KeyW` on top of the
    /// defaults. `:` is accepted in place of `=` so the value survives URL
    /// query strings unescaped.
    pub fn with_overrides(raw: &str) -> Result<Self, ConfigError> {
        let mut b = Self::default();
        for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, code) = pair
                .split_once(|c: char| c == '=' || c == ':')
                .ok_or_else(|| ConfigError::MalformedBinding(pair.to_string()))?;
            let control: Control = name.parse()?;
            let code = code.trim();
            if code.is_empty() {
                return Err(ConfigError::EmptyKey(control.name().to_string()));
            }
            b.bind(code, control);
        }
        Ok(b)
    }
}
