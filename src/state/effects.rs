use crate::state::events::GridEvent;
use crate::state::keys::Direction;
use crate::state::navigator::FocusTarget;
use crate::state::position::Position;

/// Which text input an editor focus request is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorId {
    Cell(Position),
    Column(usize),
}

impl EditorId {
    pub fn dom_id(&self) -> String {
        match self {
            EditorId::Cell(position) => format!("{}-input", position.dom_id()),
            EditorId::Column(index) => format!("column-{index}-input"),
        }
    }
}

/// Work that must wait until the current interaction has rendered.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Focus(FocusTarget),
    /// Focus the editor input and put the caret after the last character.
    FocusEditor(EditorId),
    WriteClipboard(String),
    /// Read the clipboard and paste the text into the cell.
    ReadClipboard(Position),
}

/// Focus movement requested by a cell; resolved by the grid's navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Step(Direction),
    NextRow,
}

/// Everything one interaction produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reaction {
    pub events: Vec<GridEvent>,
    pub effects: Vec<Effect>,
    pub movement: Option<Movement>,
    pub prevent_default: bool,
    /// Stop the DOM event from reaching outer handlers.
    pub stop_propagation: bool,
}

impl Reaction {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn prevented() -> Self {
        Self {
            prevent_default: true,
            ..Self::default()
        }
    }

    pub fn event(mut self, event: GridEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn moving(mut self, movement: Movement) -> Self {
        self.movement = Some(movement);
        self
    }

    pub fn merge(&mut self, other: Reaction) {
        self.events.extend(other.events);
        self.effects.extend(other.effects);
        if other.movement.is_some() {
            self.movement = other.movement;
        }
        self.prevent_default |= other.prevent_default;
        self.stop_propagation |= other.stop_propagation;
    }
}
