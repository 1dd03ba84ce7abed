/// Renderer-independent key press. The UI layer converts DOM keyboard events
/// into this before handing them to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: KeyName,
    pub shift: bool,
    pub meta: bool,
    pub ctrl: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyName {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Grid movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl KeyInput {
    pub fn plain(key: KeyName) -> Self {
        Self {
            key,
            shift: false,
            meta: false,
            ctrl: false,
        }
    }

    pub fn char(ch: char) -> Self {
        Self::plain(KeyName::Char(ch))
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn is_space(&self) -> bool {
        self.key == KeyName::Char(' ')
    }

    /// Enter or Space, the two activation keys.
    pub fn is_activation(&self) -> bool {
        self.key == KeyName::Enter || self.is_space()
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.key {
            KeyName::ArrowUp => Some(Direction::Up),
            KeyName::ArrowDown => Some(Direction::Down),
            KeyName::ArrowLeft => Some(Direction::Left),
            KeyName::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }

    /// The character this press would seed an editor with, if any.
    ///
    /// Letters, digits, space, period and comma qualify; any modifier
    /// disqualifies.
    pub fn seed_char(&self) -> Option<char> {
        if self.shift || self.meta || self.ctrl {
            return None;
        }
        match self.key {
            KeyName::Char(ch) if ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '.' | ',') => {
                Some(ch)
            }
            _ => None,
        }
    }

    /// Cmd/Ctrl + C.
    pub fn is_copy(&self) -> bool {
        (self.meta || self.ctrl) && matches!(self.key, KeyName::Char('c') | KeyName::Char('C'))
    }

    /// Cmd/Ctrl + V.
    pub fn is_paste(&self) -> bool {
        (self.meta || self.ctrl) && matches!(self.key, KeyName::Char('v') | KeyName::Char('V'))
    }
}
