/// Editable value with an original to compare against and revert to.
///
/// `dirty` is derived on every read, so it can never drift from
/// `value != original`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MutableValue<T> {
    value: T,
    original: T,
    is_editing: bool,
    readonly: bool,
}

/// Returned whenever the value was replaced; the owner decides what to emit.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueChanged<T> {
    pub previous: T,
    pub value: T,
}

/// Post-render request to focus the editor and put the caret at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusEditor;

impl<T: Clone + PartialEq> MutableValue<T> {
    /// Binds both the value and its original.
    pub fn new(value: T) -> Self {
        Self {
            original: value.clone(),
            value,
            is_editing: false,
            readonly: false,
        }
    }

    /// Binds a current value that may already differ from its original.
    pub fn with_original(value: T, original: T) -> Self {
        Self {
            value,
            original,
            is_editing: false,
            readonly: false,
        }
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
        if readonly {
            self.is_editing = false;
        }
    }

    pub fn dirty(&self) -> bool {
        self.value != self.original
    }

    /// Enters edit mode. No-op when read-only or already editing.
    pub fn begin_edit(&mut self) -> Option<FocusEditor> {
        if self.readonly || self.is_editing {
            return None;
        }
        self.is_editing = true;
        Some(FocusEditor)
    }

    pub fn cancel_edit(&mut self) {
        self.is_editing = false;
    }

    pub fn commit(&mut self, value: T) -> ValueChanged<T> {
        let previous = std::mem::replace(&mut self.value, value);
        ValueChanged {
            previous,
            value: self.value.clone(),
        }
    }

    /// Restores the original. A clean value is left alone and reports nothing.
    pub fn reset_to_original(&mut self) -> Option<ValueChanged<T>> {
        if !self.dirty() {
            return None;
        }
        let original = self.original.clone();
        Some(self.commit(original))
    }

    /// Leaves edit mode for good; used when the owner goes away.
    pub fn detach(&mut self) {
        self.is_editing = false;
    }
}
