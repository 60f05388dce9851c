use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        /// Cmd on Mac, Win key on Windows
        const META = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            is_repeat: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Wheel or trackpad movement. Positive values scroll up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    Lines(f32),
    Pixels(f32),
}

impl ScrollDelta {
    /// Pixel deltas are converted at this rate.
    pub const PIXELS_PER_LINE: f32 = 40.0;

    pub fn lines(self) -> f32 {
        match self {
            ScrollDelta::Lines(l) => l,
            ScrollDelta::Pixels(px) => px / Self::PIXELS_PER_LINE,
        }
    }
}

/// Part of the spinner a pointer event hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpinnerPart {
    Display,
    UpButton,
    DownButton,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Tap(SpinnerPart),
    PointerEnter(SpinnerPart),
    PointerLeave(SpinnerPart),
    Key(KeyEvent),
    Scroll(ScrollDelta),
    FocusGained,
    FocusLost,
    /// Text typed into the display, committed with Enter or on blur.
    Commit(String),
}
