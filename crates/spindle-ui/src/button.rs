use crate::input::SpinnerPart;
use crate::semantics::{Role, Semantics};
use crate::view::{Icon, View, ViewId, ViewKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn icon(self) -> Icon {
        match self {
            Direction::Up => Icon::ArrowDropUp,
            Direction::Down => Icon::ArrowDropDown,
        }
    }

    pub fn part(self) -> SpinnerPart {
        match self {
            Direction::Up => SpinnerPart::UpButton,
            Direction::Down => SpinnerPart::DownButton,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Direction::Up => "Increment",
            Direction::Down => "Decrement",
        }
    }
}

/// Icon-only button stepping a spinner up or down.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinnerButton {
    direction: Direction,
    enabled: bool,
    hovered: bool,
    pressed: bool,
}

impl SpinnerButton {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            enabled: false,
            hovered: false,
            pressed: false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.pressed = false;
    }

    pub fn disabled(&self) -> bool {
        !self.enabled
    }

    /// Disables the button when its spinner is disabled or the value sits at
    /// the limit this button moves toward (max for up, min for down).
    pub fn enable_disable(&mut self, parent_disabled: bool, at_limit: bool) {
        if parent_disabled || at_limit {
            self.disable();
        } else {
            self.enable();
        }
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if !hovered {
            self.pressed = false;
        }
    }

    pub fn press(&mut self) {
        if self.enabled {
            self.pressed = true;
        }
    }

    /// Returns whether the tap should act. Disabled buttons swallow taps.
    pub fn tapped(&mut self) -> bool {
        self.pressed = false;
        self.enabled
    }

    pub fn view(&self, id: ViewId) -> View {
        View::new(
            id,
            ViewKind::Button {
                icon: self.direction.icon(),
                enabled: self.enabled,
                hovered: self.hovered,
                pressed: self.pressed,
                part: self.direction.part(),
            },
        )
        .semantics(
            Semantics::new(Role::Button)
                .label(self.direction.label())
                .enabled(self.enabled),
        )
    }
}
