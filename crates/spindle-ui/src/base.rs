use std::sync::Arc;

use spindle_core::{BoundsError, OnChanged, SpinnerData};

use crate::button::{Direction, SpinnerButton};

/// Capabilities a widget needs to host a `SpinnerBase`.
pub trait Spinnable {
    fn disabled(&self) -> bool;
    /// Callback to run after the spinner's value changes.
    fn on_changed(&self) -> Option<OnChanged>;
    /// Asks the host toolkit to redraw the widget.
    fn refresh(&self);
}

/// Value plus the up/down buttons shared by spinner widgets.
///
/// Operations take the hosting widget so they can honour its disabled state
/// and request a redraw afterwards.
#[derive(Debug)]
pub struct SpinnerBase {
    data: SpinnerData,
    up: SpinnerButton,
    down: SpinnerButton,
}

impl SpinnerBase {
    pub fn new(data: SpinnerData) -> Self {
        let mut base = Self {
            data,
            up: SpinnerButton::new(Direction::Up),
            down: SpinnerButton::new(Direction::Down),
        };
        let disabled = !base.data.enabled();
        base.sync_buttons(disabled);
        base
    }

    /// Routes value changes of the data to `host`: every change requests a
    /// redraw and then runs the host's own callback. This also covers
    /// changes arriving from a bound source on the notifier thread.
    pub fn connect<S>(&self, host: S)
    where
        S: Spinnable + Send + Sync + 'static,
    {
        self.data.set_on_changed(Some(Arc::new(move |value| {
            host.refresh();
            if let Some(f) = host.on_changed() {
                f(value);
            }
        })));
    }

    pub fn data(&self) -> &SpinnerData {
        &self.data
    }

    pub fn up_button(&self) -> &SpinnerButton {
        &self.up
    }

    pub fn down_button(&self) -> &SpinnerButton {
        &self.down
    }

    pub fn button_mut(&mut self, direction: Direction) -> &mut SpinnerButton {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    /// Re-derives both buttons from the parent state and the value's limits.
    /// Buttons stay disabled while the bounds are invalid.
    pub fn sync_buttons(&mut self, parent_disabled: bool) {
        let (inert, at_min, at_max) = {
            let v = self.data.snapshot();
            (parent_disabled || !v.initialized(), v.at_min(), v.at_max())
        };
        self.up.enable_disable(inert, at_max);
        self.down.enable_disable(inert, at_min);
    }

    pub fn increment(&mut self, host: &impl Spinnable) {
        if host.disabled() {
            return;
        }
        self.data.increment();
        self.changed(host);
    }

    pub fn decrement(&mut self, host: &impl Spinnable) {
        if host.disabled() {
            return;
        }
        self.data.decrement();
        self.changed(host);
    }

    pub fn set_value(&mut self, value: f64, host: &impl Spinnable) {
        self.data.set_value(value);
        self.changed(host);
    }

    pub fn set_bounds(
        &mut self,
        min: f64,
        max: f64,
        step: f64,
        host: &impl Spinnable,
    ) -> Result<(), BoundsError> {
        let res = self.data.set_bounds(min, max, step);
        self.changed(host);
        res
    }

    fn changed(&mut self, host: &impl Spinnable) {
        self.sync_buttons(host.disabled());
        host.refresh();
    }
}
