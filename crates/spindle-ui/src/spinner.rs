use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use spindle_core::{
    BoundsError, EntryError, FloatBinding, OnChanged, SpinnerConfig, SpinnerData, WeakSpinnerData,
};

use crate::base::{Spinnable, SpinnerBase};
use crate::button::{Direction, SpinnerButton};
use crate::input::{InputEvent, Key, KeyEvent, Modifiers, ScrollDelta, SpinnerPart};
use crate::semantics::{Role, Semantics};
use crate::view::{View, ViewId, ViewKind};

/// Steps taken by PageUp / PageDown.
pub const PAGE_STEPS: f64 = 10.0;

/// View nodes built per spinner: root, display, button column, up, down.
pub const NODES_PER_SPINNER: u64 = 5;

/// Largest id whose view node ids do not wrap into another spinner's.
pub const MAX_SPINNER_ID: ViewId = u64::MAX / NODES_PER_SPINNER - 1;

/// The parts of a `Spinner` that value-change callbacks need. Cheap to clone
/// and safe to move onto the binding notifier thread.
#[derive(Clone)]
struct SpinnerHost {
    data: WeakSpinnerData,
    on_changed: Arc<Mutex<Option<OnChanged>>>,
    redraw: Arc<AtomicBool>,
}

impl Spinnable for SpinnerHost {
    fn disabled(&self) -> bool {
        self.data.upgrade().is_none_or(|d| !d.enabled())
    }

    fn on_changed(&self) -> Option<OnChanged> {
        self.on_changed.lock().clone()
    }

    fn refresh(&self) {
        self.redraw.store(true, Ordering::Release);
    }
}

/// Numeric spinner: a value display with up and down buttons.
///
/// ```rust
/// use spindle_ui::Spinner;
///
/// let mut s = Spinner::new(4.0, 10.0, 5.0, 0, None);
/// s.up_tapped();
/// s.up_tapped();
/// assert_eq!(s.value_text(), "10");
/// assert!(s.up_button().disabled());
/// ```
pub struct Spinner {
    id: ViewId,
    base: SpinnerBase,
    host: SpinnerHost,
    focused: bool,
    display_hovered: bool,
    scroll_lines: f32,
}

impl Spinner {
    pub fn new(
        min: f64,
        max: f64,
        step: f64,
        decimal_places: u32,
        on_changed: Option<OnChanged>,
    ) -> Self {
        let s = Self::from_data(SpinnerData::new(min, max, step, decimal_places));
        s.set_on_changed(on_changed);
        s
    }

    /// A spinner whose bounds are not known yet. It stays disabled until
    /// `set_bounds` succeeds and `enable` is called.
    pub fn uninitialized(decimal_places: u32) -> Self {
        Self::from_data(SpinnerData::uninitialized(decimal_places))
    }

    pub fn with_data(
        min: f64,
        max: f64,
        step: f64,
        decimal_places: u32,
        source: Arc<dyn FloatBinding>,
    ) -> Self {
        let mut s = Self::new(min, max, step, decimal_places, None);
        s.bind(source);
        s
    }

    pub fn from_config(config: &SpinnerConfig) -> Self {
        Self::from_data(SpinnerData::from_config(config))
    }

    pub fn from_data(data: SpinnerData) -> Self {
        let host = SpinnerHost {
            data: data.downgrade(),
            on_changed: Arc::new(Mutex::new(None)),
            redraw: Arc::new(AtomicBool::new(true)),
        };
        let base = SpinnerBase::new(data);
        base.connect(host.clone());
        Self {
            id: 0,
            base,
            host,
            focused: false,
            display_hovered: false,
            scroll_lines: 0.0,
        }
    }

    /// Sets the spinner's id. Its view nodes use ids `id * 5 .. id * 5 + 5`;
    /// ids above `MAX_SPINNER_ID` wrap and may share node ids with others.
    pub fn with_id(mut self, id: ViewId) -> Self {
        if id > MAX_SPINNER_ID {
            log::warn!("spinner id {id} exceeds {MAX_SPINNER_ID}, view node ids will wrap");
        }
        self.id = id;
        self
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn data(&self) -> &SpinnerData {
        self.base.data()
    }

    pub fn up_button(&self) -> &SpinnerButton {
        self.base.up_button()
    }

    pub fn down_button(&self) -> &SpinnerButton {
        self.base.down_button()
    }

    pub fn set_on_changed(&self, on_changed: Option<OnChanged>) {
        *self.host.on_changed.lock() = on_changed;
    }

    pub fn value(&self) -> f64 {
        self.data().value()
    }

    pub fn value_text(&self) -> String {
        self.data().value_text()
    }

    pub fn min_text(&self) -> String {
        self.data().min_text()
    }

    pub fn max_text(&self) -> String {
        self.data().max_text()
    }

    pub fn initialized(&self) -> bool {
        self.data().initialized()
    }

    pub fn validate(&self) -> Result<(), BoundsError> {
        self.data().validate()
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn hovered(&self) -> bool {
        self.display_hovered || self.up_button().hovered() || self.down_button().hovered()
    }

    /// Enables the spinner. Refused while its bounds are invalid.
    pub fn enable(&mut self) {
        if !self.initialized() {
            log::error!("trying to enable uninitialized spinner");
            return;
        }
        self.data().set_enabled(true);
        self.base.sync_buttons(false);
        self.host.refresh();
    }

    pub fn disable(&mut self) {
        self.data().set_enabled(false);
        self.focused = false;
        self.scroll_lines = 0.0;
        self.base.sync_buttons(true);
        self.host.refresh();
    }

    pub fn set_value(&mut self, value: f64) {
        self.base.set_value(value, &self.host);
    }

    /// Replaces min, max and step and moves the value to the new minimum.
    /// Does not enable a disabled spinner.
    pub fn set_bounds(&mut self, min: f64, max: f64, step: f64) -> Result<(), BoundsError> {
        self.base.set_bounds(min, max, step, &self.host)
    }

    pub fn bind(&mut self, source: Arc<dyn FloatBinding>) {
        self.data().bind(source);
        self.sync();
        self.host.refresh();
    }

    pub fn unbind(&mut self) {
        self.data().unbind();
    }

    pub fn up_tapped(&mut self) -> bool {
        self.step_tapped(Direction::Up)
    }

    pub fn down_tapped(&mut self) -> bool {
        self.step_tapped(Direction::Down)
    }

    fn step_tapped(&mut self, direction: Direction) -> bool {
        if !self.base.button_mut(direction).tapped() {
            return false;
        }
        match direction {
            Direction::Up => self.base.increment(&self.host),
            Direction::Down => self.base.decrement(&self.host),
        }
        true
    }

    /// Keyboard handling while focused. Returns whether the key was consumed.
    pub fn typed_key(&mut self, event: &KeyEvent) -> bool {
        if !self.focused || self.disabled() {
            return false;
        }
        let ctrl = event.modifiers.contains(Modifiers::CTRL);
        let (min, max, step, value) = {
            let v = self.data().snapshot();
            (v.min(), v.max(), v.step(), v.value())
        };
        match event.key {
            Key::ArrowUp if ctrl => self.set_value(max),
            Key::ArrowDown if ctrl => self.set_value(min),
            Key::ArrowUp => self.base.increment(&self.host),
            Key::ArrowDown => self.base.decrement(&self.host),
            Key::PageUp => self.set_value(value + step * PAGE_STEPS),
            Key::PageDown => self.set_value(value - step * PAGE_STEPS),
            Key::Home => self.set_value(min),
            Key::End => self.set_value(max),
            _ => return false,
        }
        true
    }

    /// Wheel input while hovered or focused. Fractional deltas accumulate
    /// until they add up to whole steps.
    pub fn scrolled(&mut self, delta: ScrollDelta) -> bool {
        let lines = delta.lines();
        if self.disabled() || !(self.hovered() || self.focused) || !lines.is_finite() {
            return false;
        }
        self.scroll_lines += lines;
        let steps = self.scroll_lines.trunc();
        if steps == 0.0 {
            return true;
        }
        self.scroll_lines -= steps;
        let (value, step) = {
            let v = self.data().snapshot();
            (v.value(), v.step())
        };
        self.set_value(value + step * steps as f64);
        true
    }

    pub fn focus_gained(&mut self) -> bool {
        if self.disabled() {
            return false;
        }
        self.focused = true;
        self.host.refresh();
        true
    }

    pub fn focus_lost(&mut self) {
        self.focused = false;
        self.scroll_lines = 0.0;
        self.host.refresh();
    }

    pub fn pointer_entered(&mut self, part: SpinnerPart) {
        match part {
            SpinnerPart::Display => self.display_hovered = true,
            SpinnerPart::UpButton => self.base.button_mut(Direction::Up).set_hovered(true),
            SpinnerPart::DownButton => self.base.button_mut(Direction::Down).set_hovered(true),
        }
        self.host.refresh();
    }

    pub fn pointer_left(&mut self, part: SpinnerPart) {
        match part {
            SpinnerPart::Display => self.display_hovered = false,
            SpinnerPart::UpButton => self.base.button_mut(Direction::Up).set_hovered(false),
            SpinnerPart::DownButton => self.base.button_mut(Direction::Down).set_hovered(false),
        }
        if !self.hovered() {
            self.scroll_lines = 0.0;
        }
        self.host.refresh();
    }

    /// Applies text typed into the display. Ignored while disabled.
    pub fn commit_text(&mut self, text: &str) -> Result<(), EntryError> {
        if self.disabled() {
            return Ok(());
        }
        let v = self.data().validate_text(text)?;
        self.set_value(v);
        Ok(())
    }

    /// Dispatches a host input event. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Tap(SpinnerPart::UpButton) => self.up_tapped(),
            InputEvent::Tap(SpinnerPart::DownButton) => self.down_tapped(),
            InputEvent::Tap(SpinnerPart::Display) => self.focus_gained(),
            InputEvent::PointerEnter(part) => {
                self.pointer_entered(*part);
                true
            }
            InputEvent::PointerLeave(part) => {
                self.pointer_left(*part);
                true
            }
            InputEvent::Key(k) => self.typed_key(k),
            InputEvent::Scroll(delta) => self.scrolled(*delta),
            InputEvent::FocusGained => self.focus_gained(),
            InputEvent::FocusLost => {
                self.focus_lost();
                true
            }
            InputEvent::Commit(text) => match self.commit_text(text) {
                Ok(()) => true,
                Err(e) => {
                    log::debug!("rejected spinner text {text:?}: {e}");
                    false
                }
            },
        }
    }

    /// Re-derives button state (the value may have changed on the binding
    /// thread) and returns whether a redraw was requested since the last call.
    pub fn sync(&mut self) -> bool {
        let disabled = self.disabled();
        self.base.sync_buttons(disabled);
        self.take_redraw()
    }

    pub fn take_redraw(&self) -> bool {
        self.host.redraw.swap(false, Ordering::AcqRel)
    }

    pub fn view(&self) -> View {
        let value = self.data().snapshot();
        let enabled = !self.disabled();
        let text = value.value_text();
        let width_hint = [value.min_text(), value.max_text(), text.clone()]
            .into_iter()
            .max_by_key(|t| t.chars().count())
            .unwrap_or_default();

        let root = self.id.wrapping_mul(NODES_PER_SPINNER);
        let node = |n: u64| root.wrapping_add(n);
        let display = View::new(
            node(1),
            ViewKind::Text {
                text: text.clone(),
                width_hint,
                part: SpinnerPart::Display,
            },
        )
        .semantics(Semantics::new(Role::Text).enabled(enabled));
        let buttons = View::new(node(2), ViewKind::Column)
            .with_children(vec![
                self.up_button().view(node(3)),
                self.down_button().view(node(4)),
            ])
            .semantics(Semantics::new(Role::Container).enabled(enabled));

        View::new(
            root,
            ViewKind::Spinner {
                enabled,
                focused: self.focused,
                hovered: self.hovered(),
                invalid: value.validate().is_err(),
            },
        )
        .with_children(vec![display, buttons])
        .semantics(
            Semantics::new(Role::SpinButton)
                .value(text)
                .focused(self.focused)
                .enabled(enabled),
        )
    }
}

impl Spinnable for Spinner {
    fn disabled(&self) -> bool {
        !self.data().enabled()
    }

    fn on_changed(&self) -> Option<OnChanged> {
        self.host.on_changed()
    }

    fn refresh(&self) {
        self.host.refresh();
    }
}

impl std::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("id", &self.id)
            .field("base", &self.base)
            .field("focused", &self.focused)
            .finish()
    }
}
