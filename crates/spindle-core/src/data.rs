use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::binding::{DataListener, FloatBinding, ListenerId};
use crate::bounded::BoundedValue;
use crate::config::SpinnerConfig;
use crate::error::{BoundsError, EntryError};

pub type OnChanged = Arc<dyn Fn(f64) + Send + Sync>;

/// Shared handle to a spinner's `BoundedValue`.
///
/// Clones refer to the same value. Every successful mutation calls the
/// `on_changed` callback once with the new value and writes it to the bound
/// source, if any. Both happen after the internal lock is released, so the
/// callback may read the handle.
///
/// ```rust
/// use spindle_core::SpinnerData;
///
/// let data = SpinnerData::new(4.0, 10.0, 5.0, 0);
/// data.increment();
/// data.increment();
/// assert_eq!(data.value(), 10.0);
/// assert!(data.at_max());
/// ```
#[derive(Clone)]
pub struct SpinnerData(Arc<Shared>);

/// Non-owning reference to a `SpinnerData`, for callbacks stored inside it.
#[derive(Clone)]
pub struct WeakSpinnerData(Weak<Shared>);

impl WeakSpinnerData {
    pub fn upgrade(&self) -> Option<SpinnerData> {
        self.0.upgrade().map(SpinnerData)
    }
}

struct Shared {
    state: Mutex<BoundedValue>,
    on_changed: Mutex<Option<OnChanged>>,
    link: Mutex<Option<Link>>,
}

struct Link {
    source: Arc<dyn FloatBinding>,
    listener: ListenerId,
}

impl Drop for Link {
    fn drop(&mut self) {
        self.source.remove_listener(self.listener);
    }
}

impl SpinnerData {
    pub fn new(min: f64, max: f64, step: f64, decimal_places: u32) -> Self {
        Self::from_value(BoundedValue::new(min, max, step, decimal_places))
    }

    pub fn uninitialized(decimal_places: u32) -> Self {
        Self::from_value(BoundedValue::uninitialized(decimal_places))
    }

    pub fn from_config(config: &SpinnerConfig) -> Self {
        Self::from_value(config.build())
    }

    /// Creates a value and binds it to `source` right away.
    pub fn with_binding(
        min: f64,
        max: f64,
        step: f64,
        decimal_places: u32,
        source: Arc<dyn FloatBinding>,
    ) -> Self {
        let data = Self::new(min, max, step, decimal_places);
        data.bind(source);
        data
    }

    pub fn from_value(value: BoundedValue) -> Self {
        Self(Arc::new(Shared {
            state: Mutex::new(value),
            on_changed: Mutex::new(None),
            link: Mutex::new(None),
        }))
    }

    pub fn downgrade(&self) -> WeakSpinnerData {
        WeakSpinnerData(Arc::downgrade(&self.0))
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> BoundedValue {
        self.0.state.lock().clone()
    }

    pub fn value(&self) -> f64 {
        self.0.state.lock().value()
    }

    pub fn min(&self) -> f64 {
        self.0.state.lock().min()
    }

    pub fn max(&self) -> f64 {
        self.0.state.lock().max()
    }

    pub fn step(&self) -> f64 {
        self.0.state.lock().step()
    }

    pub fn decimal_places(&self) -> u32 {
        self.0.state.lock().decimal_places()
    }

    pub fn initialized(&self) -> bool {
        self.0.state.lock().initialized()
    }

    pub fn enabled(&self) -> bool {
        self.0.state.lock().enabled()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.0.state.lock().set_enabled(enabled);
    }

    pub fn at_min(&self) -> bool {
        self.0.state.lock().at_min()
    }

    pub fn at_max(&self) -> bool {
        self.0.state.lock().at_max()
    }

    pub fn validate(&self) -> Result<(), BoundsError> {
        self.0.state.lock().validate()
    }

    pub fn validate_text(&self, text: &str) -> Result<f64, EntryError> {
        self.0.state.lock().validate_text(text)
    }

    pub fn value_text(&self) -> String {
        self.0.state.lock().value_text()
    }

    pub fn min_text(&self) -> String {
        self.0.state.lock().min_text()
    }

    pub fn max_text(&self) -> String {
        self.0.state.lock().max_text()
    }

    pub fn set_value(&self, value: f64) {
        let changed = self.0.state.lock().set_value(value);
        if let Some(v) = changed {
            self.value_changed(v);
        }
    }

    pub fn increment(&self) {
        let changed = self.0.state.lock().increment();
        if let Some(v) = changed {
            self.value_changed(v);
        }
    }

    pub fn decrement(&self) {
        let changed = self.0.state.lock().decrement();
        if let Some(v) = changed {
            self.value_changed(v);
        }
    }

    /// Replaces the bounds; on success the value moves to the new minimum.
    pub fn set_bounds(&self, min: f64, max: f64, step: f64) -> Result<(), BoundsError> {
        let changed = self.0.state.lock().set_bounds(min, max, step);
        match changed {
            Ok(Some(v)) => {
                self.value_changed(v);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                log::error!("invalid spinner bounds ({min}, {max}, {step}): {e}");
                Err(e)
            }
        }
    }

    pub fn on_changed(&self) -> Option<OnChanged> {
        self.0.on_changed.lock().clone()
    }

    pub fn set_on_changed(&self, on_changed: Option<OnChanged>) {
        *self.0.on_changed.lock() = on_changed;
    }

    /// Links the value to `source`, replacing any previous link.
    ///
    /// The source's current value is applied immediately. Later changes of
    /// the source arrive on the binding notifier thread.
    pub fn bind(&self, source: Arc<dyn FloatBinding>) {
        // Link first: the listener may fire before add_listener returns.
        let previous = self.0.link.lock().replace(Link {
            source: source.clone(),
            listener: ListenerId::default(),
        });
        drop(previous);

        let data = Arc::downgrade(&self.0);
        let weak_source = Arc::downgrade(&source);
        let listener: DataListener = Arc::new(move || update_from(&data, &weak_source));
        let id = source.add_listener(listener);
        {
            let mut link = self.0.link.lock();
            match link.as_mut() {
                Some(l) if same_source(&l.source, &source) => l.listener = id,
                // unbound or rebound while registering
                _ => source.remove_listener(id),
            }
        }
        log::debug!("spinner bound");

        self.pull(source.as_ref());
        let (live, value) = {
            let v = self.0.state.lock();
            (v.enabled() && v.initialized(), v.value())
        };
        if live {
            self.write_binding(value);
        }
    }

    /// Drops the link to the bound source. The value keeps its last state.
    pub fn unbind(&self) {
        let link = self.0.link.lock().take();
        if link.is_some() {
            log::debug!("spinner unbound");
        }
    }

    pub fn is_bound(&self) -> bool {
        self.0.link.lock().is_some()
    }

    fn pull(&self, source: &dyn FloatBinding) {
        match source.get() {
            Ok(v) => self.set_value(v),
            Err(e) => log::error!("error getting bound value: {e}"),
        }
    }

    fn value_changed(&self, value: f64) {
        log::debug!("spinner value changed to {value}");
        let on_changed = self.on_changed();
        if let Some(f) = on_changed {
            f(value);
        }
        self.write_binding(value);
    }

    fn write_binding(&self, value: f64) {
        let source = self.0.link.lock().as_ref().map(|l| l.source.clone());
        let Some(source) = source else {
            return;
        };
        match source.get() {
            Ok(current) if current == value => {}
            Ok(_) => {
                if let Err(e) = source.set(value) {
                    log::error!("failed to set bound value to {value}: {e}");
                }
            }
            Err(e) => log::error!("error getting bound value: {e}"),
        }
    }
}

fn same_source(a: &Arc<dyn FloatBinding>, b: &Arc<dyn FloatBinding>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

fn update_from(data: &Weak<Shared>, source: &Weak<dyn FloatBinding>) {
    let (Some(data), Some(source)) = (data.upgrade(), source.upgrade()) else {
        return;
    };
    SpinnerData(data).pull(source.as_ref());
}

impl fmt::Debug for SpinnerData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinnerData")
            .field("state", &*self.0.state.lock())
            .field("bound", &self.is_bound())
            .finish()
    }
}
