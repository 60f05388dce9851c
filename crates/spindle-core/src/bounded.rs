use crate::error::{BoundsError, EntryError};
use crate::format::NumberFormat;

/// Checks a min/max/step combination.
///
/// The all-zero triple is the placeholder of an uninitialized value and is
/// reported as such rather than as an empty range.
pub fn check_bounds(min: f64, max: f64, step: f64) -> Result<(), BoundsError> {
    if min == 0.0 && max == 0.0 && step == 0.0 {
        return Err(BoundsError::Uninitialized);
    }
    // Negated comparisons so NaN bounds are rejected too.
    if !(min < max) {
        return Err(BoundsError::MinNotBelowMax);
    }
    if !(step > 0.0) {
        return Err(BoundsError::StepNotPositive);
    }
    if step > max - min {
        return Err(BoundsError::StepTooLarge);
    }
    Ok(())
}

/// A numeric value held inside an inclusive `[min, max]` range.
///
/// Mutation is only permitted while the value is both initialized (its
/// bounds passed validation) and enabled; otherwise every mutating call is a
/// silent no-op. Mutating methods return `Some(new_value)` when the value
/// actually changed so the owner can notify observers.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedValue {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    format: NumberFormat,
    initialized: bool,
    enabled: bool,
}

impl BoundedValue {
    /// Highest supported display precision.
    pub const MAX_DECIMAL_PLACES: u32 = NumberFormat::MAX_DECIMAL_PLACES;

    /// Creates a value starting at `min`.
    ///
    /// Invalid bounds do not fail construction: the value is left
    /// uninitialized and disabled until `set_bounds` succeeds.
    pub fn new(min: f64, max: f64, step: f64, decimal_places: u32) -> Self {
        let mut v = Self::uninitialized(decimal_places);
        v.min = min;
        v.max = max;
        v.step = step;
        match check_bounds(min, max, step) {
            Ok(()) => {
                v.value = min;
                v.initialized = true;
                v.enabled = true;
            }
            Err(e) => log::error!("invalid spinner bounds ({min}, {max}, {step}): {e}"),
        }
        v
    }

    /// Creates a placeholder whose bounds are not known yet.
    pub fn uninitialized(decimal_places: u32) -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 0.0,
            step: 0.0,
            format: NumberFormat::new(decimal_places),
            initialized: false,
            enabled: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn decimal_places(&self) -> u32 {
        self.format.decimal_places()
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replaces the bounds and re-homes the value to the new minimum.
    ///
    /// Failed validation still stores the bounds but leaves the value
    /// uninitialized. The reset applies whether or not the value is enabled.
    pub fn set_bounds(&mut self, min: f64, max: f64, step: f64) -> Result<Option<f64>, BoundsError> {
        self.min = min;
        self.max = max;
        self.step = step;
        if let Err(e) = check_bounds(min, max, step) {
            self.initialized = false;
            return Err(e);
        }
        self.initialized = true;
        if self.value == min {
            return Ok(None);
        }
        self.value = min;
        Ok(Some(min))
    }

    /// Sets the value, clamped into `[min, max]`.
    pub fn set_value(&mut self, value: f64) -> Option<f64> {
        if !self.enabled || !self.initialized || value.is_nan() {
            return None;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value {
            return None;
        }
        self.value = clamped;
        Some(clamped)
    }

    pub fn increment(&mut self) -> Option<f64> {
        self.set_value(self.value + self.step)
    }

    pub fn decrement(&mut self) -> Option<f64> {
        self.set_value(self.value - self.step)
    }

    pub fn at_min(&self) -> bool {
        self.value <= self.min
    }

    pub fn at_max(&self) -> bool {
        self.value >= self.max
    }

    pub fn validate(&self) -> Result<(), BoundsError> {
        check_bounds(self.min, self.max, self.step)
    }

    pub fn value_text(&self) -> String {
        self.format.format(self.value)
    }

    pub fn min_text(&self) -> String {
        self.format.format(self.min)
    }

    pub fn max_text(&self) -> String {
        self.format.format(self.max)
    }

    /// Parses text typed into the display and checks it against the bounds.
    /// Integer formats compare against the truncated bounds.
    pub fn validate_text(&self, text: &str) -> Result<f64, EntryError> {
        let v = self.format.parse(text)?;
        let (lo, hi) = if self.format.is_integer() {
            (self.min.trunc(), self.max.trunc())
        } else {
            (self.min, self.max)
        };
        if v < lo || v > hi {
            return Err(EntryError::OutOfRange);
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_min() {
        let v = BoundedValue::new(1.0, 10.0, 2.0, 0);
        assert!(v.initialized());
        assert!(v.enabled());
        assert_eq!(v.value(), 1.0);
        assert_eq!(v.min(), 1.0);
        assert_eq!(v.max(), 10.0);
        assert_eq!(v.step(), 2.0);
    }

    #[test]
    fn invalid_bounds_leave_value_uninitialized() {
        assert!(!BoundedValue::new(11.0, 10.0, 2.0, 0).initialized());
        assert!(!BoundedValue::new(10.0, 10.0, 1.0, 0).initialized());
        assert!(!BoundedValue::new(1.0, 10.0, 0.0, 0).initialized());
        assert!(!BoundedValue::new(1.0, 10.0, -1.0, 0).initialized());
        assert!(!BoundedValue::new(1.0, 2.0, 2.0, 0).initialized());
        assert!(!BoundedValue::new(f64::NAN, 2.0, 1.0, 0).initialized());
    }

    #[test]
    fn invalid_bounds_refuse_mutation() {
        let mut v = BoundedValue::new(1.0, 2.0, 3.0, 0);
        v.set_enabled(true);
        assert_eq!(v.set_value(1.5), None);
        assert_eq!(v.increment(), None);
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn uninitialized_is_disabled_sentinel() {
        let v = BoundedValue::uninitialized(2);
        assert!(!v.initialized());
        assert!(!v.enabled());
        assert_eq!(v.validate(), Err(BoundsError::Uninitialized));
        assert_eq!(v.decimal_places(), 2);
    }

    #[test]
    fn validate_reports_first_violation() {
        assert_eq!(BoundedValue::new(1.0, 2.0, 1.0, 0).validate(), Ok(()));
        assert_eq!(
            BoundedValue::new(2.0, 2.0, 1.0, 0).validate(),
            Err(BoundsError::MinNotBelowMax)
        );
        assert_eq!(
            BoundedValue::new(3.0, 2.0, 0.0, 0).validate(),
            Err(BoundsError::MinNotBelowMax)
        );
        assert_eq!(
            BoundedValue::new(1.0, 2.0, 0.0, 0).validate(),
            Err(BoundsError::StepNotPositive)
        );
        assert_eq!(
            BoundedValue::new(1.0, 2.0, 3.0, 0).validate(),
            Err(BoundsError::StepTooLarge)
        );
        assert_eq!(
            BoundsError::StepTooLarge.to_string(),
            "spinner step must be less than or equal to max - min"
        );
    }

    #[test]
    fn set_value_clamps() {
        let mut v = BoundedValue::new(1.0, 10.0, 2.0, 0);
        assert_eq!(v.set_value(0.0), None);
        assert_eq!(v.value(), 1.0);
        assert_eq!(v.set_value(11.0), Some(10.0));
        assert_eq!(v.value(), 10.0);
        assert_eq!(v.set_value(0.0), Some(1.0));
        assert_eq!(v.value(), 1.0);
    }

    #[test]
    fn set_value_is_idempotent() {
        let mut v = BoundedValue::new(1.0, 4.0, 1.0, 0);
        assert_eq!(v.set_value(2.0), Some(2.0));
        assert_eq!(v.set_value(2.0), None);
        assert_eq!(v.set_value(f64::NAN), None);
        assert_eq!(v.value(), 2.0);
    }

    #[test]
    fn clamping_holds_for_any_input() {
        let mut v = BoundedValue::new(-2.5, 7.25, 0.5, 2);
        for x in [-1e9, -2.6, -2.5, 0.0, 3.3, 7.25, 7.26, 1e9, f64::INFINITY, f64::NEG_INFINITY] {
            v.set_value(x);
            assert!(v.min() <= v.value() && v.value() <= v.max(), "{x} -> {}", v.value());
        }
    }

    #[test]
    fn increment_saturates_at_max() {
        let mut v = BoundedValue::new(4.0, 10.0, 5.0, 0);
        assert_eq!(v.value(), 4.0);
        assert_eq!(v.increment(), Some(9.0));
        assert_eq!(v.increment(), Some(10.0));
        assert!(v.at_max());
        assert_eq!(v.increment(), None);
        assert_eq!(v.value(), 10.0);
    }

    #[test]
    fn decrement_saturates_at_min() {
        let mut v = BoundedValue::new(1.0, 4.0, 2.0, 0);
        v.set_value(4.0);
        assert_eq!(v.decrement(), Some(2.0));
        assert_eq!(v.decrement(), Some(1.0));
        assert!(v.at_min());
        assert_eq!(v.decrement(), None);
    }

    #[test]
    fn repeated_increment_reaches_max() {
        let mut v = BoundedValue::new(-1.0, 400.0, 10.3, 1);
        let mut steps = 0;
        while v.increment().is_some() {
            steps += 1;
            assert!(steps < 100);
        }
        assert!(v.at_max());
        assert_eq!(v.value(), 400.0);
    }

    #[test]
    fn disabled_value_ignores_mutation() {
        let mut v = BoundedValue::new(1.0, 4.0, 1.0, 0);
        v.set_enabled(false);
        assert_eq!(v.increment(), None);
        assert_eq!(v.set_value(3.0), None);
        assert_eq!(v.value(), 1.0);
        v.set_enabled(true);
        assert_eq!(v.increment(), Some(2.0));
    }

    #[test]
    fn set_bounds_initializes_and_resets_to_min() {
        let mut v = BoundedValue::uninitialized(0);
        assert_eq!(v.set_bounds(4.0, 1.0, 1.0), Err(BoundsError::MinNotBelowMax));
        assert!(!v.initialized());
        assert_eq!(v.min(), 4.0);
        assert_eq!(v.max(), 1.0);
        assert_eq!(v.value(), 0.0);

        assert_eq!(v.set_bounds(1.0, 4.0, 1.0), Ok(Some(1.0)));
        assert!(v.initialized());
        assert_eq!(v.value(), 1.0);
        // still disabled: bounds do not toggle the gate
        assert!(!v.enabled());
    }

    #[test]
    fn set_bounds_rehomes_existing_value() {
        let mut v = BoundedValue::new(0.0, 100.0, 1.0, 0);
        v.set_value(50.0);
        assert_eq!(v.set_bounds(10.0, 60.0, 5.0), Ok(Some(10.0)));
        assert_eq!(v.value(), 10.0);
        assert_eq!(v.set_bounds(10.0, 20.0, 5.0), Ok(None));
        assert_eq!(v.set_bounds(10.0, 20.0, 50.0), Err(BoundsError::StepTooLarge));
        assert!(!v.initialized());
        assert_eq!(v.set_value(15.0), None);
    }

    #[test]
    fn at_min_and_max_track_value() {
        let mut v = BoundedValue::new(0.0, 2.0, 1.0, 0);
        assert!(v.at_min());
        assert!(!v.at_max());
        v.increment();
        assert!(!v.at_min());
        assert!(!v.at_max());
        v.increment();
        assert!(v.at_max());
    }

    #[test]
    fn texts_follow_precision() {
        let mut v = BoundedValue::new(-1.0, 400.0, 10.3, 1);
        assert_eq!(v.min_text(), "-1.0");
        assert_eq!(v.max_text(), "400.0");
        v.increment();
        assert_eq!(v.value_text(), "9.3");

        let mut v = BoundedValue::new(0.0, 10.0, 1.0, 0);
        v.set_value(3.99);
        assert_eq!(v.value_text(), "3");
    }

    #[test]
    fn validate_text_checks_number_and_range() {
        let ints = BoundedValue::new(1.0, 10.0, 1.0, 0);
        assert_eq!(ints.validate_text("5"), Ok(5.0));
        assert_eq!(ints.validate_text("10"), Ok(10.0));
        assert_eq!(ints.validate_text("0"), Err(EntryError::OutOfRange));
        assert_eq!(ints.validate_text("11"), Err(EntryError::OutOfRange));
        assert_eq!(ints.validate_text("5a"), Err(EntryError::NotANumber));

        let floats = BoundedValue::new(0.0, 9.0, 1.0, 1);
        assert_eq!(floats.validate_text("0.0"), Ok(0.0));
        assert_eq!(floats.validate_text("9.1"), Err(EntryError::OutOfRange));
        assert_eq!(floats.validate_text("-1.0"), Err(EntryError::OutOfRange));
        assert_eq!(floats.validate_text(""), Err(EntryError::NotANumber));
    }
}
