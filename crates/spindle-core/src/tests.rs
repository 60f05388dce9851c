#[cfg(test)]
mod tests {
    use crate::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn bound(min: f64, max: f64, step: f64, initial: f64) -> (SpinnerData, SharedFloat) {
        let source = SharedFloat::new(initial);
        let data = SpinnerData::with_binding(min, max, step, 0, Arc::new(source.clone()));
        flush_notifications().unwrap();
        (data, source)
    }

    #[test]
    fn test_scenario_saturating_increment() {
        let data = SpinnerData::new(4.0, 10.0, 5.0, 0);
        assert_eq!(data.value(), 4.0);
        data.increment();
        assert_eq!(data.value(), 9.0);
        data.increment();
        assert_eq!(data.value(), 10.0);
        assert!(data.at_max());
        data.increment();
        assert_eq!(data.value(), 10.0);
    }

    #[test]
    fn test_scenario_clamping() {
        let data = SpinnerData::new(1.0, 10.0, 2.0, 0);
        data.set_value(0.0);
        assert_eq!(data.value(), 1.0);
        data.set_value(11.0);
        assert_eq!(data.value(), 10.0);
    }

    #[test]
    fn test_bind_pulls_external_value() {
        let (data, source) = bound(1.0, 12.0, 1.0, 10.0);
        assert_eq!(data.value(), 10.0);
        assert_eq!(source.get(), Ok(10.0));
        assert!(data.is_bound());
    }

    #[test]
    fn test_bind_converges_out_of_range_value() {
        let (data, source) = bound(1.0, 5.0, 1.0, 7.0);
        assert_eq!(data.value(), 5.0);
        assert_eq!(source.get(), Ok(5.0));

        source.set(-3.0).unwrap();
        flush_notifications().unwrap();
        assert_eq!(data.value(), 1.0);
        assert_eq!(source.get(), Ok(1.0));
    }

    #[test]
    fn test_external_changes_flow_in() {
        let (data, source) = bound(1.0, 12.0, 1.0, 1.0);
        source.set(10.0).unwrap();
        flush_notifications().unwrap();
        assert_eq!(data.value(), 10.0);
    }

    #[test]
    fn test_internal_changes_flow_out() {
        let (data, source) = bound(1.0, 12.0, 1.0, 1.0);
        data.set_value(4.0);
        assert_eq!(source.get(), Ok(4.0));
        data.increment();
        assert_eq!(source.get(), Ok(5.0));
    }

    #[test]
    fn test_binding_does_not_echo() {
        let (data, source) = bound(0.0, 100.0, 1.0, 0.0);
        let changes = Arc::new(Mutex::new(Vec::new()));
        data.set_on_changed(Some({
            let changes = changes.clone();
            Arc::new(move |v| changes.lock().push(v))
        }));
        data.set_value(3.0);
        source.set(8.0).unwrap();
        flush_notifications().unwrap();
        assert_eq!(*changes.lock(), vec![3.0, 8.0]);
        assert_eq!(source.get(), Ok(8.0));
    }

    #[test]
    fn test_unbind_freezes_value() {
        let (data, source) = bound(1.0, 12.0, 1.0, 1.0);
        data.set_value(4.0);
        data.unbind();
        assert!(!data.is_bound());
        assert_eq!(source.listener_count(), 0);

        source.set(6.0).unwrap();
        flush_notifications().unwrap();
        assert_eq!(data.value(), 4.0);

        data.set_value(9.0);
        assert_eq!(source.get(), Ok(6.0));
    }

    #[test]
    fn test_rebind_replaces_link() {
        let (data, first) = bound(0.0, 10.0, 1.0, 2.0);
        let second = SharedFloat::new(6.0);
        data.bind(Arc::new(second.clone()));
        flush_notifications().unwrap();
        assert_eq!(first.listener_count(), 0);
        assert_eq!(second.listener_count(), 1);
        assert_eq!(data.value(), 6.0);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let (data, source) = bound(0.0, 10.0, 1.0, 2.0);
        assert_eq!(source.listener_count(), 1);
        drop(data);
        assert_eq!(source.listener_count(), 0);
        source.set(3.0).unwrap();
        flush_notifications().unwrap();
    }

    #[test]
    fn test_disabled_value_ignores_binding() {
        let (data, source) = bound(0.0, 10.0, 1.0, 2.0);
        data.set_enabled(false);
        source.set(7.0).unwrap();
        flush_notifications().unwrap();
        assert_eq!(data.value(), 2.0);
    }

    #[test]
    fn test_from_config() {
        let data = SpinnerData::from_config(&SpinnerConfig::new(-2.0, 16.0, 3.0, 0));
        data.increment();
        assert_eq!(data.value_text(), "1");
        assert_eq!(data.min_text(), "-2");
        assert_eq!(data.max_text(), "16");
    }
}
