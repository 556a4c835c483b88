use ledfleet_telemetry::{
    TelemetryMetrics, metrics, record_command_applied, record_dispatch_attempt,
    record_dispatch_latency_ms, record_message_persisted,
};

#[test]
fn fresh_metrics_start_at_zero() {
    let snapshot = TelemetryMetrics::new().snapshot();
    assert_eq!(snapshot, Default::default());
}

#[test]
fn recorders_only_increase_global_counters() {
    let before = metrics().snapshot();
    record_dispatch_attempt();
    record_dispatch_latency_ms(12);
    record_command_applied();
    record_message_persisted();
    let after = metrics().snapshot();

    assert!(after.dispatch_attempts > before.dispatch_attempts);
    assert!(after.dispatch_latency_ms_total >= before.dispatch_latency_ms_total + 12);
    assert!(after.dispatch_latency_ms_count > before.dispatch_latency_ms_count);
    assert!(after.commands_applied > before.commands_applied);
    assert!(after.messages_persisted > before.messages_persisted);
}
