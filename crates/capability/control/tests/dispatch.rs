use async_trait::async_trait;
use domain::{DisplayRequest, EncodedCommand, endpoints};
use ledfleet_control::{
    ControlError, DeviceTransport, DispatchConfig, DispatchController, TransportError,
};
use ledfleet_storage::{DeviceRecord, DeviceStore, InMemoryDeviceStore};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// 按 hostname 决定行为的假传输层，记录每次收到的命令。
#[derive(Default)]
struct ScriptedTransport {
    delays_ms: HashMap<String, u64>,
    failing: Vec<String>,
    received: Mutex<Vec<(String, EncodedCommand)>>,
}

impl ScriptedTransport {
    fn received(&self) -> Vec<(String, EncodedCommand)> {
        self.received.lock().expect("lock").clone()
    }
}

#[async_trait]
impl DeviceTransport for ScriptedTransport {
    async fn send(
        &self,
        device: &DeviceRecord,
        command: &EncodedCommand,
    ) -> Result<(), TransportError> {
        if let Some(delay) = self.delays_ms.get(&device.hostname) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }
        if self.failing.contains(&device.hostname) {
            return Err(TransportError::Connect("connection refused".to_string()));
        }
        self.received
            .lock()
            .expect("lock")
            .push((device.hostname.clone(), command.clone()));
        Ok(())
    }
}

async fn registry(hosts: &[&str]) -> Arc<InMemoryDeviceStore> {
    let store = Arc::new(InMemoryDeviceStore::new());
    for host in hosts {
        store.add_device(host, "8000").await.expect("add");
    }
    store
}

#[tokio::test]
async fn broadcast_isolates_failures_and_keeps_registration_order() {
    let devices = registry(&["pi-1", "pi-2", "pi-3"]).await;
    let transport = Arc::new(ScriptedTransport {
        // 先登记的设备应答最慢，结果仍按登记顺序返回
        delays_ms: HashMap::from([("pi-1".to_string(), 60), ("pi-3".to_string(), 5)]),
        failing: vec!["pi-2".to_string()],
        ..Default::default()
    });
    let controller = DispatchController::new(devices, transport.clone());

    let results = controller
        .broadcast(DisplayRequest::Clear)
        .await
        .expect("broadcast");

    let hosts: Vec<&str> = results.iter().map(|r| r.device.hostname.as_str()).collect();
    assert_eq!(hosts, vec!["pi-1", "pi-2", "pi-3"]);
    assert!(results[0].succeeded);
    assert!(!results[1].succeeded);
    assert!(
        results[1]
            .error_detail
            .as_deref()
            .is_some_and(|detail| detail.contains("connection refused"))
    );
    assert!(results[2].succeeded);
    assert_eq!(results[2].error_detail, None);

    let mut observed: Vec<String> = transport
        .received()
        .into_iter()
        .map(|(host, command)| {
            assert_eq!(command.endpoint, endpoints::CLEAR);
            assert_eq!(command.body, None);
            host
        })
        .collect();
    observed.sort();
    assert_eq!(observed, vec!["pi-1", "pi-3"]);
}

#[tokio::test]
async fn hung_device_times_out_without_stalling_others() {
    let devices = registry(&["fast", "hung"]).await;
    let transport = Arc::new(ScriptedTransport {
        delays_ms: HashMap::from([("hung".to_string(), 10_000)]),
        ..Default::default()
    });
    let controller = DispatchController::new_with_config(
        devices,
        transport,
        DispatchConfig { timeout_ms: 50 },
    );

    let started = std::time::Instant::now();
    let results = controller
        .broadcast(DisplayRequest::heart(vec![255, 0, 0]))
        .await
        .expect("broadcast");
    assert!(started.elapsed() < Duration::from_secs(5));

    assert!(results[0].succeeded);
    assert!(!results[1].succeeded);
    assert_eq!(results[1].error_detail.as_deref(), Some("timed out after 50 ms"));
}

#[tokio::test]
async fn invalid_color_is_rejected_before_any_send() {
    let devices = registry(&["pi-1"]).await;
    let device = devices.list_devices().await.expect("list").remove(0);
    let transport = Arc::new(ScriptedTransport::default());
    let controller = DispatchController::new(devices, transport.clone());

    let err = controller
        .dispatch_to(&device, DisplayRequest::text("hi", vec![300, 0, 0], "alice"))
        .await
        .expect_err("out of range");
    assert_eq!(err.code(), "VALIDATION.COLOR_RANGE");

    let err = controller
        .broadcast(DisplayRequest::smiley("", vec![1, 2, 3]))
        .await
        .expect_err("empty mood");
    assert!(matches!(err, ControlError::Validation(_)));

    assert!(transport.received().is_empty());
}

#[tokio::test]
async fn dispatch_to_sends_encoded_body() {
    let devices = registry(&["pi-1"]).await;
    let device = devices.list_devices().await.expect("list").remove(0);
    let transport = Arc::new(ScriptedTransport::default());
    let controller = DispatchController::new(devices, transport.clone());

    let result = controller
        .dispatch_to(&device, DisplayRequest::smiley("happy", vec![0, 255, 0]))
        .await
        .expect("valid");
    assert!(result.succeeded);
    assert_eq!(result.device, device);

    let received = transport.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].1.endpoint, endpoints::SET_SMILEY);
    assert_eq!(
        received[0].1.body,
        Some(json!({ "mood": "happy", "color": [0, 255, 0] }))
    );
}

#[tokio::test]
async fn dispatch_to_unknown_id_is_reported() {
    let devices = registry(&["pi-1"]).await;
    let controller = DispatchController::new(devices, Arc::new(ScriptedTransport::default()));
    let err = controller
        .dispatch_to_id(42, DisplayRequest::Clear)
        .await
        .expect_err("unknown");
    assert!(matches!(err, ControlError::UnknownDevice(42)));
}

#[tokio::test]
async fn broadcast_to_empty_registry_returns_no_results() {
    let devices = registry(&[]).await;
    let transport = Arc::new(ScriptedTransport::default());
    let controller = DispatchController::new(devices, transport.clone());
    let results = controller
        .broadcast(DisplayRequest::Clear)
        .await
        .expect("broadcast");
    assert!(results.is_empty());
    assert!(transport.received().is_empty());
}

/// 向 `pi-1` 发送时改写登记表：移除其余设备并登记新设备。
struct MutatingTransport {
    devices: Arc<InMemoryDeviceStore>,
    contacted: Mutex<Vec<String>>,
}

#[async_trait]
impl DeviceTransport for MutatingTransport {
    async fn send(
        &self,
        device: &DeviceRecord,
        _command: &EncodedCommand,
    ) -> Result<(), TransportError> {
        if device.hostname == "pi-1" {
            for other in self.devices.list_devices().await.expect("list") {
                if other.hostname != "pi-1" {
                    self.devices.remove_device(other.id).await.expect("remove");
                }
            }
            self.devices.add_device("pi-late", "8000").await.expect("add");
        }
        self.contacted
            .lock()
            .expect("lock")
            .push(device.hostname.clone());
        Ok(())
    }
}

#[tokio::test]
async fn broadcast_uses_registry_snapshot_taken_at_start() {
    let devices = registry(&["pi-1", "pi-2", "pi-3"]).await;
    let transport = Arc::new(MutatingTransport {
        devices: devices.clone(),
        contacted: Mutex::new(Vec::new()),
    });
    let controller = DispatchController::new(devices.clone(), transport.clone());

    let results = controller
        .broadcast(DisplayRequest::Clear)
        .await
        .expect("broadcast");

    let outcome: Vec<(&str, bool)> = results
        .iter()
        .map(|r| (r.device.hostname.as_str(), r.succeeded))
        .collect();
    assert_eq!(
        outcome,
        vec![("pi-1", true), ("pi-2", true), ("pi-3", true)]
    );

    let mut contacted = transport.contacted.lock().expect("lock").clone();
    contacted.sort();
    assert_eq!(contacted, vec!["pi-1", "pi-2", "pi-3"]);

    let remaining: Vec<String> = devices
        .list_devices()
        .await
        .expect("list")
        .into_iter()
        .map(|device| device.hostname)
        .collect();
    assert_eq!(remaining, vec!["pi-1", "pi-late"]);
}
