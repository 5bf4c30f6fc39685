use bill_reminder_domain::{RecurrenceRule, ReminderPayload, ReminderSeries};
use bill_reminder_infra::{
    Config, IKeyValueStore, InMemoryAlarmService, InMemoryKeyValueStore, InMemoryNotifier,
    MockSys, ReminderContext, Repos,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub const NOW: i64 = 1_613_862_000_000;
pub const SECOND: i64 = 1000;
pub const HOUR: i64 = 60 * 60 * SECOND;
pub const DAY: i64 = 24 * HOUR;

pub struct TestContext {
    pub ctx: ReminderContext,
    pub sys: Arc<MockSys>,
    pub alarm_service: Arc<InMemoryAlarmService>,
    pub notifier: Arc<InMemoryNotifier>,
}

pub fn setup() -> TestContext {
    setup_with_store(Arc::new(InMemoryKeyValueStore::new()))
}

pub fn setup_with_store(store: Arc<dyn IKeyValueStore>) -> TestContext {
    let sys = Arc::new(MockSys::new(NOW));
    let alarm_service = Arc::new(InMemoryAlarmService::new());
    let notifier = Arc::new(InMemoryNotifier::new());
    let config = Config {
        port: 0,
        store_dir: None,
        notification_webhook_url: None,
        notification_timeout: std::time::Duration::from_secs(1),
        wake_permission_granted: true,
    };
    let ctx = ReminderContext::new(
        Repos::create(store),
        config,
        sys.clone(),
        alarm_service.clone(),
        notifier.clone(),
    );

    TestContext {
        ctx,
        sys,
        alarm_service,
        notifier,
    }
}

/// Store whose namespaces can be made to fail on demand
#[derive(Default)]
pub struct FlakyKeyValueStore {
    inner: InMemoryKeyValueStore,
    failing: Mutex<HashSet<String>>,
}

impl FlakyKeyValueStore {
    pub fn fail(&self, namespace: &str) {
        self.failing.lock().unwrap().insert(namespace.to_string());
    }

    fn check(&self, namespace: &str) -> anyhow::Result<()> {
        if self.failing.lock().unwrap().contains(namespace) {
            anyhow::bail!("Storage for {} is unavailable", namespace);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl IKeyValueStore for FlakyKeyValueStore {
    async fn get(&self, namespace: &str, key: &str) -> anyhow::Result<Option<String>> {
        self.check(namespace)?;
        self.inner.get(namespace, key).await
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> anyhow::Result<()> {
        self.check(namespace)?;
        self.inner.set(namespace, key, value).await
    }
}

pub fn payload_factory(
    owner: &str,
    rule: RecurrenceRule,
    sequence: u32,
    cap: Option<u32>,
) -> ReminderPayload {
    ReminderPayload {
        notification_id: 42,
        title: "Electricity".into(),
        body: "Electricity bill due".into(),
        series: ReminderSeries {
            series_id: "power".into(),
            owner_user_id: owner.into(),
            title: "Electricity".into(),
            vendor: "PowerCo".into(),
            amount_minor: 8950,
            recurring: rule.is_recurring(),
            rule_name: rule.as_str().into(),
            rule,
            max_occurrences: cap,
            sequence,
        },
    }
}
