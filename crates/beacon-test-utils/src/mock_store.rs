// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory broadcast and template stores for deterministic testing.
//!
//! `MockBroadcastStore` records every call it receives and can be told to
//! fail the next call of a given kind, which is how partial failures of
//! multi-call operations are exercised.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use beacon_core::{
    BeaconError, BroadcastMessage, BroadcastStatus, BroadcastStore, BroadcastUpdate, Clock,
    ResourceKind, SystemClock, Template, TemplateStore,
};

/// Store operation kinds, used to target failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Create,
    Get,
    List,
    Update,
    UpdateStatus,
}

/// One call received by [`MockBroadcastStore`], with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create {
        service_id: String,
        template_id: String,
    },
    Get {
        service_id: String,
        id: String,
    },
    List {
        service_id: String,
    },
    Update {
        service_id: String,
        id: String,
        update: BroadcastUpdate,
    },
    UpdateStatus {
        service_id: String,
        id: String,
        status: BroadcastStatus,
    },
}

impl StoreCall {
    pub fn op(&self) -> StoreOp {
        match self {
            StoreCall::Create { .. } => StoreOp::Create,
            StoreCall::Get { .. } => StoreOp::Get,
            StoreCall::List { .. } => StoreOp::List,
            StoreCall::Update { .. } => StoreOp::Update,
            StoreCall::UpdateStatus { .. } => StoreOp::UpdateStatus,
        }
    }
}

/// A broadcast store held in memory.
///
/// Messages are keyed by id; calls naming a different service get
/// `NotFound`, as a remote store would answer.
pub struct MockBroadcastStore {
    messages: Arc<Mutex<HashMap<String, BroadcastMessage>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
    failures: Arc<Mutex<HashSet<StoreOp>>>,
    clock: Arc<dyn Clock>,
}

impl MockBroadcastStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Use `clock` for `created_at` and `updated_at` stamps.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            messages: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(HashSet::new())),
            clock,
        }
    }

    /// Seed a message as if it had been created earlier.
    pub async fn insert(&self, message: BroadcastMessage) {
        self.messages
            .lock()
            .await
            .insert(message.id.clone(), message);
    }

    /// Current stored state of `id`, bypassing the call log.
    pub async fn snapshot(&self, id: &str) -> Option<BroadcastMessage> {
        self.messages.lock().await.get(id).cloned()
    }

    /// Every call received so far, in order.
    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().await.clone()
    }

    pub async fn clear_calls(&self) {
        self.calls.lock().await.clear();
    }

    /// Make the next call of kind `op` fail with a store error.
    ///
    /// The failing call is still recorded and leaves the stored data untouched.
    pub async fn fail_next(&self, op: StoreOp) {
        self.failures.lock().await.insert(op);
    }

    async fn record(&self, call: StoreCall) -> Result<(), BeaconError> {
        let op = call.op();
        self.calls.lock().await.push(call);
        if self.failures.lock().await.remove(&op) {
            tracing::debug!(?op, "injected store failure");
            return Err(BeaconError::store(format!("injected {op:?} failure")));
        }
        Ok(())
    }

    async fn modify<F>(
        &self,
        service_id: &str,
        id: &str,
        apply: F,
    ) -> Result<BroadcastMessage, BeaconError>
    where
        F: FnOnce(&mut BroadcastMessage) + Send,
    {
        let mut messages = self.messages.lock().await;
        let message = messages
            .get_mut(id)
            .filter(|message| message.service_id == service_id)
            .ok_or_else(|| not_found(id))?;
        apply(message);
        message.updated_at = Some(self.clock.now());
        Ok(message.clone())
    }
}

impl Default for MockBroadcastStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &str) -> BeaconError {
    BeaconError::NotFound {
        kind: ResourceKind::BroadcastMessage,
        id: id.to_string(),
    }
}

#[async_trait]
impl BroadcastStore for MockBroadcastStore {
    async fn create(
        &self,
        service_id: &str,
        template_id: &str,
    ) -> Result<BroadcastMessage, BeaconError> {
        self.record(StoreCall::Create {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
        })
        .await?;

        let mut message = BroadcastMessage::draft(
            uuid::Uuid::new_v4().to_string(),
            service_id,
            template_id,
        );
        message.template_version = Some(1);
        message.created_at = Some(self.clock.now());
        self.insert(message.clone()).await;
        Ok(message)
    }

    async fn get(
        &self,
        service_id: &str,
        broadcast_message_id: &str,
    ) -> Result<BroadcastMessage, BeaconError> {
        self.record(StoreCall::Get {
            service_id: service_id.to_string(),
            id: broadcast_message_id.to_string(),
        })
        .await?;

        self.messages
            .lock()
            .await
            .get(broadcast_message_id)
            .filter(|message| message.service_id == service_id)
            .cloned()
            .ok_or_else(|| not_found(broadcast_message_id))
    }

    async fn list(&self, service_id: &str) -> Result<Vec<BroadcastMessage>, BeaconError> {
        self.record(StoreCall::List {
            service_id: service_id.to_string(),
        })
        .await?;

        let mut messages: Vec<BroadcastMessage> = self
            .messages
            .lock()
            .await
            .values()
            .filter(|message| message.service_id == service_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(messages)
    }

    async fn update(
        &self,
        service_id: &str,
        broadcast_message_id: &str,
        update: BroadcastUpdate,
    ) -> Result<BroadcastMessage, BeaconError> {
        self.record(StoreCall::Update {
            service_id: service_id.to_string(),
            id: broadcast_message_id.to_string(),
            update: update.clone(),
        })
        .await?;

        self.modify(service_id, broadcast_message_id, |message| {
            update.apply_to(message)
        })
        .await
    }

    async fn update_status(
        &self,
        service_id: &str,
        broadcast_message_id: &str,
        status: BroadcastStatus,
    ) -> Result<BroadcastMessage, BeaconError> {
        self.record(StoreCall::UpdateStatus {
            service_id: service_id.to_string(),
            id: broadcast_message_id.to_string(),
            status,
        })
        .await?;

        self.modify(service_id, broadcast_message_id, |message| {
            message.stored_status = status;
        })
        .await
    }
}

/// Versioned templates held in memory.
#[derive(Default)]
pub struct MockTemplateStore {
    templates: Mutex<HashMap<String, Vec<Template>>>,
}

impl MockTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one version of a template.
    pub async fn insert(&self, template: Template) {
        self.templates
            .lock()
            .await
            .entry(template.id.clone())
            .or_default()
            .push(template);
    }
}

#[async_trait]
impl TemplateStore for MockTemplateStore {
    /// `None` returns the highest version.
    async fn get(
        &self,
        _service_id: &str,
        template_id: &str,
        version: Option<i64>,
    ) -> Result<Template, BeaconError> {
        let templates = self.templates.lock().await;
        let versions = templates.get(template_id).map(Vec::as_slice).unwrap_or_default();
        let found = match version {
            Some(version) => versions.iter().find(|t| t.version == version),
            None => versions.iter().max_by_key(|t| t.version),
        };
        found.cloned().ok_or_else(|| BeaconError::NotFound {
            kind: ResourceKind::Template,
            id: template_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MockBroadcastStore::new();
        let created = store.create("service-1", "template-1").await.unwrap();
        assert_eq!(created.stored_status, BroadcastStatus::Draft);

        let fetched = store.get("service-1", &created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(store.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn other_service_cannot_see_message() {
        let store = MockBroadcastStore::new();
        let created = store.create("service-1", "template-1").await.unwrap();
        let err = store.get("service-2", &created.id).await.unwrap_err();
        assert!(matches!(err, BeaconError::NotFound { kind: ResourceKind::BroadcastMessage, .. }));
        assert!(store.list("service-2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn injected_failure_fires_once_and_leaves_data_alone() {
        let store = MockBroadcastStore::new();
        let created = store.create("service-1", "template-1").await.unwrap();

        store.fail_next(StoreOp::UpdateStatus).await;
        let err = store
            .update_status("service-1", &created.id, BroadcastStatus::Broadcasting)
            .await
            .unwrap_err();
        assert!(matches!(err, BeaconError::Store { .. }));
        assert_eq!(
            store.snapshot(&created.id).await.unwrap().stored_status,
            BroadcastStatus::Draft
        );

        let updated = store
            .update_status("service-1", &created.id, BroadcastStatus::Broadcasting)
            .await
            .unwrap();
        assert_eq!(updated.stored_status, BroadcastStatus::Broadcasting);
    }

    #[tokio::test]
    async fn templates_resolve_by_version() {
        let store = MockTemplateStore::new();
        for version in [1, 2] {
            store
                .insert(Template {
                    id: "t".to_string(),
                    name: "Flood".to_string(),
                    version,
                    content: format!("v{version}"),
                })
                .await;
        }
        assert_eq!(store.get("s", "t", Some(1)).await.unwrap().content, "v1");
        assert_eq!(store.get("s", "t", None).await.unwrap().content, "v2");
        assert!(store.get("s", "t", Some(3)).await.is_err());
        assert!(store.get("s", "missing", None).await.is_err());
    }
}
