//! Generic mutation facade over one entity store.
//!
//! # Responsibility
//! - Turn drafts into records with generated ids and configured defaults.
//! - Emit one change event per completed mutation.
//!
//! # Invariants
//! - Validation and duplicate-id failures return before any store write.
//! - Observers are notified only after the store reflects the change.

use crate::clock::Clock;
use crate::config::KitchenConfig;
use crate::model::record::{Draft, DraftContext, Record, RecordId};
use crate::model::validation::ValidationError;
use crate::notify::event::ChangeEvent;
use crate::notify::notifier::{Notifier, SubscriptionId};
use crate::service::id_policy::IdGenerator;
use crate::store::entity_store::{EntityStore, StoreError, StoreResult};
use crate::store::memory::MemoryStore;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Mutation failure surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Validation(ValidationError),
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Collaborators shared by every service of one kitchen.
#[derive(Clone)]
pub struct ServiceContext {
    pub clock: Arc<dyn Clock>,
    pub config: Arc<KitchenConfig>,
}

impl ServiceContext {
    pub fn new(clock: Arc<dyn Clock>, config: Arc<KitchenConfig>) -> Self {
        Self { clock, config }
    }
}

/// Sole write path into one store.
pub struct CollectionService<T: Record, S: EntityStore<T> = MemoryStore<T>> {
    store: S,
    ids: Box<dyn IdGenerator>,
    ctx: ServiceContext,
    notifier: Notifier<ChangeEvent>,
    _record: PhantomData<T>,
}

impl<T: Record, S: EntityStore<T>> CollectionService<T, S> {
    pub fn new(store: S, ids: Box<dyn IdGenerator>, ctx: ServiceContext) -> Self {
        Self {
            store,
            ids,
            ctx,
            notifier: Notifier::new(),
            _record: PhantomData,
        }
    }

    /// Creates a record from `draft` and returns a copy of it.
    ///
    /// # Errors
    /// - `ServiceError::Validation` when the draft violates a field invariant.
    /// - `ServiceError::Store(DuplicateId)` when the generated id collides;
    ///   the caller may retry.
    pub fn add<D>(&mut self, draft: D) -> ServiceResult<T>
    where
        D: Draft<Output = T>,
    {
        let domain = T::DOMAIN.as_str();
        let id = self.ids.next_id(self.ctx.clock.as_ref());
        let draft_ctx = DraftContext {
            today: self.ctx.clock.today(),
            config: self.ctx.config.as_ref(),
        };

        let record = match draft.build(id.clone(), &draft_ctx) {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    "event=record_add module=service status=error domain={domain} error_code=validation error={err}"
                );
                return Err(err.into());
            }
        };

        if let Err(err) = self.store.insert(record.clone()) {
            warn!(
                "event=record_add module=service status=error domain={domain} id={id} error_code=duplicate_id"
            );
            return Err(err.into());
        }

        info!("event=record_add module=service status=ok domain={domain} id={id}");
        self.notifier.notify(&ChangeEvent::added(T::DOMAIN, id));
        Ok(record)
    }

    /// Removes `id` if present and always notifies.
    ///
    /// Returns whether a record was actually removed.
    pub fn delete(&mut self, id: &RecordId) -> bool {
        let domain = T::DOMAIN.as_str();
        let existed = self.store.remove(id).is_some();
        if existed {
            info!("event=record_delete module=service status=ok domain={domain} id={id}");
        } else {
            debug!(
                "event=record_delete module=service status=noop domain={domain} id={id} reason=absent"
            );
        }
        self.notifier
            .notify(&ChangeEvent::removed(T::DOMAIN, id.clone()));
        existed
    }

    pub fn all(&self) -> Vec<T> {
        self.store.all()
    }

    pub fn get(&self, id: &RecordId) -> StoreResult<T> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn subscribe(&mut self, callback: impl Fn(&ChangeEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
