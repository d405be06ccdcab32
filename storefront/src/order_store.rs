use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::error::StoreError;
use crate::latency::Latency;
use crate::repository::OrderSource;
use crate::types::Order;

pub const FETCH_ORDERS_FAILED: &str = "Failed to fetch orders";

/// Point-in-time view of the order store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderState {
    pub orders: Vec<Order>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Default)]
struct OrderInner {
    orders: Vec<Order>,
    error: Option<String>,
    /// Number of actions currently awaiting their simulated delay
    in_flight: usize,
    /// Stamp of the most recently started list fetch
    list_generation: u64,
}

/// Keeps the store marked as loading for as long as it is alive
struct InFlight {
    inner: Arc<Mutex<OrderInner>>,
}

impl InFlight {
    fn enter(inner: &Arc<Mutex<OrderInner>>) -> Self {
        {
            let mut state = inner.lock();
            state.in_flight += 1;
            state.error = None;
        }
        InFlight {
            inner: Arc::clone(inner),
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut state = self.inner.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

/// Order cache with simulated asynchronous retrieval.
///
/// Cloning yields another handle onto the same cache. `loading` is reference
/// counted across overlapping calls, a list fetch that was superseded by a
/// newer one never overwrites the cache, and `cancel_pending` aborts every call
/// still waiting on its delay.
#[derive(Clone)]
pub struct OrderStore {
    source: Arc<dyn OrderSource>,
    latency: Latency,
    inner: Arc<Mutex<OrderInner>>,
    cancel: Arc<watch::Sender<u64>>,
}

async fn simulate_delay(
    delay: Duration,
    cancel: &mut watch::Receiver<u64>,
) -> Result<(), StoreError> {
    tokio::select! {
        _ = tokio::time::sleep(delay) => Ok(()),
        _ = cancel.changed() => Err(StoreError::Cancelled),
    }
}

impl OrderStore {
    pub fn new(source: Arc<dyn OrderSource>, latency: Latency) -> Self {
        let (cancel, _) = watch::channel(0);
        OrderStore {
            source,
            latency,
            inner: Arc::new(Mutex::new(OrderInner::default())),
            cancel: Arc::new(cancel),
        }
    }

    pub fn state(&self) -> OrderState {
        let inner = self.inner.lock();
        OrderState {
            orders: inner.orders.clone(),
            loading: inner.in_flight > 0,
            error: inner.error.clone(),
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.inner.lock().orders.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.lock().in_flight > 0
    }

    pub fn error(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }

    /// Aborts every action still waiting on its simulated delay.
    /// Aborted actions leave the cache and error untouched.
    pub fn cancel_pending(&self) {
        self.cancel.send_modify(|epoch| *epoch += 1);
        tracing::debug!("Cancelled pending order requests");
    }

    /// Loads the full order list into the cache and returns it.
    /// Returns an empty list on failure or cancellation.
    pub async fn fetch_orders(&self) -> Vec<Order> {
        let mut cancel = self.cancel.subscribe();
        let _in_flight = InFlight::enter(&self.inner);
        let generation = {
            let mut inner = self.inner.lock();
            inner.list_generation += 1;
            inner.list_generation
        };

        match self.load_list(generation, &mut cancel).await {
            Ok(orders) => orders,
            Err(StoreError::Cancelled) => {
                tracing::debug!(generation, "Order list fetch cancelled");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, "Order list fetch failed");
                let mut inner = self.inner.lock();
                if inner.list_generation == generation {
                    inner.error = Some(FETCH_ORDERS_FAILED.to_string());
                }
                Vec::new()
            }
        }
    }

    async fn load_list(
        &self,
        generation: u64,
        cancel: &mut watch::Receiver<u64>,
    ) -> Result<Vec<Order>, StoreError> {
        simulate_delay(self.latency.list, cancel).await?;
        let orders = self.source.load_orders()?;

        let mut inner = self.inner.lock();
        if inner.list_generation == generation {
            inner.orders = orders.clone();
            tracing::debug!(generation, count = orders.len(), "Order cache populated");
        } else {
            tracing::debug!(
                generation,
                latest = inner.list_generation,
                "Discarding superseded order list"
            );
        }
        Ok(orders)
    }

    /// Looks up a single order, filling a cold cache first.
    /// `None` means the order does not exist, the list fetch failed (see
    /// [`OrderStore::error`]) or the call was cancelled.
    pub async fn get_order_by_id(&self, id: &str) -> Option<Order> {
        let mut cancel = self.cancel.subscribe();
        let _in_flight = InFlight::enter(&self.inner);

        if simulate_delay(self.latency.detail, &mut cancel).await.is_err() {
            tracing::debug!(id, "Order lookup cancelled");
            return None;
        }

        let cached = {
            let inner = self.inner.lock();
            if inner.orders.is_empty() {
                None
            } else {
                Some(inner.orders.iter().find(|order| order.id == id).cloned())
            }
        };

        match cached {
            Some(hit) => hit,
            None => {
                tracing::debug!(id, "Order cache cold, fetching list");
                self.fetch_orders()
                    .await
                    .into_iter()
                    .find(|order| order.id == id)
            }
        }
    }
}
