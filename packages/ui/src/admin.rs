//! Admin dashboard data: stats and the pending-deposit queue.

use api::{ApiError, ShopApi};
use store::{AdminStats, PendingDeposit};

/// Everything the dashboard shows, fetched in one go.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub stats: AdminStats,
    pub pending: Vec<PendingDeposit>,
}

impl Dashboard {
    /// Fetch revenue stats and pending deposits concurrently.
    pub async fn load(api: &ShopApi) -> Result<Self, ApiError> {
        let (stats, pending) = futures::join!(api.revenue(), api.pending_deposits());
        Ok(Self {
            stats: stats?,
            pending: pending?,
        })
    }

    /// Drop an approved deposit from the queue.
    pub fn approved(&mut self, id: &str) -> bool {
        remove_deposit(&mut self.pending, id)
    }
}

/// Remove exactly the deposit with `id`. Returns whether it was present.
pub fn remove_deposit(pending: &mut Vec<PendingDeposit>, id: &str) -> bool {
    let before = pending.len();
    pending.retain(|d| d.id != id);
    pending.len() != before
}
