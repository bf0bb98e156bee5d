use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::modules::commitments::models::Commitment;

/// Sparse update applied to a stored commitment. Only set fields are written.
///
/// The engine itself only ever patches `group_id` (stamping the anchor when a
/// series is created); the other fields exist for the edit workflow that owns
/// the denormalized `status` hint and the legacy `paid` flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
}

impl CommitmentPatch {
    /// Patch that only stamps a group id on the record
    pub fn set_group(group_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.group_id.is_none() && self.status.is_none() && self.paid.is_none()
    }
}

/// Boundary contract with the external commitment store.
///
/// Batched operations must be atomic: either every record in the batch is
/// durably written/removed or none is. Implementations that cannot offer
/// multi-record atomicity must still take the whole batch in one call and
/// report partial failure as an error instead of swallowing it.
#[async_trait]
pub trait CommitmentStore: Send + Sync {
    /// Fetch a single commitment by id
    async fn get_commitment(&self, id: &str) -> Result<Option<Commitment>>;

    /// Atomically create a batch of commitment records
    async fn batch_create_commitments(&self, drafts: &[Commitment]) -> Result<()>;

    /// Atomically delete a batch of commitment records by id
    async fn batch_delete_commitments(&self, ids: &[String]) -> Result<()>;

    /// Apply a sparse patch to a single commitment
    async fn update_commitment(&self, id: &str, patch: &CommitmentPatch) -> Result<()>;

    /// All commitments sharing a recurrence group id
    async fn find_by_group(&self, group_id: &str) -> Result<Vec<Commitment>>;

    /// Field-equality lookup used only as the legacy fallback for records
    /// created before group ids existed. Can match unrelated series that
    /// happen to share the same text; callers must treat it accordingly.
    async fn find_matching(
        &self,
        concept: &str,
        company_id: &str,
        beneficiary: &str,
    ) -> Result<Vec<Commitment>>;
}
