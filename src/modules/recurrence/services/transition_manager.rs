use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::core::traits::{CommitmentPatch, CommitmentStore};
use crate::core::{AppError, Result};
use crate::modules::commitments::models::Commitment;
use crate::modules::recurrence::models::TransitionOutcome;
use crate::modules::recurrence::services::{PeriodicityCalendar, RecurrenceExpander};

/// Drives the secondary fan-out when an edit changes a commitment's
/// periodicity: expansion for one-off -> series, batched deletion for
/// series -> one-off.
///
/// Caller contract: invoke [`apply`](Self::apply) only after the primary
/// field update has been persisted. Errors returned here are about the
/// fan-out alone and must not roll back the primary update; the edit
/// workflow reports them as a non-blocking warning. Validation and
/// persistence failures are distinct [`AppError`] variants, and the store is
/// never retried.
pub struct RecurrenceTransitionManager {
    store: Arc<dyn CommitmentStore>,
    config: EngineConfig,
}

impl RecurrenceTransitionManager {
    pub fn new(store: Arc<dyn CommitmentStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// React to a periodicity change between the stored snapshot (`before`)
    /// and the just-persisted edit (`after`).
    ///
    /// A change between two recurring periodicities touches no sibling
    /// records: existing instances keep their dates, and only the record's
    /// own periodicity field (already updated by the caller) differs.
    pub async fn apply(
        &self,
        before: &Commitment,
        after: &Commitment,
    ) -> Result<TransitionOutcome> {
        if before.id != after.id {
            return Err(AppError::validation(format!(
                "Transition snapshots must describe the same commitment, got {} and {}",
                before.id, after.id
            )));
        }

        if before.periodicity == after.periodicity {
            return Ok(TransitionOutcome::Unchanged);
        }

        let was_recurring = before.periodicity.is_recurring();
        let is_recurring = after.periodicity.is_recurring();

        match (was_recurring, is_recurring) {
            (false, true) => self.expand_to_series(after).await,
            (true, false) => self.collapse_to_one_off(after).await,
            _ => {
                debug!(
                    commitment_id = after.id.as_str(),
                    from = %before.periodicity,
                    to = %after.periodicity,
                    "Periodicity changed between recurring rules; no fan-out"
                );
                Ok(TransitionOutcome::Unchanged)
            }
        }
    }

    /// unique -> recurring: the edited record becomes the anchor of a fresh
    /// group. Siblings are generated from its due date (skipping the anchor's
    /// own date), capped at the current year end, written in one batch, and
    /// the group id is stamped on the anchor. The anchor itself is never
    /// deleted or recreated.
    async fn expand_to_series(&self, anchor: &Commitment) -> Result<TransitionOutcome> {
        let cap = PeriodicityCalendar::year_end(anchor.due_date);
        let expansion = RecurrenceExpander::expand(
            anchor,
            self.config.default_extra_instances,
            true,
            cap,
        )?;

        if expansion.is_empty() {
            info!(
                commitment_id = anchor.id.as_str(),
                "No sibling dates fit before year end; anchor stays ungrouped"
            );
            return Ok(TransitionOutcome::Expanded {
                group_id: None,
                created: 0,
            });
        }

        // One logical transaction: the whole sibling set in a single batched
        // write, then the anchor stamp.
        self.store
            .batch_create_commitments(&expansion.drafts)
            .await?;
        self.store
            .update_commitment(&anchor.id, &CommitmentPatch::set_group(&expansion.group_id))
            .await?;

        info!(
            commitment_id = anchor.id.as_str(),
            group_id = expansion.group_id.as_str(),
            created = expansion.len(),
            "Converted one-off commitment into a recurring series"
        );

        Ok(TransitionOutcome::Expanded {
            created: expansion.len(),
            group_id: Some(expansion.group_id),
        })
    }

    /// recurring -> unique: delete every other member of the group as a
    /// batch. Sibling lookup is keyed strictly by `group_id`; the
    /// field-equality match survives only for legacy records that predate
    /// group ids, and can conflate unrelated series that share the same
    /// text. The edited record is never deleted.
    async fn collapse_to_one_off(&self, edited: &Commitment) -> Result<TransitionOutcome> {
        let (siblings, legacy_fallback) = match edited.group_id.as_deref() {
            Some(group_id) => (self.store.find_by_group(group_id).await?, false),
            None => {
                warn!(
                    commitment_id = edited.id.as_str(),
                    concept = edited.concept.as_str(),
                    "Ungrouped record; falling back to ambiguous field-equality sibling lookup"
                );
                (
                    self.store
                        .find_matching(&edited.concept, &edited.company_id, &edited.beneficiary)
                        .await?,
                    true,
                )
            }
        };

        let ids: Vec<String> = siblings
            .into_iter()
            .filter(|sibling| sibling.id != edited.id)
            .map(|sibling| sibling.id)
            .collect();

        if ids.is_empty() {
            debug!(
                commitment_id = edited.id.as_str(),
                "No sibling records to remove on collapse"
            );
            return Ok(TransitionOutcome::Collapsed {
                deleted: 0,
                legacy_fallback,
            });
        }

        self.store.batch_delete_commitments(&ids).await?;

        info!(
            commitment_id = edited.id.as_str(),
            deleted = ids.len(),
            legacy_fallback,
            "Collapsed recurring series back to a one-off"
        );

        Ok(TransitionOutcome::Collapsed {
            deleted: ids.len(),
            legacy_fallback,
        })
    }
}
