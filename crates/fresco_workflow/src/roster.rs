//! Character roster reconciliation.

use fresco_core::CharacterSlot;
use fresco_interface::{CharacterRecord, CharacterWrite};

/// The story's character slots, sized to the character target.
///
/// The roster is rebuilt by [`CharacterRoster::reconcile`] whenever server
/// records arrive or the target changes; in-between, slot edits mutate it in
/// place. Its length always equals the target, so consumers can render a
/// fixed set of slots without bounds juggling.
///
/// # Examples
///
/// ```
/// use fresco_workflow::CharacterRoster;
///
/// let roster = CharacterRoster::reconcile(&[], &CharacterRoster::default(), 3);
/// assert_eq!(roster.len(), 3);
/// assert!(!roster.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterRoster {
    slots: Vec<CharacterSlot>,
}

impl CharacterRoster {
    /// Reconcile server records with local in-progress edits.
    ///
    /// Server records map to slots in returned order; the roster is padded
    /// with blank unpersisted slots up to `target` and truncated from the
    /// tail when over it. A local edit survives when its slot carries the
    /// same backend id as the incoming record, or when both sides are
    /// unpersisted at the same index.
    pub fn reconcile(
        records: &[CharacterRecord],
        previous: &CharacterRoster,
        target: u32,
    ) -> CharacterRoster {
        let target = target.max(1) as usize;
        let mut slots = Vec::with_capacity(target);

        for (index, record) in records.iter().take(target).enumerate() {
            let local = previous
                .slots
                .iter()
                .find(|slot| slot.id().as_persisted() == Some(record.id.as_str()));
            let slot = match local {
                Some(edited) => edited.clone(),
                None => {
                    // No local edit for this record; the index may still hold
                    // an unpersisted draft slot that the record supersedes.
                    match previous.slots.get(index) {
                        Some(draft)
                            if draft.id().as_persisted().is_none() && !draft.is_blank() =>
                        {
                            let mut slot = draft.clone();
                            slot.assign_id(record.id.clone());
                            slot
                        }
                        _ => CharacterSlot::persisted(
                            record.id.clone(),
                            record.name.clone(),
                            record.description.clone(),
                            record.image_ref.clone(),
                        ),
                    }
                }
            };
            slots.push(slot);
        }

        while slots.len() < target {
            let index = slots.len();
            let pad = match previous.slots.get(index) {
                Some(draft) if draft.id().as_persisted().is_none() => draft.clone(),
                _ => CharacterSlot::default(),
            };
            slots.push(pad);
        }

        CharacterRoster { slots }
    }

    /// Slots in roster order.
    pub fn slots(&self) -> &[CharacterSlot] {
        &self.slots
    }

    /// Number of slots; equal to the character target after reconciliation.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the roster holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Apply an edit to the slot at `index`.
    ///
    /// Returns false when the index is out of range.
    pub fn update(&mut self, index: usize, edit: impl FnOnce(&mut CharacterSlot)) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                edit(slot);
                true
            }
            None => false,
        }
    }

    /// Number of slots still missing a name, description, or image.
    pub fn incomplete_count(&self) -> u32 {
        self.slots.iter().filter(|slot| !slot.is_complete()).count() as u32
    }

    /// Whether every slot has a name, description, and image.
    pub fn is_complete(&self) -> bool {
        self.incomplete_count() == 0
    }

    /// Assemble the batched save: persisted slots become updates,
    /// unpersisted slots become creates.
    pub fn writes(&self) -> Vec<CharacterWrite> {
        self.slots
            .iter()
            .map(|slot| CharacterWrite {
                id: slot.id().as_persisted().map(str::to_string),
                name: slot.name().clone(),
                description: slot.description().clone(),
                image_ref: slot.image_ref().clone(),
            })
            .collect()
    }

    /// Write backend-assigned ids back into the roster after a save.
    ///
    /// The save response returns the full record set in roster order, so
    /// ids are absorbed positionally; slots beyond the response keep their
    /// current identity.
    pub fn absorb_ids(&mut self, records: &[CharacterRecord]) {
        for (slot, record) in self.slots.iter_mut().zip(records) {
            slot.assign_id(record.id.clone());
        }
    }
}
