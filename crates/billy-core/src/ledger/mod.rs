//! Editable ledger with staged, commit-or-discard corrections.
//!
//! The ledger holds the committed line items and total. Corrections are
//! staged per item as raw strings and merged into committed state only on
//! an explicit commit: a staged field that parses replaces the committed
//! value, a staged field that does not is dropped and the committed value
//! survives. An edit can therefore never replace valid data with garbage.

mod draft;

pub use draft::{ItemDraft, ItemField, parse_amount};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LedgerError, Result};
use crate::models::receipt::LineItem;

use draft::{parse_description, parse_quantity};

/// One ledger row: the committed item plus its in-progress edit, if any.
/// A draft exists exactly while an edit is open.
#[derive(Debug, Clone)]
struct ItemSlot {
    committed: LineItem,
    draft: Option<ItemDraft>,
}

/// Outcome of committing a single staged field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// The staged value parsed and replaced the committed value.
    Applied,
    /// The staged value was empty or unparseable; the committed value was
    /// kept. Not an error.
    Rejected,
}

impl FieldStatus {
    pub fn is_applied(self) -> bool {
        matches!(self, FieldStatus::Applied)
    }
}

/// Per-field outcome of an item commit, for UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCommit {
    pub quantity: FieldStatus,
    pub description: FieldStatus,
    pub unit_price: FieldStatus,
}

impl ItemCommit {
    /// Fields whose staged values were dropped in favor of the committed
    /// ones.
    pub fn rejected_fields(&self) -> Vec<ItemField> {
        let mut rejected = Vec::new();
        if !self.quantity.is_applied() {
            rejected.push(ItemField::Quantity);
        }
        if !self.description.is_applied() {
            rejected.push(ItemField::Description);
        }
        if !self.unit_price.is_applied() {
            rejected.push(ItemField::UnitPrice);
        }
        rejected
    }

    pub fn all_applied(&self) -> bool {
        self.rejected_fields().is_empty()
    }
}

/// Outcome of committing the staged total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalCommit {
    pub status: FieldStatus,
    /// The total after the commit.
    pub total: Option<Decimal>,
}

/// Committed snapshot of the ledger for display. Never contains staged
/// shadow values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerView {
    pub items: Vec<LineItem>,
    pub total: Option<Decimal>,
}

/// The editable receipt ledger.
///
/// Item order is the order of appearance in the OCR text and is preserved
/// through edits; commits replace an item in place. The total is an
/// independent field: it is never derived from the item sum and the two are
/// allowed to diverge.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    slots: Vec<ItemSlot>,
    total: Option<Decimal>,
    total_draft: Option<String>,
}

impl Ledger {
    /// Build a ledger from extracted items and an optional externally
    /// supplied total.
    pub fn new(items: Vec<LineItem>, total: Option<Decimal>) -> Self {
        Self {
            slots: items
                .into_iter()
                .map(|committed| ItemSlot {
                    committed,
                    draft: None,
                })
                .collect(),
            total,
            total_draft: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The committed item at `index`.
    pub fn item(&self, index: usize) -> Result<&LineItem> {
        self.slot(index).map(|slot| &slot.committed)
    }

    /// Committed items in receipt order.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.slots.iter().map(|slot| &slot.committed)
    }

    pub fn total(&self) -> Option<Decimal> {
        self.total
    }

    /// Committed snapshot for the display layer.
    pub fn view(&self) -> LedgerView {
        LedgerView {
            items: self.items().cloned().collect(),
            total: self.total,
        }
    }

    /// Open an edit for the item at `index`, seeding the draft from the
    /// committed values in display-string form.
    ///
    /// Reopening an already-open edit discards its unsaved shadow values and
    /// reseeds from the still-unchanged committed item.
    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        slot.draft = Some(ItemDraft::seed(&slot.committed));
        debug!(index, "edit opened");
        Ok(())
    }

    /// The open draft for `index`, if any.
    pub fn draft(&self, index: usize) -> Result<Option<&ItemDraft>> {
        self.slot(index).map(|slot| slot.draft.as_ref())
    }

    /// Overwrite one staged field with raw user input. The value is stored
    /// as-is; validation happens at commit.
    pub fn update_field(&mut self, index: usize, field: ItemField, value: &str) -> Result<()> {
        let slot = self.slot_mut(index)?;
        let draft = slot
            .draft
            .as_mut()
            .ok_or(LedgerError::NoOpenEdit { index })?;
        draft.set_field(field, value);
        Ok(())
    }

    /// Merge the staged values for `index` into the committed item and close
    /// the edit.
    ///
    /// Each field is merged independently: a staged value that parses to the
    /// field's type replaces the committed value, one that is empty or fails
    /// to parse is dropped and the committed value is kept. The item
    /// therefore stays valid across any commit.
    pub fn commit_edit(&mut self, index: usize) -> Result<ItemCommit> {
        let slot = self.slot_mut(index)?;
        let draft = slot
            .draft
            .take()
            .ok_or(LedgerError::NoOpenEdit { index })?;

        let quantity = match parse_quantity(&draft.quantity) {
            Some(quantity) => {
                slot.committed.quantity = quantity;
                FieldStatus::Applied
            }
            None => FieldStatus::Rejected,
        };
        let description = match parse_description(&draft.description) {
            Some(description) => {
                slot.committed.description = description;
                FieldStatus::Applied
            }
            None => FieldStatus::Rejected,
        };
        let unit_price = match parse_amount(&draft.unit_price) {
            Some(amount) => {
                slot.committed.unit_price = amount;
                FieldStatus::Applied
            }
            None => FieldStatus::Rejected,
        };

        let outcome = ItemCommit {
            quantity,
            description,
            unit_price,
        };
        debug!(index, ?outcome, "edit committed");
        Ok(outcome)
    }

    /// Discard the open edit for `index`, if any, leaving the committed item
    /// untouched.
    pub fn cancel_edit(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        if slot.draft.take().is_some() {
            debug!(index, "edit cancelled");
        }
        Ok(())
    }

    /// Open an edit for the total, seeding the draft from the committed
    /// total (empty when unset).
    pub fn begin_edit_total(&mut self) {
        self.total_draft = Some(match self.total {
            Some(total) => format!("{:.2}", total),
            None => String::new(),
        });
    }

    /// The open total draft, if any.
    pub fn total_draft(&self) -> Option<&str> {
        self.total_draft.as_deref()
    }

    /// Overwrite the staged total with raw user input.
    pub fn update_total(&mut self, value: &str) -> Result<()> {
        let draft = self
            .total_draft
            .as_mut()
            .ok_or(LedgerError::NoOpenTotalEdit)?;
        *draft = value.to_string();
        Ok(())
    }

    /// Parse the staged total and close the total edit. A staged value that
    /// does not parse leaves the total at its previous value, including
    /// absent.
    pub fn commit_total(&mut self) -> Result<TotalCommit> {
        let draft = self.total_draft.take().ok_or(LedgerError::NoOpenTotalEdit)?;

        let status = match parse_amount(&draft) {
            Some(amount) => {
                self.total = Some(amount);
                FieldStatus::Applied
            }
            None => FieldStatus::Rejected,
        };
        debug!(?status, total = ?self.total, "total committed");
        Ok(TotalCommit {
            status,
            total: self.total,
        })
    }

    /// Discard the staged total, if any, leaving the committed total
    /// untouched.
    pub fn cancel_edit_total(&mut self) {
        self.total_draft = None;
    }

    fn slot(&self, index: usize) -> Result<&ItemSlot> {
        let len = self.slots.len();
        self.slots
            .get(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut ItemSlot> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })
    }
}

impl From<Vec<LineItem>> for Ledger {
    fn from(items: Vec<LineItem>) -> Self {
        Self::new(items, None)
    }
}
