//! Score store
//!
//! The score store accumulates one score cell per line of insurance while
//! the policy chain runs. A cell has one of two shapes:
//!
//! - **Scalar**: a single score, for lines without sub-items (life, disability)
//! - **Keyed**: one score per insured item, for home and auto
//!
//! Operations that name an item key on a scalar cell are rejected. On a keyed
//! cell, an operation without an item key is broadcast to every registered
//! item.
//!
//! # Disabled lines
//!
//! Disabling a line removes it from the final profile. Every later operation
//! addressed to a disabled line is a no-op, so a policy can target a line an
//! earlier policy already disabled. A line that was never created is a
//! different matter: addressing it fails with `InvalidOperation`, because it
//! means the chain ran out of order.

use std::collections::BTreeMap;

use core_kernel::{ItemKey, LineOfInsurance};
use tracing::debug;

use crate::aversion::AversionMapping;
use crate::error::{InvalidOperationKind, ScoringError};
use crate::profile::{LineAversion, RiskProfile};

/// Accumulated score for one line of insurance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreCell {
    /// A single score for the whole line
    Scalar(i32),
    /// One score per registered item
    Keyed(BTreeMap<ItemKey, i32>),
}

impl ScoreCell {
    /// Creates an empty keyed cell
    pub fn keyed() -> Self {
        ScoreCell::Keyed(BTreeMap::new())
    }

    /// Registers an item, overwriting any previous score for its key
    pub fn create_item(&mut self, item: ItemKey, score: i32) -> Result<(), InvalidOperationKind> {
        match self {
            ScoreCell::Scalar(_) => Err(InvalidOperationKind::ItemOnScalar(item)),
            ScoreCell::Keyed(items) => {
                items.insert(item, score);
                Ok(())
            }
        }
    }

    /// Adds `delta` to the cell
    ///
    /// With an item key, only that item changes. Without one, a scalar cell
    /// changes as a whole and a keyed cell changes every registered item.
    pub fn adjust(&mut self, delta: i32, item: Option<ItemKey>) -> Result<(), InvalidOperationKind> {
        match (self, item) {
            (ScoreCell::Scalar(_), Some(key)) => Err(InvalidOperationKind::ItemOnScalar(key)),
            (ScoreCell::Scalar(score), None) => {
                *score = score.saturating_add(delta);
                Ok(())
            }
            (ScoreCell::Keyed(items), Some(key)) => {
                let score = items
                    .get_mut(&key)
                    .ok_or(InvalidOperationKind::UnregisteredItem(key))?;
                *score = score.saturating_add(delta);
                Ok(())
            }
            (ScoreCell::Keyed(items), None) => {
                for score in items.values_mut() {
                    *score = score.saturating_add(delta);
                }
                Ok(())
            }
        }
    }

    /// Projects the cell onto risk aversion categories
    pub fn map_aversion(&self, mapping: &AversionMapping) -> LineAversion {
        match self {
            ScoreCell::Scalar(score) => LineAversion::Single(mapping.aversion_for(*score)),
            ScoreCell::Keyed(items) => LineAversion::PerItem(
                items
                    .iter()
                    .map(|(key, score)| (*key, mapping.aversion_for(*score)))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineSlot {
    Active(ScoreCell),
    Disabled,
}

/// Scores for every line of insurance, owned by a single calculation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreStore {
    lines: BTreeMap<LineOfInsurance, LineSlot>,
}

impl ScoreStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a line with the given cell
    ///
    /// Creating a line twice overwrites the previous cell, and creating a
    /// disabled line enables it again.
    pub fn create(&mut self, line: LineOfInsurance, cell: ScoreCell) {
        self.lines.insert(line, LineSlot::Active(cell));
    }

    /// Registers a line scored as a single value
    pub fn create_scalar(&mut self, line: LineOfInsurance, score: i32) {
        self.create(line, ScoreCell::Scalar(score));
    }

    /// Registers a line scored per item, with no items yet
    pub fn create_keyed(&mut self, line: LineOfInsurance) {
        self.create(line, ScoreCell::keyed());
    }

    /// Registers an item under a keyed line
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the line is scalar or was never created.
    pub fn create_item(
        &mut self,
        line: LineOfInsurance,
        item: ItemKey,
        score: i32,
    ) -> Result<(), ScoringError> {
        match self.cell_mut(line, "create_item")? {
            Some(cell) => cell
                .create_item(item, score)
                .map_err(|kind| ScoringError::invalid_operation(line, kind)),
            None => Ok(()),
        }
    }

    /// Adds points to a line, or to one item of a keyed line
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if an item key is given for a scalar line,
    /// the item is not registered, or the line was never created.
    pub fn add(
        &mut self,
        line: LineOfInsurance,
        points: i32,
        item: Option<ItemKey>,
    ) -> Result<(), ScoringError> {
        self.adjust(line, points, item, "add")
    }

    /// Subtracts points from a line, or from one item of a keyed line
    ///
    /// # Errors
    ///
    /// Same conditions as [`ScoreStore::add`].
    pub fn subtract(
        &mut self,
        line: LineOfInsurance,
        points: i32,
        item: Option<ItemKey>,
    ) -> Result<(), ScoringError> {
        self.adjust(line, points.saturating_neg(), item, "subtract")
    }

    /// Removes a line from the final profile
    ///
    /// Idempotent. Disabling a line that was never created also marks it
    /// disabled.
    pub fn disable(&mut self, line: LineOfInsurance) {
        debug!(%line, "disabling line of insurance");
        self.lines.insert(line, LineSlot::Disabled);
    }

    /// Whether the line has been disabled
    pub fn is_disabled(&self, line: LineOfInsurance) -> bool {
        matches!(self.lines.get(&line), Some(LineSlot::Disabled))
    }

    /// Whether the line is created and not disabled
    pub fn contains(&self, line: LineOfInsurance) -> bool {
        self.cell(line).is_some()
    }

    /// Returns the cell of an active line
    pub fn cell(&self, line: LineOfInsurance) -> Option<&ScoreCell> {
        match self.lines.get(&line) {
            Some(LineSlot::Active(cell)) => Some(cell),
            _ => None,
        }
    }

    /// Returns the score of an active scalar line
    pub fn score(&self, line: LineOfInsurance) -> Option<i32> {
        match self.cell(line)? {
            ScoreCell::Scalar(score) => Some(*score),
            ScoreCell::Keyed(_) => None,
        }
    }

    /// Returns the score of one item of an active keyed line
    pub fn item_score(&self, line: LineOfInsurance, item: ItemKey) -> Option<i32> {
        match self.cell(line)? {
            ScoreCell::Scalar(_) => None,
            ScoreCell::Keyed(items) => items.get(&item).copied(),
        }
    }

    /// Registered item keys of an active keyed line, in key order
    pub fn item_keys(&self, line: LineOfInsurance) -> Vec<ItemKey> {
        match self.cell(line) {
            Some(ScoreCell::Keyed(items)) => items.keys().copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Projects every active line onto risk aversion categories
    ///
    /// Disabled lines are absent from the result.
    pub fn project(&self, mapping: &AversionMapping) -> RiskProfile {
        self.lines
            .iter()
            .filter_map(|(line, slot)| match slot {
                LineSlot::Active(cell) => Some((*line, cell.map_aversion(mapping))),
                LineSlot::Disabled => None,
            })
            .collect()
    }

    fn adjust(
        &mut self,
        line: LineOfInsurance,
        delta: i32,
        item: Option<ItemKey>,
        operation: &'static str,
    ) -> Result<(), ScoringError> {
        match self.cell_mut(line, operation)? {
            Some(cell) => cell
                .adjust(delta, item)
                .map_err(|kind| ScoringError::invalid_operation(line, kind)),
            None => Ok(()),
        }
    }

    /// `Ok(None)` for a disabled line, an error for a line never created
    fn cell_mut(
        &mut self,
        line: LineOfInsurance,
        operation: &'static str,
    ) -> Result<Option<&mut ScoreCell>, ScoringError> {
        match self.lines.get_mut(&line) {
            Some(LineSlot::Active(cell)) => Ok(Some(cell)),
            Some(LineSlot::Disabled) => {
                debug!(%line, operation, "ignoring operation on disabled line");
                Ok(None)
            }
            None => Err(ScoringError::invalid_operation(
                line,
                InvalidOperationKind::LineNotCreated,
            )),
        }
    }
}
