use chrono::NaiveTime;

use crate::error::AppError;

/// Canonical `HH:MM` form of a time-of-day slot.
pub fn parse_slot(raw: &str) -> Result<String, AppError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| AppError::Validation(format!("Invalid time slot '{}' (expected HH:MM)", raw)))
}

/// Canonicalizes and deduplicates, keeping the first occurrence. Order is preserved.
pub fn normalize_slots(raw: &[String]) -> Result<Vec<String>, AppError> {
    let mut slots: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        let slot = parse_slot(entry)?;
        if !slots.contains(&slot) {
            slots.push(slot);
        }
    }
    Ok(slots)
}

/// Working copy of a professional's slots while they edit them on the dashboard.
#[derive(Debug, Clone, Default)]
pub struct SlotEditor {
    slots: Vec<String>,
}

impl SlotEditor {
    pub fn new(current: &[String]) -> Self {
        Self { slots: current.to_vec() }
    }

    /// Adds a slot and re-sorts. Returns `false` when the slot was already there.
    pub fn add(&mut self, raw: &str) -> Result<bool, AppError> {
        let slot = parse_slot(raw)?;
        if self.slots.contains(&slot) {
            return Ok(false);
        }
        self.slots.push(slot);
        self.slots.sort();
        Ok(true)
    }

    pub fn remove(&mut self, raw: &str) -> bool {
        let target = parse_slot(raw).unwrap_or_else(|_| raw.to_string());
        let before = self.slots.len();
        self.slots.retain(|s| *s != target);
        self.slots.len() != before
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<String> {
        self.slots
    }
}
