use std::collections::BTreeSet;

use crate::error::RosterError;

/// Expulsion bookkeeping for a cohort of students numbered `1..=total`.
#[derive(Debug, Default)]
pub struct Roster {
    total: u32,
    suspected: BTreeSet<u32>,
    immune: BTreeSet<u32>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits `count` more students, widening the valid number range. The
    /// total saturates at `u32::MAX` rather than wrapping.
    pub fn admit(&mut self, count: u32) {
        self.total = self.total.saturating_add(count);
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Marks a student for expulsion. Immune students are left alone; the
    /// return value tells whether the mark was actually placed.
    pub fn suspect(&mut self, student: u32) -> Result<bool, RosterError> {
        self.ensure_enrolled(student)?;
        if self.immune.contains(&student) {
            tracing::debug!(student, "suspicion ignored, student is immune");
            return Ok(false);
        }
        self.suspected.insert(student);
        Ok(true)
    }

    /// Grants immunity: clears any existing suspicion and blocks later ones.
    pub fn grant_immunity(&mut self, student: u32) -> Result<(), RosterError> {
        self.ensure_enrolled(student)?;
        self.suspected.remove(&student);
        self.immune.insert(student);
        Ok(())
    }

    /// Students marked for expulsion, in ascending order.
    pub fn expulsion_list(&self) -> impl Iterator<Item = u32> + '_ {
        self.suspected.iter().copied()
    }

    pub fn suspect_count(&self) -> usize {
        self.suspected.len()
    }

    fn ensure_enrolled(&self, student: u32) -> Result<(), RosterError> {
        if student == 0 || student > self.total {
            return Err(RosterError::UnknownStudent(student));
        }
        Ok(())
    }
}
