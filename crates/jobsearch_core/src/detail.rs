use crate::{JobId, JobRecord, ResultSet};

/// Which record the detail view shows, if any.
///
/// Holds the record id rather than the record, so a new search can replace
/// the result set without the selection keeping old records around.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailDisclosure {
    selected: Option<JobId>,
    open: bool,
}

impl DetailDisclosure {
    pub fn open(&mut self, job_id: JobId) {
        self.selected = Some(job_id);
        self.open = true;
    }

    /// Hides the detail; the selection is retained.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The open record, resolved against the current results.
    pub fn resolve<'a>(&self, results: &'a ResultSet) -> Option<&'a JobRecord> {
        if !self.open {
            return None;
        }
        self.selected.as_deref().and_then(|id| results.find(id))
    }
}
