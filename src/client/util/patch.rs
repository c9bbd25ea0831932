//! In-place edits to loaded lists after a backend write succeeds. Every
//! helper hands back what it displaced so the caller can undo the edit if a
//! follow-up call fails.

use crate::model::placement::{ApplicationStatus, JobDto};

/// Records that carry a stable backend id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for JobDto {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Swap in a replacement for the record with the same key, returning the
/// displaced record.
pub fn replace_by_key<T: Keyed>(items: &mut [T], replacement: T) -> Option<T> {
    let index = items
        .iter()
        .position(|item| item.key() == replacement.key())?;
    Some(std::mem::replace(&mut items[index], replacement))
}

/// Remove the record with `key`, returning its index alongside the record so
/// [`restore_at`] can put it back where it was.
pub fn remove_by_key<T: Keyed>(items: &mut Vec<T>, key: &str) -> Option<(usize, T)> {
    let index = items.iter().position(|item| item.key() == key)?;
    Some((index, items.remove(index)))
}

/// Reinsert a previously removed record at its old position.
pub fn restore_at<T>(items: &mut Vec<T>, index: usize, item: T) {
    let index = index.min(items.len());
    items.insert(index, item);
}

/// Move one applicant on one job to a new pipeline status, returning the
/// previous status.
pub fn set_applicant_status(
    jobs: &mut [JobDto],
    job_id: &str,
    user_id: &str,
    status: ApplicationStatus,
) -> Option<ApplicationStatus> {
    let job = jobs.iter_mut().find(|job| job.id == job_id)?;
    let applicant = job
        .applicants
        .iter_mut()
        .find(|applicant| applicant.user.id == user_id)?;
    Some(std::mem::replace(&mut applicant.status, status))
}
