use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::AbortHandle;
use uuid::Uuid;

/// Background jobs grouped by the deployment they belong to.
///
/// A job removes itself once it has run to completion, so `pending` only
/// counts work that is still waiting or running. Cloning shares the registry.
#[derive(Clone, Default)]
pub struct ScheduledJobs {
    jobs: Arc<Mutex<HashMap<Uuid, Vec<Job>>>>,
    next_job_id: Arc<AtomicU64>,
}

struct Job {
    id: u64,
    handle: AbortHandle,
}

impl ScheduledJobs {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Vec<Job>>> {
        // a panicking job never holds the lock, the map stays consistent
        self.jobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Spawns `job` on the tokio runtime and files it under `key`.
    pub fn schedule<F>(&self, key: Uuid, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let job_id = self.next_job_id.fetch_add(1, Ordering::Relaxed);
        let registry = self.clone();

        // registered before the task can observe the map
        let mut jobs = self.lock();
        let handle = tokio::spawn(async move {
            job.await;
            registry.finish(key, job_id);
        });
        jobs.entry(key).or_default().push(Job {
            id: job_id,
            handle: handle.abort_handle(),
        });
    }

    fn finish(&self, key: Uuid, job_id: u64) {
        let mut jobs = self.lock();
        if let Some(entries) = jobs.get_mut(&key) {
            entries.retain(|job| job.id != job_id);
            if entries.is_empty() {
                jobs.remove(&key);
            }
        }
    }

    pub fn pending(&self, key: Uuid) -> usize {
        self.lock().get(&key).map_or(0, Vec::len)
    }

    pub fn total_pending(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    /// Aborts every job of `key`. Returns how many were still pending.
    pub fn cancel(&self, key: Uuid) -> usize {
        let entries = self.lock().remove(&key).unwrap_or_default();
        for job in &entries {
            job.handle.abort();
        }
        entries.len()
    }

    pub fn cancel_all(&self) -> usize {
        let drained: Vec<Job> = self.lock().drain().flat_map(|(_, jobs)| jobs).collect();
        for job in &drained {
            job.handle.abort();
        }
        if !drained.is_empty() {
            tracing::info!("Cancelled {} scheduled deployment jobs", drained.len());
        }
        drained.len()
    }
}
