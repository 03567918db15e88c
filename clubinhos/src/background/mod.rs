pub mod data_loader;
pub mod navigator;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Tracks running background tasks, one per task id
pub struct BackgroundTaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a task, aborting any running task with the same id so stale
    /// results never arrive after fresh ones
    pub fn spawn_load_task<F>(&mut self, task_id: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.remove(task_id) {
            handle.abort();
        }

        self.tasks.retain(|_, handle| !handle.is_finished());
        self.tasks.insert(task_id, tokio::spawn(future));
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn same_id_replaces_running_task() {
        let mut manager = BackgroundTaskManager::new();
        let (first_tx, first_rx) = oneshot::channel::<()>();
        let (second_tx, second_rx) = oneshot::channel::<()>();

        manager.spawn_load_task("load_page", async move {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            let _ = first_tx.send(());
        });
        manager.spawn_load_task("load_page", async move {
            let _ = second_tx.send(());
        });

        assert!(second_rx.await.is_ok());
        // Aborting the first task dropped its sender
        assert!(first_rx.await.is_err());
    }
}
