use std::io::{self, Write};
use std::time::Duration;

use kernel::Mode;
use tokio::sync::oneshot::{self, Sender};
use tokio::task::JoinHandle;

const TICK: Duration = Duration::from_secs(1);

/// Console progress dots printed by a background task until stopped.
///
/// Reads nothing the report pipeline writes, the stop signal is the only
/// link between them.
pub struct Progress {
    stop: Sender<()>,
    task: JoinHandle<()>,
}

impl Progress {
    #[must_use]
    pub fn start(mode: Mode) -> Self {
        let (stop, mut stopped) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            print!("\nGetting Cloud Storage size for {}", mode.title());
            io::stdout().flush().unwrap_or_default();

            let mut ticks = tokio::time::interval(TICK);
            loop {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = ticks.tick() => {
                        print!(".");
                        io::stdout().flush().unwrap_or_default();
                    }
                }
            }
        });
        Self { stop, task }
    }

    pub async fn stop(self) {
        self.stop.send(()).unwrap_or_default();
        self.task.await.unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stop_ends_task() {
        // Arrange
        let progress = Progress::start(Mode::Backup);

        // Act
        let stopped = tokio::time::timeout(Duration::from_secs(5), progress.stop()).await;

        // Assert
        assert!(stopped.is_ok());
    }
}
