use std::time::Duration;

use kalah_common::log;

use crate::game_registry::GameRegistry;

/// Periodically retires games nobody has touched for `inactivity_timeout`.
pub struct CleanupTask {
    registry: GameRegistry,
    check_interval: Duration,
    inactivity_timeout: Duration,
}

impl CleanupTask {
    pub fn new(registry: GameRegistry, check_interval: Duration, inactivity_timeout: Duration) -> Self {
        Self {
            registry,
            check_interval,
            inactivity_timeout,
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.check_interval);

        loop {
            interval.tick().await;
            self.cleanup_inactive().await;
        }
    }

    pub async fn cleanup_inactive(&self) -> usize {
        let inactive_games = self.registry.inactive_games(self.inactivity_timeout).await;

        let mut removed = 0;
        for game_id in inactive_games {
            log!("Cleaning up inactive game: {}", game_id);
            if self.registry.remove_game(&game_id).await {
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalah_common::games::kalah::BoardSettings;

    #[tokio::test]
    async fn test_cleanup_removes_only_stale_games() {
        let registry = GameRegistry::new(BoardSettings::default());
        registry.create_game("Idle".to_string(), None).await.unwrap();

        let patient = CleanupTask::new(registry.clone(), Duration::from_secs(1), Duration::from_secs(3600));
        assert_eq!(patient.cleanup_inactive().await, 0);
        assert_eq!(registry.game_count().await, 1);

        let eager = CleanupTask::new(registry.clone(), Duration::from_secs(1), Duration::ZERO);
        assert_eq!(eager.cleanup_inactive().await, 1);
        assert_eq!(registry.game_count().await, 0);
    }
}
