use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use portfolio_core_health_contracts::{HealthFeatureService, HealthStatus};
use portfolio_di::Build;
use portfolio_email_contracts::EmailService;
use portfolio_persistence_contracts::Database;
use portfolio_shared_contracts::time::TimeService;
use portfolio_utils::trace_instrument;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Db, Email> {
    time: Time,
    db: Db,
    email: Email,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    /// How long a status is reused before the services are pinged again.
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Db, Email> HealthFeatureService for HealthFeatureServiceImpl<Time, Db, Email>
where
    Time: TimeService,
    Db: Database,
    Email: EmailService,
{
    #[trace_instrument(skip(self))]
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let is_fresh = |cached: &&CachedStatus| now < cached.timestamp + self.config.cache_ttl;

        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard.as_ref().filter(is_fresh) {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard.as_ref().filter(is_fresh) {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err}"))
            .is_ok();

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        let status = HealthStatus { database, email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use portfolio_email_contracts::MockEmailService;
    use portfolio_persistence_contracts::MockDatabase;
    use portfolio_shared_contracts::time::MockTimeService;

    use super::*;

    type Sut = HealthFeatureServiceImpl<MockTimeService, MockDatabase, MockEmailService>;

    fn sut(time: MockTimeService, db: MockDatabase, email: MockEmailService) -> Sut {
        HealthFeatureServiceImpl {
            time,
            db,
            email,
            config: HealthFeatureConfig {
                cache_ttl: Duration::from_secs(10),
            },
            state: Default::default(),
        }
    }

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let time = MockTimeService::new().with_now(now);
        let db = MockDatabase::new().with_ping(Ok(()));
        let email = MockEmailService::new().with_ping(Ok(()));

        let sut = sut(time, db, email);

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                database: true,
                email: true
            }
        );
        assert!(result.healthy());
    }

    #[tokio::test]
    async fn database_down() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let time = MockTimeService::new().with_now(now);
        let db = MockDatabase::new().with_ping(Err(anyhow::anyhow!("connection refused")));
        let email = MockEmailService::new().with_ping(Ok(()));

        let sut = sut(time, db, email);

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                database: false,
                email: true
            }
        );
        assert!(!result.healthy());
    }

    #[tokio::test]
    async fn cached() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let mut time = MockTimeService::new();
        let mut seq = mockall::Sequence::new();
        for offset in [0, 9, 10] {
            time.expect_now()
                .once()
                .in_sequence(&mut seq)
                .return_const(now + chrono::TimeDelta::seconds(offset));
        }

        let mut db = MockDatabase::new();
        db.expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));
        let mut email = MockEmailService::new();
        email
            .expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let sut = sut(time, db, email);

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;
        let third = sut.get_status().await;

        // Assert
        assert!(first.healthy());
        assert!(second.healthy());
        assert!(third.healthy());
    }
}
