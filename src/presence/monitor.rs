//! The presence-polling state machine.
//!
//! Level-triggered: the indicator follows the latest successful
//! observation, and an inconclusive tick (query failure) retains the last
//! known good state. That is the only debouncing — a single dropped
//! request never flips the light, at the cost of lagging reality by up to
//! one poll interval.
//!
//! All dependencies are injected via constructor — no concrete types
//! hardcoded.

use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::light::IndicatorDriver;
use crate::zoom::ZoomUser;

use super::query::{PresenceQuery, QueryOutcome};

/// What the monitor currently believes about the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceState {
    Idle,
    InMeeting,
}

impl PresenceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InMeeting => "in_meeting",
        }
    }
}

pub struct PresenceMonitor {
    query: Box<dyn PresenceQuery>,
    driver: Box<dyn IndicatorDriver>,
    user: ZoomUser,
    state: PresenceState,
    poll_interval: Duration,
    self_test_hold: Duration,
}

impl PresenceMonitor {
    pub fn new(
        query: Box<dyn PresenceQuery>,
        driver: Box<dyn IndicatorDriver>,
        user: ZoomUser,
        poll_interval: Duration,
    ) -> Self {
        Self {
            query,
            driver,
            user,
            state: PresenceState::Idle,
            poll_interval,
            self_test_hold: Duration::from_secs(2),
        }
    }

    pub fn with_self_test_hold(mut self, hold: Duration) -> Self {
        self.self_test_hold = hold;
        self
    }

    pub fn state(&self) -> PresenceState {
        self.state
    }

    /// One-time actuator check: on, hold, off. Does not touch
    /// `PresenceState`; a wiring problem shows up here instead of at the
    /// first real transition.
    pub async fn self_test(&mut self) {
        info!("Testing light");
        if let Err(err) = self.driver.activate().await {
            warn!("Light self-test activate failed: {:#}", err);
        }
        tokio::time::sleep(self.self_test_hold).await;
        if let Err(err) = self.driver.deactivate().await {
            warn!("Light self-test deactivate failed: {:#}", err);
        }
        info!("Light test complete");
    }

    /// One poll: check presence and apply the transition policy.
    ///
    /// Actuation failures are logged but the state still advances — it
    /// tracks what we believe reality is, not what the bulb shows.
    pub async fn tick(&mut self) {
        match self.query.check(&self.user).await {
            QueryOutcome::MeetingFound(meeting) => {
                if self.state == PresenceState::Idle {
                    info!("Activating light for meeting: {}", meeting.topic);
                    if let Err(err) = self.driver.activate().await {
                        warn!("Failed to activate light: {:#}", err);
                    }
                    self.state = PresenceState::InMeeting;
                }
            }
            QueryOutcome::NoneFound => {
                if self.state == PresenceState::InMeeting {
                    info!("Deactivating light");
                    if let Err(err) = self.driver.deactivate().await {
                        warn!("Failed to deactivate light: {:#}", err);
                    }
                    self.state = PresenceState::Idle;
                }
            }
            QueryOutcome::QueryError(err) => {
                warn!(
                    "Presence check failed, keeping {} state: {}",
                    self.state.as_str(),
                    err
                );
            }
        }
    }

    /// Runs the self-test, then polls until `shutdown` is cancelled.
    ///
    /// Cancellation lands between ticks, never mid-query; the indicator is
    /// left in its last commanded state.
    pub async fn run(&mut self, shutdown: CancellationToken) {
        self.self_test().await;

        info!(
            "Starting to check for meetings every {}s",
            self.poll_interval.as_secs_f64()
        );

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Shutdown wins over a due tick
                biased;
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, stopping presence monitor");
                    break;
                }
                _ = ticker.tick() => self.tick().await,
            }
        }
    }
}
