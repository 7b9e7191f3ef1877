use crate::config::Config;
use crate::pages::auth::AuthMode;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Specify the simulated operations that complete after a delay.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SaveDraft,
    PublishProfile,
    SignIn { audience: String, mode: AuthMode },
    PostJob,
}

/// An event stamped with the view epoch it was dispatched in.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub event: Event,
    pub epoch: u64,
}

/// Delay applied to each kind of simulated operation.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub save_draft: Duration,
    pub publish: Duration,
    pub post_job: Duration,
    pub sign_in: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Delays {
            save_draft: Duration::from_millis(1000),
            publish: Duration::from_millis(1500),
            post_job: Duration::from_millis(1500),
            sign_in: Duration::from_millis(400),
        }
    }
}

impl Delays {
    pub fn from_config(config: &Config) -> Self {
        Delays {
            save_draft: Duration::from_millis(config.save_draft_delay_ms),
            publish: Duration::from_millis(config.publish_delay_ms),
            post_job: Duration::from_millis(config.post_job_delay_ms),
            sign_in: Duration::from_millis(config.sign_in_delay_ms),
        }
    }

    pub fn for_event(&self, event: &Event) -> Duration {
        match event {
            Event::SaveDraft => self.save_draft,
            Event::PublishProfile => self.publish,
            Event::PostJob => self.post_job,
            Event::SignIn { .. } => self.sign_in,
        }
    }
}

/// Specify struct for resolving timers against shared state.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    delays: Delays,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, delays: Delays) -> Self {
        Handler { state, delays }
    }

    /// Schedule the timer. It resolves against the state once its delay has
    /// elapsed; timers of the same kind resolve in dispatch order.
    ///
    pub async fn handle(&mut self, timer: Timer) -> Result<()> {
        debug!("Processing timer event '{:?}'...", timer);
        let delay = self.delays.for_event(&timer.event);
        let state = Arc::clone(self.state);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().await;
            state.resolve(timer);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delays() {
        let delays = Delays::default();
        assert_eq!(
            delays.for_event(&Event::SaveDraft),
            Duration::from_millis(1000)
        );
        assert_eq!(
            delays.for_event(&Event::PublishProfile),
            Duration::from_millis(1500)
        );
        assert_eq!(
            delays.for_event(&Event::SignIn {
                audience: "client".to_string(),
                mode: AuthMode::SignUp
            }),
            Duration::from_millis(400)
        );
    }

    #[test]
    fn delays_follow_config() {
        let mut config = Config::default();
        config.publish_delay_ms = 5;
        let delays = Delays::from_config(&config);
        assert_eq!(delays.publish, Duration::from_millis(5));
        assert_eq!(delays.save_draft, Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn timer_resolves_after_delay() {
        let state = Arc::new(Mutex::new(State::default()));
        let epoch = state.lock().await.epoch();
        let delays = Delays {
            save_draft: Duration::from_millis(1),
            ..Delays::default()
        };
        let mut handler = Handler::new(&state, delays);
        handler
            .handle(Timer {
                event: Event::SaveDraft,
                epoch,
            })
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        let state = state.lock().await;
        assert_eq!(
            state.notice().map(|n| n.message.as_str()),
            Some("Profile saved as draft")
        );
    }
}
