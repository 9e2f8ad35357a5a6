//! The live-score poll loop: a small state machine that decides, each
//! tick, whether the display layer needs a refresh.
//!
//! Latch semantics: once a tick observes zero in-progress games the loop
//! settles and stays settled; a later tick seeing a newly started game
//! does not resume polling; only an external `reset()` (e.g. the user
//! picking a new week) does. A failed scoreboard fetch is NOT treated as
//! "no live games": it reports `FetchFailed` and the loop keeps polling,
//! so a transient outage cannot falsely settle the scoreboard.

use crate::api::CfbdClient;
use crate::feeds::scoreboard::live_snapshots;
use crate::models::LiveScoreSnapshot;
use std::time::Duration;

/// Raw status value marking a live game, and the label it is displayed as.
const IN_PROGRESS_STATUS: &str = "in_progress";
const IN_PROGRESS_LABEL: &str = "In Progress";

pub const POLL_INTERVAL: Duration = Duration::from_secs(12);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// No tick does anything until the initial display has been built.
    AwaitingInit,
    Polling,
    /// Latched: no live games remain; ticks are ignored until `reset()`.
    Settled,
}

impl Default for PollState {
    fn default() -> Self {
        PollState::AwaitingInit
    }
}

/// What one tick decided.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Initial display not ready yet.
    NotReady,
    /// The in-progress set changed; the display should refresh.
    Updated(Vec<LiveScoreSnapshot>),
    /// Identical to the previous tick; no update signal.
    Unchanged,
    /// This tick observed zero in-progress games and latched the loop.
    NoLiveGames,
    /// The loop is latched; the tick was ignored.
    Settled,
    /// The scoreboard fetch failed; last good state stands, polling
    /// continues.
    FetchFailed,
}

/// Poll-loop state: the machine state plus the previous tick's filtered
/// snapshot list, owned here exclusively and swapped atomically per tick.
#[derive(Debug, Default)]
pub struct PollLoop {
    state: PollState,
    previous: Vec<LiveScoreSnapshot>,
    ticks: u64,
}

impl PollLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Ticks observed so far, including suppressed and ignored ones.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Signal that the initial display has been built; polling may begin.
    pub fn mark_ready(&mut self) {
        if self.state == PollState::AwaitingInit {
            self.state = PollState::Polling;
        }
    }

    /// External restart (new week selected): back to the initial state
    /// with no held snapshot.
    pub fn reset(&mut self) {
        self.state = PollState::AwaitingInit;
        self.previous.clear();
    }

    /// Process one poll tick. `fetched` is `None` when the scoreboard
    /// fetch failed, `Some` with the full snapshot list otherwise.
    pub fn tick(&mut self, fetched: Option<Vec<LiveScoreSnapshot>>) -> TickOutcome {
        self.ticks += 1;

        match self.state {
            PollState::AwaitingInit => TickOutcome::NotReady,
            PollState::Settled => TickOutcome::Settled,
            PollState::Polling => {
                let Some(snapshots) = fetched else {
                    return TickOutcome::FetchFailed;
                };

                let live: Vec<LiveScoreSnapshot> = snapshots
                    .into_iter()
                    .filter(|snapshot| snapshot.status == IN_PROGRESS_STATUS)
                    .map(|mut snapshot| {
                        snapshot.status = IN_PROGRESS_LABEL.to_string();
                        snapshot
                    })
                    .collect();

                if live.is_empty() {
                    self.state = PollState::Settled;
                    self.previous.clear();
                    return TickOutcome::NoLiveGames;
                }

                if live == self.previous {
                    TickOutcome::Unchanged
                } else {
                    self.previous = live.clone();
                    TickOutcome::Updated(live)
                }
            }
        }
    }
}

/// Drive the poll loop on a fixed interval until it settles. One tick at
/// a time: the fetch is awaited before the next tick fires, so a slow
/// fetch can never overlap the following one.
pub async fn run_poll_loop<F>(
    client: &CfbdClient,
    poll: &mut PollLoop,
    classification: &str,
    mut on_update: F,
) where
    F: FnMut(&[LiveScoreSnapshot]),
{
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    // The first interval tick fires immediately; skip it so the display
    // settles before the first poll.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let fetched = client
            .scoreboard(classification)
            .await
            .map(live_snapshots);

        match poll.tick(fetched) {
            TickOutcome::Updated(snapshots) => on_update(&snapshots),
            TickOutcome::NoLiveGames | TickOutcome::Settled => break,
            TickOutcome::FetchFailed => {
                tracing::warn!("scoreboard fetch failed; keeping last good state");
            }
            TickOutcome::NotReady | TickOutcome::Unchanged => {}
        }
    }
}
