//! Widget state machine and fetch scheduling

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use faqbot_client::OptionItem;
use parking_lot::Mutex;
use tokio::sync::{Notify, broadcast};

use crate::{events::WidgetEvent, source::OptionSource, transcript::TranscriptEntry};

/// Widget configuration
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Highest step the dialogue can reach. Steps are 0-indexed, so the
    /// default of 2 gives a three-step script.
    pub max_step: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self { max_step: 2 }
    }
}

/// A consistent copy of the widget state, for rendering
#[derive(Debug, Clone)]
pub struct WidgetSnapshot {
    pub step: u32,
    pub is_open: bool,
    pub transcript: Vec<TranscriptEntry>,
    pub pending_options: Vec<OptionItem>,
}

struct WidgetState {
    step: u32,
    is_open: bool,
    transcript: Vec<TranscriptEntry>,
    pending_options: Vec<OptionItem>,
    /// Tag of the most recently dispatched fetch. A resolving fetch whose
    /// recorded tag no longer matches is stale and must be discarded.
    fetch_seq: u64,
}

/// The conversational FAQ widget.
///
/// Owns the dialogue state: a bounded step counter, the append-only
/// transcript, and the pending option set for the current step. Option
/// fetches are spawned onto the ambient Tokio runtime whenever the step
/// changes while the widget is open, and on every closed-to-open transition.
///
/// Selections are pure local state transitions; fetch failures degrade to an
/// empty option set and are never surfaced to the caller.
pub struct FaqWidget {
    config: WidgetConfig,
    state: Arc<Mutex<WidgetState>>,
    source: Arc<dyn OptionSource>,
    event_tx: broadcast::Sender<WidgetEvent>,
    in_flight: Arc<AtomicUsize>,
    idle_notify: Arc<Notify>,
}

impl FaqWidget {
    /// Create a closed widget at step 0 with an empty transcript
    pub fn new(config: WidgetConfig, source: Arc<dyn OptionSource>) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self {
            config,
            state: Arc::new(Mutex::new(WidgetState {
                step: 0,
                is_open: false,
                transcript: Vec::new(),
                pending_options: Vec::new(),
                fetch_seq: 0,
            })),
            source,
            event_tx,
            in_flight: Arc::new(AtomicUsize::new(0)),
            idle_notify: Arc::new(Notify::new()),
        }
    }

    /// Subscribe to widget events
    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.event_tx.subscribe()
    }

    /// Current dialogue step
    pub fn step(&self) -> u32 {
        self.state.lock().step
    }

    /// Whether the widget is open
    pub fn is_open(&self) -> bool {
        self.state.lock().is_open
    }

    /// The configured step bound
    pub fn max_step(&self) -> u32 {
        self.config.max_step
    }

    /// Copy of the transcript
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.state.lock().transcript.clone()
    }

    /// Copy of the currently selectable options
    pub fn pending_options(&self) -> Vec<OptionItem> {
        self.state.lock().pending_options.clone()
    }

    /// Consistent copy of the whole state
    pub fn snapshot(&self) -> WidgetSnapshot {
        let state = self.state.lock();
        WidgetSnapshot {
            step: state.step,
            is_open: state.is_open,
            transcript: state.transcript.clone(),
            pending_options: state.pending_options.clone(),
        }
    }

    /// Open the widget, fetching options for the current step.
    ///
    /// The fetch fires on every closed-to-open transition, not only the
    /// first: a user who closed the widget mid-conversation resumes at the
    /// step they left, so the re-fetch targets that step. Opening an already
    /// open widget does nothing.
    pub fn open(&self) {
        {
            let mut state = self.state.lock();
            if state.is_open {
                return;
            }
            state.is_open = true;
            let _ = self.event_tx.send(WidgetEvent::Opened { step: state.step });
        }
        self.dispatch_fetch();
    }

    /// Close the widget. Step and transcript persist for the next open; any
    /// in-flight fetch that resolves while closed is discarded.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if !state.is_open {
            return;
        }
        state.is_open = false;
        let _ = self.event_tx.send(WidgetEvent::Closed);
    }

    /// Handle the user selecting one of the pending options.
    ///
    /// Appends the question/answer pair to the transcript and clears the
    /// pending options in one state update, so no observer can see a partial
    /// pair or stale choices. Advances the step if the bound has not been
    /// reached, which triggers the next fetch; a selection at the final step
    /// appends but fetches nothing.
    ///
    /// The caller guarantees the option came from the last fetched set; no
    /// re-validation is performed. This never does I/O itself.
    pub fn select(&self, option: OptionItem) {
        let advanced = {
            let mut state = self.state.lock();

            let question = TranscriptEntry::user(option.question);
            let answer = TranscriptEntry::agent(option.answer);
            state.transcript.push(question.clone());
            state.transcript.push(answer.clone());
            state.pending_options.clear();
            // Invalidate any fetch still in flight for the pre-selection
            // step so it cannot repopulate the cleared options.
            state.fetch_seq += 1;

            let _ = self
                .event_tx
                .send(WidgetEvent::MessageAppended { entry: question });
            let _ = self
                .event_tx
                .send(WidgetEvent::MessageAppended { entry: answer });

            if state.step < self.config.max_step {
                state.step += 1;
                true
            } else {
                false
            }
        };

        if advanced {
            self.dispatch_fetch();
        }
    }

    /// Wait until no option fetch is in flight.
    pub async fn wait_for_options(&self) {
        loop {
            let notified = self.idle_notify.notified();
            if self.in_flight.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Spawn a fetch for the current step, tagged so a response that arrives
    /// after the state has moved on (or the widget has closed) is dropped.
    fn dispatch_fetch(&self) {
        let (seq, step) = {
            let mut state = self.state.lock();
            if !state.is_open {
                return;
            }
            state.fetch_seq += 1;
            (state.fetch_seq, state.step)
        };

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.state);
        let event_tx = self.event_tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let idle_notify = Arc::clone(&self.idle_notify);

        in_flight.fetch_add(1, Ordering::AcqRel);
        tokio::spawn(async move {
            let result = source.fetch(step).await;
            {
                let mut state = shared.lock();
                if state.fetch_seq != seq || !state.is_open {
                    tracing::debug!(step, "discarding stale option fetch");
                } else {
                    match result {
                        Ok(options) => {
                            tracing::debug!(step, count = options.len(), "options loaded");
                            state.pending_options = options.clone();
                            let _ = event_tx.send(WidgetEvent::OptionsLoaded { step, options });
                        }
                        Err(e) => {
                            // Silent degradation: the option set stays empty
                            // and the conversation stalls at this step.
                            tracing::warn!(step, error = %e, "option fetch failed");
                            let _ = event_tx.send(WidgetEvent::FetchFailed {
                                step,
                                message: e.to_string(),
                            });
                        }
                    }
                }
            }
            if in_flight.fetch_sub(1, Ordering::AcqRel) == 1 {
                idle_notify.notify_waiters();
            }
        });
    }
}
