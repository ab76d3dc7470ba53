//! # realtime-sim
//!
//! A stand-in for the real-time message channel. There is no transport
//! behind it: the link acknowledges every send back to its owner and
//! sometimes fabricates a short peer reply, which is enough for a client
//! to exercise its chat flow end to end.
//!
//! The observable contract is small: the link opens once, every message
//! sent while open eventually comes back as [`LinkEvent::Delivered`], each
//! send may independently produce one [`LinkEvent::Inbound`] reply, and
//! nothing is emitted after [`LinkEvent::Closed`].
//!
//! TODO: retire this crate once the server grows a websocket endpoint to
//! speak to.

use std::ops::Range;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use domains::ids;
use domains::models::Message;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

/// Lifecycle of the link. Strictly forward: `Connecting` to `Open` to
/// `Closed`, with `Closed` also reachable straight from `Connecting` when
/// the link is torn down early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Connecting,
    Open,
    Closed,
}

/// Everything the link reports back to its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    /// The link finished connecting and accepts sends from now on.
    Open,
    /// A sent message came back acknowledged, unchanged.
    Delivered(Message),
    /// A fabricated message from the peer.
    Inbound(Message),
    /// The link was torn down. Final event; nothing follows it.
    Closed,
}

/// Canned peer responses for fabricated replies.
pub const PEER_REPLIES: &[&str] = &[
    "Hi! I think I found your wallet!",
    "I found it! Can we meet tomorrow?",
    "Still looking, will update you soon",
    "I have your dog! She's safe and sound",
    "Yes! That's my dog! Thank you so much!",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("link is not open (state: {0:?})")]
    NotOpen(LinkState),
}

/// Timing and randomness knobs.
///
/// The defaults give the interactive feel the chat screen expects: a
/// noticeable connect pause, a quick receipt, a reply that takes a human
/// moment. Tests pin `seed` and shrink the delays to keep runs
/// deterministic under a paused clock.
#[derive(Debug, Clone)]
pub struct LinkOptions {
    /// Time spent in `Connecting` before the link opens.
    pub connect_delay: Duration,
    /// Delay before a send's delivery receipt.
    pub ack_delay: Duration,
    /// Chance in `0.0..=1.0` that a send draws a peer reply.
    pub reply_probability: f64,
    /// Reply arrival window, sampled uniformly per reply.
    pub reply_delay: Range<Duration>,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            connect_delay: Duration::from_millis(400),
            ack_delay: Duration::from_millis(150),
            reply_probability: 0.3,
            reply_delay: Duration::from_millis(1000)..Duration::from_millis(3000),
            seed: None,
        }
    }
}

/// The simulated link itself.
///
/// `connect` hands back the link and the event stream; the link is the
/// write half, the stream the read half. All effects of a send are decided
/// synchronously inside [`send`](SimulatedLink::send) (one RNG draw
/// sequence per send, which is what makes seeded runs reproducible) and
/// only their timers run in the background.
///
/// Every event is sent while the state lock is held, the timer tasks and
/// [`close`](SimulatedLink::close) alike, which is what keeps `Closed` the
/// final event a stream ever yields.
pub struct SimulatedLink {
    peer_id: String,
    state: Arc<Mutex<LinkState>>,
    events: mpsc::UnboundedSender<LinkEvent>,
    rng: Mutex<StdRng>,
    options: LinkOptions,
}

impl SimulatedLink {
    /// Opens a link toward `peer_id`. The first event on the returned
    /// stream is [`LinkEvent::Open`], after `connect_delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect(
        peer_id: impl Into<String>,
        options: LinkOptions,
    ) -> (Self, mpsc::UnboundedReceiver<LinkEvent>) {
        let (events, stream) = mpsc::unbounded_channel();
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let link = Self {
            peer_id: peer_id.into(),
            state: Arc::new(Mutex::new(LinkState::Connecting)),
            events,
            rng: Mutex::new(rng),
            options,
        };

        let state = Arc::clone(&link.state);
        let events = link.events.clone();
        let connect_delay = link.options.connect_delay;
        tokio::spawn(async move {
            tokio::time::sleep(connect_delay).await;
            let Ok(mut state) = state.lock() else { return };
            // close() may have beaten the timer.
            if *state == LinkState::Connecting {
                *state = LinkState::Open;
                debug!("link open");
                let _ = events.send(LinkEvent::Open);
            }
        });

        (link, stream)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LinkState {
        read_state(&self.state)
    }

    /// Queues `message` on the link.
    ///
    /// While open this always schedules one delivery receipt, and with
    /// `reply_probability` additionally schedules one fabricated peer
    /// reply attributed to this link's peer. Fails when the link is not
    /// open; a send never half-happens.
    pub fn send(&self, message: Message) -> Result<(), LinkError> {
        let state = self.state();
        if state != LinkState::Open {
            return Err(LinkError::NotOpen(state));
        }

        // Draw the whole outcome now; the background tasks only wait.
        let reply = self.rng.lock().ok().and_then(|mut rng| {
            if rng.gen_bool(self.reply_probability()) {
                let phrase = PEER_REPLIES[rng.gen_range(0..PEER_REPLIES.len())];
                Some((self.reply_delay(&mut rng), phrase))
            } else {
                None
            }
        });

        let events = self.events.clone();
        let state = Arc::clone(&self.state);
        let ack_delay = self.options.ack_delay;
        let receipt = message.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ack_delay).await;
            let Ok(state) = state.lock() else { return };
            if *state == LinkState::Open {
                let _ = events.send(LinkEvent::Delivered(receipt));
            }
        });

        if let Some((delay, phrase)) = reply {
            let events = self.events.clone();
            let state = Arc::clone(&self.state);
            let peer_id = self.peer_id.clone();
            let conversation_id = message.conversation_id.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let reply = Message {
                    id: ids::message(),
                    conversation_id,
                    sender_id: peer_id,
                    text: phrase.to_owned(),
                    timestamp: Utc::now(),
                };
                let Ok(state) = state.lock() else { return };
                if *state == LinkState::Open {
                    let _ = events.send(LinkEvent::Inbound(reply));
                }
            });
        }

        Ok(())
    }

    /// Tears the link down. Emits [`LinkEvent::Closed`] once; pending
    /// receipts and replies whose timers have not fired yet are dropped.
    /// Closing an already-closed link is a no-op.
    pub fn close(&self) {
        let Ok(mut state) = self.state.lock() else { return };
        if *state != LinkState::Closed {
            *state = LinkState::Closed;
            debug!("link closed");
            let _ = self.events.send(LinkEvent::Closed);
        }
    }

    fn reply_probability(&self) -> f64 {
        self.options.reply_probability.clamp(0.0, 1.0)
    }

    fn reply_delay(&self, rng: &mut StdRng) -> Duration {
        let window = &self.options.reply_delay;
        if window.is_empty() {
            window.start
        } else {
            rng.gen_range(window.clone())
        }
    }
}

fn read_state(state: &Mutex<LinkState>) -> LinkState {
    // A poisoned lock means a panicked task; treat the link as gone.
    state.lock().map(|s| *s).unwrap_or(LinkState::Closed)
}
