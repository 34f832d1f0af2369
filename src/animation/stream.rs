//! Per-frame progress subscriptions.
//!
//! An engine publishes a tween's progress once per rendered frame to every
//! live subscription. Dropping the [`ProgressStream`] unsubscribes; the engine
//! notices the closed channel on its next publish and forgets the sender.

use crossbeam_channel::{Receiver, Sender, TryRecvError};

pub(crate) fn progress_channel() -> (Sender<f64>, ProgressStream) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (tx, ProgressStream { rx })
}

/// Receiving end of a tween's progress samples
#[derive(Debug)]
pub struct ProgressStream {
    rx: Receiver<f64>,
}

impl ProgressStream {
    /// Next buffered sample, if any
    pub fn try_next(&self) -> Option<f64> {
        self.rx.try_recv().ok()
    }

    /// All buffered samples
    pub fn drain(&self) -> Vec<f64> {
        self.rx.try_iter().collect()
    }

    /// Fire once when a sample reaches `threshold`
    pub fn until(self, threshold: f64) -> ThresholdWatch {
        ThresholdWatch {
            stream: Some(self),
            threshold,
        }
    }
}

/// One-shot filter over a [`ProgressStream`]
#[derive(Debug)]
pub struct ThresholdWatch {
    stream: Option<ProgressStream>,
    threshold: f64,
}

impl ThresholdWatch {
    /// Consume buffered samples. Returns true exactly once: on the poll that
    /// sees the first sample at or above the threshold. The subscription is
    /// dropped at that point, or when the tween ends without reaching it.
    pub fn poll(&mut self) -> bool {
        let Some(stream) = &self.stream else {
            return false;
        };
        loop {
            match stream.rx.try_recv() {
                Ok(progress) if progress >= self.threshold => {
                    self.stream = None;
                    return true;
                }
                Ok(_) => continue,
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => {
                    self.stream = None;
                    return false;
                }
            }
        }
    }

    /// Still listening
    pub fn is_armed(&self) -> bool {
        self.stream.is_some()
    }
}
