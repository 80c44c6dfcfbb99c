//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::{self, error::TrySendError};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
}

/// Queue a tick without waiting for room.
///
/// The loop that sends ticks is also the only reader, so it must never block
/// on its own queue. A full queue already forces a redraw; the tick is dropped.
pub fn queue_tick(sender: &mpsc::Sender<TuiEvent>) -> bool {
    match sender.try_send(TuiEvent::Tick) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) | Err(TrySendError::Closed(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn tick_is_dropped_when_queue_is_full() {
        let (tx, mut rx) = mpsc::channel::<TuiEvent>(2);
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        tx.try_send(TuiEvent::Input(key)).unwrap();
        assert!(queue_tick(&tx));
        assert!(!queue_tick(&tx));

        assert!(matches!(rx.try_recv(), Ok(TuiEvent::Input(_))));
        assert!(matches!(rx.try_recv(), Ok(TuiEvent::Tick)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn tick_is_dropped_after_receiver_closes() {
        let (tx, rx) = mpsc::channel::<TuiEvent>(4);
        drop(rx);
        assert!(!queue_tick(&tx));
    }
}
