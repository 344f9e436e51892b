use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError},
    thread::{self, JoinHandle},
    time::Duration,
};

use parking_lot::MutexGuard;

use crate::{EditorSession, Result, SharedSession};

/// How long the timer waits for the session lock before looking for a stop request
const LOCK_POLL: Duration = Duration::from_millis(10);

/// How long [`PlaybackTimer::stop`] waits for the session lock to pause playback
const PAUSE_WAIT: Duration = Duration::from_millis(250);

/// Advances the active frame of a shared session every `1000 / fps` ms.
///
/// The frame rate is re-read before every period. Dropping the timer stops it.
pub struct PlaybackTimer {
    session: SharedSession,
    stop_tx: Option<Sender<()>>,
    run_thread: Option<JoinHandle<()>>,
}

impl PlaybackTimer {
    /// Put the session into playing state and start ticking it
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the timer thread can't be spawned.
    pub fn start(session: SharedSession) -> Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        session.lock().play();

        let thread_session = session.clone();
        let run_thread = thread::Builder::new().name("pixel-playback".to_string()).spawn(move || {
            loop {
                let Some(interval) = lock_unless_stopped(&thread_session, &stop_rx).map(|s| s.clock().interval()) else {
                    break;
                };
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let Some(mut session) = lock_unless_stopped(&thread_session, &stop_rx) else {
                            break;
                        };
                        if !session.is_playing() {
                            break;
                        }
                        session.advance_playback();
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            log::debug!("playback timer stopped");
        })?;

        Ok(Self {
            session,
            stop_tx: Some(stop_tx),
            run_thread: Some(run_thread),
        })
    }

    pub fn is_running(&self) -> bool {
        self.run_thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel the timer and pause the session, no frame advances after this returns
    ///
    /// The timer thread never blocks a stop, even while the caller holds the
    /// session lock. In that case the session can't be paused from here: it is
    /// left in playing state with a warning, and pausing is up to the caller.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.run_thread.take() {
            if handle.join().is_err() {
                log::error!("playback thread panicked");
            }
        }
        match self.session.try_lock_for(PAUSE_WAIT) {
            Some(mut session) => session.pause(),
            None => log::warn!("playback timer stopped while the session was locked, session left playing"),
        }
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        if self.stop_tx.is_some() || self.run_thread.is_some() {
            self.stop();
        }
    }
}

/// Lock the session, or `None` once a stop was requested while waiting
fn lock_unless_stopped<'a>(session: &'a SharedSession, stop_rx: &Receiver<()>) -> Option<MutexGuard<'a, EditorSession>> {
    loop {
        if let Some(guard) = session.try_lock_for(LOCK_POLL) {
            return Some(guard);
        }
        match stop_rx.try_recv() {
            Err(TryRecvError::Empty) => {}
            Ok(()) | Err(TryRecvError::Disconnected) => return None,
        }
    }
}
