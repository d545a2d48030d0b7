//! Frame driver
//!
//! The host calls back once per displayed frame. Instead of a callback that
//! reschedules itself forever, the loop checks a cancellation token before
//! every frame, so it can be stopped deterministically.

use tokio_util::sync::CancellationToken;

/// Runs a per-frame callback until its token is cancelled
#[derive(Debug, Default)]
pub struct FrameLoop {
    token: CancellationToken,
    frames: u64,
}

impl FrameLoop {
    pub fn new(token: CancellationToken) -> Self {
        Self { token, frames: 0 }
    }

    /// Token that stops this loop
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Call `tick` with the frame index until cancelled.
    ///
    /// Returns the total number of frames run. A token cancelled up front
    /// runs nothing.
    pub fn run<F>(&mut self, mut tick: F) -> u64
    where
        F: FnMut(u64),
    {
        while !self.token.is_cancelled() {
            tick(self.frames);
            self.frames += 1;
        }
        log::debug!("Frame loop stopped after {} frames", self.frames);
        self.frames
    }
}

/// Drive `tick(timestamp_ms)` from `requestAnimationFrame` until cancelled.
///
/// Once the token fires the callback stops rescheduling and drops itself.
#[cfg(target_arch = "wasm32")]
pub fn run_animation_frames<F>(token: CancellationToken, mut tick: F)
where
    F: FnMut(f64) + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    type FrameCallback = Closure<dyn FnMut(f64)>;

    fn request(callback: &FrameCallback) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }

    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let mut frames: u64 = 0;

    *slot.borrow_mut() = Some(Closure::new(move |time: f64| {
        if token.is_cancelled() {
            log::info!("Frame loop stopped after {} frames", frames);
            let _ = next.borrow_mut().take();
            return;
        }
        tick(time);
        frames += 1;
        if let Some(callback) = next.borrow().as_ref() {
            request(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request(callback);
    }
}
