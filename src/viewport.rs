//! Access to the page-wide scroll source.
//!
//! The window's `scroll` event is global, so the listener is wrapped in a
//! [`ScrollSubscription`] that the owning component holds for as long as it
//! is mounted. Dropping it unregisters the listener and cancels any pending
//! throttled notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("no global window available")]
    NoWindow,
    #[error("failed to register scroll listener: {0}")]
    Listener(String),
    #[error("failed to scroll viewport: {0}")]
    Scroll(String),
}

fn js_message(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Vertical scroll offset in whole pixels. Overscroll bounce can report
/// negative values, which count as the top of the page.
pub fn current_offset(window: &Window) -> u32 {
    match window.scroll_y() {
        Ok(y) => y.max(0.0).round() as u32,
        Err(e) => {
            warn!("Could not read scroll position: {}", js_message(e));
            0
        }
    }
}

/// Smoothly scroll the viewport back to offset 0.
pub fn scroll_to_top() -> Result<(), ViewportError> {
    let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

type OffsetHandler = Rc<dyn Fn(u32)>;

pub struct ScrollSubscription {
    window: Window,
    listener: Closure<dyn Fn()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollSubscription {
    /// Start reporting scroll offsets to `handler`.
    ///
    /// The current offset is reported once right away so state is correct
    /// after a reload that restores a scrolled position. Afterwards bursts of
    /// events are coalesced into at most one call per `throttle_ms`, carrying
    /// the offset read when the timer fires.
    pub fn acquire<F>(throttle_ms: u32, handler: F) -> Result<Self, ViewportError>
    where
        F: Fn(u32) + 'static,
    {
        let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
        let handler: OffsetHandler = Rc::new(handler);
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let armed = Rc::new(Cell::new(false));

        handler(current_offset(&window));

        let listener = {
            let window = window.clone();
            let handler = handler.clone();
            let pending = pending.clone();
            Closure::<dyn Fn()>::new(move || {
                if armed.get() {
                    return;
                }
                armed.set(true);
                let timeout = {
                    let window = window.clone();
                    let handler = handler.clone();
                    let armed = armed.clone();
                    Timeout::new(throttle_ms, move || {
                        armed.set(false);
                        handler(current_offset(&window));
                    })
                };
                // The previous timer has already fired by now, so replacing
                // it never drops a callback that is still running.
                pending.borrow_mut().replace(timeout);
            })
        };

        window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|e| ViewportError::Listener(js_message(e)))?;
        debug!("Scroll subscription acquired ({}ms throttle)", throttle_ms);

        Ok(Self {
            window,
            listener,
            pending,
        })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        // Dropping a Timeout clears it.
        drop(self.pending.borrow_mut().take());
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref())
        {
            error!("Failed to remove scroll listener: {}", js_message(e));
        }
        debug!("Scroll subscription released");
    }
}
