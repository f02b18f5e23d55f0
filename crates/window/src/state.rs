use crate::event::WindowEvent;
use engine_common::{Rgba, Viewport};

/// Observer invoked for every dispatched event.
pub type EventCallback = Box<dyn FnMut(&WindowEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    Destroyed,
}

/// Backend-independent part of a window: title, size, background color,
/// the callback slot and the lifecycle flag.
pub struct WindowState {
    title: String,
    width: u32,
    height: u32,
    background: Rgba,
    callback: Option<EventCallback>,
    lifecycle: Lifecycle,
}

impl std::fmt::Debug for WindowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowState")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .field("has_callback", &self.callback.is_some())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

impl WindowState {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            background: Rgba::default(),
            callback: None,
            lifecycle: Lifecycle::Alive,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Install the event callback, replacing any previous one.
    pub fn set_event_callback(&mut self, callback: impl FnMut(&WindowEvent) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_event_callback(&mut self) {
        self.callback = None;
    }

    pub fn has_event_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Apply an event to the stored state, then invoke the callback.
    pub fn dispatch(&mut self, event: &WindowEvent) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        if let WindowEvent::Resized { width, height } = *event {
            tracing::debug!(width, height, "window resized");
            self.width = width;
            self.height = height;
        }
        if let Some(callback) = self.callback.as_mut() {
            callback(event);
        }
    }

    /// Mark the window destroyed. Returns `true` only on the first call.
    pub fn mark_destroyed(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            return false;
        }
        self.lifecycle = Lifecycle::Destroyed;
        self.callback = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn resize_updates_size_and_viewport() {
        let mut state = WindowState::new("test", 1024, 768);
        state.dispatch(&WindowEvent::Resized {
            width: 640,
            height: 480,
        });
        assert_eq!(state.width(), 640);
        assert_eq!(state.height(), 480);
        assert!((state.viewport().aspect() - 640.0 / 480.0).abs() < 1e-6);
    }

    #[test]
    fn callback_sees_every_event() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut state = WindowState::new("test", 100, 100);
        state.set_event_callback(move |e| sink.borrow_mut().push(*e));

        state.dispatch(&WindowEvent::CursorMoved { x: 1.0, y: 2.0 });
        state.dispatch(&WindowEvent::Closed);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1], WindowEvent::Closed);
    }

    #[test]
    fn setting_callback_replaces_previous() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));
        let mut state = WindowState::new("test", 100, 100);

        let f = Rc::clone(&first);
        state.set_event_callback(move |_| *f.borrow_mut() += 1);
        let s = Rc::clone(&second);
        state.set_event_callback(move |_| *s.borrow_mut() += 1);

        state.dispatch(&WindowEvent::FocusLost);
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);

        state.clear_event_callback();
        state.dispatch(&WindowEvent::FocusLost);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn background_survives_events() {
        let mut state = WindowState::new("test", 100, 100);
        assert_eq!(state.background(), Rgba::default());
        state.set_background(Rgba::new(0.1, 0.2, 0.3, 1.0));
        state.dispatch(&WindowEvent::Resized {
            width: 50,
            height: 50,
        });
        state.dispatch(&WindowEvent::FocusLost);
        assert_eq!(state.background(), Rgba::new(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut state = WindowState::new("test", 100, 100);
        assert!(state.mark_destroyed());
        assert!(!state.mark_destroyed());
        assert_eq!(state.lifecycle(), Lifecycle::Destroyed);
    }

    #[test]
    fn destroyed_window_ignores_events() {
        let mut state = WindowState::new("test", 100, 100);
        state.mark_destroyed();
        state.dispatch(&WindowEvent::Resized {
            width: 1,
            height: 1,
        });
        assert_eq!(state.width(), 100);
    }
}
