//! Cursor Manager Module
//!
//! Tracks whether the cursor should be locked and hidden for mouse look.
//! The manager never touches a window itself: it records the desired state
//! and a dirty flag, and the host applies [`CursorState`] to its window when
//! [`CursorManager::take_pending`] returns one.
//!
//! # Usage
//!
//! ```rust,ignore
//! use third_person_rig::input::CursorManager;
//!
//! let mut cursor = CursorManager::new_released();
//!
//! // Character activated: lock for mouse look
//! cursor.lock();
//!
//! // Window events
//! cursor.handle_focus_lost();
//! cursor.handle_focus_gained(); // lock is re-applied
//!
//! // Once per frame
//! if let Some(state) = cursor.take_pending() {
//!     window.set_cursor_grab(state.locked);
//!     window.set_cursor_visible(state.visible);
//! }
//! ```

/// Actions that the CursorManager recommends after handling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// No action needed
    None,
    /// Cursor state changed; apply it to the window
    ApplyState,
}

/// Cursor state the host should apply to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// Cursor confined to the window and reporting raw motion
    pub locked: bool,
    /// Cursor drawn
    pub visible: bool,
}

impl CursorState {
    /// Locked and hidden, for mouse look.
    pub const LOCKED: CursorState = CursorState {
        locked: true,
        visible: false,
    };
    /// Free and visible, for menus and other windows.
    pub const RELEASED: CursorState = CursorState {
        locked: false,
        visible: true,
    };
}

/// Tracks the requested cursor lock across focus changes.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// User wants the cursor locked for mouse look
    lock_requested: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// State changed and has not been applied yet
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Create a manager that starts locked.
    pub fn new() -> Self {
        Self {
            lock_requested: true,
            has_focus: true,
            state_dirty: true,
        }
    }

    /// Create a manager that starts released (cursor visible).
    pub fn new_released() -> Self {
        Self {
            lock_requested: false,
            has_focus: true,
            state_dirty: true,
        }
    }

    /// Whether the user currently wants the cursor locked.
    pub fn is_lock_requested(&self) -> bool {
        self.lock_requested
    }

    /// Check if the window has focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Request lock and hide. Always marks the state dirty so the host
    /// re-applies it even if the window dropped the lock on its own.
    pub fn lock(&mut self) {
        self.lock_requested = true;
        self.state_dirty = true;
        log::debug!("cursor lock requested");
    }

    /// Release and show the cursor.
    pub fn release(&mut self) {
        if self.lock_requested {
            self.lock_requested = false;
            self.state_dirty = true;
            log::debug!("cursor released");
        }
    }

    /// ESC: release the cursor if it is locked.
    pub fn handle_escape(&mut self) -> CursorAction {
        if self.lock_requested {
            self.release();
            CursorAction::ApplyState
        } else {
            CursorAction::None
        }
    }

    /// Primary click while released: lock again.
    pub fn handle_left_click(&mut self) -> CursorAction {
        if self.lock_requested {
            CursorAction::None
        } else {
            self.lock();
            CursorAction::ApplyState
        }
    }

    /// Window regained focus: the platform drops cursor grabs on focus loss,
    /// so the requested state must be applied again.
    pub fn handle_focus_gained(&mut self) -> CursorAction {
        self.has_focus = true;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// Window lost focus. The lock request is remembered.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
    }

    /// Cursor should be grabbed: lock requested and window focused.
    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.lock_requested && self.has_focus
    }

    /// Cursor should be drawn.
    pub fn should_cursor_be_visible(&self) -> bool {
        !self.should_cursor_be_grabbed()
    }

    /// Desired state right now.
    pub fn desired_state(&self) -> CursorState {
        if self.should_cursor_be_grabbed() {
            CursorState::LOCKED
        } else {
            CursorState::RELEASED
        }
    }

    /// Desired state if it changed since the last call, clearing the dirty flag.
    pub fn take_pending(&mut self) -> Option<CursorState> {
        if self.state_dirty {
            self.state_dirty = false;
            Some(self.desired_state())
        } else {
            None
        }
    }
}
