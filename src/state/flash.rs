//! Transient flash messages.
//!
//! A flash is rendered onto a [`FlashSurface`] and removed by a one-shot
//! [`Delay`] callback once its lifetime elapses. Removal is fire-and-forget:
//! nothing keeps the timer, so a flash cannot be dismissed early.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

/// Visual style of a flash message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Danger,
}

impl FlashKind {
    /// CSS classes for the flash paragraph.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Danger => "alert alert-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
    pub lifetime_ms: u32,
}

impl Flash {
    #[must_use]
    pub fn success(text: impl Into<String>, lifetime_ms: u32) -> Self {
        Self { kind: FlashKind::Success, text: text.into(), lifetime_ms }
    }

    #[must_use]
    pub fn danger(text: impl Into<String>, lifetime_ms: u32) -> Self {
        Self { kind: FlashKind::Danger, text: text.into(), lifetime_ms }
    }
}

/// Somewhere flash messages can be rendered.
pub trait FlashSurface {
    /// Handle to a rendered message, used to remove it later.
    type Handle: 'static;

    /// Render `flash`; `None` if it could not be placed.
    fn emit(&self, flash: &Flash) -> Option<Self::Handle>;

    /// Remove a rendered message. Removing one that is already gone is a no-op.
    fn remove(handle: &Self::Handle);
}

/// One-shot timer.
pub trait Delay {
    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>);
}

/// Render `flash` and schedule its removal after `flash.lifetime_ms`.
///
/// Returns `false` when the surface could not render it.
pub fn show<S, D>(surface: &S, delay: &D, flash: &Flash) -> bool
where
    S: FlashSurface + 'static,
    D: Delay,
{
    let Some(handle) = surface.emit(flash) else {
        return false;
    };
    delay.after(flash.lifetime_ms, removal::<S>(handle));
    true
}

fn removal<S: FlashSurface + 'static>(handle: S::Handle) -> Box<dyn FnOnce()> {
    Box::new(move || S::remove(&handle))
}
