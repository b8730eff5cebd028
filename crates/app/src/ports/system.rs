//! System scheme port — the environment's preferred color scheme.

use std::rc::Rc;

use sitetheme_domain::theme::Theme;

/// Callback run with the new system theme on every change.
pub type SchemeListener = Box<dyn FnMut(Theme)>;

/// The operating environment's preferred color scheme.
pub trait SystemScheme {
    /// Theme the environment currently prefers.
    fn preferred(&self) -> Theme;

    /// Run `listener` on every change of the preferred scheme until the
    /// returned [`Subscription`] is cancelled or dropped.
    fn subscribe(&self, listener: SchemeListener) -> Subscription;
}

impl<T: SystemScheme + ?Sized> SystemScheme for Rc<T> {
    fn preferred(&self) -> Theme {
        (**self).preferred()
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        (**self).subscribe(listener)
    }
}

/// Handle on a registered listener.
///
/// Dropping or [`cancel`](Self::cancel)ling the handle unregisters the
/// listener. [`detach`](Self::detach) keeps it registered for the rest of the
/// page's life.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the teardown of a registered listener.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to tear down, for environments without a
    /// change signal.
    pub fn inactive() -> Self {
        Self { cancel: None }
    }

    /// Whether a listener is still registered through this handle.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Unregister the listener now.
    pub fn cancel(mut self) {
        self.teardown();
    }

    /// Keep the listener registered forever.
    ///
    /// The teardown closure, and whatever it owns, is leaked on purpose.
    pub fn detach(mut self) {
        if let Some(cancel) = self.cancel.take() {
            std::mem::forget(cancel);
        }
    }

    fn teardown(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
