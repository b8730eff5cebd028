//! In-memory implementations of the ports, shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sitetheme_domain::error::{StoreError, ToggleError};
use sitetheme_domain::theme::Theme;
use sitetheme_domain::toggle::ToggleDisplay;

use crate::ports::{
    ActivationHandler, SchemeListener, Subscription, SystemScheme, ThemeStore, ThemeTarget,
    ToggleControl, ToggleMount,
};

/// Key-value store holding the raw stored string, like `localStorage` does.
#[derive(Default)]
pub struct MemoryStore {
    raw: RefCell<Option<String>>,
    unavailable: Cell<bool>,
    writes: Cell<u32>,
}

impl MemoryStore {
    pub fn with(theme: Theme) -> Rc<Self> {
        let store = Self::default();
        store.raw.replace(Some(theme.to_string()));
        Rc::new(store)
    }

    pub fn empty() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_raw(raw: &str) -> Rc<Self> {
        let store = Self::default();
        store.raw.replace(Some(raw.to_string()));
        Rc::new(store)
    }

    pub fn unavailable() -> Rc<Self> {
        let store = Self::default();
        store.unavailable.set(true);
        Rc::new(store)
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.get() {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        self.check()?;
        match self.raw.borrow().as_deref() {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        self.check()?;
        self.writes.set(self.writes.get() + 1);
        self.raw.replace(Some(theme.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.check()?;
        self.raw.replace(None);
        Ok(())
    }
}

/// Root element attribute.
#[derive(Default)]
pub struct MemoryTarget {
    attribute: RefCell<Option<String>>,
}

impl MemoryTarget {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn attribute(&self) -> Option<String> {
        self.attribute.borrow().clone()
    }
}

impl ThemeTarget for MemoryTarget {
    fn apply(&self, theme: Theme) {
        self.attribute.replace(Some(theme.to_string()));
    }

    fn current(&self) -> Option<Theme> {
        self.attribute.borrow().as_deref()?.parse().ok()
    }
}

type Listeners = Rc<RefCell<Vec<Option<SchemeListener>>>>;

/// System scheme whose changes are driven by the test.
pub struct FakeScheme {
    preferred: Cell<Theme>,
    listeners: Listeners,
}

impl FakeScheme {
    pub fn new(preferred: Theme) -> Rc<Self> {
        Rc::new(Self {
            preferred: Cell::new(preferred),
            listeners: Rc::default(),
        })
    }

    /// Change the system preference and notify every listener.
    pub fn emit(&self, theme: Theme) {
        self.preferred.set(theme);
        for listener in self.listeners.borrow_mut().iter_mut().flatten() {
            listener(theme);
        }
    }

    pub fn active_listeners(&self) -> usize {
        self.listeners.borrow().iter().flatten().count()
    }
}

impl SystemScheme for FakeScheme {
    fn preferred(&self) -> Theme {
        self.preferred.get()
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        let index = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(Some(listener));
            listeners.len() - 1
        };
        let listeners = Rc::clone(&self.listeners);
        Subscription::new(move || {
            listeners.borrow_mut()[index] = None;
        })
    }
}

/// State of a mounted fake control, inspectable by tests.
pub struct ControlState {
    pub label: String,
    display: Cell<Option<ToggleDisplay>>,
    renders: Cell<u32>,
    attached: Cell<bool>,
    handler: ActivationHandler,
}

impl ControlState {
    pub fn display(&self) -> Option<ToggleDisplay> {
        self.display.get()
    }

    pub fn renders(&self) -> u32 {
        self.renders.get()
    }

    pub fn detach(&self) {
        self.attached.set(false);
    }

    /// Simulate a user activation.
    pub fn click(&self) {
        (self.handler)();
    }
}

pub struct FakeControl(Rc<ControlState>);

impl ToggleControl for FakeControl {
    fn is_attached(&self) -> bool {
        self.0.attached.get()
    }

    fn render(&self, display: ToggleDisplay) {
        self.0.renders.set(self.0.renders.get() + 1);
        self.0.display.set(Some(display));
    }
}

/// Page with or without a navigation list to host the control.
pub struct FakeMount {
    has_container: bool,
    failing: bool,
    mounted: RefCell<Vec<Rc<ControlState>>>,
}

impl FakeMount {
    pub fn with_nav() -> Rc<Self> {
        Rc::new(Self {
            has_container: true,
            failing: false,
            mounted: RefCell::default(),
        })
    }

    pub fn without_nav() -> Rc<Self> {
        Rc::new(Self {
            has_container: false,
            failing: false,
            mounted: RefCell::default(),
        })
    }

    pub fn broken() -> Rc<Self> {
        Rc::new(Self {
            has_container: true,
            failing: true,
            mounted: RefCell::default(),
        })
    }

    pub fn mounted(&self) -> usize {
        self.mounted.borrow().len()
    }

    pub fn control(&self) -> Rc<ControlState> {
        Rc::clone(
            self.mounted
                .borrow()
                .last()
                .expect("a control should have been mounted"),
        )
    }
}

impl ToggleMount for FakeMount {
    type Control = FakeControl;

    fn mount(
        &self,
        label: &str,
        on_activate: ActivationHandler,
    ) -> Result<Option<Self::Control>, ToggleError> {
        if !self.has_container {
            return Ok(None);
        }
        if self.failing {
            return Err(ToggleError::Build("button".to_string()));
        }
        let state = Rc::new(ControlState {
            label: label.to_string(),
            display: Cell::new(None),
            renders: Cell::new(0),
            attached: Cell::new(true),
            handler: on_activate,
        });
        self.mounted.borrow_mut().push(Rc::clone(&state));
        Ok(Some(FakeControl(state)))
    }
}
