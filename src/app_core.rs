use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;

use crate::app_router::InitConfig;
use crate::persisted_store;
use monkeycard_core::{
    ConfigAction, Configurator, ConfiguratorSnapshot, CopyTarget, Effects, TOAST_DURATION_MS,
    USERNAME_DEBOUNCE_MS,
};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

/// Shared handle over the configurator. Views read snapshots and send
/// actions; timers and persistence requested by an action are started here.
pub(crate) struct AppCore {
    state: RefCell<Configurator>,
    snapshot: RefCell<ConfiguratorSnapshot>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
    themes_url: String,
    debounce_timer: RefCell<Option<Timeout>>,
    toast_timer: RefCell<Option<Timeout>>,
}

impl AppCore {
    pub(crate) fn new(config: InitConfig) -> Rc<Self> {
        let state = Configurator::new(config.endpoint, config.control, config.color_mode);
        let snapshot = state.snapshot();
        Rc::new(Self {
            state: RefCell::new(state),
            snapshot: RefCell::new(snapshot),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            themes_url: config.themes_url,
            debounce_timer: RefCell::new(None),
            toast_timer: RefCell::new(None),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn snapshot(&self) -> ConfiguratorSnapshot {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn themes_url(&self) -> &str {
        &self.themes_url
    }

    pub(crate) fn begin_catalog_load(&self) -> bool {
        let started = self.state.borrow_mut().begin_catalog_load();
        if started {
            self.notify();
        }
        started
    }

    pub(crate) fn dispatch(self: &Rc<Self>, action: ConfigAction) {
        let effects = self.state.borrow_mut().apply(action);
        self.run_effects(effects);
    }

    /// Text to hand to the clipboard for `target`.
    pub(crate) fn prepare_copy(self: &Rc<Self>, target: CopyTarget) -> String {
        let (text, effects) = self.state.borrow_mut().prepare_copy(target);
        self.run_effects(effects);
        text
    }

    fn run_effects(self: &Rc<Self>, effects: Effects) {
        if let Some(token) = effects.debounce {
            let core = Rc::clone(self);
            *self.debounce_timer.borrow_mut() = Some(Timeout::new(USERNAME_DEBOUNCE_MS, move || {
                core.debounce_timer.borrow_mut().take();
                core.dispatch(ConfigAction::DebounceElapsed { token });
            }));
        }
        if effects.recomputed.is_some() && effects.debounce.is_none() {
            // The recompute already covers any pending username edit.
            self.debounce_timer.borrow_mut().take();
        }
        if let Some(generation) = effects.toast {
            let core = Rc::clone(self);
            *self.toast_timer.borrow_mut() = Some(Timeout::new(TOAST_DURATION_MS, move || {
                core.toast_timer.borrow_mut().take();
                core.dispatch(ConfigAction::ToastElapsed { generation });
            }));
        }
        if let Some(mode) = effects.color_mode {
            persisted_store::save_color_mode(mode);
        }
        if effects.changed {
            self.notify();
        }
    }

    fn notify(&self) {
        let next = self.state.borrow().snapshot();
        *self.snapshot.borrow_mut() = next;
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
