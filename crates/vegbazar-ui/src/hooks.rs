//! Hooks binding core state machines to tokio timers.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;
use vegbazar_core::timer::{Fired, TokioScheduler};

/// Own a timer-driven state machine for the lifetime of the component.
///
/// `init` builds the machine around a fresh [`TokioScheduler`]. Every event
/// the scheduler fires is handed to `on_fired` together with the machine. The
/// draining task is scoped to the component, and dropping the machine cancels
/// its outstanding timers, so nothing fires into a retired component.
pub fn use_timed<M, E, I, F>(init: I, on_fired: F) -> Signal<M>
where
    M: 'static,
    E: Send + 'static,
    I: FnOnce(TokioScheduler<E>) -> M,
    F: FnMut(&mut M, Fired<E>) + 'static,
{
    let receiver: Rc<RefCell<Option<UnboundedReceiver<Fired<E>>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    let mut state = use_signal({
        let receiver = receiver.clone();
        move || {
            let (scheduler, rx) = TokioScheduler::channel();
            *receiver.borrow_mut() = Some(rx);
            init(scheduler)
        }
    });

    use_hook(move || {
        if let Some(mut rx) = receiver.borrow_mut().take() {
            let mut on_fired = on_fired;
            spawn(async move {
                while let Some(fired) = rx.recv().await {
                    let mut machine = state.write();
                    on_fired(&mut machine, fired);
                }
            });
        }
    });

    state
}
