use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::use_unmount;

use crate::forms::fields::FormFields;
use crate::forms::flow::{FlowAction, SubmissionFlow, SubmissionStatus};
use crate::forms::presenter::MODAL_HIDE_MS;
use crate::relay::Relay;

/// Pending timers of one form. Dropping a `Timeout` cancels it.
#[derive(Default)]
struct FlowTimers {
    status_reset: Option<Timeout>,
    modal_hide: Option<Timeout>,
}

pub struct SubmissionHandle<F: FormFields> {
    pub flow: UseReducerHandle<SubmissionFlow<F>>,
    pub on_edit: Callback<(F::Field, String)>,
    pub on_submit: Callback<SubmitEvent>,
    pub on_dismiss: Callback<()>,
}

#[hook]
pub fn use_submission<F>(
    relay: Rc<dyn Relay<F>>,
    with_modal: bool,
    status_reset_ms: u32,
) -> SubmissionHandle<F>
where
    F: FormFields,
{
    let flow = use_reducer(move || SubmissionFlow::<F>::new(with_modal));
    let timers = use_mut_ref(FlowTimers::default);

    // Arm both timers whenever a new cycle lands on Sent
    {
        let dispatcher = flow.dispatcher();
        let timers = timers.clone();
        let modal_visible = flow.modal_visible;
        use_effect_with_deps(
            move |(status, cycle): &(SubmissionStatus, u32)| {
                if *status == SubmissionStatus::Sent {
                    let cycle = *cycle;
                    let mut timers = timers.borrow_mut();

                    let reset = dispatcher.clone();
                    timers.status_reset = Some(Timeout::new(status_reset_ms, move || {
                        reset.dispatch(FlowAction::ExpireStatus(cycle));
                    }));

                    if modal_visible {
                        let hide = dispatcher.clone();
                        timers.modal_hide = Some(Timeout::new(MODAL_HIDE_MS, move || {
                            hide.dispatch(FlowAction::ExpireModal(cycle));
                        }));
                    }
                }
                || ()
            },
            (flow.status, flow.cycle()),
        );
    }

    {
        let timers = timers.clone();
        use_unmount(move || cancel_all(&timers));
    }

    let on_edit = {
        let dispatcher = flow.dispatcher();
        Callback::from(move |(field, value): (F::Field, String)| {
            dispatcher.dispatch(FlowAction::Edit(field, value));
        })
    };

    let on_submit = {
        let flow = flow.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Same transition the reducer is about to make, run on a copy to get the payload
            let mut probe = (*flow).clone();
            let payload = probe.begin();
            flow.dispatch(FlowAction::Submit);

            if let Some(payload) = payload {
                let relay = relay.clone();
                let dispatcher = flow.dispatcher();
                spawn_local(async move {
                    let outcome = relay.deliver(&payload).await;
                    if let Err(err) = &outcome {
                        log::error!("Form submission failed: {}", err);
                    }
                    dispatcher.dispatch(FlowAction::Finish(outcome));
                });
            }
        })
    };

    let on_dismiss = {
        let dispatcher = flow.dispatcher();
        Callback::from(move |_| {
            timers.borrow_mut().modal_hide.take();
            dispatcher.dispatch(FlowAction::DismissModal);
        })
    };

    SubmissionHandle { flow, on_edit, on_submit, on_dismiss }
}

fn cancel_all(timers: &Rc<RefCell<FlowTimers>>) {
    let mut timers = timers.borrow_mut();
    timers.status_reset.take();
    timers.modal_hide.take();
}
