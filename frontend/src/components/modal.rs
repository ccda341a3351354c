use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, KeyboardEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics::{self, EventParams};
use crate::booking::{self, SUCCESS_MESSAGE};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_notice: Callback<String>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_sending = use_state(|| false);

    {
        let on_close = props.on_close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_sending = is_sending.clone();
        let on_close = props.on_close.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    warn!("could not read booking form: {:?}", e);
                    return;
                }
            };

            is_sending.set(true);
            let is_sending = is_sending.clone();
            let on_close = on_close.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                match booking::submit(data).await {
                    Ok(()) => {
                        analytics::track(
                            config::BOOKING_SUBMITTED_EVENT,
                            &EventParams {
                                event_category: "booking",
                                event_label: "modal_form",
                            },
                        );
                        form.reset();
                        on_close.emit(());
                        on_notice.emit(SUCCESS_MESSAGE.to_string());
                    }
                    Err(e) => {
                        info!("Booking not completed: {}", e);
                        on_notice.emit(e.user_message().to_string());
                    }
                }
                is_sending.set(false);
            });
        })
    };

    html! {
        <>
            <div class={classes!("modal", (!props.open).then(|| "hidden"))}>
                <button class="btn--close-modal" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal__header">
                    {"Book a "}<span class="highlight">{"free call"}</span>{" with us"}
                </h2>
                <form class="modal__form" ref={form_ref} onsubmit={on_submit}>
                    <label for="booking-name">{"Name"}</label>
                    <input id="booking-name" name="name" type="text" required=true />
                    <label for="booking-email">{"Email"}</label>
                    <input id="booking-email" name="email" type="email" required=true />
                    <label for="booking-time">{"Preferred time"}</label>
                    <input id="booking-time" name="preferred_time" type="text" />
                    <label for="booking-message">{"Anything we should know?"}</label>
                    <textarea id="booking-message" name="message" rows="3" />
                    <button class="btn" type="submit" disabled={*is_sending}>
                        { if *is_sending { "Sending…" } else { "Book call →" } }
                    </button>
                </form>
            </div>
            <div class={classes!("overlay", (!props.open).then(|| "hidden"))} onclick={close} />
        </>
    }
}
