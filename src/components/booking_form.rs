//! Booking Form Component
//!
//! Modal email form for the pending cat. Runs the booking workflow and
//! mirrors a successful booking into the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SupabaseClient;
use crate::booking::{BookingError, BookingWorkflow};
use crate::cache::{browser_store, BookingCache};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::{Cat, NewBooking};
use crate::store::{store_record_booking, use_app_store};

async fn submit_booking(config: AppConfig, cat: Cat, email: String) -> Result<NewBooking, BookingError> {
    let client = SupabaseClient::new(config.backend);
    let cache = BookingCache::load(browser_store(), &config.cache_key);
    let mut workflow = BookingWorkflow::new(&client, cache);
    workflow.book(&cat, &email).await
}

#[component]
pub fn BookingForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let close = move || {
        set_email.set(String::new());
        set_error.set(None);
        ctx.close_booking();
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(cat) = ctx.booking_target.get() else { return };
        let config = ctx.config.get_value();
        let address = email.get();

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match submit_booking(config, cat, address).await {
                Ok(booking) => {
                    tracing::info!("cat {} booked", booking.cat_id);
                    store_record_booking(&store, booking.cat_id, booking.email);
                    ctx.notify(format!("Вы записаны на просмотр {}!", booking.cat_name));
                    close();
                }
                Err(e) => {
                    tracing::warn!("booking rejected: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show when=move || ctx.booking_target.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal card" on:click=|ev| ev.stop_propagation()>
                    <form class="card__body booking-form" on:submit=on_submit>
                        <h3>
                            {move || ctx.booking_target.with(|target| {
                                target.as_ref().map(|cat| format!("Запись на просмотр: {}", cat.name)).unwrap_or_default()
                            })}
                        </h3>
                        <label class="form-label" for="bookingEmail">"Ваш email"</label>
                        <input
                            id="bookingEmail"
                            class="form-control"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || error.get().map(|message| view! {
                            <p class="booking-form__error">{message}</p>
                        })}
                        <div class="booking-form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Отправка..." } else { "Записаться" }}
                            </button>
                            <button class="btn btn--secondary" type="button" on:click=move |_| close()>
                                "Отмена"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
