//! Contact form
//!
//! Input and status live in a `ContactFormController`. While a request is in
//! flight the submit button is disabled; a success clears the form and flips
//! back to idle after `SUCCESS_RESET_DELAY`. Errors stay until the next try.
//! Once the component is gone the signal is disposed and a pending reset does
//! nothing.

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::contact::{reset_after_delay, Budget, Interest, ResetTicket, Timeline};
use portfolio_common::{ContactFormController, Error, FormStatus};
use std::time::Duration;
use crate::api::contact::{submit_contact, CONTACT_ENDPOINT};

fn sleep(delay: Duration) -> TimeoutFuture {
    TimeoutFuture::new(delay.as_millis() as u32)
}

/// Return a successful form to idle once the reset delay has passed
pub async fn settle_success(controller: RwSignal<ContactFormController>, ticket: ResetTicket) -> bool {
    reset_after_delay(sleep, ticket, |t| {
        controller.try_update(|c| c.reset_after_success(t)).unwrap_or(false)
    })
    .await
}

#[component]
pub fn ContactForm(#[prop(default = CONTACT_ENDPOINT)] endpoint: Option<&'static str>) -> impl IntoView {
    let controller = RwSignal::new(ContactFormController::new());
    let (validation, set_validation) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let fields = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(fields)) => fields,
            Some(Err(Error::SubmissionInFlight)) | None => return,
            Some(Err(err)) => {
                set_validation.set(Some(err.to_string()));
                return;
            }
        };
        set_validation.set(None);

        spawn_local(async move {
            let outcome = submit_contact(endpoint, &fields).await;
            // The page may have been left while the request was running
            let Some(Some(ticket)) = controller.try_update(|c| c.finish(outcome)) else {
                return;
            };
            settle_success(controller, ticket).await;
        });
    };

    let status = move || controller.with(|c| c.status());

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-grid">
                <div class="form-group">
                    <label for="name">"Name *"</label>
                    <input
                        type="text"
                        id="name"
                        required
                        prop:value=move || controller.with(|c| c.form.name.clone())
                        on:input=move |ev| controller.update(|c| c.form.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email *"</label>
                    <input
                        type="email"
                        id="email"
                        required
                        prop:value=move || controller.with(|c| c.form.email.clone())
                        on:input=move |ev| controller.update(|c| c.form.email = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="organization">"Organization"</label>
                    <input
                        type="text"
                        id="organization"
                        prop:value=move || controller.with(|c| c.form.organization.clone())
                        on:input=move |ev| controller.update(|c| c.form.organization = event_target_value(&ev))
                    />
                </div>
            </div>

            <fieldset class="form-group interests">
                <legend>"I'm interested in"</legend>
                {Interest::ALL
                    .into_iter()
                    .map(|interest| view! {
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || controller.with(|c| c.form.interests.contains(&interest))
                                on:change=move |_| controller.update(|c| c.form.toggle_interest(interest))
                            />
                            {interest.label()}
                        </label>
                    })
                    .collect_view()}
            </fieldset>

            <div class="form-group">
                <label for="message">"Project Description *"</label>
                <textarea
                    id="message"
                    rows="6"
                    required
                    prop:value=move || controller.with(|c| c.form.message.clone())
                    on:input=move |ev| controller.update(|c| c.form.message = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label for="timeline">"Timeline"</label>
                    <select
                        id="timeline"
                        on:change=move |ev| {
                            if let Ok(timeline) = event_target_value(&ev).parse::<Timeline>() {
                                controller.update(|c| c.form.timeline = timeline);
                            }
                        }
                    >
                        {Timeline::ALL
                            .into_iter()
                            .map(|t| view! {
                                <option value=t.label() selected=move || controller.with(|c| c.form.timeline == t)>
                                    {t.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="budget">"Budget"</label>
                    <select
                        id="budget"
                        on:change=move |ev| {
                            if let Ok(budget) = event_target_value(&ev).parse::<Budget>() {
                                controller.update(|c| c.form.budget = budget);
                            }
                        }
                    >
                        {Budget::ALL
                            .into_iter()
                            .map(|b| view! {
                                <option value=b.label() selected=move || controller.with(|c| c.form.budget == b)>
                                    {b.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            {move || validation.get().map(|msg| view! { <p class="form-message validation">{msg}</p> })}

            <button
                type="submit"
                class="btn btn-primary btn-large"
                disabled=move || controller.with(|c| c.is_submit_disabled())
            >
                {move || if status() == FormStatus::Submitting { "Sending..." } else { "Send Message" }}
            </button>

            {move || {
                controller.with(|c| c.status_message()).map(|msg| {
                    view! { <p class=format!("form-message {}", status().as_str())>{msg}</p> }
                })
            }}
        </form>
    }
}
