//! Contact section with the request form.
//!
//! Form values and the in-flight flag are local signals owned by this
//! component. The submit button is disabled while a request is in flight;
//! that is the only guard against double submission.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::services::{submit_contact, GlooClient};
use crate::{
    push_toast, ContactField, ContactForm, FieldKind, ToastEntry, CONTACT_ENDPOINT,
    SCROLL_TARGET_ID,
};

/// Submit button label for the given in-flight state.
pub fn submit_label(in_flight: bool) -> &'static str {
    if in_flight {
        "Отправка..."
    } else {
        "Отправить заявку"
    }
}

#[component]
pub fn ContactSection(toasts: RwSignal<Vec<ToastEntry>>) -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let in_flight = create_rw_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();

        spawn_local(async move {
            let outcome = submit_contact(&GlooClient, CONTACT_ENDPOINT, &snapshot, move |busy| {
                in_flight.set(busy)
            })
            .await;

            if let Some(toast) = form.try_update(|current| outcome.apply(current)) {
                push_toast(toasts, toast);
            }
        });
    };

    view! {
        <section id=SCROLL_TARGET_ID class="contact">
            <div class="container contact-inner">
                <div class="section-heading fade-in">
                    <h2>"Связаться"</h2>
                    <p class="muted">"Расскажите о вашей идее"</p>
                </div>

                <div class="card contact-card scale-in">
                    <form class="contact-form" on:submit=on_submit>
                        {ContactField::ALL
                            .into_iter()
                            .map(|field| view! { <FormField field=field form=form/> })
                            .collect_view()}

                        <button
                            type="submit"
                            class="button button-primary button-lg button-block"
                            disabled=move || in_flight.get()
                        >
                            {move || submit_label(in_flight.get())}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// Labelled control bound to one field of the form.
#[component]
fn FormField(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|current| field.value(current).to_string());
    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        form.update(|current| field.set(current, value));
    };

    let control = match field.kind() {
        FieldKind::Input(input_type) => view! {
            <input
                id=field.id()
                name=field.id()
                type=input_type
                class="input"
                required=field.is_required()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
        FieldKind::TextArea => view! {
            <textarea
                id=field.id()
                name=field.id()
                class="input textarea"
                required=field.is_required()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view(),
    };

    view! {
        <div class="field">
            <label for=field.id() class="field-label">{field.label()}</label>
            {control}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label_reflects_in_flight() {
        assert_eq!(submit_label(false), "Отправить заявку");
        assert_eq!(submit_label(true), "Отправка...");
    }
}
