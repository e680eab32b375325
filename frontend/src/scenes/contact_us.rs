use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::contact::{self, ContactForm, Field, ValidationErrors};
use crate::page::SelectedPage;
use crate::scenes::{select_on_enter, SectionProps};
use crate::visibility::use_viewport_enter;

#[derive(Clone, PartialEq)]
enum SendStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

fn field_input(form: &UseStateHandle<ContactForm>, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = match field {
            Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            Field::Name | Field::Email => e.target_unchecked_into::<HtmlInputElement>().value(),
        };
        let mut next = (*form).clone();
        next.set(field, value);
        form.set(next);
    })
}

fn field_error(errors: &ValidationErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(err) => html! { <p class="field-error">{err.to_string()}</p> },
        None => html! {},
    }
}

#[function_component(ContactUs)]
pub fn contact_us(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let on_enter = use_memo(
        |on_select| select_on_enter(on_select, SelectedPage::ContactUs),
        props.on_select.clone(),
    );
    use_viewport_enter(node.clone(), (*on_enter).clone());

    let form = use_state(ContactForm::default);
    let errors = use_state(ValidationErrors::default);
    let status = use_state(|| SendStatus::Idle);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*form).clone();
            if let Err(found) = current.validate() {
                errors.set(found);
                return;
            }
            errors.set(ValidationErrors::default());
            status.set(SendStatus::Sending);

            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                match contact::submit(&current).await {
                    Ok(()) => {
                        info!("Contact form sent");
                        form.set(ContactForm::default());
                        status.set(SendStatus::Sent);
                    }
                    Err(err) => {
                        warn!("Contact form failed: {}", err);
                        status.set(SendStatus::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let status_message = match &*status {
        SendStatus::Sent => html! {
            <div class="success-message">{"Thanks! We'll get back to you shortly."}</div>
        },
        SendStatus::Failed(message) => html! {
            <div class="error-message">{message.clone()}</div>
        },
        SendStatus::Idle | SendStatus::Sending => html! {},
    };

    html! {
        <section id={SelectedPage::ContactUs.anchor_id()} class="contact-us" ref={node}>
            <div class="contact-intro">
                <SectionHeading>
                    <span class="highlight">{"JOIN NOW"}</span>{" TO GET IN SHAPE"}
                </SectionHeading>
                <p>
                    {"Congue adipiscing risus commodo placerat. Tellus et in feugiat nisl sapien vel rhoncus. Placerat at in enim pellentesque. Nulla adipiscing leo egestas nisi elit risus sit. Nunc cursus sagittis."}
                </p>
            </div>
            <div class="contact-body">
                <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                    <input
                        type="text"
                        placeholder="NAME"
                        value={form.name.clone()}
                        oninput={field_input(&form, Field::Name)}
                    />
                    { field_error(&errors, Field::Name) }
                    <input
                        type="email"
                        placeholder="EMAIL"
                        value={form.email.clone()}
                        oninput={field_input(&form, Field::Email)}
                    />
                    { field_error(&errors, Field::Email) }
                    <textarea
                        placeholder="MESSAGE"
                        rows="4"
                        cols="50"
                        value={form.message.clone()}
                        oninput={field_input(&form, Field::Message)}
                    />
                    { field_error(&errors, Field::Message) }
                    <button type="submit" disabled={*status == SendStatus::Sending}>
                        {"SUBMIT"}
                    </button>
                    { status_message }
                </form>
                <div class="contact-graphic">
                    <img src="/assets/ContactUsPageGraphic.png" alt="contact-us-page-graphic" />
                </div>
            </div>
            <style>
                {r#"
                .contact-us {
                    width: 83%;
                    margin: 0 auto;
                    padding: 6rem 0 8rem;
                }
                .contact-intro {
                    max-width: 60%;
                }
                .contact-body {
                    display: flex;
                    justify-content: space-between;
                    gap: 2rem;
                    margin-top: 2.5rem;
                }
                .contact-form {
                    flex-basis: 60%;
                    display: flex;
                    flex-direction: column;
                }
                .contact-form input, .contact-form textarea {
                    margin-top: 1.25rem;
                    padding: 0.75rem 1.25rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #FF6B66;
                    color: #fff;
                    font: inherit;
                }
                .contact-form input::placeholder, .contact-form textarea::placeholder {
                    color: #fff;
                }
                .contact-form button {
                    align-self: flex-start;
                    margin-top: 1.25rem;
                    padding: 0.75rem 5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #FFC132;
                    cursor: pointer;
                    transition: color 0.5s;
                }
                .contact-form button:hover {
                    color: #fff;
                }
                .contact-form button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .field-error {
                    margin: 0.25rem 0 0;
                    color: #FF616A;
                }
                .success-message {
                    margin-top: 1rem;
                    color: green;
                }
                .error-message {
                    margin-top: 1rem;
                    color: red;
                }
                .contact-graphic img {
                    max-width: 100%;
                }
                @media (max-width: 1060px) {
                    .contact-intro {
                        max-width: 100%;
                    }
                    .contact-body {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
