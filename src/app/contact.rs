use std::{future::Future, time::Duration};

use futures::channel::oneshot;
use leptos::{prelude::*, task::spawn_local};

use super::cta::{CtaSubmit, CtaVariant};
use crate::{
    contact::{
        ContactFormModel, Field, HttpTransport, Sleep, SubmissionController, SubmissionState,
        SubmitOutcome,
    },
    motion::Reveal,
    site::{self, CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, MAX_MESSAGE_LEN},
};

const INPUT_CLASSES: &str = "text-foreground placeholder-muted-foreground w-full rounded-b-md border-0 border-b-2 border-l-2 bg-transparent p-2 transition-colors focus:outline-none";

const PHONE_ICON: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
const MAIL_ICON: &str = "M3 8l7.89 4.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
const PIN_ICONS: &[&str] = &[
    "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
    "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
];
const SOCIAL_ICONS: [&str; 3] = [
    "M24 4.557c-.883.392-1.832.656-2.828.775 1.017-.609 1.798-1.574 2.165-2.724-.951.564-2.005.974-3.127 1.195-.897-.957-2.178-1.555-3.594-1.555-3.179 0-5.515 2.966-4.797 6.045-4.091-.205-7.719-2.165-10.148-5.144-1.29 2.213-.669 5.108 1.523 6.574-.806-.026-1.566-.247-2.229-.616-.054 2.281 1.581 4.415 3.949 4.89-.693.188-1.452.232-2.224.084.626 1.956 2.444 3.379 4.6 3.419-2.07 1.623-4.678 2.348-7.29 2.04 2.179 1.397 4.768 2.212 7.548 2.212 9.142 0 14.307-7.721 13.995-14.646.962-.695 1.797-1.562 2.457-2.549z",
    "M22.46 6c-.77.35-1.6.58-2.46.69.88-.53 1.56-1.37 1.88-2.38-.83.5-1.75.85-2.72 1.05C18.37 4.5 17.26 4 16 4c-2.35 0-4.27 1.92-4.27 4.29 0 .34.04.67.11.98C8.28 9.09 5.11 7.38 3 4.79c-.37.63-.58 1.37-.58 2.15 0 1.49.75 2.81 1.91 3.56-.71 0-1.37-.2-1.95-.5v.03c0 2.08 1.48 3.82 3.44 4.21a4.22 4.22 0 0 1-1.93.07 4.28 4.28 0 0 0 4 2.98 8.521 8.521 0 0 1-5.33 1.84c-.34 0-.68-.02-1.02-.06C3.44 20.29 5.7 21 8.12 21 16 21 20.33 14.46 20.33 8.79c0-.19 0-.37-.01-.56.84-.6 1.56-1.36 2.14-2.23z",
    "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
];

fn input_classes(invalid: bool) -> String {
    if invalid {
        format!("{INPUT_CLASSES} border-red-500 focus:border-red-500")
    } else {
        format!("{INPUT_CLASSES} border-border focus:border-purple-500")
    }
}

fn phone_href(phone: &str) -> String {
    format!("tel:{}", phone.replace(' ', ""))
}

/// `setTimeout` as a future.
struct BrowserSleep;

impl Sleep for BrowserSleep {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        let (tx, rx) = oneshot::channel();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            delay,
        );
        async move {
            let _ = rx.await;
        }
    }
}

#[component]
fn FieldMessage(model: RwSignal<ContactFormModel>, field: Field) -> impl IntoView {
    move || {
        model.with(|m| m.error_message(field)).map(|msg| {
            view! { <p class="mt-1 text-sm text-red-400">{msg}</p> }
        })
    }
}

#[component]
fn FormField(
    model: RwSignal<ContactFormModel>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.name() class="mb-2 block text-sm text-white">
                {field.label()}
            </label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=placeholder
                prop:value=move || model.with(|m| m.form().get(field).to_string())
                on:input=move |ev| model.update(|m| m.set_field(field, event_target_value(&ev)))
                class=move || input_classes(model.with(|m| m.errors().get(field).is_some()))
            />
            <FieldMessage model field />
        </div>
    }
}

#[component]
fn InfoIcon(paths: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex h-6 w-6 items-center justify-center">
            <svg class="h-5 w-5 text-purple-200" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                {paths
                    .iter()
                    .map(|d| {
                        view! {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=*d />
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div
            class="relative overflow-hidden bg-gradient-to-br from-purple-600 to-purple-800 p-8 md:p-12 lg:col-span-2 reveal-fade"
            style=Reveal::new(0.2, 0.5).style()
        >
            <div class="absolute -right-8 -bottom-8 size-36 rounded-full bg-purple-400"></div>
            <div class="absolute right-16 bottom-16 size-16 rounded-full bg-purple-300"></div>

            <div class="relative z-10">
                <h3 class="mb-4 text-3xl font-bold text-white">"Contact Information"</h3>
                <p class="mb-8 text-purple-100">
                    "Fill up the form and I will get back to you within 24 hours."
                </p>

                <div class="space-y-6">
                    <div class="flex items-center space-x-4">
                        <InfoIcon paths=&[PHONE_ICON] />
                        <a href=phone_href(CONTACT_PHONE) class="text-purple-100">
                            {CONTACT_PHONE}
                        </a>
                    </div>
                    <div class="flex items-center space-x-4">
                        <InfoIcon paths=&[MAIL_ICON] />
                        <a href=format!("mailto:{CONTACT_EMAIL}") class="text-purple-100">
                            {CONTACT_EMAIL}
                        </a>
                    </div>
                    <div class="flex items-center space-x-4">
                        <InfoIcon paths=PIN_ICONS />
                        <span class="text-purple-100">{CONTACT_LOCATION}</span>
                    </div>
                </div>

                <div class="mt-12 flex space-x-4">
                    {SOCIAL_ICONS
                        .iter()
                        .map(|d| {
                            view! {
                                <div class="flex h-10 w-10 cursor-pointer items-center justify-center rounded-full bg-purple-500/30 transition-colors hover:bg-purple-500/50">
                                    <svg class="h-5 w-5 text-purple-100" fill="currentColor" viewBox="0 0 24 24">
                                        <path d=*d />
                                    </svg>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

// Endpoint could not be resolved; surfaces like any other failed send.
fn mark_failed(model: &mut ContactFormModel) {
    if model.begin_submit().is_ok() {
        model.finish(false);
    }
}

/// Contact section: the form, its success panel and direct contact details.
#[component]
pub fn Contact() -> impl IntoView {
    let model = RwSignal::new(ContactFormModel::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let endpoint = match window().location().origin() {
                Ok(origin) => site::contact_endpoint(&origin),
                Err(_) => {
                    log::error!("Could not read page origin");
                    model.update(mark_failed);
                    return;
                }
            };
            let endpoint = match endpoint {
                Ok(endpoint) => endpoint,
                Err(err) => {
                    log::error!("Could not resolve contact endpoint: {err}");
                    model.update(mark_failed);
                    return;
                }
            };

            let controller = SubmissionController::new(HttpTransport::new(endpoint), model);
            match controller.submit().await {
                SubmitOutcome::Sent => controller.reset_when_due(&BrowserSleep).await,
                SubmitOutcome::Ignored => log::debug!("submission already in flight"),
                _ => {}
            }
        });
    };

    let submitting = Signal::derive(move || model.with(|m| m.is_submitting()));
    let succeeded = move || model.with(|m| m.state() == SubmissionState::Succeeded);
    let failed = move || model.with(|m| m.state() == SubmissionState::Failed);
    let button_text = Signal::derive(move || {
        if submitting.get() { "Sending...".to_string() } else { "Send Message".to_string() }
    });

    view! {
        <section id="contact" class="bg-background py-20">
            <div class="container mx-auto px-4 md:px-6">
                <div class="mb-16 text-center reveal-up" style=Reveal::new(0.0, 0.5).style()>
                    <h2 class="text-foreground mb-4 text-4xl font-black md:text-5xl">
                        "Contact "
                        <span class="bg-gradient-to-r from-purple-400 to-purple-600 bg-clip-text text-transparent">
                            "Me"
                        </span>
                    </h2>
                    <p class="text-muted-foreground mx-auto max-w-2xl text-lg">
                        "Any question or remarks? Just drop me a message!"
                    </p>
                </div>

                <div class="mx-auto max-w-6xl">
                    <div class="bg-card/30 border-border/50 grid grid-cols-1 gap-0 overflow-hidden rounded-2xl border lg:grid-cols-5">
                        <ContactInfo />

                        <div class="p-8 md:p-12 lg:col-span-3 reveal-fade" style=Reveal::new(0.4, 0.5).style()>
                            <div
                                class="flex flex-col items-center justify-center py-12 text-center"
                                class:hidden=move || !succeeded()
                            >
                                <div class="mb-4 flex h-16 w-16 items-center justify-center rounded-full border border-green-500/30 bg-green-500/10">
                                    <svg class="h-8 w-8 text-green-400" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
                                    </svg>
                                </div>
                                <h3 class="text-foreground mb-2 text-xl font-semibold">"Message Sent!"</h3>
                                <p class="text-muted-foreground">
                                    "Thank you for reaching out. I'll get back to you soon."
                                </p>
                            </div>

                            <form novalidate class="space-y-6" class:hidden=succeeded on:submit=on_submit>
                                <FormField
                                    model
                                    field=Field::FullName
                                    input_type="text"
                                    placeholder="John Doe"
                                />
                                <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                                    <FormField
                                        model
                                        field=Field::Email
                                        input_type="email"
                                        placeholder="john@example.com"
                                    />
                                    <FormField
                                        model
                                        field=Field::Phone
                                        input_type="tel"
                                        placeholder="+359 123 456 789"
                                    />
                                </div>
                                <div>
                                    <label for=Field::Message.name() class="mb-2 block text-sm text-white">
                                        {Field::Message.label()}
                                    </label>
                                    <textarea
                                        id=Field::Message.name()
                                        name=Field::Message.name()
                                        rows="4"
                                        maxlength=MAX_MESSAGE_LEN.to_string()
                                        placeholder="What do you want to discuss?"
                                        prop:value=move || model.with(|m| m.form().get(Field::Message).to_string())
                                        on:input=move |ev| {
                                            model.update(|m| m.set_field(Field::Message, event_target_value(&ev)))
                                        }
                                        class=move || {
                                            input_classes(model.with(|m| m.errors().get(Field::Message).is_some()))
                                        }
                                    ></textarea>
                                    <FieldMessage model field=Field::Message />
                                </div>

                                <p class="text-sm text-red-400" class:hidden=move || !failed()>
                                    "Something went wrong. Please try again."
                                </p>

                                <div class="flex justify-end pt-6">
                                    <CtaSubmit
                                        text=button_text
                                        disabled=submitting
                                        variant=CtaVariant::Filled
                                        class="px-12"
                                    />
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_highlighted() {
        assert!(input_classes(true).contains("border-red-500"));
        assert!(!input_classes(false).contains("border-red-500"));
        assert!(input_classes(false).starts_with(INPUT_CLASSES));
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(phone_href(CONTACT_PHONE), "tel:+359879850066");
        assert_eq!(SOCIAL_ICONS.len(), 3);
        assert!(PIN_ICONS.iter().all(|d| d.starts_with('M')));
    }
}
