use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{ContactForm, Field, Submission, SubmitOutcome, TimedTask, SUBMIT_LATENCY},
    portfolio::{ContactInfo, ExternalLink},
};

/// Timer backed by `use_timeout_fn`, which also stops it when the owning
/// component is cleaned up.
#[derive(Clone)]
struct BrowserTimer<S, P> {
    start: S,
    stop: P,
    pending: Signal<bool>,
}

impl<S: Fn(()), P: Fn()> TimedTask for BrowserTimer<S, P> {
    fn start(&self) {
        (self.start)(());
    }

    fn cancel(&self) {
        (self.stop)();
    }

    fn is_pending(&self) -> bool {
        self.pending.try_get_untracked().unwrap_or(false)
    }
}

#[component]
pub fn ContactSection(contact: ContactInfo, links: Vec<ExternalLink>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let UseTimeoutFnReturn {
        start,
        stop,
        is_pending,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            form.try_update(|f| {
                f.resolve_submission();
            });
        },
        SUBMIT_LATENCY.as_millis() as f64,
    );
    let submission = Submission::new(BrowserTimer {
        start,
        stop,
        pending: is_pending,
    });

    {
        let submission = submission.clone();
        on_cleanup(move || {
            form.try_update(|f| submission.cancel(f));
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| match submission.submit(f) {
            Ok(SubmitOutcome::Started) => log::debug!("contact form sending"),
            Ok(SubmitOutcome::AlreadySending) => {
                log::debug!("contact form already sending, submit ignored")
            }
            Err(err) => log::info!("contact form rejected: {err}"),
        });
    };

    let sending = move || form.with(ContactForm::is_submitting);
    let can_send = move || form.with(ContactForm::can_submit);

    view! {
        <section class="mt-20 mb-12">
            <div class="grid grid-cols-1 xl:grid-cols-[auto_1fr_1fr] gap-12 items-start">
                <h2 class="glow-text text-5xl md:text-6xl xl:text-7xl font-bold leading-tight text-center xl:text-left">
                    "Contact"
                    <br />
                    "Information"
                </h2>
                <form class="flex flex-col gap-5" on:submit=on_submit novalidate>
                    <FormInput form field=Field::Username placeholder="Username..." autocomplete="name" />
                    <FormInput
                        form
                        field=Field::Email
                        placeholder="Email..."
                        autocomplete="email"
                        input_type="email"
                    />
                    <textarea
                        class="glass-card glass-input min-h-40 resize-y"
                        name=Field::Message.name()
                        placeholder="Message..."
                        aria-invalid=move || invalid_attr(form, Field::Message)
                        prop:value=move || form.with(|f| f.value(Field::Message).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(Field::Message, event_target_value(&ev)));
                        }
                    ></textarea>
                    <button
                        type="submit"
                        class="rounded-2xl px-6 py-4 text-xl font-black bg-accent/80 enabled:hover:bg-accent transition disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !can_send()
                    >
                        {move || if sending() { "Sending..." } else { "Send Message" }}
                    </button>
                    {move || {
                        form.with(|f| f.status().error())
                            .map(|err| {
                                view! { <div class="status-msg status-error" role="alert">{err}</div> }
                            })
                    }}
                    {move || {
                        form.with(|f| f.status().success().map(str::to_string))
                            .map(|msg| {
                                view! { <div class="status-msg status-success" role="status">{msg}</div> }
                            })
                    }}
                </form>
                <div class="flex flex-col gap-5">
                    <div class="glass-card flex flex-col gap-3 p-6 text-lg md:text-xl font-bold">
                        <p>{contact.full_name}</p>
                        <p>
                            <a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
                        </p>
                        {contact.phone.map(|phone| view! { <p>{phone}</p> })}
                    </div>
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="glass-card block px-6 py-4 text-center text-lg md:text-xl font-bold transition-transform hover:scale-105"
                                    href=link.href()
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    {link.label.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Only flag a field once the visitor has typed something into it.
fn invalid_attr(form: RwSignal<ContactForm>, field: Field) -> &'static str {
    form.with(|f| {
        if !f.value(field).is_empty() && !f.fields().is_field_valid(field) {
            "true"
        } else {
            "false"
        }
    })
}

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: Field,
    placeholder: &'static str,
    autocomplete: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="glass-card glass-input"
            type=input_type
            name=field.name()
            placeholder=placeholder
            autocomplete=autocomplete
            aria-invalid=move || invalid_attr(form, field)
            prop:value=move || form.with(|f| f.value(field).to_string())
            on:input=move |ev| {
                form.update(|f| f.update_field(field, event_target_value(&ev)));
            }
        />
    }
}
