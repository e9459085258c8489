use log::debug;
use yew::prelude::*;

use crate::components::footer::{FACEBOOK_URL, INSTAGRAM_URL};
use crate::components::form_controls::{TextInput, ValidationBanner};
use crate::dom;
use crate::state::fields::{ContactField, ContactFields, FieldName};
use crate::state::submission::{ContactController, FormEffect};
use crate::state::timers::{ScheduledTask, Ticket};

pub enum Msg {
    Edit(ContactField, String),
    Submit,
    BannerExpired(Ticket),
    StartOver,
}

pub struct ContactPage {
    form: ContactController,
    banner_task: ScheduledTask,
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactController::contact(),
            banner_task: ScheduledTask::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => self.form.edit(field, value),
            Msg::Submit => {
                let attempt = self.form.attempt_submit();
                debug!("contact submit: {:?}", attempt.verdict);
                self.run_effects(ctx, attempt.effects);
                true
            }
            Msg::BannerExpired(ticket) => self.form.banner_expired(ticket),
            Msg::StartOver => self.form.start_over(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page contact-page">
                <div class="container">
                    <h1 class="page-title">{"Contattaci"}</h1>
                    <div class="contact-grid">
                        { contact_details() }
                        if self.form.is_submitted() {
                            <div class="card scale-in success">
                                <div class="success-icon">{"✓"}</div>
                                <h2>{"✅ Messaggio Inviato!"}</h2>
                                <div class="success-copy">
                                    <p>{"Grazie per averci contattato! 🎉"}</p>
                                    <p>{"Ti risponderemo il prima possibile."}</p>
                                </div>
                                <button class="button primary" onclick={ctx.link().callback(|_| Msg::StartOver)}>
                                    {"Invia un altro messaggio"}
                                </button>
                            </div>
                        } else {
                            { self.render_form(ctx) }
                        }
                    </div>
                </div>
            </div>
        }
    }
}

impl ContactPage {
    fn run_effects(&mut self, ctx: &Context<Self>, effects: Vec<FormEffect<ContactFields>>) {
        for effect in effects {
            match effect {
                FormEffect::HideBannerAfter { ticket, delay_ms } => {
                    let link = ctx.link().clone();
                    self.banner_task.schedule(delay_ms, move || {
                        link.send_message(Msg::BannerExpired(ticket));
                    });
                }
                FormEffect::FocusField(field) => dom::focus_field(field.name()),
                FormEffect::ScrollToTop => {
                    self.banner_task.cancel();
                    dom::scroll_to_top();
                }
                FormEffect::Deliver(fields) => {
                    debug!("unexpected delivery request for contact form: {:?}", fields);
                }
            }
        }
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let values = self.form.values();
        let edit = |field: ContactField| ctx.link().callback(move |value: String| Msg::Edit(field, value));
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="card slide-up">
                <h2>{"Inviaci un Messaggio"}</h2>
                <ValidationBanner
                    visible={self.form.banner_visible()}
                    detail="Tutti i campi sono obbligatori"
                />
                <form onsubmit={onsubmit} novalidate=true>
                    <TextInput
                        name="name"
                        label="Nome"
                        value={values.name.clone()}
                        invalid={self.form.has_error(ContactField::Name)}
                        on_input={edit(ContactField::Name)}
                    />
                    <TextInput
                        name="email"
                        label="Email"
                        input_type="email"
                        value={values.email.clone()}
                        invalid={self.form.has_error(ContactField::Email)}
                        on_input={edit(ContactField::Email)}
                    />
                    <TextInput
                        name="subject"
                        label="Oggetto"
                        value={values.subject.clone()}
                        invalid={self.form.has_error(ContactField::Subject)}
                        on_input={edit(ContactField::Subject)}
                    />
                    <TextInput
                        name="message"
                        label="Messaggio"
                        multiline=true
                        value={values.message.clone()}
                        invalid={self.form.has_error(ContactField::Message)}
                        on_input={edit(ContactField::Message)}
                    />
                    <button type="submit" class="button primary wide">{"Invia Messaggio"}</button>
                </form>
            </div>
        }
    }
}

fn contact_details() -> Html {
    html! {
        <div class="card contact-details">
            <h2>{"Informazioni di Contatto"}</h2>
            <ul class="contact-list">
                <li>
                    <span class="contact-label">{"Indirizzo"}</span>
                    <a href="https://maps.google.com/?q=Via+San+Marco+114,+37138+Verona" target="_blank" rel="noopener noreferrer">
                        {"Via San Marco 114, 37138 Verona"}
                    </a>
                </li>
                <li>
                    <span class="contact-label">{"Telefono"}</span>
                    <a href="tel:+393481609492">{"+39 348 160 9492"}</a>
                </li>
                <li>
                    <span class="contact-label">{"Email"}</span>
                    <a href="mailto:info@matchme.it">{"info@matchme.it"}</a>
                </li>
                <li>
                    <span class="contact-label">{"Instagram"}</span>
                    <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"@matchme.vr"}</a>
                </li>
                <li>
                    <span class="contact-label">{"Facebook"}</span>
                    <a href={FACEBOOK_URL} target="_blank" rel="noopener noreferrer">{"MATCH ME Verona"}</a>
                </li>
            </ul>
        </div>
    }
}
