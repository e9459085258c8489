use chrono::Utc;
use log::{debug, info};
use yew::prelude::*;

use crate::api::bookings::{insert_booking, BookingRecord, SubmissionError};
use crate::components::form_controls::{AgeStepper, ChoiceGroup, Step, TextInput, ValidationBanner};
use crate::dom;
use crate::state::fields::{BookingField, BookingFields, FieldName, Gender, Referral};
use crate::state::router::View;
use crate::state::stepper;
use crate::state::submission::{BookingController, FormEffect};
use crate::state::timers::{ScheduledTask, Ticket};

#[derive(Properties, PartialEq)]
pub struct BookingPageProps {
    pub on_navigate: Callback<View>,
}

pub enum Msg {
    Edit(BookingField, String),
    StepAge(Step),
    Submit,
    BannerExpired(Ticket),
    Delivered(Result<(), SubmissionError>),
}

pub struct BookingPage {
    form: BookingController,
    banner_task: ScheduledTask,
}

impl Component for BookingPage {
    type Message = Msg;
    type Properties = BookingPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: BookingController::booking(),
            banner_task: ScheduledTask::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => self.form.edit(field, value),
            Msg::StepAge(step) => {
                let age = &self.form.values().age;
                let next = match step {
                    Step::Up => stepper::increment(age),
                    Step::Down => stepper::decrement(age),
                };
                self.form.edit(BookingField::Age, next)
            }
            Msg::Submit => {
                let attempt = self.form.attempt_submit();
                debug!("booking submit: {:?}, now {:?}", attempt.verdict, self.form.state());
                self.run_effects(ctx, attempt.effects);
                true
            }
            Msg::BannerExpired(ticket) => self.form.banner_expired(ticket),
            Msg::Delivered(result) => {
                let effects = self.form.acknowledge(result);
                self.run_effects(ctx, effects);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page booking-page">
                <div class="container narrow">
                    <h1 class="page-title">{"Prenota il Tuo Posto"}</h1>
                    if self.form.is_submitted() {
                        { self.render_success(ctx) }
                    } else {
                        { self.render_form(ctx) }
                    }
                </div>
            </div>
        }
    }
}

impl BookingPage {
    fn run_effects(&mut self, ctx: &Context<Self>, effects: Vec<FormEffect<BookingFields>>) {
        for effect in effects {
            match effect {
                FormEffect::HideBannerAfter { ticket, delay_ms } => {
                    let link = ctx.link().clone();
                    self.banner_task.schedule(delay_ms, move || {
                        link.send_message(Msg::BannerExpired(ticket));
                    });
                }
                FormEffect::FocusField(field) => dom::focus_field(field.name()),
                FormEffect::Deliver(fields) => match BookingRecord::from_fields(&fields, Utc::now()) {
                    Ok(record) => {
                        info!("sending booking for {}", record.email);
                        ctx.link().send_future(async move {
                            Msg::Delivered(insert_booking(&record).await)
                        });
                    }
                    Err(e) => ctx.link().send_message(Msg::Delivered(Err(e))),
                },
                FormEffect::ScrollToTop => {
                    self.banner_task.cancel();
                    dom::scroll_to_top();
                }
            }
        }
    }

    fn edit(ctx: &Context<Self>, field: BookingField) -> Callback<String> {
        ctx.link().callback(move |value: String| Msg::Edit(field, value))
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let values = self.form.values();
        let busy = self.form.is_submitting();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="card slide-up">
                <ValidationBanner
                    visible={self.form.banner_visible()}
                    detail="Tutti i campi contrassegnati sono obbligatori"
                />
                <form onsubmit={onsubmit} novalidate=true>
                    <TextInput
                        name="name"
                        label="Nome Completo"
                        value={values.full_name.clone()}
                        invalid={self.form.has_error(BookingField::FullName)}
                        disabled={busy}
                        on_input={Self::edit(ctx, BookingField::FullName)}
                    />
                    <TextInput
                        name="email"
                        label="Email"
                        input_type="email"
                        value={values.email.clone()}
                        invalid={self.form.has_error(BookingField::Email)}
                        disabled={busy}
                        on_input={Self::edit(ctx, BookingField::Email)}
                    />
                    <TextInput
                        name="phone"
                        label="Telefono"
                        input_type="tel"
                        value={values.phone.clone()}
                        invalid={self.form.has_error(BookingField::Phone)}
                        disabled={busy}
                        on_input={Self::edit(ctx, BookingField::Phone)}
                    />
                    <div class="field-row">
                        <AgeStepper
                            value={values.age.clone()}
                            disabled={busy}
                            on_input={Self::edit(ctx, BookingField::Age)}
                            on_step={ctx.link().callback(Msg::StepAge)}
                        />
                        <ChoiceGroup
                            name="gender"
                            label="Genere"
                            options={Gender::ALL.iter().map(|g| (g.slug(), g.label())).collect::<Vec<_>>()}
                            selected={values.gender.map(|g| g.slug())}
                            invalid={self.form.has_error(BookingField::Gender)}
                            disabled={busy}
                            on_select={Self::edit(ctx, BookingField::Gender)}
                        />
                    </div>
                    <TextInput
                        name="location"
                        label="Luogo di Provenienza"
                        placeholder="Città, Provincia"
                        value={values.location.clone()}
                        invalid={self.form.has_error(BookingField::Location)}
                        disabled={busy}
                        on_input={Self::edit(ctx, BookingField::Location)}
                    />
                    <TextInput
                        name="interests"
                        label="Interessi"
                        placeholder="Racconta qualcosa sui tuoi interessi, hobby o passioni..."
                        multiline=true
                        required=false
                        value={values.interests.clone()}
                        disabled={busy}
                        on_input={Self::edit(ctx, BookingField::Interests)}
                    />
                    <ChoiceGroup
                        name="referral"
                        label="Come ci hai conosciuto?"
                        options={Referral::ALL.iter().map(|r| (r.slug(), r.label())).collect::<Vec<_>>()}
                        selected={values.referral.map(|r| r.slug())}
                        invalid={self.form.has_error(BookingField::Referral)}
                        disabled={busy}
                        on_select={Self::edit(ctx, BookingField::Referral)}
                    />
                    if let Some(message) = self.form.failure() {
                        <p class="submit-error">{message}</p>
                    }
                    <button type="submit" class="button primary wide" disabled={busy}>
                        { if busy { "Invio in corso..." } else { "Conferma la tua Prenotazione" } }
                    </button>
                </form>
            </div>
        }
    }

    fn render_success(&self, ctx: &Context<Self>) -> Html {
        let go = |view: View| {
            let on_navigate = ctx.props().on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(view))
        };

        html! {
            <div class="card scale-in success">
                <div class="success-icon">{"✓"}</div>
                <h2>{"✅ Prenotazione Confermata!"}</h2>
                <div class="success-copy">
                    <p>{"Grazie per aver scelto Match Me! 🎉"}</p>
                    <p>{"Ti abbiamo inviato tutti i dettagli della tua prenotazione."}</p>
                    <p>{"Se hai domande o bisogno di assistenza, visita la nostra sezione Contatti."}</p>
                    <p>{"Ci vediamo presto! 😉"}</p>
                </div>
                <div class="button-row">
                    <button class="button outline" onclick={go(View::Home)}>{"Home"}</button>
                    <button class="button primary" onclick={go(View::Contact)}>{"Contatti"}</button>
                </div>
            </div>
        }
    }
}
