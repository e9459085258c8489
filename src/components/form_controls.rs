use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

#[derive(Properties, PartialEq, Clone)]
pub struct TextInputProps {
    /// `name`/`id` of the input, also used as its `data-field` marker.
    pub name: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let class = classes!("field-input", props.invalid.then(|| "invalid"));

    let input = if props.multiline {
        let on_input = props.on_input.clone();
        html! {
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                data-field={props.name.clone()}
                data-error={props.invalid.then(|| "true")}
                class={class}
                rows="5"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                oninput={Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    on_input.emit(area.value());
                })}
            />
        }
    } else {
        let on_input = props.on_input.clone();
        html! {
            <input
                type={props.input_type.clone()}
                id={props.name.clone()}
                name={props.name.clone()}
                data-field={props.name.clone()}
                data-error={props.invalid.then(|| "true")}
                class={class}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_input.emit(input.value());
                })}
            />
        }
    };

    html! {
        <div class="field">
            <label for={props.name.clone()} class="field-label">
                {props.label.clone()}
                if props.required {
                    <span class="required-mark">{" *"}</span>
                }
            </label>
            {input}
            if props.invalid {
                <p class="field-error">{"Campo obbligatorio"}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ChoiceGroupProps {
    pub name: AttrValue,
    pub label: AttrValue,
    /// (slug, label) pairs in display order.
    pub options: Vec<(&'static str, &'static str)>,
    pub selected: Option<&'static str>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub disabled: bool,
}

/// A row of toggle buttons standing in for a `<select>`.
#[function_component(ChoiceGroup)]
pub fn choice_group(props: &ChoiceGroupProps) -> Html {
    html! {
        <div class="field">
            <span class="field-label">
                {props.label.clone()}
                <span class="required-mark">{" *"}</span>
            </span>
            <div
                class={classes!("choice-group", props.invalid.then(|| "invalid"))}
                data-field={props.name.clone()}
                data-error={props.invalid.then(|| "true")}
                tabindex="-1"
            >
                { for props.options.iter().map(|&(slug, label)| {
                    let on_select = props.on_select.clone();
                    let active = props.selected == Some(slug);
                    html! {
                        <button
                            type="button"
                            class={classes!("choice", active.then(|| "active"))}
                            disabled={props.disabled}
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(slug.to_string()))}
                        >
                            {label}
                        </button>
                    }
                }) }
            </div>
            if props.invalid {
                <p class="field-error">{"Seleziona un'opzione"}</p>
            }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Up,
    Down,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AgeStepperProps {
    pub value: AttrValue,
    pub on_input: Callback<String>,
    pub on_step: Callback<Step>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(AgeStepper)]
pub fn age_stepper(props: &AgeStepperProps) -> Html {
    let on_input = props.on_input.clone();
    let step = |direction: Step| {
        let on_step = props.on_step.clone();
        Callback::from(move |_: MouseEvent| on_step.emit(direction))
    };

    html! {
        <div class="field">
            <label for="age" class="field-label">
                {"Età"}<span class="required-mark">{" *"}</span>
            </label>
            <div class="stepper">
                <input
                    type="text"
                    id="age"
                    name="age"
                    data-field="age"
                    class="field-input stepper-input"
                    inputmode="numeric"
                    value={props.value.clone()}
                    disabled={props.disabled}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_input.emit(input.value());
                    })}
                />
                <div class="stepper-buttons">
                    <button type="button" class="stepper-button" disabled={props.disabled} onclick={step(Step::Up)}>{"▲"}</button>
                    <button type="button" class="stepper-button" disabled={props.disabled} onclick={step(Step::Down)}>{"▼"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ValidationBannerProps {
    pub visible: bool,
    pub detail: AttrValue,
}

#[function_component(ValidationBanner)]
pub fn validation_banner(props: &ValidationBannerProps) -> Html {
    if !props.visible {
        return html! {};
    }
    html! {
        <div class="validation-banner" role="alert">
            <span class="banner-icon">{"!"}</span>
            <div>
                <p class="banner-title">{"Per favore completa tutti i campi richiesti"}</p>
                <p class="banner-detail">{props.detail.clone()}</p>
            </div>
        </div>
    }
}
