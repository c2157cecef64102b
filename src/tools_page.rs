//! The tools section: tab-style panel switcher over the four independent
//! calculators, each a thin form around a pure function from the library.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use estudio_web::tools::{
    chat_link, clamp_expression, placeholder_text, reduce_ratio,
};

use crate::config::{DEFAULT_LOREM_LINES, DEFAULT_LOREM_PARAGRAPHS};
use crate::utils::{alert, copy_to_clipboard, ensure_font_stylesheet};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tool {
    Link,
    Clamp,
    Ratio,
    Lorem,
}

impl Tool {
    const ALL: [Tool; 4] = [Tool::Link, Tool::Clamp, Tool::Ratio, Tool::Lorem];

    fn label(self) -> &'static str {
        match self {
            Tool::Link => "Generador de enlaces",
            Tool::Clamp => "Calculadora clamp()",
            Tool::Ratio => "Relación de aspecto",
            Tool::Lorem => "Texto de relleno",
        }
    }
}

fn number_value(node: &NodeRef) -> f64 {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn integer_value(node: &NodeRef) -> u64 {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

fn text_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Tab switcher: exactly one panel carries the `active` class at a time.
#[function_component(ToolsSection)]
pub fn tools_section() -> Html {
    let active = use_state_eq(|| Tool::Link);

    html! {
        <section id="herramientas" class="tools">
            <h2>{ "Herramientas" }</h2>
            <div class="tool-tabs">
                { for Tool::ALL.iter().map(|&tool| {
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(tool))
                    };
                    html! {
                        <button
                            class={classes!("tool-btn", (*active == tool).then_some("active"))}
                            {onclick}
                        >
                            { tool.label() }
                        </button>
                    }
                }) }
            </div>
            <div class={classes!("tool-panel", (*active == Tool::Link).then_some("active"))}>
                <LinkGeneratorPanel />
            </div>
            <div class={classes!("tool-panel", (*active == Tool::Clamp).then_some("active"))}>
                <ClampPanel />
            </div>
            <div class={classes!("tool-panel", (*active == Tool::Ratio).then_some("active"))}>
                <RatioPanel />
            </div>
            <div class={classes!("tool-panel", (*active == Tool::Lorem).then_some("active"))}>
                <LoremPanel />
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Chat link generator

#[function_component(LinkGeneratorPanel)]
fn link_generator_panel() -> Html {
    let number_ref = use_node_ref();
    let message_ref = use_node_ref();
    let link = use_state(|| None::<String>);

    let on_generate = {
        let number_ref = number_ref.clone();
        let message_ref = message_ref.clone();
        let link = link.clone();
        Callback::from(move |_: MouseEvent| {
            match chat_link(&text_value(&number_ref), &text_value(&message_ref)) {
                Ok(generated) => link.set(Some(generated)),
                Err(err) => alert(&err.to_string()),
            }
        })
    };

    let on_copy = {
        let link = link.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(link) = (*link).clone() {
                copy_to_clipboard(link);
            }
        })
    };

    html! {
        <div class="tool-body">
            <label>{ "Número de teléfono" }</label>
            <input ref={number_ref} id="wa-number" type="tel" placeholder="+51 999 888 777" />
            <label>{ "Mensaje inicial (opcional)" }</label>
            <input ref={message_ref} id="wa-message" type="text" placeholder="Hola, quiero más información" />
            <button class="btn-primary" onclick={on_generate}>{ "Generar enlace" }</button>
            if let Some(link) = (*link).clone() {
                <div id="wa-result" class="tool-result">
                    <input id="wa-output" readonly={true} value={link.clone()} />
                    <a id="wa-preview" href={link} target="_blank">{ "Probar enlace" }</a>
                    <button onclick={on_copy}>{ "Copiar" }</button>
                </div>
            }
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Fluid-size calculator

#[function_component(ClampPanel)]
fn clamp_panel() -> Html {
    let min_w_ref = use_node_ref();
    let max_w_ref = use_node_ref();
    let min_f_ref = use_node_ref();
    let max_f_ref = use_node_ref();
    let family_ref = use_node_ref();
    let weight_ref = use_node_ref();

    let css = use_state(|| None::<String>);
    let preview_family = use_state(|| None::<String>);
    let preview_weight = use_state_eq(|| "400".to_string());

    let on_calculate = {
        let min_w_ref = min_w_ref.clone();
        let max_w_ref = max_w_ref.clone();
        let min_f_ref = min_f_ref.clone();
        let max_f_ref = max_f_ref.clone();
        let family_ref = family_ref.clone();
        let css = css.clone();
        let preview_family = preview_family.clone();
        Callback::from(move |_: MouseEvent| {
            let expr = clamp_expression(
                number_value(&min_w_ref),
                number_value(&max_w_ref),
                number_value(&min_f_ref),
                number_value(&max_f_ref),
            );
            match expr {
                Ok(expr) => {
                    css.set(Some(expr.css()));
                    let family = text_value(&family_ref).trim().to_string();
                    if family.is_empty() {
                        preview_family.set(None);
                    } else {
                        ensure_font_stylesheet(&family);
                        preview_family.set(Some(family));
                    }
                }
                Err(err) => alert(&err.to_string()),
            }
        })
    };

    // live preview updates when the font settings change without recomputing
    let on_family_change = {
        let family_ref = family_ref.clone();
        let preview_family = preview_family.clone();
        Callback::from(move |_: Event| {
            let family = text_value(&family_ref).trim().to_string();
            if !family.is_empty() {
                ensure_font_stylesheet(&family);
                preview_family.set(Some(family));
            }
        })
    };
    let on_weight_change = {
        let weight_ref = weight_ref.clone();
        let preview_weight = preview_weight.clone();
        Callback::from(move |_: Event| {
            if let Some(select) = weight_ref.cast::<HtmlSelectElement>() {
                preview_weight.set(select.value());
            }
        })
    };

    let on_copy = {
        let css = css.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(css) = (*css).clone() {
                copy_to_clipboard(css);
            }
        })
    };

    let preview_style = {
        let font_size = (*css)
            .as_ref()
            .map(|value| format!("font-size: {};", value))
            .unwrap_or_default();
        let font_family = match (*preview_family).as_ref() {
            Some(family) => format!("font-family: '{}', sans-serif;", family),
            None => "font-family: sans-serif;".to_string(),
        };
        format!(
            "{} {} font-weight: {}",
            font_size, font_family, *preview_weight
        )
    };

    html! {
        <div class="tool-body">
            <div class="tool-grid">
                <label>{ "Ancho mínimo (px)" }</label>
                <input ref={min_w_ref} id="clamp-min-w" type="number" placeholder="320" />
                <label>{ "Ancho máximo (px)" }</label>
                <input ref={max_w_ref} id="clamp-max-w" type="number" placeholder="1280" />
                <label>{ "Fuente mínima (px)" }</label>
                <input ref={min_f_ref} id="clamp-min-f" type="number" placeholder="16" />
                <label>{ "Fuente máxima (px)" }</label>
                <input ref={max_f_ref} id="clamp-max-f" type="number" placeholder="24" />
                <label>{ "Fuente de Google (opcional)" }</label>
                <input
                    ref={family_ref}
                    id="clamp-font-family"
                    type="text"
                    placeholder="Open Sans"
                    onchange={on_family_change}
                />
                <label>{ "Peso" }</label>
                <select ref={weight_ref} id="clamp-font-weight" onchange={on_weight_change}>
                    <option value="300">{ "300" }</option>
                    <option value="400" selected={true}>{ "400" }</option>
                    <option value="600">{ "600" }</option>
                    <option value="700">{ "700" }</option>
                </select>
            </div>
            <button class="btn-primary" onclick={on_calculate}>{ "Calcular" }</button>
            <p id="clamp-preview-text" class="clamp-preview" style={preview_style}>
                { "Así se verá tu texto fluido." }
            </p>
            if let Some(css) = (*css).clone() {
                <div id="clamp-result" class="tool-result">
                    <code id="clamp-output-code">{ css }</code>
                    <button onclick={on_copy}>{ "Copiar" }</button>
                </div>
            }
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Aspect-ratio reducer

#[function_component(RatioPanel)]
fn ratio_panel() -> Html {
    let width_ref = use_node_ref();
    let height_ref = use_node_ref();
    let ratio = use_state(|| None::<String>);

    let on_calculate = {
        let width_ref = width_ref.clone();
        let height_ref = height_ref.clone();
        let ratio = ratio.clone();
        Callback::from(move |_: MouseEvent| {
            match reduce_ratio(integer_value(&width_ref), integer_value(&height_ref)) {
                Ok((w, h)) => ratio.set(Some(format!("{}:{}", w, h))),
                Err(err) => alert(&err.to_string()),
            }
        })
    };

    html! {
        <div class="tool-body">
            <label>{ "Ancho" }</label>
            <input ref={width_ref} id="ratio-w" type="number" placeholder="1920" />
            <label>{ "Alto" }</label>
            <input ref={height_ref} id="ratio-h" type="number" placeholder="1080" />
            <button class="btn-primary" onclick={on_calculate}>{ "Reducir" }</button>
            if let Some(ratio) = (*ratio).clone() {
                <div id="ratio-result" class="tool-result">
                    <span id="ratio-display">{ ratio }</span>
                </div>
            }
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Placeholder text

#[function_component(LoremPanel)]
fn lorem_panel() -> Html {
    let paragraphs_ref = use_node_ref();
    let lines_ref = use_node_ref();
    let output = use_state(|| None::<String>);

    let on_generate = {
        let paragraphs_ref = paragraphs_ref.clone();
        let lines_ref = lines_ref.clone();
        let output = output.clone();
        Callback::from(move |_: MouseEvent| {
            let paragraphs = integer_value(&paragraphs_ref) as usize;
            let lines = integer_value(&lines_ref) as usize;
            let text = placeholder_text(paragraphs, lines, &mut rand::rng());
            output.set(Some(text));
        })
    };

    let on_copy = {
        let output = output.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(text) = (*output).clone() {
                copy_to_clipboard(text);
            }
        })
    };

    html! {
        <div class="tool-body">
            <label>{ "Párrafos" }</label>
            <input
                ref={paragraphs_ref}
                id="lorem-paragraphs"
                type="number"
                placeholder={DEFAULT_LOREM_PARAGRAPHS.to_string()}
            />
            <label>{ "Líneas por párrafo" }</label>
            <input
                ref={lines_ref}
                id="lorem-lines"
                type="number"
                placeholder={DEFAULT_LOREM_LINES.to_string()}
            />
            <button class="btn-primary" onclick={on_generate}>{ "Generar" }</button>
            if let Some(text) = (*output).clone() {
                <div id="lorem-result" class="tool-result">
                    <textarea id="lorem-output" readonly={true} value={text} />
                    <button onclick={on_copy}>{ "Copiar" }</button>
                </div>
            }
        </div>
    }
}
