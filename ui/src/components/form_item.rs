//! Single labelled form field bound to a `FormState`
//!
//! Each field renders its label, the input itself and the field's current
//! validation message. Values flow through the form state, never through
//! component-local signals, so populate and validate reach every field.

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;

use crate::form::{FormState, SelectOption};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

/// What kind of control a field renders
#[derive(Clone, Copy)]
pub enum FieldKind {
    Text,
    TextArea,
    /// Dropdown fed by a (possibly async) option list
    Select(Signal<Vec<SelectOption>>),
    /// File picker; the chosen file's name becomes the field value
    File,
}

#[component]
pub fn FormItem(
    form: FormState,
    field: &'static str,
    label: &'static str,
    #[prop(optional)] kind: Option<FieldKind>,
    #[prop(optional)] placeholder: &'static str,
    /// Receives the picked file as a data URL (file fields only)
    #[prop(optional)]
    file_data: Option<RwSignal<Option<String>>>,
) -> impl IntoView {
    let kind = kind.unwrap_or(FieldKind::Text);

    let control = match kind {
        FieldKind::Text => view! {
            <input
                type="text"
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || form.value(field)
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
                    form.set_value(field, input.value());
                }
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                rows=6
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || form.value(field)
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let textarea: web_sys::HtmlTextAreaElement = target.dyn_into().unwrap();
                    form.set_value(field, textarea.value());
                }
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                class=INPUT_CLASS
                prop:value=move || form.value(field)
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select: web_sys::HtmlSelectElement = target.dyn_into().unwrap();
                    form.set_value(field, select.value());
                }
            >
                <option value="">
                    {if placeholder.is_empty() { "Select..." } else { placeholder }}
                </option>
                {move || options.get().into_iter().map(|option| view! {
                    <option value=option.value.clone() id=option.id.clone()>
                        {option.label.clone()}
                    </option>
                }).collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        FieldKind::File => view! {
            <input
                type="file"
                accept="image/*"
                class=INPUT_CLASS
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
                    let picked = input.files().and_then(|files| files.get(0));
                    match picked {
                        Some(file) => {
                            form.set_value(field, file.name());
                            if let Some(sink) = file_data {
                                let file = gloo_file::File::from(file);
                                wasm_bindgen_futures::spawn_local(async move {
                                    match gloo_file::futures::read_as_data_url(&file).await {
                                        Ok(url) => sink.set(Some(url)),
                                        Err(e) => {
                                            log::warn!("could not read picked file: {}", e);
                                            sink.set(None);
                                        }
                                    }
                                });
                            }
                        }
                        None => {
                            form.set_value(field, String::new());
                            if let Some(sink) = file_data {
                                sink.set(None);
                            }
                        }
                    }
                }
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            {control}
            {move || form.error(field).map(|message| view! {
                <p class="mt-1 text-xs text-red-600">{message}</p>
            })}
        </div>
    }
}
