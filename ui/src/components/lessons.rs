//! Lesson pages: the add-lesson form and the per-module lesson list

use leptos::prelude::*;
use leptos::web_sys;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::form_item::{FieldKind, FormItem};
use crate::components::toast::Toaster;
use crate::form::FormState;
use crate::hooks::use_mount_guard;
use crate::links;
use crate::session::AuthSession;
use crate::types::{lesson_type_options, Course, LessonPayload};
use crate::validate;

#[component]
pub fn AddLessonPage() -> impl IntoView {
    let params = use_params_map();
    let course_id = move || params.read().get("course_id").unwrap_or_default();

    let session = StoredValue::new(expect_context::<AuthSession>());
    let toaster = expect_context::<Toaster>();
    let navigate = StoredValue::new_local(use_navigate());

    let form = FormState::new();
    let (course, set_course) = signal(Option::<Course>::None);
    let (fetch_error, set_fetch_error) = signal(Option::<String>::None);
    let (submit_error, set_submit_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    // Load the course so the module picker has options. The run token
    // drops the response once the admin navigates away or a param change
    // has started a newer fetch.
    let guard = use_mount_guard();
    Effect::new(move |_| {
        let id = course_id();
        let run = guard.begin_run();
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = api::get_course(&id).await;
            if !run.is_current() {
                return;
            }
            match loaded {
                Ok(data) => set_course.set(Some(data)),
                Err(e) => set_fetch_error.set(Some(e.to_string())),
            }
        });
    });

    let module_options =
        Signal::derive(move || course.get().map(|c| c.module_options()).unwrap_or_default());
    let type_options = Signal::derive(move || lesson_type_options());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let values = form.snapshot();
        let errors = validate::lesson_schema().validate(&values);
        if !errors.is_empty() {
            form.set_errors(errors);
            return;
        }
        form.clear_errors();
        set_submit_error.set(None);
        set_saving.set(true);

        let payload = LessonPayload::from_form(&values, &course_id());
        let session = session.get_value();
        let navigate = navigate.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_lesson(&payload, &session).await {
                Ok(_) => {
                    toaster.success(format!("Lesson \"{}\" created", payload.title));
                    let destination = links::module_lessons(&payload.course, &payload.module);
                    navigate(&destination, Default::default());
                }
                Err(e) => {
                    set_submit_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    let cancel = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    view! {
        <div class="p-6">
            <div class="mb-6">
                <a href=links::COURSES class="text-blue-500 hover:underline">"← Back to Courses"</a>
            </div>

            <h2 class="text-2xl font-bold mb-6">"Add Lesson"</h2>

            {move || match fetch_error.get() {
                Some(e) => view! {
                    <div class="p-3 bg-red-100 border border-red-400 text-red-700 rounded max-w-3xl">
                        {format!("Failed to load course: {}", e)}
                    </div>
                }.into_any(),
                None => view! {
                    <form on:submit=on_submit class="bg-white rounded-lg shadow p-6 max-w-3xl">
                        {move || submit_error.get().map(|e| view! {
                            <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded">
                                {e}
                            </div>
                        })}

                        <div class="space-y-4">
                            <FormItem form=form field="title" label="Title" placeholder="Lesson title" />
                            <FormItem
                                form=form
                                field="content"
                                label="Content"
                                kind=FieldKind::TextArea
                                placeholder="What this lesson covers"
                            />
                            <FormItem form=form field="author" label="Author" placeholder="Who wrote it" />
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                <FormItem
                                    form=form
                                    field="module"
                                    label="Module"
                                    kind=FieldKind::Select(module_options)
                                />
                                <FormItem
                                    form=form
                                    field="type"
                                    label="Type"
                                    kind=FieldKind::Select(type_options)
                                />
                                <FormItem form=form field="duration" label="Duration" placeholder="00:00:00" />
                            </div>
                        </div>

                        <div class="mt-6 flex gap-3">
                            <button
                                type="submit"
                                disabled=move || saving.get()
                                class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button
                                type="button"
                                on:click=cancel
                                class="px-4 py-2 border border-gray-300 text-gray-700 rounded hover:bg-gray-50"
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn ModuleLessonsPage() -> impl IntoView {
    let params = use_params_map();

    let lessons = LocalResource::new(move || {
        let course_id = params.read().get("course_id").unwrap_or_default();
        let module_code = params.read().get("module_code").unwrap_or_default();
        async move { api::list_lessons(&course_id, &module_code).await.ok() }
    });

    let heading = move || {
        let code = params.read().get("module_code").unwrap_or_default();
        format!("Lessons in {}", code)
    };
    let new_lesson = move || {
        let course_id = params.read().get("course_id").unwrap_or_default();
        links::new_lesson(&course_id)
    };

    view! {
        <div class="p-6">
            <div class="mb-6">
                <a href=links::COURSES class="text-blue-500 hover:underline">"← Back to Courses"</a>
            </div>

            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold">{heading}</h2>
                <a href=new_lesson class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded">
                    "+ New Lesson"
                </a>
            </div>

            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading..."</div> }>
                {move || {
                    lessons.get().map(|data| {
                        match data {
                            Some(list) if !list.is_empty() => view! {
                                <div class="bg-white rounded-lg shadow overflow-hidden">
                                    <table class="min-w-full divide-y divide-gray-200">
                                        <thead class="bg-gray-50">
                                            <tr>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Title"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Type"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Duration"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Author"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="bg-white divide-y divide-gray-200">
                                            {list.into_iter().map(|lesson| view! {
                                                <tr class="hover:bg-gray-50">
                                                    <td class="px-6 py-4 whitespace-nowrap font-medium text-gray-900">
                                                        {lesson.title.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <span class="px-2 py-1 text-xs font-semibold rounded-full bg-blue-100 text-blue-800">
                                                            {lesson.lesson_type.clone()}
                                                        </span>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-mono text-gray-600">
                                                        {lesson.duration.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                        {lesson.author.clone()}
                                                    </td>
                                                </tr>
                                            }).collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </div>
                            }.into_any(),
                            Some(_) => view! {
                                <div class="text-center py-12 bg-white rounded-lg shadow">
                                    <p class="text-gray-500 mb-4">"No lessons in this module yet"</p>
                                    <a href=new_lesson() class="text-blue-500 hover:underline">"Add the first lesson"</a>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="text-red-500">"Failed to load lessons"</div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
