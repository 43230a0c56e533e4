//! User pages: the account list and the edit-user form

use leptos::prelude::*;
use leptos::web_sys;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::form_item::{FieldKind, FormItem};
use crate::components::loading::LoadingView;
use crate::components::toast::Toaster;
use crate::form::{FormState, SelectOption};
use crate::hooks::use_mount_guard;
use crate::links;
use crate::session::AuthSession;
use crate::types::{User, UserPayload};
use crate::validate;

fn role_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Administrator", "true", "administrator"),
        SelectOption::new("Standard", "false", "standard"),
    ]
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let users = LocalResource::new(move || {
        let session = session.clone();
        async move { api::list_users(&session).await.ok() }
    });

    view! {
        <div class="p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold">"Users"</h2>
            </div>

            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading..."</div> }>
                {move || {
                    users.get().map(|data| {
                        match data {
                            Some(list) if !list.is_empty() => view! {
                                <div class="bg-white rounded-lg shadow overflow-hidden">
                                    <table class="min-w-full divide-y divide-gray-200">
                                        <thead class="bg-gray-50">
                                            <tr>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Name"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Email"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Role"</th>
                                                <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="bg-white divide-y divide-gray-200">
                                            {list.into_iter().map(|user| {
                                                view! { <UserRow user=user /> }
                                            }).collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </div>
                            }.into_any(),
                            Some(_) => view! {
                                <div class="text-center py-12 bg-white rounded-lg shadow">
                                    <p class="text-gray-500 mb-4">"No users registered"</p>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="text-red-500">"Failed to load users"</div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    let edit = links::edit_user(&user.id);
    let role = if user.admin {
        view! {
            <span class="px-2 py-1 text-xs font-semibold rounded-full bg-purple-100 text-purple-800">
                "Administrator"
            </span>
        }
        .into_any()
    } else {
        view! {
            <span class="px-2 py-1 text-xs font-semibold rounded-full bg-gray-100 text-gray-800">
                "Standard"
            </span>
        }
        .into_any()
    };

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap font-medium text-gray-900">{user.name.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">{user.email.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap">{role}</td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                <a href=edit class="text-blue-600 hover:text-blue-900">"Edit"</a>
            </td>
        </tr>
    }
}

#[component]
pub fn EditUserPage() -> impl IntoView {
    let params = use_params_map();
    let user_id = move || params.read().get("user_id").unwrap_or_default();

    let session = StoredValue::new(expect_context::<AuthSession>());
    let toaster = expect_context::<Toaster>();
    let navigate = StoredValue::new_local(use_navigate());

    let form = FormState::new();
    let (loading, set_loading) = signal(true);
    let (fetch_error, set_fetch_error) = signal(Option::<String>::None);
    let (submit_error, set_submit_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);
    let avatar_data = RwSignal::new(Option::<String>::None);

    // Load the account being edited. Populated values are validated right
    // away so a record that no longer passes the rules is flagged before
    // the admin touches anything.
    let guard = use_mount_guard();
    Effect::new(move |_| {
        let id = user_id();
        let run = guard.begin_run();
        let session = session.get_value();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = api::get_user(&id, &session).await;
            if !run.is_current() {
                return;
            }
            match loaded {
                Ok(user) => {
                    form.populate(user.form_entries());
                    form.set_errors(validate::user_schema().validate(&form.snapshot()));
                }
                Err(e) => set_fetch_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let role_choices = Signal::derive(role_options);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let values = form.snapshot();
        let errors = validate::user_schema().validate(&values);
        if !errors.is_empty() {
            form.set_errors(errors);
            return;
        }
        form.clear_errors();
        set_submit_error.set(None);
        set_saving.set(true);

        let id = user_id();
        let payload = UserPayload::from_form(&values, avatar_data.get_untracked());
        let session = session.get_value();
        let navigate = navigate.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_user(&id, &payload, &session).await {
                Ok(_) => {
                    toaster.success(format!("User \"{}\" updated", payload.name));
                    navigate(links::USERS, Default::default());
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
                <a href=links::USERS class="text-blue-500 hover:underline">"← Back to Users"</a>
            </div>

            <h2 class="text-2xl font-bold mb-6">"Edit User"</h2>

            {move || if loading.get() {
                view! { <LoadingView label="Loading user..." /> }.into_any()
            } else if let Some(e) = fetch_error.get() {
                view! {
                    <div class="p-3 bg-red-100 border border-red-400 text-red-700 rounded max-w-3xl">
                        {format!("Failed to load user: {}", e)}
                    </div>
                }.into_any()
            } else {
                view! {
                    <form on:submit=on_submit class="bg-white rounded-lg shadow p-6 max-w-3xl">
                        {move || submit_error.get().map(|e| view! {
                            <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded">
                                {e}
                            </div>
                        })}

                        <div class="space-y-4">
                            <FormItem form=form field="name" label="Name" placeholder="Full name" />
                            <FormItem form=form field="email" label="Email" placeholder="name@example.com" />
                            <FormItem
                                form=form
                                field="admin"
                                label="Role"
                                kind=FieldKind::Select(role_choices)
                            />
                            <div>
                                <FormItem
                                    form=form
                                    field="avatar"
                                    label="Avatar"
                                    kind=FieldKind::File
                                    file_data=avatar_data
                                />
                                {move || avatar_data.get().map(|url| view! {
                                    <img src=url class="mt-2 h-16 w-16 rounded-full object-cover" />
                                })}
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
                }.into_any()
            }}
        </div>
    }
}
