use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

mod api;
mod components;
mod form;
mod hooks;
mod links;
mod session;
mod types;
mod validate;

use components::courses::CoursesPage;
use components::lessons::{AddLessonPage, ModuleLessonsPage};
use components::toast::{ToastHost, Toaster};
use components::users::{EditUserPage, UsersPage};
use session::AuthSession;

#[component]
pub fn App() -> impl IntoView {
    // Session and toaster are provided once here so every page and the
    // toast host observe the same instances.
    provide_context(AuthSession::from_document());
    provide_context(Toaster::new());

    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                // Sidebar
                <div class="w-64 bg-gray-800 text-white p-4 flex flex-col">
                    <h1 class="text-2xl font-bold mb-8">"Paideia"</h1>
                    <nav class="space-y-1 flex-1">
                        <NavLink href=links::COURSES label="Courses" />
                        <NavLink href=links::USERS label="Users" />
                    </nav>
                    <div class="text-xs text-gray-500 mt-4">
                        "Paideia Admin Console"
                    </div>
                </div>

                // Main Content
                <div class="flex-1 overflow-y-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=|| view! { <Redirect path=links::COURSES/> }/>
                        <Route path=path!("/admin/courses") view=CoursesPage/>
                        <Route path=path!("/admin/courses/:course_id/lessons/new") view=AddLessonPage/>
                        <Route path=path!("/admin/courses/:course_id/modules/:module_code") view=ModuleLessonsPage/>
                        <Route path=path!("/admin/users") view=UsersPage/>
                        <Route path=path!("/admin/users/:user_id/edit") view=EditUserPage/>
                    </Routes>
                </div>
            </div>
            <ToastHost/>
        </Router>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="block p-2 hover:bg-gray-700 rounded transition-colors">
            {label}
        </A>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Warn);
    leptos::mount::mount_to_body(App);
}
