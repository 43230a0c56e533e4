use leptos::prelude::*;

use crate::api;
use crate::links;
use crate::types::Course;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let courses = LocalResource::new(|| async move { api::list_courses().await.ok() });

    view! {
        <div class="p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold">"Courses"</h2>
            </div>

            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading..."</div> }>
                {move || {
                    courses.get().map(|data| {
                        match data {
                            Some(list) if !list.is_empty() => view! {
                                <div class="bg-white rounded-lg shadow overflow-hidden">
                                    <table class="min-w-full divide-y divide-gray-200">
                                        <thead class="bg-gray-50">
                                            <tr>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Title"</th>
                                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Modules"</th>
                                                <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="bg-white divide-y divide-gray-200">
                                            {list.into_iter().map(|course| {
                                                view! { <CourseRow course=course /> }
                                            }).collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </div>
                            }.into_any(),
                            Some(_) => view! {
                                <div class="text-center py-12 bg-white rounded-lg shadow">
                                    <p class="text-gray-500 mb-4">"No courses yet"</p>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="text-red-500">"Failed to load courses"</div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CourseRow(course: Course) -> impl IntoView {
    let add_lesson = links::new_lesson(&course.id);
    let modules = course
        .modules
        .iter()
        .map(|module| {
            let href = links::module_lessons(&course.id, &module.code);
            view! {
                <a href=href class="inline-block px-2 py-1 mr-2 mb-1 text-xs font-semibold rounded-full bg-blue-100 text-blue-800 hover:bg-blue-200">
                    {module.title.clone()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="font-medium text-gray-900">{course.title.clone()}</div>
            </td>
            <td class="px-6 py-4">
                {if modules.is_empty() {
                    view! { <span class="text-sm text-gray-500">"No modules"</span> }.into_any()
                } else {
                    view! { <div>{modules}</div> }.into_any()
                }}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                <a href=add_lesson class="text-blue-600 hover:text-blue-900">"+ Add Lesson"</a>
            </td>
        </tr>
    }
}
