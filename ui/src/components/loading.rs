use leptos::prelude::*;

/// Spinner shown while an edit form waits for its initial data
#[component]
pub fn LoadingView(#[prop(optional)] label: &'static str) -> impl IntoView {
    let label = if label.is_empty() { "Loading..." } else { label };
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500"></div>
            <span class="ml-3 text-gray-500">{label}</span>
        </div>
    }
}
