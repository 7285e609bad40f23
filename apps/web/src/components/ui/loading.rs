use leptos::prelude::*;

/// Pulsing placeholder cards shown while the user list loads.
#[component]
pub fn SkeletonGrid(count: usize) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6" aria-busy="true">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="border p-6 rounded-lg shadow-md bg-gray-100 animate-pulse h-32"></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn LoadingText() -> impl IntoView {
    view! {
        <p class="text-center text-xl font-semibold py-8" role="status" aria-live="polite">
            "Loading..."
        </p>
    }
}
