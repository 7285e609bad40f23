//! Minimal 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;
use userdir_directory::paths;

/// Renders the not-found page inside the `AppShell`.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <div class="relative">
                    <h1 class="text-9xl font-black text-gray-100 select-none">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>

                <div class="mt-4 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href={paths::USERS}
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                    >
                        "All users"
                    </A>
                    <button
                        on:click=move |_| {
                            if let Some(Ok(history)) = web_sys::window().map(|window| window.history()) {
                                let _ = history.back();
                            }
                        }
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
