//! Shared layout wrapper with a header link back to the list and a content
//! container, so routes only render their own content.

use leptos::prelude::*;
use leptos_router::components::A;
use userdir_directory::paths;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A href={paths::USERS} {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap">"User Directory"</span>
                    </A>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
