//! Users list route. Fetches the directory once per mount and filters it in
//! memory on every keystroke.

use crate::{
    components::{Alert, AlertKind, AppShell, SkeletonGrid},
    features::users::BrowserDirectory,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use userdir_directory::{DirectoryApi, ListDisplay, UserCard, UserListView};

/// Renders the users list view and fetches data on mount.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let users = RwSignal::new(UserListView::new());

    if let Some(ticket) = users.try_update(UserListView::begin_load) {
        spawn_local(async move {
            let result = BrowserDirectory.list_users().await;
            // The signal is gone once the route unmounts; the result is dropped then.
            let _settled = users.try_update(move |view| view.settle(ticket, result));
        });
    }

    let search = move || users.with(|view| view.search().to_string());

    let content = move || {
        users.with(|view| match view.display() {
            ListDisplay::Placeholders(count) => view! { <SkeletonGrid count=count /> }.into_any(),
            ListDisplay::Error(message) => {
                view! { <Alert kind=AlertKind::Error message=message.to_string() /> }.into_any()
            }
            ListDisplay::Cards(cards) => view! {
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {cards
                        .into_iter()
                        .map(|card| view! { <UserCardLink card=card /> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <AppShell>
            <div class="max-w-6xl mx-auto flex flex-col space-y-4">
                <h1 class="text-3xl font-bold text-center">"Users"</h1>

                <div class="py-4 flex justify-center">
                    <input
                        type="text"
                        placeholder="Search by name or email..."
                        class="w-1/2 px-4 py-2 border rounded-lg shadow-md focus:outline-none focus:ring-2"
                        prop:value=search
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            users.update(|view| view.set_search(term));
                        }
                    />
                </div>

                {content}
            </div>
        </AppShell>
    }
}

#[component]
fn UserCardLink(card: UserCard) -> impl IntoView {
    let UserCard {
        name,
        email,
        address,
        company,
        href,
    } = card;

    view! {
        <A
            href=href
            {..}
            class="block border p-6 rounded-lg shadow-md bg-white hover:shadow-lg transition cursor-pointer"
        >
            <h2 class="text-lg font-semibold">{name}</h2>
            <p class="text-gray-700">{email}</p>
            <p class="text-gray-500">{address}</p>
            <p class="text-gray-500">{company}</p>
        </A>
    }
}
