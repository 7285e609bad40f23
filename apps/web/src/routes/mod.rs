mod not_found;
mod users;

pub(crate) use not_found::NotFoundPage;
pub(crate) use users::{UserDetailPage, UsersListPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=UsersListPage />
            <Route path=path!("/users") view=UsersListPage />
            <Route path=path!("/users/:id") view=UserDetailPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
