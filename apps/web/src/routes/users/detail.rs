use crate::{
    components::{Alert, AlertKind, AppShell, LoadingText},
    features::users::BrowserDirectory,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use userdir_directory::{detail::fetch_detail, paths, DetailDisplay, Post, UserDetailView};

#[derive(Params, PartialEq, Clone)]
struct UserParams {
    id: Option<String>,
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params::<UserParams>();
    let segment = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    });
    let detail = RwSignal::new(UserDetailView::new());

    // Runs again only when the id segment changes; each run starts a new
    // generation so a late response for the previous id is discarded.
    Effect::new(move |_| {
        let segment = segment.get();
        let Some(id) = paths::parse_user_id(&segment) else {
            detail.update(|view| view.reject_segment(&segment));
            return;
        };

        if let Some(ticket) = detail.try_update(|view| view.begin_load(id)) {
            spawn_local(async move {
                let api = BrowserDirectory;
                let result = fetch_detail(&api, id).await;
                let _settled = detail.try_update(move |view| view.settle(ticket, result));
            });
        }
    });

    let content = move || {
        detail.with(|view| match view.display() {
            DetailDisplay::Loading => view! { <LoadingText /> }.into_any(),
            DetailDisplay::Error(message) => {
                view! { <Alert kind=AlertKind::Error message=message.to_string() /> }.into_any()
            }
            DetailDisplay::NotFound => {
                view! { <Alert kind=AlertKind::Info message="User not found.".to_string() /> }
                    .into_any()
            }
            DetailDisplay::Profile { profile, posts } => {
                let name = profile.name.clone();
                let heading = format!("Posts by {}", profile.name);
                let email = profile.email.clone();
                let address = profile.short_address();
                let company = profile.company.name.clone();
                let phone = profile.phone.clone();
                let posts = posts.to_vec();

                view! {
                    <div class="flex flex-col space-y-4">
                        <div class="space-y-2">
                            <h1 class="text-3xl font-semibold py-2">{name}</h1>
                            <ProfileField label="Email:" value=email />
                            <ProfileField label="Address:" value=address />
                            <ProfileField label="Company:" value=company />
                            <ProfileField label="Phone:" value=phone />
                        </div>

                        <h2 class="text-xl font-semibold mt-6">{heading}</h2>
                        <ul class="mt-4 space-y-4">
                            {posts.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                        </ul>
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <AppShell>
            <div class="container mx-auto p-6">{content}</div>
        </AppShell>
    }
}

#[component]
fn ProfileField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <span class="font-medium">{label}</span>
            <p>{value}</p>
        </div>
    }
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    view! {
        <li class="max-w-5xl border p-4 rounded-lg shadow-md bg-white">
            <h3 class="font-semibold">{post.title}</h3>
            <p>{post.body}</p>
        </li>
    }
}
