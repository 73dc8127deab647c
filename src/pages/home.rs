//! Signed-in landing page (`/`). Anonymous visitors are sent to `/auth`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{AUTH_ENTRY_PATH, use_session};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session.clone(), use_navigate());

    view! {
        <div class="home-page">
            {move || {
                let state = session.auth_state();
                match state.user {
                    Some(user) => view! {
                        <h1>"Welcome, " {user.display_name()}</h1>
                        <a href=AUTH_ENTRY_PATH class="btn home-page__account">"Account"</a>
                    }
                    .into_any(),
                    None => view! {
                        <p>{if state.loading { "Loading..." } else { "Redirecting to sign in..." }}</p>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
