//! Authentication entry page (`/auth`).
//!
//! Signing in itself happens server-side; this page only reflects the session
//! query and offers the sign-in link or the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::DocumentType;
use crate::state::session::use_session;

pub const SIGN_IN_PATH: &str = "/api/login";
pub const SESSION_CHECK_FAILED_MESSAGE: &str = "We could not verify your session. You can still sign in below.";

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout_session = session.clone();
    let on_logout = move || {
        let navigate = navigate.clone();
        logout_session.logout(move |path: &str| navigate(path, NavigateOptions::default()));
    };

    let body = move || {
        let state = session.auth_state();
        if state.loading {
            return view! { <p class="auth-card__status">"Checking session..."</p> }.into_any();
        }
        match state.user {
            Some(user) => {
                let on_logout = on_logout.clone();
                view! {
                    <p class="auth-card__status">
                        "Signed in as "
                        <span class="auth-card__name">{user.display_name()}</span>
                    </p>
                    <a href="/" class="btn auth-card__continue">"Continue"</a>
                    <button class="btn auth-card__logout" on:click=move |_| on_logout()>
                        "Logout"
                    </button>
                }
                .into_any()
            }
            None => {
                let failed = state.error.is_some();
                view! {
                    {failed.then(|| view! { <p class="auth-card__notice">{SESSION_CHECK_FAILED_MESSAGE}</p> })}
                    <a href=SIGN_IN_PATH rel="external" class="btn auth-card__sign-in">
                        "Sign in"
                    </a>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Portal"</h1>
                {body}
                <nav class="auth-card__legal">
                    {DocumentType::ALL
                        .iter()
                        .map(|kind| {
                            view! {
                                <a href=format!("/legal/{}", kind.slug()) class="auth-card__legal-link">
                                    {kind.title()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </div>
        </div>
    }
}
