//! Application shell: route table, context providers, global chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installs the two process-wide signals (auth session, toast queue),
//! restores the persisted session once on startup, and maps every route
//! to its page component. Role enforcement happens inside the guarded
//! pages themselves; the server re-checks everything anyway.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::components::toast_stack::ToastStack;
use crate::pages::employer_applications::EmployerApplicationsPage;
use crate::pages::employer_dashboard::EmployerDashboardPage;
use crate::pages::favorites::FavoriteJobsPage;
use crate::pages::home::HomePage;
use crate::pages::job_applications::JobApplicationsPage;
use crate::pages::job_detail::JobDetailPage;
use crate::pages::jobs::JobSearchPage;
use crate::pages::login::LoginPage;
use crate::pages::manage_jobs::ManageJobsPage;
use crate::pages::messages::MessagesPage;
use crate::pages::my_applications::MyApplicationsPage;
use crate::pages::post_job::PostJobPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::seeker_dashboard::SeekerDashboardPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML document shell used by the SSR binary and hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    // Restore the persisted session and theme once on startup. A stored
    // user without a token is stale and treated as signed out.
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        let stored = crate::util::session::load_user()
            .filter(|_| crate::util::session::token().is_some());
        auth.set(AuthState {
            user: stored,
            loading: false,
        });
        crate::util::dark_mode::apply(crate::util::dark_mode::read_preference());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/jobdeck.css" />
        <Title text="JobDeck" />

        <Router>
            <Navbar />
            <main class="main-content">
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    // Public
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/jobs") view=JobSearchPage />
                    <Route path=path!("/jobs/:id") view=JobDetailPage />

                    // Job seeker
                    <Route path=path!("/seeker/dashboard") view=SeekerDashboardPage />
                    <Route path=path!("/seeker/applications") view=MyApplicationsPage />
                    <Route path=path!("/seeker/favorites") view=FavoriteJobsPage />

                    // Employer
                    <Route path=path!("/employer/dashboard") view=EmployerDashboardPage />
                    <Route path=path!("/employer/jobs") view=ManageJobsPage />
                    <Route path=path!("/employer/jobs/new") view=PostJobPage />
                    <Route path=path!("/employer/jobs/:id/edit") view=PostJobPage />
                    <Route path=path!("/employer/jobs/:id/applications") view=JobApplicationsPage />
                    <Route path=path!("/employer/applications") view=EmployerApplicationsPage />

                    // Any authenticated user
                    <Route path=path!("/messages") view=MessagesPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            </main>
            <ToastStack />
        </Router>
    }
}
