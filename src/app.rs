//! Recipe Wellness Frontend App
//!
//! Router, shared layout and the application context.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::components::{Footer, NavBar};
use crate::context::AppContext;
use crate::pages::{
    FavoritesPage, HomePage, LoginPage, ProfilePage, RecipeDetailPage, RecipeListPage, RegisterPage, SurveyFormPage,
    SurveyResultsPage,
};

#[component]
pub fn App() -> impl IntoView {
    let ctx = match AppContext::browser() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("[APP] Failed to start: {}", e);
            return view! {
                <div class="min-h-screen flex items-center justify-center">
                    <p class="text-red-600">"서비스를 시작할 수 없습니다. 잠시 후 다시 시도해주세요."</p>
                </div>
            }
            .into_any();
        }
    };
    log::info!("[APP] Started, signed in: {}", ctx.auth.is_authenticated());
    provide_context(ctx);

    view! {
        <Router>
            <div class="min-h-screen flex flex-col bg-gray-50">
                <NavBar />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/profile") view=ProfilePage />
                        <Route path=path!("/recipes") view=RecipeListPage />
                        <Route path=path!("/recipes/:id") view=RecipeDetailPage />
                        <Route path=path!("/survey") view=SurveyFormPage />
                        <Route path=path!("/survey/results/:id") view=SurveyResultsPage />
                        <Route path=path!("/favorites") view=FavoritesPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
    .into_any()
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <h1 class="text-3xl font-bold mb-4">"페이지를 찾을 수 없습니다"</h1>
            <A href="/" attr:class="px-4 py-2 bg-blue-600 text-white rounded-md">"홈으로 돌아가기"</A>
        </div>
    }
}
