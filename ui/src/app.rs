//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Routing for the administrative modules
//! - Global state providers
//! - The shell layout

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::components::cabecera::DatosCabecera;
use crate::components::layout::Shell;
use crate::components::modulos::PanelModulos;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state.clone());

    // Point the client at the window origin and fetch the header once,
    // best effort (works on any route)
    {
        let app_state = app_state.clone();
        create_effect(move |prev_run: Option<bool>| {
            // Only run once
            if prev_run.is_some() {
                return true;
            }

            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                app_state
                    .config
                    .update(|c| c.api_url = format!("{origin}/api"));
            }

            let app_state = app_state.clone();
            spawn_local(async move {
                if let Err(e) = app_state.load_header().await {
                    tracing::warn!("No se pudo cargar la cabecera: {e}");
                    app_state.error.set(Some(e.to_string()));
                }
            });

            true
        });
    }

    view! {
        <Title text="SIGES" />
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Shell><HomePage /></Shell> } />

                // One route per administrative module
                <Route path="/admin-oe-ae" view=|| view! { <Shell><AdminOeAePage /></Shell> } />
                <Route path="/gestion" view=|| view! { <Shell><GestionPage /></Shell> } />
                <Route path="/formulation" view=|| view! { <Shell><FormulacionPage /></Shell> } />
                <Route path="/pagos" view=|| view! { <Shell><PagosPage /></Shell> } />

                // Catch-all for 404
                <Route path="/*" view=|| view! { <Shell><NotFoundPage /></Shell> } />
            </Routes>
        </Router>
    }
}

/// Home page: data header plus the module panel
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="flex-1 overflow-auto p-6">
            <div class="max-w-5xl mx-auto space-y-6">
                <DatosCabecera />
                <PanelModulos />
            </div>
        </div>
    }
}

#[component]
fn AdminOeAePage() -> impl IntoView {
    view! {
        <ModuloPage
            title="Administración OE/AE"
            description="Administración de órganos y actividades ejecutoras"
        />
    }
}

#[component]
fn GestionPage() -> impl IntoView {
    view! {
        <ModuloPage
            title="Gestión"
            description="Gestión de metas y centros gestores"
        />
    }
}

#[component]
fn FormulacionPage() -> impl IntoView {
    view! {
        <ModuloPage
            title="Formulación"
            description="Formulación presupuestal anual"
        />
    }
}

#[component]
fn PagosPage() -> impl IntoView {
    view! {
        <ModuloPage
            title="Pagos"
            description="Registro y seguimiento de pagos"
        />
    }
}

/// 404 Not Found page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-6">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-6">"Página no encontrada"</p>
                <a href="/" class="btn-primary">"Volver al inicio"</a>
            </div>
        </div>
    }
}

/// Generic content page for a module
#[component]
fn ModuloPage(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-6">
            <div class="text-center">
                <h2 class="text-xl font-semibold text-white mb-2">{title}</h2>
                <p class="text-slate-400 mb-4">{description}</p>
                <a href="/" class="text-blue-400 hover:text-blue-300">"← Volver al inicio"</a>
            </div>
        </div>
    }
}
