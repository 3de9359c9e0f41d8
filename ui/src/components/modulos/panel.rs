//! Module Panel
//!
//! Home-screen panel with one navigation button per module.

use leptos::*;
use siges_shared::Module;

use super::BotonModulo;

/// Module buttons shown on the home page
#[component]
pub fn PanelModulos() -> impl IntoView {
    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 p-6">
            <h2 class="text-lg font-semibold text-white mb-4">"Módulos"</h2>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                {Module::ALL
                    .iter()
                    .map(|module| view! { <BotonModulo module=*module /> })
                    .collect_view()}
            </div>
        </div>
    }
}
