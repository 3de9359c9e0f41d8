//! App Shell Component
//!
//! Layout container that combines the top bar and the page content area.

use leptos::*;

use crate::state::AppState;

/// Main application shell layout
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <div class="h-screen flex flex-col bg-slate-900 text-slate-100 overflow-hidden">
            <header class="h-14 border-b border-slate-700 bg-slate-800/50 backdrop-blur-sm flex items-center px-4 gap-4">
                // Logo
                <a href="/" class="flex items-center gap-2 text-white font-bold text-lg">
                    <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-teal-500 rounded-lg flex items-center justify-center flex-shrink-0">
                        <span class="text-white text-sm font-bold">"S"</span>
                    </div>
                    <span>"SIGES"</span>
                </a>

                // Spacer
                <div class="flex-1" />

                // Backend status
                {
                    let app_state = app_state.clone();
                    view! {
                        <Show when=move || app_state.error.get().is_some()>
                            <div class="flex items-center gap-2 text-sm">
                                <div class="w-2 h-2 rounded-full bg-amber-400 flex-shrink-0" />
                                <span class="text-slate-400">"Sin conexión con el servidor"</span>
                            </div>
                        </Show>
                    }
                }
            </header>

            // Main content area
            <main class="flex-1 overflow-auto flex flex-col min-w-0">
                {children()}
            </main>
        </div>
    }
}
