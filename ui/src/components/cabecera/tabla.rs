//! Data-Header Table
//!
//! Renders the labeled header fields as a two-column table. Presentation
//! only; the values flow in through the global state.

use leptos::*;

use crate::state::AppState;

/// Data header shown on the home page
#[component]
pub fn DatosCabecera() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 overflow-hidden">
            <div class="h-12 flex items-center px-4 border-b border-slate-700">
                <span class="text-sm font-semibold text-white">"Datos de cabecera"</span>
            </div>

            <table class="w-full text-sm">
                <tbody>
                    <For
                        each=move || app_state.header.get()
                        key=|entry| entry.label.clone()
                        children=move |entry| {
                            view! {
                                <tr class="border-b border-slate-700/50 last:border-0">
                                    <td class="px-4 py-2 text-slate-400 w-1/2">{entry.label}</td>
                                    <td class="px-4 py-2 text-white">{entry.value}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
