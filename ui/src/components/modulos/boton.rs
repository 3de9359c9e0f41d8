//! Module Button
//!
//! One button per administrative module. The click handler delegates to a
//! [`NavigationTrigger`] so the routing and logging collaborators stay
//! behind their traits.

use std::rc::Rc;

use leptos::*;
use siges_shared::Module;

use crate::nav::{NavigationTrigger, RouterNavigator, TracingSink};
use crate::state::AppState;

/// Navigation button for one module
#[component]
pub fn BotonModulo(
    /// Module this button navigates to
    module: Module,
    /// Optional listener invoked with the target on every activation
    #[prop(optional)] on_clicked: Option<Callback<String>>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let trigger = Rc::new(NavigationTrigger::new(
        module.title(),
        module.route(),
        Rc::new(RouterNavigator::from_router()),
        Rc::new(TracingSink::new()),
    ));

    if let Some(on_clicked) = on_clicked {
        trigger.subscribe(Rc::new(move |target: &str| {
            on_clicked.call(target.to_string());
        }));
    }

    // Remember the selection for the next visit
    {
        let app_state = app_state.clone();
        trigger.subscribe(Rc::new(move |_| {
            app_state.select_module(module.name());
        }));
    }

    let is_last = move || app_state.last_module.get().as_deref() == Some(module.name());

    view! {
        <button
            class=move || {
                let base = "w-full flex items-center gap-3 p-3 rounded-lg bg-slate-700/30 \
                            hover:bg-slate-700/50 border transition-all text-left group";
                if is_last() {
                    format!("{} border-blue-500/50", base)
                } else {
                    format!("{} border-transparent hover:border-slate-600", base)
                }
            }
            on:click=move |_| {
                trigger.on_module_click(module.name());

                let trigger = trigger.clone();
                spawn_local(async move { trigger.activate().await });
            }
        >
            <div class="flex-1">
                <div class="text-sm font-medium text-white">{module.title()}</div>
                <div class="text-xs text-slate-500">{module.route()}</div>
            </div>
            <svg class="w-4 h-4 text-slate-500 group-hover:text-slate-400 transition-colors" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <polyline points="9 18 15 12 9 6" />
            </svg>
        </button>
    }
}
