//! Navigation Trigger
//!
//! A module button owns one `NavigationTrigger`. Activation notifies the
//! subscribed listeners, requests a route change from the injected
//! [`Navigator`], and reports the settlement through the injected
//! [`DiagnosticSink`]. Every settlement is absorbed here; nothing
//! propagates to the caller and the trigger stays activatable.

use std::cell::RefCell;
use std::rc::Rc;

use super::{DiagnosticSink, Navigator};

/// Callback type for activation listeners
pub type ClickListener = Rc<dyn Fn(&str)>;

/// Settlement of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The route changed
    Succeeded,

    /// The router recognized and refused the request
    Refused,

    /// The request failed unexpectedly
    Failed(String),
}

/// Click-to-navigate component core
pub struct NavigationTrigger {
    label: String,
    target: String,
    navigator: Rc<dyn Navigator>,
    diagnostics: Rc<dyn DiagnosticSink>,
    listeners: RefCell<Vec<ClickListener>>,
}

impl NavigationTrigger {
    /// Create a trigger for `target` with explicit collaborators
    pub fn new(
        label: impl Into<String>,
        target: impl Into<String>,
        navigator: Rc<dyn Navigator>,
        diagnostics: Rc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            navigator,
            diagnostics,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Display label of the owning button
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Route this trigger navigates to
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Subscribe to activations
    ///
    /// Listeners receive the target and run synchronously on every
    /// activation, before the route change and regardless of its outcome.
    pub fn subscribe(&self, listener: ClickListener) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Handle a user activation
    ///
    /// Overlapping activations are not tracked; when two requests race,
    /// the last settlement logs last.
    pub async fn activate(&self) {
        // Snapshot so a listener may subscribe without poisoning the borrow
        let listeners: Vec<ClickListener> = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(&self.target);
        }

        let outcome = match self.navigator.navigate(&self.target).await {
            Ok(true) => NavigationOutcome::Succeeded,
            Ok(false) => NavigationOutcome::Refused,
            Err(e) => NavigationOutcome::Failed(e.to_string()),
        };

        match &outcome {
            NavigationOutcome::Succeeded => {
                self.diagnostics
                    .info(&format!("Navegación a {} exitosa", self.target));
            }
            NavigationOutcome::Refused => {
                self.diagnostics
                    .warn(&format!("Navegación a {} falló", self.target));
            }
            NavigationOutcome::Failed(detail) => {
                self.diagnostics
                    .error(&format!("Error al navegar a {}: {}", self.target, detail));
            }
        }
    }

    /// Report a module selection without navigating
    pub fn on_module_click(&self, module_name: &str) {
        self.diagnostics
            .info(&format!("Módulo seleccionado: {module_name}"));
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::nav::NavigatorError;

    enum Script {
        Resolve(bool),
        Fail(&'static str),
    }

    /// Navigator scripted to a fixed settlement
    struct ScriptedNavigator {
        script: Script,
        calls: RefCell<u32>,
    }

    impl ScriptedNavigator {
        fn new(script: Script) -> Rc<Self> {
            Rc::new(Self {
                script,
                calls: RefCell::new(0),
            })
        }
    }

    #[async_trait(?Send)]
    impl Navigator for ScriptedNavigator {
        async fn navigate(&self, _target: &str) -> Result<bool, NavigatorError> {
            *self.calls.borrow_mut() += 1;
            match self.script {
                Script::Resolve(ok) => Ok(ok),
                Script::Fail(detail) => Err(NavigatorError::NavigationFailed(detail.to_string())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        infos: RefCell<Vec<String>>,
        warns: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn info(&self, message: &str) {
            self.infos.borrow_mut().push(message.to_string());
        }

        fn warn(&self, message: &str) {
            self.warns.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn scripted(
        script: Script,
        target: &str,
    ) -> (NavigationTrigger, Rc<ScriptedNavigator>, Rc<RecordingSink>) {
        let navigator = ScriptedNavigator::new(script);
        let sink = Rc::new(RecordingSink::default());
        let trigger = NavigationTrigger::new(
            "Módulo",
            target,
            navigator.clone() as Rc<dyn Navigator>,
            sink.clone() as Rc<dyn DiagnosticSink>,
        );
        (trigger, navigator, sink)
    }

    #[test]
    fn test_success_logs_exactly_one_info() {
        let (trigger, _, sink) = scripted(Script::Resolve(true), "/admin-oe-ae");

        block_on(trigger.activate());

        assert_eq!(
            *sink.infos.borrow(),
            vec!["Navegación a /admin-oe-ae exitosa".to_string()]
        );
        assert!(sink.warns.borrow().is_empty());
        assert!(sink.errors.borrow().is_empty());
    }

    #[test]
    fn test_refusal_logs_exactly_one_warning() {
        let (trigger, _, sink) = scripted(Script::Resolve(false), "/gestion");

        block_on(trigger.activate());

        assert_eq!(
            *sink.warns.borrow(),
            vec!["Navegación a /gestion falló".to_string()]
        );
        assert!(sink.infos.borrow().is_empty());
        assert!(sink.errors.borrow().is_empty());
    }

    #[test]
    fn test_failure_logs_error_with_detail() {
        let (trigger, _, sink) = scripted(Script::Fail("ruta inválida"), "/pagos");

        block_on(trigger.activate());

        let errors = sink.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ruta inválida"));
        assert!(sink.infos.borrow().is_empty());
        assert!(sink.warns.borrow().is_empty());
    }

    #[test]
    fn test_module_click_never_navigates() {
        let (trigger, navigator, sink) = scripted(Script::Resolve(true), "/pagos");

        trigger.on_module_click("pagos");

        assert_eq!(*navigator.calls.borrow(), 0);
        assert_eq!(
            *sink.infos.borrow(),
            vec!["Módulo seleccionado: pagos".to_string()]
        );
    }

    #[test]
    fn test_trigger_stays_activatable() {
        let (trigger, navigator, sink) = scripted(Script::Fail("caída"), "/gestion");

        block_on(trigger.activate());
        block_on(trigger.activate());

        assert_eq!(*navigator.calls.borrow(), 2);
        assert_eq!(sink.errors.borrow().len(), 2);
    }

    #[test]
    fn test_listeners_fire_on_every_activation() {
        let (trigger, _, _) = scripted(Script::Resolve(false), "/gestion");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let listener_seen = seen.clone();
        trigger.subscribe(Rc::new(move |target: &str| {
            listener_seen.borrow_mut().push(target.to_string());
        }));

        block_on(trigger.activate());
        block_on(trigger.activate());

        assert_eq!(*seen.borrow(), vec!["/gestion", "/gestion"]);
    }
}
