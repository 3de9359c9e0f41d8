//! Router-Backed Navigator
//!
//! Production implementation of [`Navigator`] over the leptos router.

use std::rc::Rc;

use async_trait::async_trait;
use leptos_router::{use_navigate, NavigateOptions};

use super::{Navigator, NavigatorError};

/// Navigator that drives the leptos router
///
/// Captures the router's navigate handle at construction, so it must be
/// created inside a `Router` context.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Capture the navigate handle of the surrounding router
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |target, options| navigate(target, options)),
        }
    }
}

#[async_trait(?Send)]
impl Navigator for RouterNavigator {
    async fn navigate(&self, target: &str) -> Result<bool, NavigatorError> {
        (self.navigate)(target, NavigateOptions::default());
        Ok(true)
    }
}
