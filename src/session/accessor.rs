/*!
 * Session accessor for host components.
 *
 * Components that execute statements get their session wiring through this
 * accessor: either a session factory (from which a template is derived) or a
 * ready-made template. The host configures the accessor during a
 * single-threaded setup phase, validates it through `Lifecycle`, then reads
 * it concurrently.
 */

use std::sync::Arc;

use log::debug;

use super::template::SessionTemplate;
use crate::engine::session::SessionFactory;
use crate::errors::ConfigError;

/// Validation hook invoked by the host lifecycle before a component is put
/// into service.
///
/// A capability trait rather than a base class: components implement it and
/// the host calls it explicitly.
pub trait Lifecycle {
    /// Check the component's wiring, failing startup on bad configuration
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Holder for a component's session wiring.
///
/// Accepts either a factory or a template; the most recent assignment wins.
/// Re-assigning the factory the template was already built from is a no-op,
/// so idempotent re-configuration never discards a live template and its
/// internal caches.
#[derive(Default)]
pub struct SessionAccessor {
    template: Option<Arc<SessionTemplate>>,
}

impl SessionAccessor {
    /// Create an accessor with no session source configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a session factory, deriving a template from it.
    ///
    /// The template is rebuilt only when none exists yet or when the held
    /// template is backed by a different factory instance.
    pub fn set_session_factory(&mut self, factory: Arc<dyn SessionFactory>) {
        let rebuild = match &self.template {
            None => true,
            Some(template) => !Arc::ptr_eq(template.session_factory(), &factory),
        };

        if rebuild {
            debug!("Building session template from factory");
            self.template = Some(Arc::new(SessionTemplate::new(factory)));
        } else {
            debug!("Factory unchanged, reusing existing session template");
        }
    }

    /// Supply a template directly, replacing any current one unconditionally
    pub fn set_session_template(&mut self, template: Arc<SessionTemplate>) {
        self.template = Some(template);
    }

    /// The factory backing the current template, if a template exists
    pub fn session_factory(&self) -> Option<&Arc<dyn SessionFactory>> {
        self.template
            .as_ref()
            .map(|template| template.session_factory())
    }

    /// The session handle for statement execution.
    ///
    /// The handle is a shared, externally managed proxy: callers must not
    /// attempt to close, commit or roll it back. Absent wiring surfaces the
    /// same configuration error `validate` reports.
    pub fn session(&self) -> Result<Arc<SessionTemplate>, ConfigError> {
        self.template
            .as_ref()
            .map(Arc::clone)
            .ok_or(ConfigError::MissingSessionSource)
    }

    /// The current template, shared.
    ///
    /// Read-mostly: inspect its configuration freely, mutate it only from a
    /// designated initialization hook.
    pub fn session_template(&self) -> Option<&Arc<SessionTemplate>> {
        self.template.as_ref()
    }
}

impl Lifecycle for SessionAccessor {
    fn validate(&self) -> Result<(), ConfigError> {
        match self.template {
            Some(_) => Ok(()),
            None => Err(ConfigError::MissingSessionSource),
        }
    }
}
