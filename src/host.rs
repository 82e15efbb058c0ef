//! Snapshot of the host state the resolvers consult.

use crate::registry::{system_registry, NoRegistry, Registry};
use crate::{Platform, ResolveOptions};
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// Platform identity, environment variables, registry and options for one
/// or more lookups.
///
/// Resolvers never read process globals directly; they read a `Host`. Use
/// [`Host::current`] for the real machine, or [`Host::new`] plus the `with_*`
/// methods to describe another one.
///
/// # Example
///
/// ```rust
/// use dccpath::{Host, Platform, StaticRegistry};
///
/// let host = Host::new(Platform::Windows)
///     .with_var("PROGRAMFILES", r"C:\Program Files")
///     .with_registry(StaticRegistry::new());
/// assert_eq!(host.platform(), Platform::Windows);
/// assert_eq!(host.var("PROGRAMFILES").as_deref(), Some(r"C:\Program Files"));
/// ```
pub struct Host {
    platform: Platform,
    vars: HashMap<OsString, OsString>,
    registry: Box<dyn Registry>,
    options: ResolveOptions,
}

impl Host {
    /// An empty host: no variables, no registry, default options.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            vars: HashMap::new(),
            registry: Box::new(NoRegistry),
            options: ResolveOptions::default(),
        }
    }

    /// The machine this process is running on.
    ///
    /// Environment variables are captured at call time; later changes to the
    /// process environment are not seen by this `Host`.
    pub fn current() -> Self {
        Self {
            platform: Platform::current(),
            vars: std::env::vars_os().collect(),
            registry: system_registry(),
            options: ResolveOptions::default(),
        }
    }

    /// Set an environment variable, replacing any previous value.
    pub fn with_var(mut self, name: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Unset an environment variable.
    pub fn without_var(mut self, name: impl AsRef<OsStr>) -> Self {
        self.vars.remove(name.as_ref());
        self
    }

    /// Replace the registry consulted on Windows.
    pub fn with_registry(mut self, registry: impl Registry + 'static) -> Self {
        self.registry = Box::new(registry);
        self
    }

    /// Replace the resolver options.
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// The platform whose conventions the resolvers follow.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Options in effect for lookups on this host.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// The registry capability lookups read from.
    pub fn registry(&self) -> &dyn Registry {
        self.registry.as_ref()
    }

    /// Raw value of an environment variable.
    ///
    /// Names are case-insensitive on Windows (`Path` answers for `PATH`).
    pub fn var_os(&self, name: &str) -> Option<&OsStr> {
        if let Some(value) = self.vars.get(OsStr::new(name)) {
            return Some(value);
        }
        if !self.platform.is_windows() {
            return None;
        }
        self.vars
            .iter()
            .find(|(key, _)| key.to_str().is_some_and(|k| k.eq_ignore_ascii_case(name)))
            .map(|(_, value)| value.as_os_str())
    }

    /// Unicode value of an environment variable.
    ///
    /// A value that is not valid Unicode is logged and treated as unset.
    pub fn var(&self, name: &str) -> Option<String> {
        let raw = self.var_os(name)?;
        match raw.to_str() {
            Some(value) => Some(value.to_string()),
            None => {
                tracing::warn!(var = name, value = ?raw, "ignoring non-Unicode environment variable");
                None
            }
        }
    }

    /// The executable search path (`PATH`).
    pub fn search_path(&self) -> Option<&OsStr> {
        self.var_os("PATH")
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("platform", &self.platform)
            .field("vars", &self.vars.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
