use std::{fmt, rc::Rc};

use async_trait::async_trait;

use crate::{
    Error, PermissionName, PermissionState, Position, PositionError, PositionOptions, Result,
};

/// Something that can report the permission state of a capability.
///
/// The browser implementation is `navigator.permissions.query`.
#[async_trait(?Send)]
pub trait PermissionQuery {
    async fn query(&self, name: PermissionName) -> Result<PermissionState>;
}

/// Something that can produce a single position fix.
///
/// The browser implementation is `navigator.geolocation.getCurrentPosition`.
#[async_trait(?Send)]
pub trait PositionSource {
    async fn current_position(&self, options: &PositionOptions)
        -> Result<Position, PositionError>;
}

/// Placeholder for a browser facility that does not exist here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

#[async_trait(?Send)]
impl PermissionQuery for Unavailable {
    async fn query(&self, _name: PermissionName) -> Result<PermissionState> {
        Err(Error::Unavailable("permissions"))
    }
}

/// The browser facilities the acquisition flow is allowed to touch.
///
/// Passed around explicitly instead of reaching for `navigator` so that the
/// flow can be driven by test doubles. Equality is identity of the underlying
/// providers, which lets this sit in component props.
#[derive(Clone)]
pub struct Capabilities {
    geolocation: Option<Rc<dyn PositionSource>>,
    permissions: Rc<dyn PermissionQuery>,
}

impl Capabilities {
    /// Capabilities with a working geolocation provider.
    pub fn with_geolocation(
        permissions: Rc<dyn PermissionQuery>,
        geolocation: Rc<dyn PositionSource>,
    ) -> Self {
        Self {
            geolocation: Some(geolocation),
            permissions,
        }
    }

    /// Capabilities for an environment without geolocation.
    pub fn without_geolocation(permissions: Rc<dyn PermissionQuery>) -> Self {
        Self {
            geolocation: None,
            permissions,
        }
    }

    /// Nothing available at all.
    pub fn unsupported() -> Self {
        Self::without_geolocation(Rc::new(Unavailable))
    }

    /// The facilities of the current environment: the browser's on `wasm32`,
    /// none elsewhere.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            crate::web::browser_capabilities()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::unsupported()
        }
    }

    pub fn geolocation(&self) -> Option<&Rc<dyn PositionSource>> {
        self.geolocation.as_ref()
    }

    pub fn permissions(&self) -> &Rc<dyn PermissionQuery> {
        &self.permissions
    }
}

impl PartialEq for Capabilities {
    fn eq(&self, other: &Self) -> bool {
        let same_geolocation = match (&self.geolocation, &other.geolocation) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_geolocation && Rc::ptr_eq(&self.permissions, &other.permissions)
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("geolocation", &self.geolocation.is_some())
            .finish_non_exhaustive()
    }
}
