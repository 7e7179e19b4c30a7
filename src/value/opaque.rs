use std::{any, fmt, sync::Arc};

use super::Object;

/// Capability of an application object to expose itself as plain mapping data.
///
/// Objects implementing it can be wrapped into a [`Value::Opaque`] and will be
/// exposed through their [`to_mapping()`] result when serialized by the
/// `SimpleObject` scalar.
///
/// [`to_mapping()`]: ToMapping::to_mapping
/// [`Value::Opaque`]: super::Value::Opaque
pub trait ToMapping: fmt::Debug + Send + Sync {
    /// Returns the mapping representation of this object.
    fn to_mapping(&self) -> Object;

    /// Name of the object's type, used when rendering it in error messages.
    fn type_name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

/// Shared handle to an application object implementing [`ToMapping`].
///
/// Two handles are equal only if they point to the very same object.
#[derive(Clone)]
pub struct OpaqueObject(Arc<dyn ToMapping>);

impl OpaqueObject {
    /// Wraps the provided object.
    pub fn new<T: ToMapping + 'static>(object: T) -> Self {
        Self(Arc::new(object))
    }

    /// Returns the mapping representation of the wrapped object.
    pub fn to_mapping(&self) -> Object {
        self.0.to_mapping()
    }

    /// Name of the wrapped object's type.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }
}

impl From<Arc<dyn ToMapping>> for OpaqueObject {
    fn from(object: Arc<dyn ToMapping>) -> Self {
        Self(object)
    }
}

impl fmt::Debug for OpaqueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueObject").field(&self.0).finish()
    }
}

impl PartialEq for OpaqueObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
