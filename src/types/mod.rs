pub mod base;
pub mod iterable;
pub mod simple_object;
pub(crate) mod utilities;

use crate::integrations::chrono::{DATE, DATE_TIME, TIME};

use self::{
    base::ScalarDescriptor,
    iterable::{ITERABLE, JSON},
    simple_object::SIMPLE_OBJECT,
};

/// Descriptors of all the scalars provided by this crate, in the order they
/// are registered in a schema.
pub fn descriptors() -> [&'static ScalarDescriptor; 6] {
    [&DATE_TIME, &DATE, &TIME, &ITERABLE, &JSON, &SIMPLE_OBJECT]
}

/// Looks up the descriptor of a scalar provided by this crate by its name.
pub fn descriptor(name: &str) -> Option<&'static ScalarDescriptor> {
    descriptors().into_iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::{descriptor, descriptors};

    #[test]
    fn registers_under_fixed_names() {
        let names = descriptors().map(|d| d.name);

        assert_eq!(
            names,
            ["DateTime", "Date", "Time", "Iterable", "Json", "SimpleObject"],
        );
    }

    #[test]
    fn looks_up_by_name() {
        assert_eq!(descriptor("Json").map(|d| d.name), Some("Json"));
        assert_eq!(descriptor("json"), None);
        assert_eq!(descriptor("String"), None);
    }
}
