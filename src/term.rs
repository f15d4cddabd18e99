//! The type-erased value model messages travel as.
//!
//! Every process has exactly one mailbox, and in the spirit of a BEAM-style
//! process that mailbox must accept any value a sender cares to put in it —
//! there is no single concrete Rust type shared by "a counter increment", a
//! `$call` envelope, and a supervisor's `$child_down` notification. [`Term`]
//! is that common currency: a boxed, downcastable payload, or a tuple of
//! them. [`crate::pattern::Pattern`] matches against it.

use std::any::{Any, TypeId};
use std::fmt;

/// Anything that can travel through a mailbox.
///
/// Blanket-implemented for every `Send + 'static` type; user code never
/// implements this by hand.
pub trait Message: Any + Send {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Send> Message for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A mailbox value: either a single boxed payload or a fixed-length tuple of
/// nested terms.
///
/// `Term` has no `PartialEq` impl of its own — equality for
/// [`crate::pattern::Pattern::literal`] is captured at pattern-construction
/// time, when the concrete literal type is still known.
pub enum Term {
    Value(Box<dyn Message>),
    Tuple(Vec<Term>),
}

impl Term {
    /// Box a concrete value as a term.
    pub fn value<T: Message>(v: T) -> Self {
        Term::Value(Box::new(v))
    }

    /// Build a tuple term from its elements, in order.
    pub fn tuple(items: Vec<Term>) -> Self {
        Term::Tuple(items)
    }

    pub(crate) fn type_id(&self) -> Option<TypeId> {
        match self {
            Term::Value(v) => Some((**v).as_any().type_id()),
            Term::Tuple(_) => None,
        }
    }

    /// Downcast a value term back into its concrete type.
    ///
    /// Returns `None` for a type mismatch or a tuple term. Callers that
    /// already checked the term's [`TypeId`] via
    /// [`crate::pattern::Pattern::of`] are guaranteed this never fails.
    pub fn downcast<T: Message>(self) -> Option<T> {
        match self {
            Term::Value(v) => v.into_any().downcast::<T>().ok().map(|b| *b),
            Term::Tuple(_) => None,
        }
    }

    /// Borrow a value term as its concrete type without consuming it.
    pub fn downcast_ref<T: Message>(&self) -> Option<&T> {
        match self {
            Term::Value(v) => (**v).as_any().downcast_ref::<T>(),
            Term::Tuple(_) => None,
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Value(v) => write!(f, "Value({})", v.type_name()),
            Term::Tuple(items) => {
                let mut t = f.debug_tuple("Tuple");
                for item in items {
                    t.field(item);
                }
                t.finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_roundtrips_through_downcast() {
        let term = Term::value(42u32);
        assert_eq!(term.downcast::<u32>(), Some(42));
    }

    #[test]
    fn downcast_wrong_type_fails() {
        let term = Term::value(42u32);
        assert_eq!(term.downcast::<String>(), None);
    }

    #[test]
    fn tuple_has_no_type_id() {
        let term = Term::tuple(vec![Term::value(1u32), Term::value(2u32)]);
        assert_eq!(term.type_id(), None);
    }

    #[test]
    fn debug_does_not_panic() {
        let term = Term::tuple(vec![Term::value("hi".to_string())]);
        assert!(format!("{term:?}").contains("Tuple"));
    }
}
