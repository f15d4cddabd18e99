//! The selective-receive pattern matcher.
//!
//! Novel relative to the teacher: `airssys-rt`'s `Message` trait is statically
//! typed per actor and never pattern-matched at runtime — there was nothing to
//! adapt here. This module exists purely to satisfy selective receive, the
//! one core requirement the teacher's mailbox design does not have.
//!
//! Matching is split into two passes rather than the single
//! match-and-consume step a dynamically typed host gets for free: `matches`
//! (a non-consuming check over `&Term`) decides whether a buffered message
//! should be taken, and `extract_bindings` (consuming) turns a message that
//! already matched into its bound values. Doing it this way sidesteps
//! rebuilding a partially-consumed `Term::Tuple` on a failed match, which
//! ownership makes awkward otherwise.

use std::any::TypeId;

use crate::term::{Message, Term};

/// A single match arm against a [`Term`].
pub struct Pattern {
    kind: PatternKind,
}

enum PatternKind {
    Any,
    Ignore,
    Type(TypeId, &'static str),
    Literal(Box<dyn Fn(&Term) -> bool + Send + Sync>),
    Tuple(Vec<Pattern>),
}

impl Pattern {
    /// Matches any term; binds the whole value.
    pub fn any() -> Self {
        Pattern {
            kind: PatternKind::Any,
        }
    }

    /// Matches any term; binds nothing.
    pub fn ignore() -> Self {
        Pattern {
            kind: PatternKind::Ignore,
        }
    }

    /// Matches iff the term's boxed value is concretely of type `T`; binds
    /// the whole value.
    pub fn of<T: Message>() -> Self {
        Pattern {
            kind: PatternKind::Type(TypeId::of::<T>(), std::any::type_name::<T>()),
        }
    }

    /// Matches iff the term equals `value`; binds nothing.
    pub fn literal<T: Message + PartialEq>(value: T) -> Self {
        Pattern {
            kind: PatternKind::Literal(Box::new(move |term| {
                term.downcast_ref::<T>() == Some(&value)
            })),
        }
    }

    /// Matches iff the term is a tuple of the same length whose elements
    /// each match the corresponding child pattern, in order.
    pub fn tuple(patterns: Vec<Pattern>) -> Self {
        Pattern {
            kind: PatternKind::Tuple(patterns),
        }
    }
}

/// `true` iff `term` matches `pattern`. Never panics.
pub fn matches(term: &Term, pattern: &Pattern) -> bool {
    match &pattern.kind {
        PatternKind::Any | PatternKind::Ignore => true,
        PatternKind::Type(type_id, _) => term.type_id() == Some(*type_id),
        PatternKind::Literal(eq) => eq(term),
        PatternKind::Tuple(children) => match term {
            Term::Tuple(items) => {
                items.len() == children.len()
                    && items.iter().zip(children).all(|(i, p)| matches(i, p))
            }
            Term::Value(_) => false,
        },
    }
}

/// Consume `term` (already confirmed to match `pattern` via [`matches`]) and
/// return its bindings, in order.
pub fn extract_bindings(term: Term, pattern: &Pattern) -> Vec<Term> {
    match &pattern.kind {
        PatternKind::Any => vec![term],
        PatternKind::Ignore => vec![],
        PatternKind::Type(..) => vec![term],
        PatternKind::Literal(_) => vec![],
        PatternKind::Tuple(children) => match term {
            Term::Tuple(items) => items
                .into_iter()
                .zip(children)
                .flat_map(|(item, p)| extract_bindings(item, p))
                .collect(),
            other => {
                debug_assert!(false, "extract_bindings called on a non-matching term");
                vec![other]
            }
        },
    }
}
