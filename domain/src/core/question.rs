//! Question trait

use std::any::TypeId;
use std::fmt::Debug;

/// A typed request that the engine knows how to answer
///
/// The concrete Rust type of a question is its configuration key: every
/// engine holds at most one [`Definition`](crate::Definition) per question
/// type. The associated types fix what kind of answer is produced and what
/// kind of parameter is passed along when the question is asked.
///
/// Questions without a parameter use `()` as their parameter type, which
/// lets callers use the parameterless `answer` overload.
///
/// # Example
///
/// ```
/// use evaluation_domain::Question;
///
/// struct HowManyFruitsAreThere;
///
/// impl Question for HowManyFruitsAreThere {
///     type Answer = i32;
///     type Parameter = ();
///
///     fn describe(&self) -> String {
///         "how many fruits are there?".to_string()
///     }
/// }
///
/// assert_eq!(HowManyFruitsAreThere.describe(), "how many fruits are there?");
/// ```
pub trait Question: Send + Sync + 'static {
    /// The type of the answer to this question
    type Answer: Debug + Send + 'static;

    /// The type of the parameter passed when asking this question
    type Parameter: Debug + Send + Sync + 'static;

    /// Human-readable description, used in traces and error messages
    fn describe(&self) -> String {
        question_name::<Self>().to_string()
    }
}

/// The key under which definitions for `Q` are stored
pub fn question_key<Q: Question>() -> TypeId {
    TypeId::of::<Q>()
}

/// The short type name of `T`, without its module path
pub fn question_name<T: ?Sized>() -> &'static str {
    short_type_name(std::any::type_name::<T>())
}

/// Strip the module path from a `std::any::type_name` string
pub fn short_type_name(full: &'static str) -> &'static str {
    // Generic arguments may contain paths too, only strip the outer one
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(index) => &full[index + 2..],
        None => full,
    }
}
