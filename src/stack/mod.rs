
//! The stack capability and its two backing implementations.

mod array;
pub mod base;
mod error;
mod linked;

pub use array::{ArrayStack, MIN_ARRAY_SIZE};
pub use base::StackLike;
pub use error::StackError;
pub use linked::ListStack;
