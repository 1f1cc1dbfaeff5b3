//! Interactive text menu
//!
//! [`MenuSession`] owns the catalog for the lifetime of the session and
//! reads every answer through a [`LineInput`], so any `BufRead` can drive it.

mod input;
mod responder;
mod session;

pub use input::{InputError, LineInput};
pub use responder::InteractiveResponder;
pub use session::{MenuError, MenuSession};
