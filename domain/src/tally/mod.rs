//! Response tally domain
//!
//! Each question owns one [`TallyTree`] counting how often each option text
//! was chosen. The tree is keyed on the option text rather than on the
//! option's position, so counting does not depend on option ordering.

mod tree;

pub use tree::{Iter, TallyTree};
