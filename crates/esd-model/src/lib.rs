mod domain;
pub use domain::*;

mod spark;
pub use spark::*;

mod crystal;
pub use crystal::*;

mod boxer;
pub use boxer::*;
