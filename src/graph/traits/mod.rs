mod cost;
mod proximity;
mod route;

pub use cost::{Cost, Costing, Expansion};
pub use proximity::Scan;
pub use route::Route;
