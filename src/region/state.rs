use serde::{Deserialize, Serialize};

/// Political entity owning a set of regions.
///
/// Regions reference their state through an optional handle; stateless
/// regions are valid and simply carry no border surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
}

impl State {
    pub fn new(name: impl Into<String>) -> State {
        State { name: name.into() }
    }
}
