mod cut;
mod stoer_wagner;

pub use cut::Cut;
pub use stoer_wagner::minimum_cut;
pub use stoer_wagner::MinCutError;
