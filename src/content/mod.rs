pub mod api;

/// View-side lifecycle of a content fetch. `Failed` carries a displayable
/// message so pages can render an explicit error state with a retry control
/// instead of loading forever.
#[derive(Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}
