use thiserror::Error;

/// Rejected [`crate::ScrollListOptions`].
///
/// Row height and row count feed every offset threshold; a zero in either would make the
/// shift loops spin forever, so they are checked up front instead.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OptionsError {
    #[error("item_height must be positive")]
    ZeroItemHeight,

    #[error("visible_count must be positive")]
    ZeroVisibleCount,

    #[error("speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
}
