/// Faults that stop the acquisition flow before a position request is made.
///
/// A failed position read is not one of these: it is reported as a
/// [`PositionError`](crate::PositionError) inside
/// [`Acquisition::Failed`](crate::Acquisition::Failed).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The permission query was rejected or never produced a status.
    #[error("permission query failed: {0}")]
    PermissionQuery(String),

    /// The browser reported a permission state this crate does not know.
    #[error("unrecognized permission state `{0}`")]
    UnknownPermissionState(String),

    /// The named browser facility does not exist in this environment.
    #[error("the {0} capability is unavailable")]
    Unavailable(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
