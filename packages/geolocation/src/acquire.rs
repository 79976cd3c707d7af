use crate::{
    Capabilities, PermissionName, PermissionState, Position, PositionError, PositionOptions,
    Result,
};

/// How a single run of [`acquire`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Acquisition {
    /// There is no geolocation capability to ask.
    Unsupported,
    /// Permission is denied, so no position was requested.
    Denied,
    /// The browser produced a position.
    Located(Position),
    /// The position request failed.
    Failed(PositionError),
}

impl Acquisition {
    /// Whether the flow reached an answer the user should see. Only a position
    /// request, successful or not, concludes it.
    pub fn is_decided(&self) -> bool {
        matches!(self, Acquisition::Located(_) | Acquisition::Failed(_))
    }
}

/// Run the permission check and, if it allows, one position request.
///
/// The position request is only issued once the permission query resolved to
/// `granted` or `prompt`. A failed read is logged as a warning and reported as
/// [`Acquisition::Failed`]; only a failing permission query is an `Err`.
pub async fn acquire(capabilities: &Capabilities, options: &PositionOptions) -> Result<Acquisition> {
    let Some(geolocation) = capabilities.geolocation() else {
        tracing::info!("Geolocation is not supported by this browser.");
        return Ok(Acquisition::Unsupported);
    };

    let state = capabilities
        .permissions()
        .query(PermissionName::Geolocation)
        .await?;
    tracing::debug!(%state, "queried geolocation permission");

    match state {
        // granted can read straight away, prompt makes the browser ask the user first
        PermissionState::Granted | PermissionState::Prompt => {}
        PermissionState::Denied => {
            tracing::debug!("geolocation permission denied, not requesting a position");
            return Ok(Acquisition::Denied);
        }
    }

    match geolocation.current_position(options).await {
        Ok(position) => {
            tracing::debug!(
                latitude = position.coords.latitude,
                longitude = position.coords.longitude,
                accuracy = position.accuracy,
                "acquired position"
            );
            Ok(Acquisition::Located(position))
        }
        Err(err) => {
            tracing::warn!("{err}");
            Ok(Acquisition::Failed(err))
        }
    }
}
