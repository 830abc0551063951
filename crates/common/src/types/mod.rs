use serde::Serialize;

/// Payload for the liveness endpoint.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
