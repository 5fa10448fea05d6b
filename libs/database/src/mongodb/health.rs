use mongodb::Client;

/// Check MongoDB health with a lightweight command.
///
/// Used by the readiness endpoint; returns false instead of an error so the
/// probe can report a degraded state.
pub async fn check_health(client: &Client) -> bool {
    client.list_database_names().await.is_ok()
}
