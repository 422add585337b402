use alfresco_events::error::ServiceError;

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    alfresco_events::app::run().await
}
