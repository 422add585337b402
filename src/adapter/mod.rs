pub mod alfresco_client;
pub mod html_content;

pub use alfresco_client::{AlfrescoClient, AlfrescoConfig};
pub use html_content::HtmlContentCreatedHandler;
