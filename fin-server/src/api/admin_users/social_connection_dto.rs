use fin_core::SocialConnection;

use serde::Serialize;

/// Social connection DTO attached to admin account views
#[derive(Debug, Serialize)]
pub struct SocialConnectionDto {
    pub provider: String,
    pub provider_user_id: String,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
    pub profile_url: Option<String>,
}

impl From<SocialConnection> for SocialConnectionDto {
    fn from(c: SocialConnection) -> Self {
        Self {
            provider: c.provider,
            provider_user_id: c.provider_user_id,
            display_name: c.display_name,
            image_url: c.image_url,
            profile_url: c.profile_url,
        }
    }
}
