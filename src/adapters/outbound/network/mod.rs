/// Network adapters for the Veracode REST APIs
mod credentials;
mod hmac_auth;
mod region;
mod veracode_client;

pub use credentials::ApiCredentials;
pub use hmac_auth::HmacSigner;
pub use region::Region;
pub use veracode_client::VeracodeClient;
