use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::models::user::{AuthResponse, User};

#[derive(Debug, Serialize)]
struct SendOtpBody<'a> {
    mobile: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpBody<'a> {
    mobile: &'a str,
    otp: &'a str,
}

impl ApiClient {
    /// Request a one-time password for a mobile number
    pub async fn send_otp(&self, mobile: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post("users/send-otp/", &SendOtpBody { mobile }).await?;
        Ok(())
    }

    /// Verify the OTP and populate the session on success
    pub async fn verify_otp(&self, mobile: &str, otp: &str) -> Result<AuthResponse, ApiError> {
        let auth: AuthResponse = self
            .post("users/verify-otp/", &VerifyOtpBody { mobile, otp })
            .await?;
        self.session().write().await.authenticate(&auth);
        Ok(auth)
    }

    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.get("users/profile/").await
    }

    /// Drop the signed-in state. Purely client-side: the backend keeps no
    /// session to invalidate, tokens just expire.
    pub async fn logout(&self) {
        self.session().write().await.clear();
    }
}
