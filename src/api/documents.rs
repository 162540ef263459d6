use reqwest::multipart::{Form, Part};

use crate::api::{ApiClient, ApiError};
use crate::models::booking::BookingDocument;

impl ApiClient {
    /// Upload a document (id proof, receipt) against a booking
    pub async fn upload_booking_document(
        &self,
        booking_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<BookingDocument, ApiError> {
        let path = format!("booking/bookings/{}/documents/", booking_id);
        let file_name = file_name.to_string();
        self.post_multipart(&path, move || {
            Form::new().part(
                "file",
                Part::bytes(bytes.clone()).file_name(file_name.clone()),
            )
        })
        .await
    }

    pub async fn list_booking_documents(
        &self,
        booking_id: i64,
    ) -> Result<Vec<BookingDocument>, ApiError> {
        self.get(&format!("booking/bookings/{}/documents/", booking_id))
            .await
    }

    pub async fn delete_booking_document(&self, document_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("booking/bookings/documents/{}/", document_id))
            .await
    }
}
