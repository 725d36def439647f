//! Borrow record model and related types

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Loan periods offered to readers, in months
pub const LOAN_PERIODS: [i16; 5] = [1, 2, 3, 6, 12];

/// Borrow record status. DB stores as i16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum RecordStatus {
    Borrowed = 0,
    Returned = 1,
    Damaged = 2,
    Lost = 3,
}

impl RecordStatus {
    /// Whether the copy comes back to the shelf when the record is closed
    pub fn restores_copy(&self) -> bool {
        matches!(self, RecordStatus::Returned | RecordStatus::Damaged)
    }
}

/// Borrow record joined with its reader
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    pub id: i32,
    pub book_id: i32,
    pub reader_id: i32,
    pub reader_email: String,
    pub reader_name: String,
    pub borrow_date: NaiveDate,
    pub period_months: i16,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: RecordStatus,
    pub comment: Option<String>,
}

/// Borrow a copy of a book
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BorrowRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 255, message = "Name must be 1 to 255 characters"))]
    pub name: String,
    /// One of 1, 2, 3, 6 or 12
    pub period_months: i16,
    #[validate(length(max = 1000, message = "Comment is limited to 1000 characters"))]
    pub comment: Option<String>,
}

/// Close a borrow record
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CloseRecordRequest {
    pub status: RecordStatus,
    #[validate(length(max = 1000, message = "Comment is limited to 1000 characters"))]
    pub comment: Option<String>,
}

/// Date at which a loan of `period_months` started on `borrow_date` ends
pub fn due_date(borrow_date: NaiveDate, period_months: i16) -> Option<NaiveDate> {
    let months = u32::try_from(period_months).ok()?;
    borrow_date.checked_add_months(Months::new(months))
}
