//! Loan management service

use chrono::Local;

use crate::{
    error::{AppError, AppResult},
    models::record::{
        BorrowRecord, BorrowRequest, CloseRecordRequest, RecordStatus, LOAN_PERIODS,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow records of a book
    pub async fn get_book_records(&self, book_id: i32) -> AppResult<Vec<BorrowRecord>> {
        // Verify book exists
        if self.repository.books.get_by_id(book_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Book {} not found", book_id)));
        }
        self.repository.records.list_for_book(book_id).await
    }

    /// Lend a copy of a book to a reader
    pub async fn borrow(&self, book_id: i32, request: BorrowRequest) -> AppResult<BorrowRecord> {
        check_period(request.period_months)?;

        let today = Local::now().date_naive();
        let record = self.repository.records.borrow(book_id, &request, today).await?;
        tracing::info!(
            "Loan created: record id={} book id={} reader id={} due {}",
            record.id,
            book_id,
            record.reader_id,
            record.due_date
        );
        Ok(record)
    }

    /// Close a loan with its final status
    pub async fn close(&self, record_id: i32, request: CloseRecordRequest) -> AppResult<BorrowRecord> {
        if request.status == RecordStatus::Borrowed {
            return Err(AppError::Validation(
                "A record can only be closed as returned, damaged or lost".to_string(),
            ));
        }

        let today = Local::now().date_naive();
        let record = self.repository.records.close(record_id, &request, today).await?;
        tracing::info!("Loan closed: record id={} status={:?}", record.id, record.status);
        Ok(record)
    }
}

fn check_period(period_months: i16) -> AppResult<()> {
    if LOAN_PERIODS.contains(&period_months) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Loan period must be one of {:?} months, got {}",
            LOAN_PERIODS, period_months
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_period() {
        assert!(check_period(1).is_ok());
        assert!(check_period(12).is_ok());
        assert!(matches!(check_period(4), Err(AppError::Validation(_))));
        assert!(check_period(0).is_err());
    }
}
