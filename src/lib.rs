pub mod applicant;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod lender;
pub mod loan;
pub mod serialization;
pub mod state;
pub mod types;

// re-export key types
pub use applicant::Applicant;
pub use config::UnderwritingConfig;
pub use decimal::{Money, Rate};
pub use errors::{LenderError, Result};
pub use events::{Event, EventStore};
pub use lender::Lender;
pub use loan::Loan;
pub use serialization::{ApplicantView, LoanView};
pub use state::{LedgerSnapshot, LedgerState};
pub use types::{LoanNumber, LoanStatus, Qualification};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
