//! SMTP delivery adapter
//!
//! [`ReportEmail`] describes the message, [`Mailer`] is the delivery seam,
//! and [`SmtpMailer`] implements it over lettre's async SMTP transport.

pub mod mailer;
pub mod message;

pub use mailer::{Mailer, SmtpMailer};
pub use message::{ReportEmail, CSV_CONTENT_TYPE};
