//! Plain data types for both registries: records, people, staff and campus
//! resources.

pub mod academic_record;
pub mod campus;
pub mod error;
pub mod medical_record;
pub mod patient;
pub mod prerequisites;
pub mod staff;
pub mod student;

pub use academic_record::*;
pub use campus::*;
pub use error::*;
pub use medical_record::*;
pub use patient::*;
pub use prerequisites::*;
pub use staff::*;
pub use student::*;
