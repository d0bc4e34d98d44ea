pub mod count;
pub mod dates;
pub mod etl;
pub mod export;
pub mod flatten;
pub mod pipeline;
pub mod project;
pub mod reader;
pub mod report;

pub use crate::domain::model::{Record, Row, TransformResult, EXPORT_HEADERS};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
