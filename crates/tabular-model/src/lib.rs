pub mod grid;
pub mod record;
pub mod schema;
pub mod value;

pub use grid::Grid;
pub use record::{Record, RecordSet};
pub use schema::Schema;
pub use value::CellValue;
