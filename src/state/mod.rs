mod manager;
mod persistence;

pub use manager::ItemListManager;
pub use persistence::{CsvRecord, OptimizerState, load_csv_items, load_state, save_state};
