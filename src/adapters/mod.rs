pub mod file_config_adapter;
pub mod csv_price_adapter;
pub mod text_report_adapter;
