pub mod event_reader;
pub mod frame_writer;
pub mod report_writer;
