pub mod pretty_format;
