use const_format::formatcp;

pub const DOGLANG: &str = "doglang";
pub const DOG_EXT: &str = ".dog";
pub const STATIC_ROOT: &str = "static";
pub const TEST_FILES: &str = formatcp!("{STATIC_ROOT}/test_files");
pub const SOURCE_FILE: &str = formatcp!("program{DOG_EXT}");
