pub mod rom_filter;
pub mod rom_scanner;

pub use rom_filter::RomFilter;
pub use rom_scanner::{strip_all_extensions, RomEntry, RomScanner, ScanOutcome};
