//! Shared fixtures for integration tests.

use symfeat::{CallSite, ImportEntry};

/// Import table of a small Windows dropper, as a loader would report it.
pub fn dropper_imports() -> Vec<ImportEntry> {
    vec![
        ImportEntry::new("kernel32", "CreateFileW", 0x40_2000),
        ImportEntry::new("kernel32", "WriteFile", 0x40_2008),
        ImportEntry::new("kernel32", "#17", 0x40_2010),
        ImportEntry::new("advapi32", "RegSetValueExA", 0x40_2018),
        ImportEntry::new("ws2_32", "#23", 0x40_2020),
    ]
}

/// Call sites resolved by the disassembler for the same sample.
pub fn dropper_calls() -> Vec<CallSite> {
    vec![
        CallSite::new("kernel32.CreateFileW", 0x40_1010),
        CallSite::new("kernel32.WriteFile", 0x40_1024),
        CallSite::new("RegSetValueExA", 0x40_1040),
        CallSite::new("Sleep", 0x40_1050),
    ]
}
