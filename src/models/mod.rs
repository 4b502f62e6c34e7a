mod entry;

pub use entry::{Entry, EntryKey, EntryKind};

#[cfg(test)]
mod tests;
