pub mod create;
pub mod diff;
pub mod sync;
pub mod tracklist;
