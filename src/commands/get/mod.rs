//! `/get <appid>`: download an archive and deliver it inline or as an upload link.
pub mod run;
pub mod target;
pub mod ui;
