//! `/search <query>`: look up catalog entries by name and pick one from a select menu.
pub mod run;
pub mod ui;
