pub mod rosters;

pub use self::rosters::model::RosterRequest;
