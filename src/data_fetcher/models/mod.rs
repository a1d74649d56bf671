pub mod normalized;
pub mod raw;
pub mod reference;

pub use normalized::NormalizedMatch;
pub use raw::{RawMatch, value_as_count, value_as_text};
pub use reference::{Region, StadiumMap, StadiumRegion, build_stadium_map, region_name_for};
