//! Static feed corpora used across harnesses.
//!
//! Each corpus is a raw CSV body in the upstream 10-column layout (date,
//! name, genres, location, time, price, age, organizer, ticket link, event
//! link; no header row). Fields containing commas are quoted, exactly as the
//! real feeds publish them.

/// A realistic Bay Area feed: weekday markers, a time range crossing
/// midnight, a duplicate genre, and a multi-day event.
pub const FEED_BAY_AREA: &str = "\
Fri: Jun 6,Warehouse Night,\"Techno, House\",\"The Independent (San Francisco, CA)\",Fri: 11pm-2am,$20,21+,Honcho,https://tickets.example/wh,https://example.com/wh
Sat: Jun 7,Daybreak,Trance,\"Public Works (San Francisco, CA)\",1pm-8pm,,18+,Daybreaker,,https://example.com/db
Jun 8-Jun 9,Open Air Weekender,\"House, House\",\"Golden Gate Park (San Francisco, CA)\",,Free,All Ages,Parks Dept,,
";

/// A Seattle feed with an unlocated venue and a bare-city parenthetical.
pub const FEED_SEATTLE: &str = "\
Sat: Jun 7,Substrate,Dubstep,\"Kremwerk (Seattle, WA)\",10pm-late,$15,21+,Substrate Crew,,https://example.com/sub
Sun: Jun 8,Secret Loft Party,House,Warehouse TBA,9pm,$10,18+,,,
";

/// A feed where the middle row has an unparseable date; the scheduler must
/// drop that row and keep its neighbours.
pub const FEED_WITH_BAD_ROW: &str = "\
Jun 6,Good Opener,Techno,\"Kremwerk (Seattle, WA)\",9pm,,21+,,,
TBA,Never Announced,House,Somewhere,9pm,,,,,
Jun 7,Good Closer,House,\"Kremwerk (Seattle, WA)\",10pm,,21+,,,
";

/// A two-field row; every other column must come back empty.
pub const FEED_SHORT_ROW: &str = "Jun 6,Minimal\n";
