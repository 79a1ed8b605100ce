//! Application-level configuration constants.

/// Competitions the backend can filter by.
pub const TOURNAMENTS: [&str; 3] = ["IPL", "T20I", "SA20"];

/// `(wire key, label)` options for the explorer's bowler-type select.
/// An empty key means "no filter".
pub const BOWLER_TYPES: &[(&str, &str)] = &[
    ("", "Any"),
    ("right-pace", "Right-arm Pace"),
    ("left-pace", "Left-arm Pace"),
    ("off-spin", "Off-spin"),
    ("leg-spin", "Leg-spin"),
    ("right-orthodox", "Right-arm Orthodox"),
    ("left-orthodox", "Left-arm Orthodox"),
    ("right-wrist", "Right-arm Wrist-spin"),
    ("left-wrist", "Left-arm Wrist-spin"),
    ("pace", "Any Pace"),
    ("spin", "Any Spin"),
];

pub const BATTER_HANDS: &[(&str, &str)] = &[
    ("", "Any"),
    ("right", "Right-hand"),
    ("left", "Left-hand"),
];

pub const BALLS_OPTIONS: &[(&str, &str)] = &[
    ("", "Whole innings"),
    ("10", "First 10 balls"),
    ("15", "First 15 balls"),
    ("20", "First 20 balls"),
    ("25", "First 25 balls"),
    ("30", "First 30 balls"),
];

pub const YEAR_OPTIONS: &[(&str, &str)] = &[
    ("", "All time"),
    ("2019", "Since 2019"),
    ("2020", "Since 2020"),
    ("2021", "Since 2021"),
    ("2022", "Since 2022"),
    ("2023", "Since 2023"),
    ("2024", "Since 2024"),
    ("2025", "Since 2025"),
];

/// Canned questions shown under the assistant input.
pub const ASSISTANT_SUGGESTIONS: &[&str] = &[
    "Virat Kohli batting average vs off spinners in T20Is?",
    "Jasprit Bumrah economy in death overs in IPL?",
    "Rohit Sharma strike rate vs leg spinners in powerplay IPL?",
    "India vs Pakistan head to head in T20Is?",
    "Mumbai Indians win percentage at Wankhede in IPL?",
    "Tilak Varma dot ball percentage vs left arm pace in IPL?",
];
