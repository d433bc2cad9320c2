//! Built-in demo lyrics
//!
//! A public-domain hymn ships in the binary so every command works out of the
//! box with no lyrics file on hand.

pub const DEMO_TITLE: &str = "Amazing Grace";

pub const DEMO_ARTIST: &str = "John Newton";

pub const DEMO_LYRICS: &str = "\
[Verse 1]
Amazing grace how sweet the sound
That saved a wretch like me
I once was lost but now am found
Was blind but now I see

[Verse 2]
'Twas grace that taught my heart to fear
And grace my fears relieved
How precious did that grace appear
The hour I first believed
";
