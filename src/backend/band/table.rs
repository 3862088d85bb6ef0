use super::{validate_table, BandEntry};


pub const BAND_COUNT: usize = 11;

// Checked at compile time below. `BAND_TABLE` is the copy that is linked.
const ENTRIES: [BandEntry; BAND_COUNT] = [
    BandEntry::new("160 m",   1_800_000,   2_000_000,   1_838_100),
    BandEntry::new("80 m",    3_500_000,   4_000_000,   3_594_100),
    BandEntry::new("40 m",    7_000_000,   7_300_000,   7_040_100),
    BandEntry::new("30 m",   10_100_000,  10_150_000,  10_140_200),
    BandEntry::new("20 m",   14_000_000,  14_350_000,  14_097_100),
    BandEntry::new("17 m",   18_068_000,  18_168_000,  18_106_100),
    BandEntry::new("15 m",   21_000_000,  21_450_000,  21_096_100),
    BandEntry::new("12 m",   24_890_000,  24_990_000,  24_926_100),
    BandEntry::new("10 m",   28_000_000,  29_700_000,  28_126_100),
    BandEntry::new("6 m",    50_000_000,  54_000_000,  50_294_500),
    BandEntry::new("2 m",   144_000_000, 148_000_000, 144_490_500),
];

const _: () = assert!(
    validate_table(&ENTRIES).is_ok(),
    "band table violates its invariants"
);


/// Amateur bands with their WSPR frequencies, ordered by ascending frequency.
pub static BAND_TABLE: [BandEntry; BAND_COUNT] = ENTRIES;
